pub mod applications;
pub mod job_board;
pub mod mock_interviews;
pub mod resume_profile;
pub mod soft_skills;

pub use applications::MyApplications;
pub use job_board::JobBoard;
pub use mock_interviews::MockInterviews;
pub use resume_profile::ResumeProfile;
pub use soft_skills::SoftSkills;

#[cfg(test)]
mod tests;
