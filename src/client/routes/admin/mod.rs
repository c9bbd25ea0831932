mod dashboard;
mod jobs;

pub use dashboard::AdminDashboard;
pub use jobs::AdminJobs;
