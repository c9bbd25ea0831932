pub mod admin;

mod about;
mod certificates;
mod contact;
mod course_detail;
mod courses;
mod home;
mod internships;
mod login;
mod mock;
mod not_found;
mod placement;
mod profile;
mod projects;
mod register;
mod student;

pub use about::About;
pub use certificates::Certificates;
pub use contact::Contact;
pub use course_detail::CourseDetail;
pub use courses::Courses;
pub use home::Home;
pub use internships::Internships;
pub use login::Login;
pub use mock::Mock;
pub use not_found::NotFound;
pub use placement::Placement;
pub use profile::Profile;
pub use projects::Projects;
pub use register::Register;
pub use student::Student;
