pub mod academy_title;
pub mod admin;
pub mod course_card;
pub mod feedback;
pub mod footer;
pub mod navbar;
pub mod page;
pub mod placement;

pub use academy_title::AcademyTitleButton;
pub use course_card::CourseCard;
pub use feedback::{EmptyNotice, ErrorAlert, Spinner, SuccessAlert};
pub use footer::Footer;
pub use navbar::Navbar;
pub use page::Page;
