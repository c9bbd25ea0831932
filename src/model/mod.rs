pub mod api;
pub mod certificate;
pub mod course;
pub mod internship;
pub mod placement;
pub mod project;
pub mod user;

#[cfg(test)]
mod tests;
