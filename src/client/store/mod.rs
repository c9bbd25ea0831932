pub mod theme;
pub mod user;
