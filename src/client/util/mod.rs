pub mod browser;
pub mod patch;
pub mod time;

#[cfg(test)]
mod tests;
