pub mod analytics;
pub mod articles;
