pub mod analytics;
pub mod article;
pub mod errors;
