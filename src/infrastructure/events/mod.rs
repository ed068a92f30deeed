// src/infrastructure/events/mod.rs
mod log_publisher;
mod redis_publisher;

pub use log_publisher::LogEventPublisher;
pub use redis_publisher::RedisEventPublisher;

pub const ANALYZED_CHANNEL: &str = "articles.analyzed";
pub const FLAGGED_CHANNEL: &str = "articles.flagged";
