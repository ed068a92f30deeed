pub mod repository;
pub mod time_range;

pub use repository::{AnalyticsStore, TopicCount};
pub use time_range::TimeRange;
