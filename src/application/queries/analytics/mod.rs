mod service;
mod stats;
mod trending;

pub use service::AnalyticsQueryService;
pub use stats::{FlagStatsQuery, SourceStatsQuery};
pub use trending::{DEFAULT_TOPIC_LIMIT, MAX_TOPIC_LIMIT, TrendingTopicsQuery};
