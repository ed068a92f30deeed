// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};
use tracing::warn;

pub const DEFAULT_REQUESTS_PER_SECOND: u64 = 10;
pub const DEFAULT_BURST_SIZE: u32 = 20;

pub type RateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client-IP limiter. Needs `ConnectInfo` or a forwarding header to key on.
pub fn rate_limit_layer(per_second: u64, burst_size: u32) -> Option<RateLimitLayer> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_second(per_second);
    builder.burst_size(burst_size);

    match builder.key_extractor(SmartIpKeyExtractor).finish() {
        Some(config) => Some(GovernorLayer::new(config)),
        None => {
            warn!(per_second, burst_size, "invalid rate limit settings; limiter disabled");
            None
        }
    }
}
