// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{analysis, analytics, articles},
    middleware::{
        rate_limit::{DEFAULT_BURST_SIZE, DEFAULT_REQUESTS_PER_SECOND, rate_limit_layer},
        request_log::log_requests,
    },
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    middleware,
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

/// Router without the per-IP limiter; suitable for tests and in-process use.
pub fn build_router(state: HttpState) -> Router {
    build_router_with_options(state, &[], false)
}

pub fn build_router_with_rate_limiter(state: HttpState, enabled: bool) -> Router {
    build_router_with_options(state, &[], enabled)
}

pub fn build_router_with_options(
    state: HttpState,
    allowed_origins: &[String],
    rate_limit: bool,
) -> Router {
    let api = Router::new()
        .route("/articles", post(articles::create_article))
        .route("/articles/flagged", get(articles::list_flagged))
        .route("/articles/{id}", get(articles::get_article))
        .route("/articles/{id}/analyze", post(analysis::analyze_article))
        .route("/articles/{id}/analysis", get(analysis::get_analysis))
        .route("/articles/{id}/reprocess", post(analysis::reprocess_article))
        .route("/articles/{id}/status", put(articles::update_status))
        .route("/analytics/sources", get(analytics::source_stats))
        .route("/analytics/flags", get(analytics::flag_stats))
        .route("/analytics/trending", get(analytics::trending_topics));

    let api = match rate_limit
        .then(|| rate_limit_layer(DEFAULT_REQUESTS_PER_SECOND, DEFAULT_BURST_SIZE))
        .flatten()
    {
        Some(limiter) => api.layer(limiter),
        None => api,
    };

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .nest("/api/v1", api)
        .layer(middleware::from_fn(log_requests))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

/// An empty list allows any origin. A non-empty list never widens: entries
/// that are not valid header values are skipped, so an all-invalid list
/// allows no cross-origin requests.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let allow_origin = if allowed_origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin.trim()) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
