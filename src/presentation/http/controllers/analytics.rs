// src/presentation/http/controllers/analytics.rs
use super::article_requests::{RangeParams, TrendingParams};
use crate::application::{
    dto::{FlagStatsDto, SourceStatsDto, TrendingTopicsDto},
    queries::analytics::{FlagStatsQuery, SourceStatsQuery, TrendingTopicsQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::parse_u32_param;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};

#[utoipa::path(
    get,
    path = "/api/v1/analytics/sources",
    tag = "Analytics",
    params(RangeParams),
    responses(
        (status = 200, description = "Submissions per source", body = SourceStatsDto),
        (status = 400, description = "Unknown range", body = ErrorResponse)
    )
)]
pub async fn source_stats(
    Extension(state): Extension<HttpState>,
    Query(params): Query<RangeParams>,
) -> HttpResult<Json<SourceStatsDto>> {
    state
        .services
        .analytics_queries
        .source_stats(SourceStatsQuery {
            range: params.range,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/analytics/flags",
    tag = "Analytics",
    params(RangeParams),
    responses(
        (status = 200, description = "Raised flags per type", body = FlagStatsDto),
        (status = 400, description = "Unknown range", body = ErrorResponse)
    )
)]
pub async fn flag_stats(
    Extension(state): Extension<HttpState>,
    Query(params): Query<RangeParams>,
) -> HttpResult<Json<FlagStatsDto>> {
    state
        .services
        .analytics_queries
        .flag_stats(FlagStatsQuery {
            range: params.range,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/analytics/trending",
    tag = "Analytics",
    params(TrendingParams),
    responses(
        (status = 200, description = "Most frequent tags", body = TrendingTopicsDto),
        (status = 400, description = "Unknown range or non-integer limit", body = ErrorResponse)
    )
)]
pub async fn trending_topics(
    Extension(state): Extension<HttpState>,
    Query(params): Query<TrendingParams>,
) -> HttpResult<Json<TrendingTopicsDto>> {
    let query = TrendingTopicsQuery {
        range: params.range,
        limit: parse_u32_param("limit", params.limit.as_deref())?,
    };

    state
        .services
        .analytics_queries
        .trending_topics(query)
        .await
        .into_http()
        .map(Json)
}
