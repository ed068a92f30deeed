use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
    pub source: String,
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    /// One of `PENDING`, `ANALYZED`, `FLAGGED`, `VERIFIED`, `REJECTED`.
    pub status: String,
}

/// Kept as raw strings so malformed numbers surface as a 400 with a
/// parameter-specific message.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FlaggedParams {
    /// Page size, default 10, capped at 100.
    #[param(value_type = Option<u32>)]
    pub limit: Option<String>,
    #[param(value_type = Option<u32>)]
    pub offset: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RangeParams {
    /// `24h`, `7d` (default), `30d` or `all`.
    pub range: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TrendingParams {
    pub range: Option<String>,
    /// Number of topics, default 10, capped at 50.
    #[param(value_type = Option<u32>)]
    pub limit: Option<String>,
}
