// src/presentation/http/controllers/analysis.rs
use crate::application::{
    commands::articles::{AnalyzeArticleCommand, ReprocessArticleCommand},
    dto::{AnalysisDto, AnalysisResultDto},
    queries::articles::GetAnalysisResultQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/analyze",
    tag = "Analysis",
    params(("id" = String, Path, description = "Article UUID")),
    responses(
        (status = 200, description = "Analysis completed", body = AnalysisDto),
        (status = 404, description = "Unknown article", body = ErrorResponse),
        (status = 500, description = "An analysis step failed", body = ErrorResponse)
    )
)]
pub async fn analyze_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<AnalysisDto>> {
    state
        .services
        .article_commands
        .analyze_article(AnalyzeArticleCommand { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}/analysis",
    tag = "Analysis",
    params(("id" = String, Path, description = "Article UUID")),
    responses(
        (status = 200, description = "Stored analysis", body = AnalysisResultDto),
        (status = 404, description = "Unknown article", body = ErrorResponse)
    )
)]
pub async fn get_analysis(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<AnalysisResultDto>> {
    state
        .services
        .article_queries
        .get_analysis_result(GetAnalysisResultQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/reprocess",
    tag = "Analysis",
    params(("id" = String, Path, description = "Article UUID")),
    responses(
        (status = 202, description = "Analysis discarded and re-run", body = AnalysisDto),
        (status = 404, description = "Unknown article", body = ErrorResponse),
        (status = 500, description = "An analysis step failed", body = ErrorResponse)
    )
)]
pub async fn reprocess_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<(StatusCode, Json<AnalysisDto>)> {
    let analysis = state
        .services
        .article_commands
        .reprocess_article(ReprocessArticleCommand { id })
        .await
        .into_http()?;

    Ok((StatusCode::ACCEPTED, Json(analysis)))
}
