// src/presentation/http/controllers/articles.rs
use super::article_requests::{CreateArticleRequest, FlaggedParams, UpdateStatusRequest};
use crate::application::{
    commands::articles::{CreateArticleCommand, UpdateArticleStatusCommand},
    dto::{ArticleDto, CreatedArticleDto},
    queries::articles::{GetArticleByIdQuery, ListFlaggedArticlesQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, parse_u32_param};
use crate::presentation::http::openapi::FlaggedArticlesResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    tag = "Articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article submitted", body = CreatedArticleDto),
        (status = 400, description = "Invalid payload", body = ErrorResponse)
    )
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<CreatedArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        content: payload.content,
        source: payload.source,
        author: payload.author,
        tags: payload.tags,
    };

    let created = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    tag = "Articles",
    params(("id" = String, Path, description = "Article UUID")),
    responses(
        (status = 200, description = "Article", body = ArticleDto),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Unknown article", body = ErrorResponse)
    )
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}/status",
    tag = "Articles",
    params(("id" = String, Path, description = "Article UUID")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Updated article", body = ArticleDto),
        (status = 400, description = "Unknown status or malformed id", body = ErrorResponse),
        (status = 404, description = "Unknown article", body = ErrorResponse)
    )
)]
pub async fn update_status(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateStatusRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleStatusCommand {
        id,
        status: payload.status,
    };

    state
        .services
        .article_commands
        .update_article_status(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/flagged",
    tag = "Articles",
    params(FlaggedParams),
    responses(
        (status = 200, description = "Flagged articles, newest first", body = FlaggedArticlesResponse),
        (status = 400, description = "Non-integer limit or offset", body = ErrorResponse)
    )
)]
pub async fn list_flagged(
    Extension(state): Extension<HttpState>,
    Query(params): Query<FlaggedParams>,
) -> HttpResult<Json<FlaggedArticlesResponse>> {
    let query = ListFlaggedArticlesQuery {
        limit: parse_u32_param("limit", params.limit.as_deref())?,
        offset: parse_u32_param("offset", params.offset.as_deref())?,
    };

    let page = state
        .services
        .article_queries
        .list_flagged_articles(query)
        .await
        .into_http()?;

    Ok(Json(page.into()))
}
