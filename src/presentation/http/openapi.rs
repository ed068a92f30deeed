// src/presentation/http/openapi.rs
use crate::application::dto::{ArticleDto, OffsetPage};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "docs/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FlaggedArticlesResponse {
    pub articles: Vec<ArticleDto>,
    pub limit: u32,
    pub offset: u32,
}

impl From<OffsetPage<ArticleDto>> for FlaggedArticlesResponse {
    fn from(page: OffsetPage<ArticleDto>) -> Self {
        Self {
            articles: page.articles,
            limit: page.limit,
            offset: page.offset,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::update_status,
        crate::presentation::http::controllers::articles::list_flagged,
        crate::presentation::http::controllers::analysis::analyze_article,
        crate::presentation::http::controllers::analysis::get_analysis,
        crate::presentation::http::controllers::analysis::reprocess_article,
        crate::presentation::http::controllers::analytics::source_stats,
        crate::presentation::http::controllers::analytics::flag_stats,
        crate::presentation::http::controllers::analytics::trending_topics,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            FlaggedArticlesResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::article_requests::CreateArticleRequest,
            crate::presentation::http::controllers::article_requests::UpdateStatusRequest,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleMetadataDto,
            crate::application::dto::EntityDto,
            crate::application::dto::FlagDto,
            crate::application::dto::CreatedArticleDto,
            crate::application::dto::AnalysisDto,
            crate::application::dto::AnalysisResultDto,
            crate::application::dto::SourceStatsDto,
            crate::application::dto::FlagStatsDto,
            crate::application::dto::TopicCountDto,
            crate::application::dto::TrendingTopicsDto
        )
    ),
    tags(
        (name = "Articles", description = "Article submission and review"),
        (name = "Analysis", description = "Credibility analysis of submitted articles"),
        (name = "Analytics", description = "Aggregated statistics over article events"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ServerList),
    info(
        title = "Reality Filter API",
        description = "News article credibility analysis service",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Fills `servers` from `PUBLIC_API_URLS` (comma separated) or `PUBLIC_API_URL`,
/// always keeping the local default.
struct ServerList;

impl Modify for ServerList {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            if let Ok(url) = env::var("PUBLIC_API_URL") {
                let sanitized = url.trim().trim_end_matches('/').to_string();
                if !sanitized.is_empty() {
                    urls.push(sanitized);
                }
            }
        }

        if !urls.iter().any(|url| url == "http://localhost:8080") {
            urls.push("http://localhost:8080".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

/// Swagger UI at `/docs`, ReDoc at `/redoc`, raw document at `/openapi.json`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot(output_path: &str) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let path = Path::new(output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
