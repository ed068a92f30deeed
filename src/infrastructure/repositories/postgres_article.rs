// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleAuthor, ArticleContent, ArticleId, ArticleMetadata, ArticleRepository,
    ArticleSource, ArticleStatus, ArticleTitle, Flag,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, types::Json};
use uuid::Uuid;

const ARTICLE_COLUMNS: &str =
    "id, title, content, source, author, tags, score, status, flags, metadata, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: Uuid,
    title: String,
    content: String,
    source: String,
    author: String,
    tags: Json<Vec<String>>,
    score: f64,
    status: String,
    flags: Json<Vec<Flag>>,
    metadata: Json<ArticleMetadata>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::from(row.id),
            title: ArticleTitle::new(row.title)?,
            content: ArticleContent::new(row.content)?,
            source: ArticleSource::new(row.source)?,
            author: ArticleAuthor::new(row.author)?,
            tags: row.tags.0,
            score: row.score,
            status: row.status.parse::<ArticleStatus>()?,
            flags: row.flags.0,
            metadata: row.metadata.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn save(&self, article: &Article) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO articles (id, title, content, source, author, tags, score, status, flags, metadata, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                content = EXCLUDED.content,
                source = EXCLUDED.source,
                author = EXCLUDED.author,
                tags = EXCLUDED.tags,
                score = EXCLUDED.score,
                status = EXCLUDED.status,
                flags = EXCLUDED.flags,
                metadata = EXCLUDED.metadata,
                updated_at = EXCLUDED.updated_at",
        )
        .bind(article.id.as_uuid())
        .bind(article.title.as_str())
        .bind(article.content.as_str())
        .bind(article.source.as_str())
        .bind(article.author.as_str())
        .bind(Json(&article.tags))
        .bind(article.score)
        .bind(article.status.as_str())
        .bind(Json(&article.flags))
        .bind(Json(&article.metadata))
        .bind(article.created_at)
        .bind(article.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_flagged(&self, limit: u32, offset: u32) -> DomainResult<Vec<Article>> {
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles
             WHERE status = $1
             ORDER BY updated_at DESC, id
             LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(ArticleStatus::Flagged.as_str())
            .bind(i64::from(limit))
            .bind(i64::from(offset))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn update(&self, article: &Article) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE articles SET
                title = $2,
                content = $3,
                source = $4,
                author = $5,
                tags = $6,
                score = $7,
                status = $8,
                flags = $9,
                metadata = $10,
                updated_at = $11
             WHERE id = $1",
        )
        .bind(article.id.as_uuid())
        .bind(article.title.as_str())
        .bind(article.content.as_str())
        .bind(article.source.as_str())
        .bind(article.author.as_str())
        .bind(Json(&article.tags))
        .bind(article.score)
        .bind(article.status.as_str())
        .bind(Json(&article.flags))
        .bind(Json(&article.metadata))
        .bind(article.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::article_not_found());
        }
        Ok(())
    }
}
