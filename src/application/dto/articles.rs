use crate::domain::article::{Article, ArticleMetadata, Entity, Flag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlagDto {
    #[serde(rename = "type")]
    pub flag_type: String,
    pub confidence: f64,
    pub details: String,
    pub detected_by: String,
    pub detected_at: DateTime<Utc>,
}

impl From<&Flag> for FlagDto {
    fn from(flag: &Flag) -> Self {
        Self {
            flag_type: flag.flag_type.as_str().to_string(),
            confidence: flag.confidence,
            details: flag.details.clone(),
            detected_by: flag.detected_by.clone(),
            detected_at: flag.detected_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EntityDto {
    #[serde(rename = "type")]
    pub entity_type: String,
    pub value: String,
}

impl From<&Entity> for EntityDto {
    fn from(entity: &Entity) -> Self {
        Self {
            entity_type: entity.entity_type.as_str().to_string(),
            value: entity.value.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleMetadataDto {
    pub entities: Vec<EntityDto>,
    pub sentiment: f64,
    pub language: String,
    pub word_count: u32,
    /// Estimated reading time in minutes.
    pub reading_time: u32,
}

impl From<&ArticleMetadata> for ArticleMetadataDto {
    fn from(meta: &ArticleMetadata) -> Self {
        Self {
            entities: meta.entities.iter().map(EntityDto::from).collect(),
            sentiment: meta.sentiment,
            language: meta.language.clone(),
            word_count: meta.word_count,
            reading_time: meta.reading_time,
        }
    }
}

fn flags_of(article: &Article) -> Vec<FlagDto> {
    article.flags.iter().map(FlagDto::from).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub source: String,
    pub author: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub score: f64,
    pub flags: Vec<FlagDto>,
    pub status: String,
    pub metadata: ArticleMetadataDto,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        let flags = flags_of(&article);
        let metadata = ArticleMetadataDto::from(&article.metadata);
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            content: article.content.into_inner(),
            source: article.source.into_inner(),
            author: article.author.into_inner(),
            tags: article.tags,
            created_at: article.created_at,
            updated_at: article.updated_at,
            score: article.score,
            flags,
            status: article.status.as_str().to_string(),
            metadata,
        }
    }
}

/// Returned when an article is submitted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedArticleDto {
    pub article_id: Uuid,
    pub status: String,
}

impl From<&Article> for CreatedArticleDto {
    fn from(article: &Article) -> Self {
        Self {
            article_id: article.id.into(),
            status: article.status.as_str().to_string(),
        }
    }
}

/// Outcome of an analysis run.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisDto {
    pub article_id: Uuid,
    pub score: f64,
    pub flags: Vec<FlagDto>,
    pub status: String,
}

impl From<&Article> for AnalysisDto {
    fn from(article: &Article) -> Self {
        Self {
            article_id: article.id.into(),
            score: article.score,
            flags: flags_of(article),
            status: article.status.as_str().to_string(),
        }
    }
}

/// Stored analysis including the derived metadata.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResultDto {
    pub article_id: Uuid,
    pub score: f64,
    pub flags: Vec<FlagDto>,
    pub status: String,
    pub metadata: ArticleMetadataDto,
}

impl From<&Article> for AnalysisResultDto {
    fn from(article: &Article) -> Self {
        Self {
            article_id: article.id.into(),
            score: article.score,
            flags: flags_of(article),
            status: article.status.as_str().to_string(),
            metadata: ArticleMetadataDto::from(&article.metadata),
        }
    }
}
