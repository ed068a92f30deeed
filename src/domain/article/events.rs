use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::{ArticleId, ArticleStatus, FlagType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArticleEventKind {
    ArticleCreated,
    ArticleAnalyzed,
    ArticleFlagged,
    StatusChanged,
}

impl ArticleEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleEventKind::ArticleCreated => "ARTICLE_CREATED",
            ArticleEventKind::ArticleAnalyzed => "ARTICLE_ANALYZED",
            ArticleEventKind::ArticleFlagged => "ARTICLE_FLAGGED",
            ArticleEventKind::StatusChanged => "STATUS_CHANGED",
        }
    }
}

impl fmt::Display for ArticleEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of an article lifecycle step, recorded for analytics and
/// broadcast to subscribers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleEvent {
    pub kind: ArticleEventKind,
    pub article_id: ArticleId,
    pub source: String,
    pub status: ArticleStatus,
    pub score: f64,
    pub flag_types: Vec<FlagType>,
    pub tags: Vec<String>,
    pub at: DateTime<Utc>,
}

impl ArticleEvent {
    pub fn from_article(kind: ArticleEventKind, article: &Article, at: DateTime<Utc>) -> Self {
        Self {
            kind,
            article_id: article.id,
            source: article.source.as_str().to_string(),
            status: article.status,
            score: article.score,
            flag_types: article.flags.iter().map(|flag| flag.flag_type).collect(),
            tags: article.tags.clone(),
            at,
        }
    }
}
