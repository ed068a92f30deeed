// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleAuthor, ArticleContent, ArticleId, ArticleSource, ArticleStatus, ArticleTitle,
    EntityType, FlagType,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub entity_type: EntityType,
    pub value: String,
}

impl Entity {
    pub fn new(entity_type: EntityType, value: impl Into<String>) -> Self {
        Self {
            entity_type,
            value: value.into(),
        }
    }
}

/// An issue raised against an article by one of the detectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flag {
    pub flag_type: FlagType,
    pub confidence: f64,
    pub details: String,
    pub detected_by: String,
    pub detected_at: DateTime<Utc>,
}

impl Flag {
    pub fn new(
        flag_type: FlagType,
        confidence: f64,
        details: impl Into<String>,
        detected_by: impl Into<String>,
        detected_at: DateTime<Utc>,
    ) -> Self {
        Self {
            flag_type,
            confidence: clamp_unit(confidence),
            details: details.into(),
            detected_by: detected_by.into(),
            detected_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArticleMetadata {
    pub entities: Vec<Entity>,
    pub sentiment: f64,
    pub language: String,
    pub word_count: u32,
    /// Estimated reading time in minutes.
    pub reading_time: u32,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub source: ArticleSource,
    pub author: ArticleAuthor,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub source: ArticleSource,
    pub author: ArticleAuthor,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub score: f64,
    pub flags: Vec<Flag>,
    pub status: ArticleStatus,
    pub metadata: ArticleMetadata,
}

impl Article {
    pub fn submit(id: ArticleId, new: NewArticle, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: new.title,
            content: new.content,
            source: new.source,
            author: new.author,
            tags: new.tags,
            created_at: now,
            updated_at: now,
            score: 0.0,
            flags: Vec::new(),
            status: ArticleStatus::Pending,
            metadata: ArticleMetadata::default(),
        }
    }

    pub fn add_flag(
        &mut self,
        flag_type: FlagType,
        confidence: f64,
        details: impl Into<String>,
        detected_by: impl Into<String>,
        now: DateTime<Utc>,
    ) {
        self.flags
            .push(Flag::new(flag_type, confidence, details, detected_by, now));
        self.status = ArticleStatus::Flagged;
        self.updated_at = now;
    }

    pub fn update_score(&mut self, score: f64, now: DateTime<Utc>) {
        self.score = clamp_unit(score);
        self.updated_at = now;
    }

    pub fn update_status(&mut self, status: ArticleStatus, now: DateTime<Utc>) {
        self.status = status;
        self.updated_at = now;
    }

    pub fn update_metadata(&mut self, metadata: ArticleMetadata, now: DateTime<Utc>) {
        self.metadata = metadata;
        self.updated_at = now;
    }

    /// Drops every analysis artefact so the article can be analyzed from scratch.
    pub fn reset_analysis(&mut self, now: DateTime<Utc>) {
        self.flags.clear();
        self.score = 0.0;
        self.status = ArticleStatus::Pending;
        self.metadata = ArticleMetadata::default();
        self.updated_at = now;
    }

    pub fn is_flagged(&self) -> bool {
        !self.flags.is_empty()
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_article() -> Article {
        let new = NewArticle {
            title: ArticleTitle::new("Markets rally").unwrap(),
            content: ArticleContent::new("Stocks rose on Monday.").unwrap(),
            source: ArticleSource::new("example.com").unwrap(),
            author: ArticleAuthor::new("Reporter").unwrap(),
            tags: vec!["economy".into()],
        };
        Article::submit(ArticleId::generate(), new, Utc::now())
    }

    #[test]
    fn submitted_article_is_pending_and_empty() {
        let article = sample_article();
        assert_eq!(article.status, ArticleStatus::Pending);
        assert!(article.flags.is_empty());
        assert_eq!(article.score, 0.0);
        assert_eq!(article.created_at, article.updated_at);
    }

    #[test]
    fn add_flag_marks_article_flagged() {
        let mut article = sample_article();
        let later = article.updated_at + Duration::seconds(5);
        article.add_flag(FlagType::Clickbait, 0.7, "sensational title", "bias_detector", later);
        assert_eq!(article.status, ArticleStatus::Flagged);
        assert_eq!(article.flags.len(), 1);
        assert_eq!(article.flags[0].detected_by, "bias_detector");
        assert_eq!(article.updated_at, later);
    }

    #[test]
    fn flag_confidence_is_clamped() {
        let flag = Flag::new(FlagType::Spam, 1.7, "", "test", Utc::now());
        assert_eq!(flag.confidence, 1.0);
        let flag = Flag::new(FlagType::Spam, -0.2, "", "test", Utc::now());
        assert_eq!(flag.confidence, 0.0);
    }

    #[test]
    fn mutations_touch_updated_at() {
        let mut article = sample_article();
        let t1 = article.updated_at + Duration::seconds(1);
        article.update_score(0.42, t1);
        assert_eq!(article.updated_at, t1);
        let t2 = t1 + Duration::seconds(1);
        article.update_status(ArticleStatus::Verified, t2);
        assert_eq!(article.updated_at, t2);
        let t3 = t2 + Duration::seconds(1);
        article.update_metadata(ArticleMetadata::default(), t3);
        assert_eq!(article.updated_at, t3);
    }

    #[test]
    fn reset_analysis_clears_results() {
        let mut article = sample_article();
        let now = Utc::now();
        article.add_flag(FlagType::Biased, 0.5, "loaded language", "bias_detector", now);
        article.update_score(0.9, now);
        article.reset_analysis(now);
        assert!(article.flags.is_empty());
        assert_eq!(article.score, 0.0);
        assert_eq!(article.status, ArticleStatus::Pending);
        assert!(article.metadata.entities.is_empty());
    }
}
