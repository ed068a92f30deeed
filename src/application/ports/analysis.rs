// src/application/ports/analysis.rs
use crate::application::ApplicationResult;
use crate::domain::article::{Article, Entity, FlagType};
use async_trait::async_trait;

/// A problem reported by a detector, before it is attached to an article.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedIssue {
    pub flag_type: FlagType,
    pub confidence: f64,
    pub details: String,
}

impl DetectedIssue {
    pub fn new(flag_type: FlagType, confidence: f64, details: impl Into<String>) -> Self {
        Self {
            flag_type,
            confidence,
            details: details.into(),
        }
    }
}

#[async_trait]
pub trait ContentAnalyzer: Send + Sync {
    /// Sentiment in `[0, 1]` where 0.5 is neutral.
    async fn analyze_sentiment(&self, text: &str) -> ApplicationResult<f64>;

    async fn extract_entities(&self, text: &str) -> ApplicationResult<Vec<Entity>>;

    async fn detect_bias(&self, text: &str) -> ApplicationResult<Vec<DetectedIssue>>;

    /// ISO 639-1 code of the text language.
    async fn detect_language(&self, _text: &str) -> ApplicationResult<String> {
        Ok("en".to_string())
    }
}

#[async_trait]
pub trait FactChecker: Send + Sync {
    async fn check_facts(&self, article: &Article) -> ApplicationResult<Vec<DetectedIssue>>;

    /// Reputation of a news source in `[0, 1]`.
    async fn source_reputation(&self, source: &str) -> ApplicationResult<f64>;
}
