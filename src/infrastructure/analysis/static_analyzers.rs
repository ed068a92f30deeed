// src/infrastructure/analysis/static_analyzers.rs
use crate::application::ApplicationResult;
use crate::application::ports::analysis::{ContentAnalyzer, DetectedIssue, FactChecker};
use crate::domain::article::{Article, Entity};
use async_trait::async_trait;
use std::collections::HashMap;

pub const DEFAULT_SOURCE_REPUTATION: f64 = 0.8;

/// Neutral analyzer: sentiment 0.5, no entities and no bias.
#[derive(Default, Clone)]
pub struct StaticContentAnalyzer;

#[async_trait]
impl ContentAnalyzer for StaticContentAnalyzer {
    async fn analyze_sentiment(&self, _text: &str) -> ApplicationResult<f64> {
        Ok(0.5)
    }

    async fn extract_entities(&self, _text: &str) -> ApplicationResult<Vec<Entity>> {
        Ok(Vec::new())
    }

    async fn detect_bias(&self, _text: &str) -> ApplicationResult<Vec<DetectedIssue>> {
        Ok(Vec::new())
    }
}

/// Fact checker that never raises issues and rates sources from a fixed table.
#[derive(Debug, Clone)]
pub struct StaticFactChecker {
    default_reputation: f64,
    overrides: HashMap<String, f64>,
}

impl StaticFactChecker {
    pub fn new(default_reputation: f64) -> Self {
        Self {
            default_reputation: default_reputation.clamp(0.0, 1.0),
            overrides: HashMap::new(),
        }
    }

    pub fn with_reputation(mut self, source: &str, reputation: f64) -> Self {
        self.overrides
            .insert(normalize_source(source), reputation.clamp(0.0, 1.0));
        self
    }

    pub fn with_reputations<I>(self, entries: I) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        entries
            .into_iter()
            .fold(self, |checker, (source, score)| checker.with_reputation(&source, score))
    }

    pub fn reputation_of(&self, source: &str) -> f64 {
        self.overrides
            .get(&normalize_source(source))
            .copied()
            .unwrap_or(self.default_reputation)
    }
}

impl Default for StaticFactChecker {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_REPUTATION)
    }
}

#[async_trait]
impl FactChecker for StaticFactChecker {
    async fn check_facts(&self, _article: &Article) -> ApplicationResult<Vec<DetectedIssue>> {
        Ok(Vec::new())
    }

    async fn source_reputation(&self, source: &str) -> ApplicationResult<f64> {
        Ok(self.reputation_of(source))
    }
}

/// Reduces a source (bare host or URL) to its lower-cased host without `www.`.
pub fn normalize_source(source: &str) -> String {
    let trimmed = source.trim();
    let without_scheme = trimmed
        .split_once("://")
        .map_or(trimmed, |(_, rest)| rest);
    let host = without_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host = host.rsplit_once('@').map_or(host, |(_, h)| h);
    let host = host.split(':').next().unwrap_or_default();
    let host = host.to_ascii_lowercase();
    host.strip_prefix("www.").map(str::to_string).unwrap_or(host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_urls_and_hosts() {
        assert_eq!(normalize_source("https://www.Example.com/news/1"), "example.com");
        assert_eq!(normalize_source("example.com:8443"), "example.com");
        assert_eq!(normalize_source("  reuters.com "), "reuters.com");
    }

    #[tokio::test]
    async fn unknown_sources_get_default_reputation() {
        let checker = StaticFactChecker::default();
        assert_eq!(checker.source_reputation("anything.org").await.unwrap(), 0.8);
    }

    #[tokio::test]
    async fn overrides_match_normalized_host() {
        let checker = StaticFactChecker::new(0.5)
            .with_reputations([("tabloid.example".to_string(), 0.1)]);
        assert_eq!(
            checker
                .source_reputation("http://www.tabloid.example/story")
                .await
                .unwrap(),
            0.1
        );
        assert_eq!(checker.source_reputation("other.example").await.unwrap(), 0.5);
    }

    #[tokio::test]
    async fn static_content_analyzer_is_neutral() {
        let analyzer = StaticContentAnalyzer;
        assert_eq!(analyzer.analyze_sentiment("terrible").await.unwrap(), 0.5);
        assert!(analyzer.extract_entities("Dr. Smith").await.unwrap().is_empty());
        assert!(analyzer.detect_bias("SHOCKING").await.unwrap().is_empty());
        assert_eq!(analyzer.detect_language("hola").await.unwrap(), "en");
    }
}
