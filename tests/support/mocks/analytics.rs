// tests/support/mocks/analytics.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reality_filter::domain::analytics::{AnalyticsStore, TopicCount};
use reality_filter::domain::article::{ArticleEvent, ArticleEventKind, FlagType};
use reality_filter::domain::errors::DomainResult;
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

/// Keeps events in a vector and aggregates them on read.
#[derive(Default)]
pub struct InMemoryAnalytics {
    events: Mutex<Vec<ArticleEvent>>,
}

impl InMemoryAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ArticleEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn kinds(&self) -> Vec<ArticleEventKind> {
        self.events().into_iter().map(|e| e.kind).collect()
    }

    fn matching(&self, kind: ArticleEventKind, since: Option<DateTime<Utc>>) -> Vec<ArticleEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.kind == kind && since.is_none_or(|since| e.at >= since))
            .collect()
    }
}

#[async_trait]
impl AnalyticsStore for InMemoryAnalytics {
    async fn record_event(&self, event: &ArticleEvent) -> DomainResult<()> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }

    async fn source_stats(
        &self,
        since: Option<DateTime<Utc>>,
    ) -> DomainResult<BTreeMap<String, u64>> {
        let mut stats = BTreeMap::new();
        for event in self.matching(ArticleEventKind::ArticleCreated, since) {
            *stats.entry(event.source).or_insert(0) += 1;
        }
        Ok(stats)
    }

    async fn flag_stats(
        &self,
        since: Option<DateTime<Utc>>,
    ) -> DomainResult<BTreeMap<FlagType, u64>> {
        let mut stats = BTreeMap::new();
        for event in self.matching(ArticleEventKind::ArticleAnalyzed, since) {
            for flag in event.flag_types {
                *stats.entry(flag).or_insert(0) += 1;
            }
        }
        Ok(stats)
    }

    async fn trending_topics(
        &self,
        since: Option<DateTime<Utc>>,
        limit: u32,
    ) -> DomainResult<Vec<TopicCount>> {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for event in self.matching(ArticleEventKind::ArticleCreated, since) {
            for tag in event.tags {
                *counts.entry(tag).or_insert(0) += 1;
            }
        }
        let mut topics: Vec<TopicCount> = counts
            .into_iter()
            .map(|(topic, count)| TopicCount { topic, count })
            .collect();
        topics.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.topic.cmp(&b.topic)));
        topics.truncate(limit as usize);
        Ok(topics)
    }
}
