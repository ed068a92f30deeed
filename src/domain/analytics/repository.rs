use crate::domain::article::{ArticleEvent, FlagType};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicCount {
    pub topic: String,
    pub count: u64,
}

/// Append-only record of article events with aggregate reads over it.
///
/// Every read takes an optional lower bound; `None` aggregates all history.
#[async_trait]
pub trait AnalyticsStore: Send + Sync {
    async fn record_event(&self, event: &ArticleEvent) -> DomainResult<()>;

    /// Submitted articles per source.
    async fn source_stats(&self, since: Option<DateTime<Utc>>)
    -> DomainResult<BTreeMap<String, u64>>;

    /// Flags raised per type across analysis runs.
    async fn flag_stats(&self, since: Option<DateTime<Utc>>)
    -> DomainResult<BTreeMap<FlagType, u64>>;

    /// Most frequent tags among submitted articles, highest count first.
    async fn trending_topics(
        &self,
        since: Option<DateTime<Utc>>,
        limit: u32,
    ) -> DomainResult<Vec<TopicCount>>;
}
