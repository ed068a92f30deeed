// src/application/commands/articles/service.rs
use std::sync::Arc;

use tracing::warn;

use crate::{
    application::{
        error::ApplicationResult,
        ports::{
            analysis::{ContentAnalyzer, FactChecker},
            cache::ArticleCache,
            events::EventPublisher,
            ids::ArticleIdGenerator,
            time::Clock,
        },
    },
    domain::{
        analytics::AnalyticsStore,
        article::{Article, ArticleEvent, ArticleEventKind, ArticleId, ArticleRepository},
        errors::DomainError,
    },
};

pub struct ArticleCommandService {
    pub(super) repository: Arc<dyn ArticleRepository>,
    pub(super) cache: Arc<dyn ArticleCache>,
    pub(super) content_analyzer: Arc<dyn ContentAnalyzer>,
    pub(super) fact_checker: Arc<dyn FactChecker>,
    pub(super) event_publisher: Arc<dyn EventPublisher>,
    pub(super) analytics: Arc<dyn AnalyticsStore>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) ids: Arc<dyn ArticleIdGenerator>,
}

impl ArticleCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        repository: Arc<dyn ArticleRepository>,
        cache: Arc<dyn ArticleCache>,
        content_analyzer: Arc<dyn ContentAnalyzer>,
        fact_checker: Arc<dyn FactChecker>,
        event_publisher: Arc<dyn EventPublisher>,
        analytics: Arc<dyn AnalyticsStore>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn ArticleIdGenerator>,
    ) -> Self {
        Self {
            repository,
            cache,
            content_analyzer,
            fact_checker,
            event_publisher,
            analytics,
            clock,
            ids,
        }
    }

    pub(super) async fn load(&self, id: ArticleId) -> ApplicationResult<Article> {
        let article = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(DomainError::article_not_found)?;
        Ok(article)
    }

    /// Analytics are best effort: a failed write is logged and otherwise ignored.
    pub(super) async fn record(&self, kind: ArticleEventKind, article: &Article) {
        let event = ArticleEvent::from_article(kind, article, self.clock.now());
        if let Err(err) = self.analytics.record_event(&event).await {
            warn!(error = %err, article_id = %article.id, event = %kind, "failed to record analytics event");
        }
    }
}
