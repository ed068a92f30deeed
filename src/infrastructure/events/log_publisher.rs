use crate::application::ApplicationResult;
use crate::application::ports::events::EventPublisher;
use crate::domain::article::{Article, ArticleEvent, ArticleEventKind};
use async_trait::async_trait;
use tracing::info;

use super::{ANALYZED_CHANNEL, FLAGGED_CHANNEL};

/// Emits article events as structured log lines instead of a message bus.
#[derive(Default, Clone)]
pub struct LogEventPublisher;

impl LogEventPublisher {
    fn emit(channel: &str, event: &ArticleEvent) {
        info!(
            channel,
            kind = %event.kind,
            article_id = %event.article_id,
            status = %event.status,
            score = event.score,
            flags = event.flag_types.len(),
            "article event published"
        );
    }
}

#[async_trait]
impl EventPublisher for LogEventPublisher {
    async fn publish_article_analyzed(&self, article: &Article) -> ApplicationResult<()> {
        let event =
            ArticleEvent::from_article(ArticleEventKind::ArticleAnalyzed, article, article.updated_at);
        Self::emit(ANALYZED_CHANNEL, &event);
        Ok(())
    }

    async fn publish_article_flagged(&self, article: &Article) -> ApplicationResult<()> {
        let event =
            ArticleEvent::from_article(ArticleEventKind::ArticleFlagged, article, article.updated_at);
        Self::emit(FLAGGED_CHANNEL, &event);
        Ok(())
    }
}
