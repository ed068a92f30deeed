// src/infrastructure/events/redis_publisher.rs
use super::{ANALYZED_CHANNEL, FLAGGED_CHANNEL};
use crate::application::ApplicationResult;
use crate::application::error::ApplicationError;
use crate::application::ports::events::EventPublisher;
use crate::domain::article::{Article, ArticleEvent, ArticleEventKind};
use crate::infrastructure::redis_pool::{connection, redis_error};
use async_trait::async_trait;
use deadpool_redis::Pool;
use tracing::debug;

/// Publishes JSON-encoded [`ArticleEvent`]s on Redis pub/sub channels.
#[derive(Clone)]
pub struct RedisEventPublisher {
    pool: Pool,
}

impl RedisEventPublisher {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    async fn publish(&self, channel: &str, event: &ArticleEvent) -> ApplicationResult<()> {
        let payload = serde_json::to_string(event)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let mut conn = connection(&self.pool).await?;

        let receivers: i64 = redis::cmd("PUBLISH")
            .arg(channel)
            .arg(payload)
            .query_async(&mut conn)
            .await
            .map_err(redis_error)?;

        debug!(channel, receivers, article_id = %event.article_id, "published article event");
        Ok(())
    }
}

#[async_trait]
impl EventPublisher for RedisEventPublisher {
    async fn publish_article_analyzed(&self, article: &Article) -> ApplicationResult<()> {
        let event =
            ArticleEvent::from_article(ArticleEventKind::ArticleAnalyzed, article, article.updated_at);
        self.publish(ANALYZED_CHANNEL, &event).await
    }

    async fn publish_article_flagged(&self, article: &Article) -> ApplicationResult<()> {
        let event =
            ArticleEvent::from_article(ArticleEventKind::ArticleFlagged, article, article.updated_at);
        self.publish(FLAGGED_CHANNEL, &event).await
    }
}
