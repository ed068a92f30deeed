// src/infrastructure/cache/redis_article_cache.rs
use super::article_key;
use crate::application::ApplicationResult;
use crate::application::error::ApplicationError;
use crate::application::ports::cache::ArticleCache;
use crate::domain::article::{Article, ArticleId};
use crate::infrastructure::redis_pool::{connection, redis_error};
use async_trait::async_trait;
use deadpool_redis::Pool;
use tracing::warn;

/// Article snapshots stored as JSON strings under `article:{id}` with a TTL.
#[derive(Clone)]
pub struct RedisArticleCache {
    pool: Pool,
    ttl_secs: u64,
}

impl RedisArticleCache {
    pub fn new(pool: Pool, ttl_secs: u64) -> Self {
        Self { pool, ttl_secs }
    }
}

#[async_trait]
impl ArticleCache for RedisArticleCache {
    async fn set(&self, article: &Article) -> ApplicationResult<()> {
        let payload = serde_json::to_string(article)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let mut conn = connection(&self.pool).await?;

        let _: () = redis::cmd("SET")
            .arg(article_key(article.id))
            .arg(payload)
            .arg("EX")
            .arg(self.ttl_secs)
            .query_async(&mut conn)
            .await
            .map_err(redis_error)?;
        Ok(())
    }

    async fn get(&self, id: ArticleId) -> ApplicationResult<Option<Article>> {
        let mut conn = connection(&self.pool).await?;
        let key = article_key(id);
        let payload: Option<String> = redis::cmd("GET")
            .arg(&key)
            .query_async(&mut conn)
            .await
            .map_err(redis_error)?;

        let Some(payload) = payload else {
            return Ok(None);
        };

        match serde_json::from_str::<Article>(&payload) {
            Ok(article) => Ok(Some(article)),
            Err(err) => {
                // Stale layout from an older build; treat as a miss.
                warn!(%id, error = %err, "discarding undecodable cache entry");
                let _: i64 = redis::cmd("DEL")
                    .arg(&key)
                    .query_async(&mut conn)
                    .await
                    .map_err(redis_error)?;
                Ok(None)
            }
        }
    }

    async fn delete(&self, id: ArticleId) -> ApplicationResult<()> {
        let mut conn = connection(&self.pool).await?;
        let _: i64 = redis::cmd("DEL")
            .arg(article_key(id))
            .query_async(&mut conn)
            .await
            .map_err(redis_error)?;
        Ok(())
    }
}
