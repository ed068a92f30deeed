// src/infrastructure/cache/in_memory.rs
use super::DEFAULT_ARTICLE_TTL_SECS;
use crate::application::ApplicationResult;
use crate::application::ports::cache::ArticleCache;
use crate::domain::article::{Article, ArticleId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Process-local article cache used when no Redis instance is configured.
pub struct InMemoryArticleCache {
    entries: RwLock<HashMap<ArticleId, (Instant, Article)>>,
    ttl: Duration,
}

impl InMemoryArticleCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryArticleCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_ARTICLE_TTL_SECS))
    }
}

#[async_trait]
impl ArticleCache for InMemoryArticleCache {
    async fn set(&self, article: &Article) -> ApplicationResult<()> {
        let expires_at = Instant::now() + self.ttl;
        self.entries
            .write()
            .await
            .insert(article.id, (expires_at, article.clone()));
        Ok(())
    }

    async fn get(&self, id: ArticleId) -> ApplicationResult<Option<Article>> {
        {
            let guard = self.entries.read().await;
            match guard.get(&id) {
                None => return Ok(None),
                Some((expires_at, article)) if *expires_at > Instant::now() => {
                    return Ok(Some(article.clone()));
                }
                Some(_) => {}
            }
        }

        // expired
        self.entries.write().await.remove(&id);
        Ok(None)
    }

    async fn delete(&self, id: ArticleId) -> ApplicationResult<()> {
        self.entries.write().await.remove(&id);
        Ok(())
    }
}
