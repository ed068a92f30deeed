// tests/support/mocks/cache.rs
use async_trait::async_trait;
use reality_filter::application::ApplicationResult;
use reality_filter::application::error::ApplicationError;
use reality_filter::application::ports::cache::ArticleCache;
use reality_filter::domain::article::{Article, ArticleId};

/// Every operation fails, as if the cache server were unreachable.
pub struct FailingCache;

#[async_trait]
impl ArticleCache for FailingCache {
    async fn set(&self, _article: &Article) -> ApplicationResult<()> {
        Err(ApplicationError::infrastructure("cache unavailable"))
    }

    async fn get(&self, _id: ArticleId) -> ApplicationResult<Option<Article>> {
        Err(ApplicationError::infrastructure("cache unavailable"))
    }

    async fn delete(&self, _id: ArticleId) -> ApplicationResult<()> {
        Err(ApplicationError::infrastructure("cache unavailable"))
    }
}
