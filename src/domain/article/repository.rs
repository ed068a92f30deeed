use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Whole-document persistence for the article aggregate.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Inserts the article or replaces an existing one with the same id.
    async fn save(&self, article: &Article) -> DomainResult<()>;
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Flagged articles, most recently updated first.
    async fn find_flagged(&self, limit: u32, offset: u32) -> DomainResult<Vec<Article>>;
    /// Replaces an existing article; `NotFound` when nothing matched.
    async fn update(&self, article: &Article) -> DomainResult<()>;
}
