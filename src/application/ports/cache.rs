use crate::application::ApplicationResult;
use crate::domain::article::{Article, ArticleId};
use async_trait::async_trait;

#[async_trait]
pub trait ArticleCache: Send + Sync {
    /// Store an article snapshot, replacing any previous entry.
    async fn set(&self, article: &Article) -> ApplicationResult<()>;

    /// Return the cached snapshot, or `None` on a miss or expired entry.
    async fn get(&self, id: ArticleId) -> ApplicationResult<Option<Article>>;

    async fn delete(&self, id: ArticleId) -> ApplicationResult<()>;
}
