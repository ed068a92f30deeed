use crate::application::ApplicationResult;
use crate::domain::article::Article;
use async_trait::async_trait;

#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish_article_analyzed(&self, article: &Article) -> ApplicationResult<()>;
    async fn publish_article_flagged(&self, article: &Article) -> ApplicationResult<()>;
}
