use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleEventKind, ArticleId, ArticleStatus},
};
use tracing::{info, warn};

pub struct UpdateArticleStatusCommand {
    pub id: String,
    pub status: String,
}

impl ArticleCommandService {
    pub async fn update_article_status(
        &self,
        command: UpdateArticleStatusCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::parse(&command.id)?;
        let status: ArticleStatus = command.status.parse()?;
        let mut article = self.load(id).await?;

        let previous = article.status;
        article.update_status(status, self.clock.now());
        self.repository.update(&article).await?;
        info!(article_id = %article.id, from = %previous, to = %status, "article status changed");

        // The analysis endpoint reads through the cache.
        if let Err(err) = self.cache.delete(article.id).await {
            warn!(error = %err, article_id = %article.id, "failed to invalidate cache");
        }
        self.record(ArticleEventKind::StatusChanged, &article).await;

        Ok(article.into())
    }
}
