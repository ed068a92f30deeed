use super::ArticleQueryService;
use crate::{
    application::{
        dto::AnalysisResultDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};
use tracing::{debug, warn};

pub struct GetAnalysisResultQuery {
    pub id: String,
}

impl ArticleQueryService {
    /// Reads through the cache: a miss (or a cache failure) falls back to the
    /// repository and repopulates the entry.
    pub async fn get_analysis_result(
        &self,
        query: GetAnalysisResultQuery,
    ) -> ApplicationResult<AnalysisResultDto> {
        let id = ArticleId::parse(&query.id)?;

        match self.cache.get(id).await {
            Ok(Some(article)) => {
                debug!(article_id = %id, "analysis served from cache");
                return Ok(AnalysisResultDto::from(&article));
            }
            Ok(None) => {}
            Err(err) => warn!(error = %err, article_id = %id, "cache lookup failed"),
        }

        let article = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("analysis result not found"))?;

        if let Err(err) = self.cache.set(&article).await {
            warn!(error = %err, article_id = %id, "failed to update cache");
        }

        Ok(AnalysisResultDto::from(&article))
    }
}
