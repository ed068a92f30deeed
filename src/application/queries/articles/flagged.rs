use super::ArticleQueryService;
use crate::application::{
    dto::{ArticleDto, OffsetPage},
    error::ApplicationResult,
};

pub const DEFAULT_FLAGGED_LIMIT: u32 = 10;
pub const MAX_FLAGGED_LIMIT: u32 = 100;

pub struct ListFlaggedArticlesQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ArticleQueryService {
    pub async fn list_flagged_articles(
        &self,
        query: ListFlaggedArticlesQuery,
    ) -> ApplicationResult<OffsetPage<ArticleDto>> {
        let limit = match query.limit {
            None | Some(0) => DEFAULT_FLAGGED_LIMIT,
            Some(limit) => limit.min(MAX_FLAGGED_LIMIT),
        };
        let offset = query.offset.unwrap_or(0);

        let articles = self.repository.find_flagged(limit, offset).await?;
        let items = articles.into_iter().map(Into::into).collect();
        Ok(OffsetPage::new(items, limit, offset))
    }
}
