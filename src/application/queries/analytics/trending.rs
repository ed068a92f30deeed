use super::AnalyticsQueryService;
use crate::application::{dto::TrendingTopicsDto, error::ApplicationResult};

pub const DEFAULT_TOPIC_LIMIT: u32 = 10;
pub const MAX_TOPIC_LIMIT: u32 = 50;

pub struct TrendingTopicsQuery {
    pub range: Option<String>,
    pub limit: Option<u32>,
}

impl AnalyticsQueryService {
    pub async fn trending_topics(
        &self,
        query: TrendingTopicsQuery,
    ) -> ApplicationResult<TrendingTopicsDto> {
        let range = self.parse_range(query.range.as_deref())?;
        let limit = match query.limit {
            None | Some(0) => DEFAULT_TOPIC_LIMIT,
            Some(limit) => limit.min(MAX_TOPIC_LIMIT),
        };

        let topics = self
            .store
            .trending_topics(range.since(self.clock.now()), limit)
            .await?;
        Ok(TrendingTopicsDto {
            range: range.to_string(),
            topics: topics.into_iter().map(Into::into).collect(),
        })
    }
}
