use super::AnalyticsQueryService;
use crate::application::{
    dto::{FlagStatsDto, SourceStatsDto},
    error::ApplicationResult,
};

pub struct SourceStatsQuery {
    pub range: Option<String>,
}

pub struct FlagStatsQuery {
    pub range: Option<String>,
}

impl AnalyticsQueryService {
    pub async fn source_stats(&self, query: SourceStatsQuery) -> ApplicationResult<SourceStatsDto> {
        let range = self.parse_range(query.range.as_deref())?;
        let sources = self
            .store
            .source_stats(range.since(self.clock.now()))
            .await?;
        Ok(SourceStatsDto {
            range: range.to_string(),
            sources,
        })
    }

    pub async fn flag_stats(&self, query: FlagStatsQuery) -> ApplicationResult<FlagStatsDto> {
        let range = self.parse_range(query.range.as_deref())?;
        let counts = self.store.flag_stats(range.since(self.clock.now())).await?;
        let flags = counts
            .into_iter()
            .map(|(flag, count)| (flag.as_str().to_string(), count))
            .collect();
        Ok(FlagStatsDto {
            range: range.to_string(),
            flags,
        })
    }
}
