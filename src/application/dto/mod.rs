pub mod analytics;
pub mod articles;
pub mod pagination;

pub use analytics::{FlagStatsDto, SourceStatsDto, TopicCountDto, TrendingTopicsDto};
pub use articles::{
    AnalysisDto, AnalysisResultDto, ArticleDto, ArticleMetadataDto, CreatedArticleDto, EntityDto,
    FlagDto,
};
pub use pagination::OffsetPage;
