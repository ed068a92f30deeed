use crate::domain::analytics::TopicCount;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SourceStatsDto {
    pub range: String,
    pub sources: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FlagStatsDto {
    pub range: String,
    pub flags: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TopicCountDto {
    pub topic: String,
    pub count: u64,
}

impl From<TopicCount> for TopicCountDto {
    fn from(value: TopicCount) -> Self {
        Self {
            topic: value.topic,
            count: value.count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrendingTopicsDto {
    pub range: String,
    pub topics: Vec<TopicCountDto>,
}
