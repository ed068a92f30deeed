use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct OffsetPage<T> {
    pub articles: Vec<T>,
    pub limit: u32,
    pub offset: u32,
}

impl<T> OffsetPage<T> {
    pub fn new(articles: Vec<T>, limit: u32, offset: u32) -> Self {
        Self {
            articles,
            limit,
            offset,
        }
    }
}
