use std::sync::Arc;

use crate::{
    application::{error::ApplicationResult, ports::time::Clock},
    domain::analytics::{AnalyticsStore, TimeRange},
};

pub struct AnalyticsQueryService {
    pub(super) store: Arc<dyn AnalyticsStore>,
    pub(super) clock: Arc<dyn Clock>,
}

impl AnalyticsQueryService {
    pub fn new(store: Arc<dyn AnalyticsStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub(super) fn parse_range(&self, range: Option<&str>) -> ApplicationResult<TimeRange> {
        match range {
            Some(value) if !value.trim().is_empty() => Ok(value.parse()?),
            _ => Ok(TimeRange::default()),
        }
    }
}
