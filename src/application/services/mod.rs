// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService,
        ports::{
            analysis::{ContentAnalyzer, FactChecker},
            cache::ArticleCache,
            events::EventPublisher,
            ids::ArticleIdGenerator,
            time::Clock,
        },
        queries::{analytics::AnalyticsQueryService, articles::ArticleQueryService},
    },
    domain::{analytics::AnalyticsStore, article::ArticleRepository},
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub analytics_queries: Arc<AnalyticsQueryService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        article_cache: Arc<dyn ArticleCache>,
        content_analyzer: Arc<dyn ContentAnalyzer>,
        fact_checker: Arc<dyn FactChecker>,
        event_publisher: Arc<dyn EventPublisher>,
        analytics_store: Arc<dyn AnalyticsStore>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn ArticleIdGenerator>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_repo),
            Arc::clone(&article_cache),
            content_analyzer,
            fact_checker,
            event_publisher,
            Arc::clone(&analytics_store),
            Arc::clone(&clock),
            ids,
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_repo),
            Arc::clone(&article_cache),
        ));

        let analytics_queries = Arc::new(AnalyticsQueryService::new(analytics_store, clock));

        Self {
            article_commands,
            article_queries,
            analytics_queries,
        }
    }
}
