// tests/support/mocks/events.rs
use async_trait::async_trait;
use reality_filter::application::ApplicationResult;
use reality_filter::application::error::ApplicationError;
use reality_filter::application::ports::events::EventPublisher;
use reality_filter::domain::article::{Article, ArticleId};
use std::sync::Mutex;

/// 発行されたイベントを記録するパブリッシャー
#[derive(Default)]
pub struct RecordingPublisher {
    analyzed: Mutex<Vec<ArticleId>>,
    flagged: Mutex<Vec<ArticleId>>,
    fail: bool,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records nothing and fails every publish.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn analyzed(&self) -> Vec<ArticleId> {
        self.analyzed.lock().unwrap().clone()
    }

    pub fn flagged(&self) -> Vec<ArticleId> {
        self.flagged.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish_article_analyzed(&self, article: &Article) -> ApplicationResult<()> {
        if self.fail {
            return Err(ApplicationError::infrastructure("broker unavailable"));
        }
        self.analyzed.lock().unwrap().push(article.id);
        Ok(())
    }

    async fn publish_article_flagged(&self, article: &Article) -> ApplicationResult<()> {
        if self.fail {
            return Err(ApplicationError::infrastructure("broker unavailable"));
        }
        self.flagged.lock().unwrap().push(article.id);
        Ok(())
    }
}
