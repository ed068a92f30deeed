use crate::application::ports::{ids::ArticleIdGenerator, time::Clock};
use crate::domain::article::ArticleId;
use chrono::{DateTime, Utc};

#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Random (v4) UUID article identifiers.
#[derive(Default, Clone)]
pub struct RandomArticleIdGenerator;

impl ArticleIdGenerator for RandomArticleIdGenerator {
    fn next_id(&self) -> ArticleId {
        ArticleId::generate()
    }
}
