// tests/support/builders.rs
use super::mocks::fixed_now;
use chrono::{DateTime, Utc};
use reality_filter::domain::article::*;

pub struct ArticleBuilder {
    id: ArticleId,
    title: String,
    content: String,
    source: String,
    tags: Vec<String>,
    status: ArticleStatus,
    flags: Vec<FlagType>,
    updated_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: ArticleId::generate(),
            title: "Test Article".into(),
            content: "Test body".into(),
            source: "example.com".into(),
            tags: Vec::new(),
            status: ArticleStatus::Pending,
            flags: Vec::new(),
            updated_at: fixed_now(),
        }
    }

    pub fn id(mut self, id: ArticleId) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }

    /// Adds a flag; the built article ends up `FLAGGED`.
    pub fn flagged(mut self, flag_type: FlagType) -> Self {
        self.flags.push(flag_type);
        self
    }

    pub fn updated_at(mut self, at: DateTime<Utc>) -> Self {
        self.updated_at = at;
        self
    }

    pub fn build(self) -> Article {
        let new = NewArticle {
            title: ArticleTitle::new(self.title).unwrap(),
            content: ArticleContent::new(self.content).unwrap(),
            source: ArticleSource::new(self.source).unwrap(),
            author: ArticleAuthor::new("Tester").unwrap(),
            tags: self.tags,
        };
        let mut article = Article::submit(self.id, new, fixed_now());
        article.update_status(self.status, self.updated_at);
        for flag_type in self.flags {
            article.add_flag(flag_type, 0.7, "seeded", "bias_detector", self.updated_at);
        }
        article
    }
}
