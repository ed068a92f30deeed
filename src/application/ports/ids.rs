// src/application/ports/ids.rs
use crate::domain::article::ArticleId;

pub trait ArticleIdGenerator: Send + Sync {
    fn next_id(&self) -> ArticleId;
}
