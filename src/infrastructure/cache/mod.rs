// src/infrastructure/cache/mod.rs
mod in_memory;
mod redis_article_cache;

pub use in_memory::InMemoryArticleCache;
pub use redis_article_cache::RedisArticleCache;

/// Default time-to-live of a cached article snapshot, in seconds.
pub const DEFAULT_ARTICLE_TTL_SECS: u64 = 3600;

pub(crate) fn article_key(id: crate::domain::article::ArticleId) -> String {
    format!("article:{id}")
}
