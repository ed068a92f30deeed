// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_analytics;
mod postgres_article;

pub use error::map_sqlx;
pub use postgres_analytics::PostgresAnalyticsStore;
pub use postgres_article::PostgresArticleRepository;
