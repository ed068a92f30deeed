// src/presentation/http/controllers/mod.rs
pub mod analysis;
pub mod analytics;
pub mod article_requests;
pub mod articles;
