// src/application/commands/articles/mod.rs
mod analyze;
mod create;
mod reprocess;
mod service;
mod status;

pub use analyze::{AnalyzeArticleCommand, BIAS_DETECTOR, FACT_CHECKER};
pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use reprocess::ReprocessArticleCommand;
pub use service::ArticleCommandService;
pub use status::UpdateArticleStatusCommand;
