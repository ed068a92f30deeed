// src/infrastructure/analysis/mod.rs
mod heuristic;
mod static_analyzers;

pub use heuristic::HeuristicContentAnalyzer;
pub use static_analyzers::{
    DEFAULT_SOURCE_REPUTATION, StaticContentAnalyzer, StaticFactChecker, normalize_source,
};
