// tests/support/mocks/mod.rs
//! テスト用モックの再エクスポート
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod analysis;
pub mod analytics;
pub mod cache;
pub mod events;
pub mod repos;
pub mod time;

pub use analysis::{AnalyzerStep, ScriptedContentAnalyzer, ScriptedFactChecker};
pub use analytics::InMemoryAnalytics;
pub use cache::FailingCache;
pub use events::RecordingPublisher;
pub use repos::InMemoryArticleRepo;
pub use time::{SequentialIds, SteppingClock, fixed_now};
