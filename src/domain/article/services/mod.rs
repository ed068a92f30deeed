// src/domain/article/services/mod.rs
mod metadata;
mod scoring;

pub use metadata::{
    NEUTRAL_SENTIMENT, READING_WORDS_PER_MINUTE, derive_metadata, normalize_sentiment,
    reading_time_minutes, word_count,
};
pub use scoring::{FLAG_SATURATION, credibility_score};
