use crate::domain::article::entity::{ArticleMetadata, Entity};

pub const READING_WORDS_PER_MINUTE: u32 = 200;
/// Sentiment assumed when an analyzer returns something that is not a number.
pub const NEUTRAL_SENTIMENT: f64 = 0.5;

pub fn word_count(text: &str) -> u32 {
    text.split_whitespace().count() as u32
}

pub fn reading_time_minutes(words: u32) -> u32 {
    words.div_ceil(READING_WORDS_PER_MINUTE)
}

/// Clamps an analyzer's sentiment into `[0, 1]`; NaN becomes neutral.
pub fn normalize_sentiment(raw: f64) -> f64 {
    if raw.is_nan() {
        NEUTRAL_SENTIMENT
    } else {
        raw.clamp(0.0, 1.0)
    }
}

pub fn derive_metadata(
    content: &str,
    entities: Vec<Entity>,
    sentiment: f64,
    language: impl Into<String>,
) -> ArticleMetadata {
    let words = word_count(content);
    let language = language.into();
    ArticleMetadata {
        entities,
        sentiment: normalize_sentiment(sentiment),
        language: if language.trim().is_empty() {
            "en".to_string()
        } else {
            language
        },
        word_count: words,
        reading_time: reading_time_minutes(words),
    }
}
