// src/infrastructure/analysis/heuristic.rs
//! Rule-based content analyzer. Cheap enough to run inline, rough enough that
//! its output should be read as a hint rather than a verdict.

use crate::application::ApplicationResult;
use crate::application::ports::analysis::{ContentAnalyzer, DetectedIssue};
use crate::domain::article::{Entity, EntityType, FlagType};
use async_trait::async_trait;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\p{L}']+").unwrap());

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:\d{4}-\d{2}-\d{2}|(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2}(?:,\s*\d{4})?)\b",
    )
    .unwrap()
});

static ORGANIZATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:[A-Z][A-Za-z&]+\s+){0,3}(?:Inc|Corp|Corporation|Ltd|LLC|Group|University|Ministry|Agency|Council|Bank)\b\.?",
    )
    .unwrap()
});

static PERSON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:Mr|Mrs|Ms|Dr|Prof|President|Senator|Minister)\.?\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)")
        .unwrap()
});

static CLICKBAIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:you won't believe|what happens next|shocking|this one (?:simple )?trick|doctors hate|will blow your mind|number \d+ will)\b",
    )
    .unwrap()
});

static SHOUTING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[A-Z]{4,}\b").unwrap());

static EXCLAMATIONS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!{2,}").unwrap());

static LOADED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:disgraceful|outrageous|radical|corrupt|evil|traitors?|catastrophic|disastrous|propaganda|extremists?|so-called)\b",
    )
    .unwrap()
});

static SPAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:click here|buy now|limited (?:time )?offer|act now|free money|subscribe now)\b")
        .unwrap()
});

static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "positive", "success", "successful", "growth", "improve",
    "improved", "benefit", "win", "wins", "gain", "gains", "hope", "strong", "progress",
    "praised", "celebrate", "record",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "negative", "failure", "failed", "decline", "crisis", "loss",
    "losses", "fear", "weak", "collapse", "scandal", "death", "deaths", "attack", "war",
    "disaster", "criticized",
];

const STOPWORDS: &[(&str, &[&str])] = &[
    ("en", &["the", "and", "is", "of", "to", "in", "that", "with", "for", "was"]),
    ("es", &["el", "la", "los", "las", "y", "es", "de", "que", "en", "con"]),
    ("fr", &["le", "la", "les", "et", "est", "de", "des", "que", "dans", "pour"]),
    ("de", &["der", "die", "das", "und", "ist", "nicht", "mit", "ein", "eine", "zu"]),
];

const SHOUTING_THRESHOLD: usize = 3;
const URL_SPAM_THRESHOLD: usize = 3;

#[derive(Default, Clone)]
pub struct HeuristicContentAnalyzer;

impl HeuristicContentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    fn words(text: &str) -> impl Iterator<Item = String> + '_ {
        WORD_RE
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
    }

    /// Lexicon polarity mapped onto `[0, 1]`, smoothed so a single hit stays
    /// near neutral.
    pub fn sentiment(text: &str) -> f64 {
        let (mut positive, mut negative) = (0usize, 0usize);
        for word in Self::words(text) {
            if POSITIVE_WORDS.contains(&word.as_str()) {
                positive += 1;
            } else if NEGATIVE_WORDS.contains(&word.as_str()) {
                negative += 1;
            }
        }
        let total = (positive + negative) as f64;
        let polarity = (positive as f64 - negative as f64) / (total + 1.0);
        (0.5 + polarity / 2.0).clamp(0.0, 1.0)
    }

    pub fn entities(text: &str) -> Vec<Entity> {
        let mut seen = HashSet::new();
        let mut entities = Vec::new();
        let mut push = |entity_type: EntityType, value: &str| {
            let value = value.trim().trim_end_matches('.').to_string();
            if !value.is_empty() && seen.insert((entity_type, value.clone())) {
                entities.push(Entity::new(entity_type, value));
            }
        };

        for m in DATE_RE.find_iter(text) {
            push(EntityType::Date, m.as_str());
        }
        for caps in PERSON_RE.captures_iter(text) {
            if let Some(name) = caps.get(1) {
                push(EntityType::Person, name.as_str());
            }
        }
        for m in ORGANIZATION_RE.find_iter(text) {
            push(EntityType::Organization, m.as_str());
        }
        entities
    }

    pub fn issues(text: &str) -> Vec<DetectedIssue> {
        let mut issues = Vec::new();

        let mut signals = Vec::new();
        let phrases = CLICKBAIT_RE.find_iter(text).count();
        if phrases > 0 {
            signals.push(format!("{phrases} clickbait phrase(s)"));
        }
        let shouting = SHOUTING_RE.find_iter(text).count();
        if shouting >= SHOUTING_THRESHOLD {
            signals.push(format!("{shouting} all-caps words"));
        }
        if EXCLAMATIONS_RE.is_match(text) {
            signals.push("repeated exclamation marks".to_string());
        }
        if !signals.is_empty() {
            let confidence = 0.4 + 0.2 * signals.len() as f64;
            issues.push(DetectedIssue::new(
                FlagType::Clickbait,
                confidence.min(1.0),
                signals.join(", "),
            ));
        }

        let loaded: Vec<&str> = LOADED_RE.find_iter(text).map(|m| m.as_str()).collect();
        if !loaded.is_empty() {
            let confidence = (0.3 + 0.15 * loaded.len() as f64).min(0.9);
            issues.push(DetectedIssue::new(
                FlagType::Biased,
                confidence,
                format!("loaded language: {}", loaded.join(", ")),
            ));
        }

        let urls = URL_RE.find_iter(text).count();
        if SPAM_RE.is_match(text) || urls >= URL_SPAM_THRESHOLD {
            issues.push(DetectedIssue::new(
                FlagType::Spam,
                0.8,
                format!("promotional wording or {urls} links"),
            ));
        }

        issues
    }

    /// Best stopword match; ties and texts without stopwords fall back to English.
    pub fn language(text: &str) -> &'static str {
        let words: Vec<String> = Self::words(text).collect();
        let mut best = ("en", 0usize);
        for &(code, stopwords) in STOPWORDS {
            let hits = words
                .iter()
                .filter(|word| stopwords.contains(&word.as_str()))
                .count();
            if hits > best.1 {
                best = (code, hits);
            }
        }
        best.0
    }
}

#[async_trait]
impl ContentAnalyzer for HeuristicContentAnalyzer {
    async fn analyze_sentiment(&self, text: &str) -> ApplicationResult<f64> {
        Ok(Self::sentiment(text))
    }

    async fn extract_entities(&self, text: &str) -> ApplicationResult<Vec<Entity>> {
        Ok(Self::entities(text))
    }

    async fn detect_bias(&self, text: &str) -> ApplicationResult<Vec<DetectedIssue>> {
        Ok(Self::issues(text))
    }

    async fn detect_language(&self, text: &str) -> ApplicationResult<String> {
        Ok(Self::language(text).to_string())
    }
}
