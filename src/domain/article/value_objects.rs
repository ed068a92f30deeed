use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(Uuid);

impl ArticleId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|_| DomainError::Validation(format!("invalid article id '{value}'")))
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for ArticleId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<ArticleId> for Uuid {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Declares a string value object that rejects blank input.
macro_rules! non_blank_text {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> DomainResult<Self> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(DomainError::Validation(
                        concat!($label, " cannot be empty").into(),
                    ));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

non_blank_text!(ArticleTitle, "title");
non_blank_text!(ArticleContent, "content");
non_blank_text!(ArticleSource, "source");
non_blank_text!(ArticleAuthor, "author");

/// Trims tags, drops blanks and keeps the first occurrence of each tag.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim();
        if tag.is_empty() || out.iter().any(|existing| existing == tag) {
            continue;
        }
        out.push(tag.to_string());
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArticleStatus {
    #[default]
    Pending,
    Analyzed,
    Flagged,
    Verified,
    Rejected,
}

impl ArticleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Pending => "PENDING",
            ArticleStatus::Analyzed => "ANALYZED",
            ArticleStatus::Flagged => "FLAGGED",
            ArticleStatus::Verified => "VERIFIED",
            ArticleStatus::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(ArticleStatus::Pending),
            "ANALYZED" => Ok(ArticleStatus::Analyzed),
            "FLAGGED" => Ok(ArticleStatus::Flagged),
            "VERIFIED" => Ok(ArticleStatus::Verified),
            "REJECTED" => Ok(ArticleStatus::Rejected),
            other => Err(DomainError::Validation(format!(
                "unknown article status '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlagType {
    Clickbait,
    Misleading,
    Biased,
    Unverified,
    FactualError,
    HateSpeech,
    Spam,
}

impl FlagType {
    pub const ALL: [FlagType; 7] = [
        FlagType::Clickbait,
        FlagType::Misleading,
        FlagType::Biased,
        FlagType::Unverified,
        FlagType::FactualError,
        FlagType::HateSpeech,
        FlagType::Spam,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FlagType::Clickbait => "CLICKBAIT",
            FlagType::Misleading => "MISLEADING",
            FlagType::Biased => "BIASED",
            FlagType::Unverified => "UNVERIFIED",
            FlagType::FactualError => "FACTUAL_ERROR",
            FlagType::HateSpeech => "HATE_SPEECH",
            FlagType::Spam => "SPAM",
        }
    }
}

impl fmt::Display for FlagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlagType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FlagType::ALL
            .into_iter()
            .find(|flag| flag.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::Validation(format!("unknown flag type '{s}'")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    Person,
    Place,
    Date,
    Organization,
    Product,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Person => "PERSON",
            EntityType::Place => "PLACE",
            EntityType::Date => "DATE",
            EntityType::Organization => "ORGANIZATION",
            EntityType::Product => "PRODUCT",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_id_rejects_garbage() {
        assert!(ArticleId::parse("not-a-uuid").is_err());
        let id = ArticleId::generate();
        assert_eq!(ArticleId::parse(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn blank_text_is_rejected() {
        assert!(ArticleTitle::new("   ").is_err());
        assert!(ArticleSource::new("").is_err());
        assert_eq!(ArticleAuthor::new("Jane").unwrap().as_str(), "Jane");
    }

    #[test]
    fn tags_are_trimmed_and_deduplicated() {
        let tags = normalize_tags([" politics ", "", "economy", "politics"]);
        assert_eq!(tags, vec!["politics".to_string(), "economy".to_string()]);
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!(
            "verified".parse::<ArticleStatus>().unwrap(),
            ArticleStatus::Verified
        );
        assert!("archived".parse::<ArticleStatus>().is_err());
    }

    #[test]
    fn flag_type_round_trips_through_wire_name() {
        for flag in FlagType::ALL {
            assert_eq!(flag.as_str().parse::<FlagType>().unwrap(), flag);
        }
        let json = serde_json::to_string(&FlagType::FactualError).unwrap();
        assert_eq!(json, "\"FACTUAL_ERROR\"");
    }
}
