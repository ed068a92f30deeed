use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Duration, Utc};
use std::{fmt, str::FromStr};

/// Window over which analytics are aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    Day,
    #[default]
    Week,
    Month,
    All,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Day => "24h",
            TimeRange::Week => "7d",
            TimeRange::Month => "30d",
            TimeRange::All => "all",
        }
    }

    /// Lower bound of the window, or `None` for an unbounded range.
    pub fn since(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            TimeRange::Day => Some(now - Duration::hours(24)),
            TimeRange::Week => Some(now - Duration::days(7)),
            TimeRange::Month => Some(now - Duration::days(30)),
            TimeRange::All => None,
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "24h" | "1d" | "day" => Ok(TimeRange::Day),
            "7d" | "week" => Ok(TimeRange::Week),
            "30d" | "month" => Ok(TimeRange::Month),
            "all" => Ok(TimeRange::All),
            other => Err(DomainError::Validation(format!(
                "unsupported time range '{other}', expected one of 24h, 7d, 30d, all"
            ))),
        }
    }
}
