// tests/support/mocks/time.rs
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use reality_filter::application::ports::{ids::ArticleIdGenerator, time::Clock};
use reality_filter::domain::article::ArticleId;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use uuid::Uuid;

/// テスト用の固定タイムスタンプ
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// Starts at [`fixed_now`] and moves one second forward on every call, so
/// successive mutations get strictly increasing timestamps.
#[derive(Default)]
pub struct SteppingClock {
    ticks: AtomicI64,
}

impl SteppingClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// The timestamp the next call to `now` would return, without advancing.
    pub fn peek(&self) -> DateTime<Utc> {
        fixed_now() + Duration::seconds(self.ticks.load(Ordering::SeqCst))
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        fixed_now() + Duration::seconds(tick)
    }
}

/// Deterministic ids: 00000000-0000-0000-0000-000000000001, ...002, ...
#[derive(Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl ArticleIdGenerator for SequentialIds {
    fn next_id(&self) -> ArticleId {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        ArticleId::from(Uuid::from_u128(u128::from(n)))
    }
}
