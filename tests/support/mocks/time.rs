// tests/support/mocks/time.rs
use chrono::{DateTime, Utc};
use fude_core::application::ports::time::Clock;
use once_cell::sync::Lazy;

/// Milliseconds of [`fixed_now`], i.e. the slug suffix produced under [`FixedClock`].
pub const FIXED_MILLIS: i64 = 1_704_067_200_000;

/// テスト用の固定タイムスタンプ
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

#[derive(Clone, Default)]
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}
