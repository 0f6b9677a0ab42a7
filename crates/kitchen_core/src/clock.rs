//! Time sources for creation dates, expiry reference dates and id tokens.

use chrono::{Local, NaiveDate, Utc};

/// Injected time source so derivations and id policies stay deterministic in tests.
pub trait Clock: Send + Sync {
    /// Local calendar date used as "today".
    fn today(&self) -> NaiveDate;

    /// Unix epoch milliseconds.
    fn now_millis(&self) -> i64;
}

/// Wall-clock time from the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    today: NaiveDate,
    millis: i64,
}

impl FixedClock {
    pub fn new(today: NaiveDate, millis: i64) -> Self {
        Self { today, millis }
    }

    /// Frozen at local midnight of `today`, expressed as if it were UTC.
    pub fn on(today: NaiveDate) -> Self {
        let millis = today
            .and_hms_opt(0, 0, 0)
            .map(|value| value.and_utc().timestamp_millis())
            .unwrap_or_default();
        Self::new(today, millis)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }

    fn now_millis(&self) -> i64 {
        self.millis
    }
}
