//! Identifier generation policies.
//!
//! # Invariants
//! - `TimeIdGenerator` ids are strictly increasing within one generator.
//! - Time-derived ids are unique only for a single writer; multi-writer
//!   setups should use `UuidIdGenerator`.

use crate::clock::Clock;
use crate::model::record::RecordId;
use uuid::Uuid;

/// Source of fresh record ids.
pub trait IdGenerator {
    fn next_id(&mut self, clock: &dyn Clock) -> RecordId;
}

/// Epoch-millisecond tokens, bumped when the clock does not advance.
#[derive(Debug, Clone, Default)]
pub struct TimeIdGenerator {
    last: Option<i64>,
}

impl TimeIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for TimeIdGenerator {
    fn next_id(&mut self, clock: &dyn Clock) -> RecordId {
        let now = clock.now_millis();
        let value = match self.last {
            Some(last) if now <= last => last.saturating_add(1),
            _ => now,
        };
        self.last = Some(value);
        RecordId::new(value.to_string())
    }
}

/// Random v4 UUID tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self, _clock: &dyn Clock) -> RecordId {
        RecordId::new(Uuid::new_v4().to_string())
    }
}

/// Deterministic `prefix-N` tokens starting at 1.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self, _clock: &dyn Clock) -> RecordId {
        let id = RecordId::new(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::{IdGenerator, SequentialIdGenerator, TimeIdGenerator, UuidIdGenerator};
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn frozen() -> FixedClock {
        FixedClock::new(
            NaiveDate::from_ymd_opt(2024, 2, 10).expect("valid date"),
            1_707_523_200_000,
        )
    }

    #[test]
    fn time_ids_increase_when_clock_is_frozen() {
        let clock = frozen();
        let mut ids = TimeIdGenerator::new();
        let first = ids.next_id(&clock);
        let second = ids.next_id(&clock);
        assert_eq!(first.as_str(), "1707523200000");
        assert_eq!(second.as_str(), "1707523200001");
    }

    #[test]
    fn sequential_ids_use_prefix() {
        let clock = frozen();
        let mut ids = SequentialIdGenerator::new("meal");
        assert_eq!(ids.next_id(&clock).as_str(), "meal-1");
        assert_eq!(ids.next_id(&clock).as_str(), "meal-2");
    }

    #[test]
    fn uuid_ids_differ() {
        let clock = frozen();
        let mut ids = UuidIdGenerator;
        assert_ne!(ids.next_id(&clock), ids.next_id(&clock));
    }
}
