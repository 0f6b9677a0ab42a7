//! Freshness classification for perishable items.
//!
//! # Invariants
//! - Day differences use calendar dates only; time of day never shifts a result.
//! - The "expiring soon" window is inclusive at its upper bound.

use crate::config::KitchenConfig;
use crate::model::inventory::InventoryItem;
use chrono::NaiveDate;
use serde::Serialize;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DEFAULT_EXPIRING_SOON_DAYS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ExpiryStatus {
    Expired,
    ExpiringSoon,
    Fresh,
    /// Expiry date could not be read.
    Invalid,
}

impl ExpiryStatus {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Expired => "Expired",
            Self::ExpiringSoon => "Expiring Soon",
            Self::Fresh => "Fresh",
            Self::Invalid => "Invalid",
        }
    }

    /// Whether an item in this state can still be cooked with.
    pub fn is_usable(self) -> bool {
        matches!(self, Self::ExpiringSoon | Self::Fresh)
    }
}

/// Threshold set used to classify expiry dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryPolicy {
    pub expiring_soon_days: i64,
}

impl Default for ExpiryPolicy {
    fn default() -> Self {
        Self {
            expiring_soon_days: DEFAULT_EXPIRING_SOON_DAYS,
        }
    }
}

impl From<&KitchenConfig> for ExpiryPolicy {
    fn from(config: &KitchenConfig) -> Self {
        Self {
            expiring_soon_days: config.expiring_soon_days,
        }
    }
}

impl ExpiryPolicy {
    pub fn classify(self, expiry_date: NaiveDate, reference_date: NaiveDate) -> ExpiryStatus {
        let diff_days = days_until(expiry_date, reference_date);
        if diff_days < 0 {
            ExpiryStatus::Expired
        } else if diff_days <= self.expiring_soon_days {
            ExpiryStatus::ExpiringSoon
        } else {
            ExpiryStatus::Fresh
        }
    }

    /// Classifies a raw `YYYY-MM-DD` string; malformed input yields `Invalid`.
    pub fn classify_str(self, raw: &str, reference_date: NaiveDate) -> ExpiryStatus {
        match NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT) {
            Ok(date) => self.classify(date, reference_date),
            Err(_) => ExpiryStatus::Invalid,
        }
    }
}

/// Whole calendar days from `reference_date` to `expiry_date`; negative when past.
pub fn days_until(expiry_date: NaiveDate, reference_date: NaiveDate) -> i64 {
    expiry_date.signed_duration_since(reference_date).num_days()
}

/// Classifies `item` with the default three-day window.
pub fn expiry_status(item: &InventoryItem, reference_date: NaiveDate) -> ExpiryStatus {
    ExpiryPolicy::default().classify(item.expiry_date, reference_date)
}

/// Classifies raw date text with the default window.
pub fn expiry_status_from_str(raw: &str, reference_date: NaiveDate) -> ExpiryStatus {
    ExpiryPolicy::default().classify_str(raw, reference_date)
}

/// Item paired with its computed status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemFreshness {
    pub item: InventoryItem,
    pub status: ExpiryStatus,
    pub days_left: i64,
}

/// Annotates every item with its status, preserving order.
pub fn annotate(
    snapshot: &[InventoryItem],
    reference_date: NaiveDate,
    policy: ExpiryPolicy,
) -> Vec<ItemFreshness> {
    snapshot
        .iter()
        .map(|item| ItemFreshness {
            item: item.clone(),
            status: policy.classify(item.expiry_date, reference_date),
            days_left: days_until(item.expiry_date, reference_date),
        })
        .collect()
}

/// Per-status item counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExpirySummary {
    pub expired: usize,
    pub expiring_soon: usize,
    pub fresh: usize,
}

pub fn expiry_summary(
    snapshot: &[InventoryItem],
    reference_date: NaiveDate,
    policy: ExpiryPolicy,
) -> ExpirySummary {
    let mut summary = ExpirySummary::default();
    for item in snapshot {
        match policy.classify(item.expiry_date, reference_date) {
            ExpiryStatus::Expired => summary.expired += 1,
            ExpiryStatus::ExpiringSoon => summary.expiring_soon += 1,
            ExpiryStatus::Fresh => summary.fresh += 1,
            ExpiryStatus::Invalid => {}
        }
    }
    summary
}
