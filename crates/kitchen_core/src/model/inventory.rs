//! Perishable inventory records.
//!
//! # Invariants
//! - `quantity` is never negative (`u32` storage, negative drafts rejected).
//! - `name` is non-empty after whitespace normalization.

use crate::model::record::{Domain, Draft, DraftContext, Record, RecordId};
use crate::model::validation::{normalize_text, require_text, ValidationError};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// One tracked kitchen item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: RecordId,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    /// Last calendar date the item is considered usable.
    pub expiry_date: NaiveDate,
    pub added_date: NaiveDate,
}

impl Record for InventoryItem {
    const DOMAIN: Domain = Domain::Inventory;

    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Partial inventory record from a form or the ingredient-recognition service.
///
/// Absent fields fall back to configured defaults. `quantity` is signed so a
/// negative candidate value can be expressed and rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemDraft {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<i64>,
    pub expiry_date: Option<NaiveDate>,
    pub added_date: Option<NaiveDate>,
}

impl ItemDraft {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn expires_on(mut self, date: NaiveDate) -> Self {
        self.expiry_date = Some(date);
        self
    }

    pub fn added_on(mut self, date: NaiveDate) -> Self {
        self.added_date = Some(date);
        self
    }
}

impl Draft for ItemDraft {
    type Output = InventoryItem;

    fn build(self, id: RecordId, ctx: &DraftContext<'_>) -> Result<InventoryItem, ValidationError> {
        let name = require_text(self.name, "name")?;
        let category = self
            .category
            .as_deref()
            .map(normalize_text)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| ctx.config.default_category.clone());

        let raw_quantity = self
            .quantity
            .unwrap_or(i64::from(ctx.config.default_quantity));
        if raw_quantity < 0 {
            return Err(ValidationError::NegativeQuantity(raw_quantity));
        }
        let quantity = u32::try_from(raw_quantity)
            .map_err(|_| ValidationError::QuantityOutOfRange(raw_quantity))?;

        let added_date = self.added_date.unwrap_or(ctx.today);
        let expiry_date = match self.expiry_date {
            Some(date) => date,
            None => added_date
                .checked_add_days(Days::new(u64::from(ctx.config.default_shelf_life_days)))
                .unwrap_or(NaiveDate::MAX),
        };

        Ok(InventoryItem {
            id,
            name,
            category,
            quantity,
            expiry_date,
            added_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::ItemDraft;
    use crate::config::KitchenConfig;
    use crate::model::record::{Draft, DraftContext, RecordId};
    use crate::model::validation::ValidationError;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn build_applies_defaults() {
        let config = KitchenConfig::default();
        let ctx = DraftContext {
            today: date(2024, 2, 1),
            config: &config,
        };
        let item = ItemDraft::named("  Milk ")
            .build(RecordId::from("7"), &ctx)
            .expect("draft should build");

        assert_eq!(item.name, "Milk");
        assert_eq!(item.category, "Other");
        assert_eq!(item.quantity, 1);
        assert_eq!(item.added_date, date(2024, 2, 1));
        assert_eq!(item.expiry_date, date(2024, 2, 8));
    }

    #[test]
    fn build_rejects_negative_and_oversized_quantity() {
        let config = KitchenConfig::default();
        let ctx = DraftContext {
            today: date(2024, 2, 1),
            config: &config,
        };
        let negative = ItemDraft::named("Milk")
            .quantity(-1)
            .build(RecordId::from("1"), &ctx);
        assert_eq!(negative, Err(ValidationError::NegativeQuantity(-1)));

        let huge = i64::from(u32::MAX) + 1;
        let oversized = ItemDraft::named("Milk")
            .quantity(huge)
            .build(RecordId::from("2"), &ctx);
        assert_eq!(oversized, Err(ValidationError::QuantityOutOfRange(huge)));
    }

    #[test]
    fn blank_category_falls_back_to_default() {
        let config = KitchenConfig::default();
        let ctx = DraftContext {
            today: date(2024, 2, 1),
            config: &config,
        };
        let item = ItemDraft::named("Rice")
            .category("   ")
            .quantity(0)
            .build(RecordId::from("3"), &ctx)
            .expect("zero quantity is allowed");
        assert_eq!(item.category, "Other");
        assert_eq!(item.quantity, 0);
    }
}
