//! Record identity shared by every domain store.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Stable identifier of one stored record.
///
/// Opaque to callers; ordering and format depend on the `IdGenerator` in use.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Domain a store belongs to. Used to tag notifications and log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Inventory,
    Recipes,
    MealPlan,
}

impl Domain {
    /// Stable snake_case id used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inventory => "inventory",
            Self::Recipes => "recipes",
            Self::MealPlan => "meal_plan",
        }
    }
}

/// Contract every storable record implements.
pub trait Record: Clone {
    /// Domain tag for this record type.
    const DOMAIN: Domain;

    fn id(&self) -> &RecordId;
}

/// Inputs a draft may consult while being turned into a record.
#[derive(Debug, Clone, Copy)]
pub struct DraftContext<'a> {
    /// Calendar date of creation, from the injected clock.
    pub today: chrono::NaiveDate,
    pub config: &'a crate::config::KitchenConfig,
}

/// Caller-supplied partial record that becomes a full record once an id is assigned.
pub trait Draft {
    type Output: Record;

    /// Merges draft fields over domain defaults and validates the result.
    ///
    /// # Errors
    /// - Returns `ValidationError` when any field violates its invariant.
    fn build(
        self,
        id: RecordId,
        ctx: &DraftContext<'_>,
    ) -> Result<Self::Output, crate::model::validation::ValidationError>;
}
