//! Weekly meal-plan records.
//!
//! # Invariants
//! - Several entries may share one `(day, meal_type)` slot; no uniqueness rule applies.

use crate::model::record::{Domain, Draft, DraftContext, Record, RecordId};
use crate::model::validation::{require_text, ValidationError};
use serde::{Deserialize, Serialize};

/// Plan day, ordered Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Fixed plan week in display order.
    pub const ALL: [Weekday; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealType {
    pub const ALL: [MealType; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snacks];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snacks => "Snacks",
        }
    }
}

/// One planned dish in a day/meal slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealEntry {
    pub id: RecordId,
    pub day: Weekday,
    pub meal_type: MealType,
    /// Recipe name as entered; not a catalog reference.
    pub recipe: String,
    pub notes: String,
}

impl Record for MealEntry {
    const DOMAIN: Domain = Domain::MealPlan;

    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Partial meal entry from the add-meal form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MealDraft {
    pub day: Option<Weekday>,
    pub meal_type: Option<MealType>,
    pub recipe: Option<String>,
    pub notes: Option<String>,
}

impl MealDraft {
    pub fn new(day: Weekday, meal_type: MealType, recipe: impl Into<String>) -> Self {
        Self {
            day: Some(day),
            meal_type: Some(meal_type),
            recipe: Some(recipe.into()),
            notes: None,
        }
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

impl Draft for MealDraft {
    type Output = MealEntry;

    fn build(self, id: RecordId, _ctx: &DraftContext<'_>) -> Result<MealEntry, ValidationError> {
        let day = self.day.ok_or(ValidationError::MissingField("day"))?;
        let meal_type = self
            .meal_type
            .ok_or(ValidationError::MissingField("meal_type"))?;
        let recipe = require_text(self.recipe, "recipe")?;
        // Notes keep line breaks; only the outer whitespace is dropped.
        let notes = self
            .notes
            .map(|value| value.trim().to_string())
            .unwrap_or_default();

        Ok(MealEntry {
            id,
            day,
            meal_type,
            recipe,
            notes,
        })
    }
}
