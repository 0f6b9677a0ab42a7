//! Read-only recipe catalog records.

use crate::model::record::{Domain, Record, RecordId};
use serde::{Deserialize, Serialize};

/// Category sentinel that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// Browsable recipe categories, sentinel first.
pub const RECIPE_CATEGORIES: &[&str] = &[
    ALL_CATEGORIES,
    "Breakfast",
    "Lunch",
    "Dinner",
    "Snacks",
    "Desserts",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    /// Free-form display text such as `"10 mins"`.
    pub cook_time: String,
    pub difficulty: Difficulty,
    /// Ordered as the recipe lists them.
    pub ingredients: Vec<String>,
    pub category: String,
}

impl Record for Recipe {
    const DOMAIN: Domain = Domain::Recipes;

    fn id(&self) -> &RecordId {
        &self.id
    }
}
