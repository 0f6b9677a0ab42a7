//! Exact category filtering with an "All" sentinel.

use crate::model::inventory::InventoryItem;
use crate::model::recipe::{Recipe, ALL_CATEGORIES};

/// Records that belong to one named category.
pub trait Categorized {
    fn category(&self) -> &str;
}

impl Categorized for InventoryItem {
    fn category(&self) -> &str {
        self.category.as_str()
    }
}

impl Categorized for Recipe {
    fn category(&self) -> &str {
        self.category.as_str()
    }
}

/// Keeps records whose category equals `category` exactly.
///
/// `"All"` returns the snapshot unchanged.
pub fn filter_by_category<T>(snapshot: &[T], category: &str) -> Vec<T>
where
    T: Categorized + Clone,
{
    if category == ALL_CATEGORIES {
        return snapshot.to_vec();
    }
    snapshot
        .iter()
        .filter(|record| record.category() == category)
        .cloned()
        .collect()
}

/// Distinct categories in first-seen order.
pub fn categories<T: Categorized>(snapshot: &[T]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for record in snapshot {
        if !seen.iter().any(|value| value == record.category()) {
            seen.push(record.category().to_string());
        }
    }
    seen
}
