//! Case-insensitive substring search.

use crate::model::inventory::InventoryItem;
use crate::model::meal::MealEntry;
use crate::model::recipe::Recipe;

/// Records with a default set of searchable text fields.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for InventoryItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.category.as_str()]
    }
}

impl Searchable for Recipe {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }
}

impl Searchable for MealEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.recipe.as_str(), self.notes.as_str()]
    }
}

/// Filters `snapshot` by `query` against each record's default fields.
///
/// An empty query returns every record unchanged.
pub fn search<T>(snapshot: &[T], query: &str) -> Vec<T>
where
    T: Searchable + Clone,
{
    search_by(snapshot, query, T::search_fields)
}

/// Filters `snapshot` by `query` against the fields selected by `fields`.
pub fn search_by<T, F>(snapshot: &[T], query: &str, fields: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> Vec<&str>,
{
    if query.is_empty() {
        return snapshot.to_vec();
    }
    let needle = query.to_lowercase();
    snapshot
        .iter()
        .filter(|record| {
            fields(record)
                .into_iter()
                .any(|field| field.to_lowercase().contains(needle.as_str()))
        })
        .cloned()
        .collect()
}
