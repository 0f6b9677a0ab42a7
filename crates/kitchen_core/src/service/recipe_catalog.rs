//! Read-only recipe catalog.
//!
//! No add/delete path exists; the catalog is fixed at construction.

use crate::derive::expiry::ExpiryPolicy;
use crate::derive::filter::filter_by_category;
use crate::derive::recipes::{browse, suggest_recipes, RecipeSuggestion};
use crate::derive::search::search;
use crate::model::inventory::InventoryItem;
use crate::model::recipe::Recipe;
use crate::model::record::RecordId;
use crate::store::entity_store::{EntityStore, StoreResult};
use crate::store::memory::MemoryStore;
use chrono::NaiveDate;

#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    store: MemoryStore<Recipe>,
}

impl RecipeCatalog {
    pub fn new(store: MemoryStore<Recipe>) -> Self {
        Self { store }
    }

    pub fn all(&self) -> Vec<Recipe> {
        self.store.all()
    }

    pub fn get(&self, id: &RecordId) -> StoreResult<Recipe> {
        self.store.get(id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Title/description search.
    pub fn search(&self, query: &str) -> Vec<Recipe> {
        search(self.store.records(), query)
    }

    pub fn filter_by_category(&self, category: &str) -> Vec<Recipe> {
        filter_by_category(self.store.records(), category)
    }

    /// Category chip plus search box, as the recipe view combines them.
    pub fn browse(&self, category: &str, query: &str) -> Vec<Recipe> {
        browse(self.store.records(), category, query)
    }

    pub fn suggest(
        &self,
        inventory: &[InventoryItem],
        reference_date: NaiveDate,
        policy: ExpiryPolicy,
    ) -> Vec<RecipeSuggestion> {
        suggest_recipes(self.store.records(), inventory, reference_date, policy)
    }
}
