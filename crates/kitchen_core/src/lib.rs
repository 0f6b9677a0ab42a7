//! Core domain logic for the kitchen assistant.
//! Inventory, recipe and meal-plan state lives here; display layers only read
//! derived views and write through the services.

pub mod clock;
pub mod config;
pub mod derive;
pub mod kitchen;
pub mod logging;
pub mod model;
pub mod notify;
pub mod seed;
pub mod service;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, KitchenConfig};
pub use derive::expiry::{
    days_until, expiry_status, expiry_status_from_str, ExpiryPolicy, ExpiryStatus, ExpirySummary,
    ItemFreshness,
};
pub use derive::filter::filter_by_category;
pub use derive::recipes::{ingredient_preview, suggest_recipes, RecipeSuggestion};
pub use derive::schedule::{group_by_day, meals_for_day, meals_for_slot};
pub use derive::search::{search, search_by, Searchable};
pub use kitchen::{Kitchen, KitchenBuilder, KitchenError, KitchenResult, KitchenSeed};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::inventory::{InventoryItem, ItemDraft};
pub use model::meal::{MealDraft, MealEntry, MealType, Weekday};
pub use model::recipe::{Difficulty, Recipe, ALL_CATEGORIES, RECIPE_CATEGORIES};
pub use model::record::{Domain, Record, RecordId};
pub use model::validation::ValidationError;
pub use notify::event::{ChangeEvent, ChangeKind, NotificationLevel};
pub use notify::notifier::{Notifier, SubscriptionId};
pub use service::collection_service::{ServiceError, ServiceResult};
pub use service::id_policy::{IdGenerator, SequentialIdGenerator, TimeIdGenerator, UuidIdGenerator};
pub use service::inventory_service::InventoryService;
pub use service::meal_plan_service::MealPlanService;
pub use service::recipe_catalog::RecipeCatalog;
pub use store::entity_store::{EntityStore, StoreError, StoreResult};
pub use store::memory::MemoryStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
