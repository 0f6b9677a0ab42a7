//! Composition root owning one store per domain.
//!
//! # Invariants
//! - Each domain has exactly one store, owned here and reached only through
//!   its service.
//! - All services share one clock and one config.

use crate::clock::{Clock, SystemClock};
use crate::config::{ConfigError, KitchenConfig};
use crate::derive::recipes::RecipeSuggestion;
use crate::model::inventory::InventoryItem;
use crate::model::meal::MealEntry;
use crate::model::recipe::Recipe;
use crate::seed::{demo_inventory, demo_meal_plan, demo_recipes};
use crate::service::collection_service::ServiceContext;
use crate::service::id_policy::{IdGenerator, TimeIdGenerator};
use crate::service::inventory_service::InventoryService;
use crate::service::meal_plan_service::MealPlanService;
use crate::service::recipe_catalog::RecipeCatalog;
use crate::store::entity_store::StoreError;
use crate::store::memory::MemoryStore;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub type KitchenResult<T> = Result<T, KitchenError>;

/// Composition-root construction failure.
#[derive(Debug)]
pub enum KitchenError {
    Config(ConfigError),
    Store(StoreError),
}

impl Display for KitchenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "invalid kitchen seed: {err}"),
        }
    }
}

impl Error for KitchenError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ConfigError> for KitchenError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<StoreError> for KitchenError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Starting records for each domain.
#[derive(Debug, Clone, Default)]
pub struct KitchenSeed {
    pub inventory: Vec<InventoryItem>,
    pub recipes: Vec<Recipe>,
    pub meal_plan: Vec<MealEntry>,
}

impl KitchenSeed {
    pub fn demo() -> Self {
        Self {
            inventory: demo_inventory(),
            recipes: demo_recipes(),
            meal_plan: demo_meal_plan(),
        }
    }
}

pub struct Kitchen {
    pub inventory: InventoryService,
    pub recipes: RecipeCatalog,
    pub meal_plan: MealPlanService,
    ctx: ServiceContext,
}

/// Builder for `Kitchen` with injectable clock and id policies.
pub struct KitchenBuilder {
    config: KitchenConfig,
    clock: Arc<dyn Clock>,
    inventory_ids: Box<dyn IdGenerator>,
    meal_ids: Box<dyn IdGenerator>,
    seed: KitchenSeed,
}

impl Default for KitchenBuilder {
    fn default() -> Self {
        Self {
            config: KitchenConfig::default(),
            clock: Arc::new(SystemClock),
            inventory_ids: Box::new(TimeIdGenerator::new()),
            meal_ids: Box::new(TimeIdGenerator::new()),
            seed: KitchenSeed::default(),
        }
    }
}

impl KitchenBuilder {
    pub fn config(mut self, config: KitchenConfig) -> Self {
        self.config = config;
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn inventory_ids(mut self, ids: Box<dyn IdGenerator>) -> Self {
        self.inventory_ids = ids;
        self
    }

    pub fn meal_ids(mut self, ids: Box<dyn IdGenerator>) -> Self {
        self.meal_ids = ids;
        self
    }

    pub fn seed(mut self, seed: KitchenSeed) -> Self {
        self.seed = seed;
        self
    }

    /// # Errors
    /// - `KitchenError::Config` when `KitchenConfig::validate` rejects the config.
    /// - `KitchenError::Store(DuplicateId)` when a seed repeats an id within one domain.
    pub fn build(self) -> KitchenResult<Kitchen> {
        if let Err(err) = self.config.validate() {
            warn!("event=kitchen_init module=kitchen status=error error_code=invalid_config error={err}");
            return Err(err.into());
        }
        let ctx = ServiceContext::new(self.clock, Arc::new(self.config));
        let inventory = InventoryService::new(
            MemoryStore::with_records(self.seed.inventory)?,
            self.inventory_ids,
            ctx.clone(),
        );
        let recipes = RecipeCatalog::new(MemoryStore::with_records(self.seed.recipes)?);
        let meal_plan = MealPlanService::new(
            MemoryStore::with_records(self.seed.meal_plan)?,
            self.meal_ids,
            ctx.clone(),
        );

        info!(
            "event=kitchen_init module=kitchen status=ok inventory={} recipes={} meals={}",
            inventory.len(),
            recipes.len(),
            meal_plan.len()
        );

        Ok(Kitchen {
            inventory,
            recipes,
            meal_plan,
            ctx,
        })
    }
}

impl Kitchen {
    pub fn builder() -> KitchenBuilder {
        KitchenBuilder::default()
    }

    /// Empty kitchen on the system clock.
    pub fn new() -> Self {
        Self::empty_with(KitchenBuilder::default())
    }

    /// Kitchen seeded with the starter records.
    ///
    /// # Errors
    /// - Never fails for the built-in seed; the result mirrors `build`.
    pub fn demo() -> KitchenResult<Self> {
        Self::builder().seed(KitchenSeed::demo()).build()
    }

    pub fn config(&self) -> &KitchenConfig {
        self.ctx.config.as_ref()
    }

    pub fn today(&self) -> chrono::NaiveDate {
        self.ctx.clock.today()
    }

    /// "Use my ingredients": recipes ranked against current inventory.
    pub fn suggest_recipes(&self) -> Vec<RecipeSuggestion> {
        self.recipes.suggest(
            self.inventory.records(),
            self.today(),
            self.inventory.policy(),
        )
    }

    fn empty_with(builder: KitchenBuilder) -> Self {
        let ctx = ServiceContext::new(builder.clock, Arc::new(builder.config));
        Self {
            inventory: InventoryService::new(
                MemoryStore::new(),
                builder.inventory_ids,
                ctx.clone(),
            ),
            recipes: RecipeCatalog::default(),
            meal_plan: MealPlanService::new(MemoryStore::new(), builder.meal_ids, ctx.clone()),
            ctx,
        }
    }
}

impl Default for Kitchen {
    fn default() -> Self {
        Self::new()
    }
}
