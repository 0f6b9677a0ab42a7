//! Weekly meal-plan use-case service.

use crate::derive::schedule::{group_by_day, meals_for_day, meals_for_slot};
use crate::model::meal::{MealDraft, MealEntry, MealType, Weekday};
use crate::model::record::RecordId;
use crate::notify::event::ChangeEvent;
use crate::notify::notifier::SubscriptionId;
use crate::service::collection_service::{CollectionService, ServiceContext, ServiceResult};
use crate::service::id_policy::IdGenerator;
use crate::store::entity_store::StoreResult;
use crate::store::memory::MemoryStore;
use std::collections::BTreeMap;

pub struct MealPlanService {
    inner: CollectionService<MealEntry>,
}

impl MealPlanService {
    pub fn new(
        store: MemoryStore<MealEntry>,
        ids: Box<dyn IdGenerator>,
        ctx: ServiceContext,
    ) -> Self {
        Self {
            inner: CollectionService::new(store, ids, ctx),
        }
    }

    /// Plans one meal. Slots may hold several entries.
    ///
    /// # Errors
    /// - `ServiceError::Validation` when day, meal type or recipe is missing.
    pub fn add_meal(&mut self, draft: MealDraft) -> ServiceResult<MealEntry> {
        self.inner.add(draft)
    }

    pub fn delete_meal(&mut self, id: &RecordId) -> bool {
        self.inner.delete(id)
    }

    pub fn all(&self) -> Vec<MealEntry> {
        self.inner.all()
    }

    pub fn get(&self, id: &RecordId) -> StoreResult<MealEntry> {
        self.inner.get(id)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Full Monday..Sunday grouping; empty days map to empty vectors.
    pub fn week(&self) -> BTreeMap<Weekday, Vec<MealEntry>> {
        group_by_day(self.inner.store().records(), &Weekday::ALL)
    }

    pub fn meals_for_day(&self, day: Weekday) -> Vec<MealEntry> {
        meals_for_day(self.inner.store().records(), day)
    }

    pub fn meals_for_slot(&self, day: Weekday, meal_type: MealType) -> Vec<MealEntry> {
        meals_for_slot(self.inner.store().records(), day, meal_type)
    }

    pub fn subscribe(&mut self, callback: impl Fn(&ChangeEvent) + 'static) -> SubscriptionId {
        self.inner.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe(id)
    }
}
