//! Inventory use-case service.
//!
//! # Invariants
//! - Freshness views use the injected clock's date, never wall-clock time directly.

use crate::derive::expiry::{annotate, expiry_summary, ExpiryPolicy, ExpirySummary, ItemFreshness};
use crate::derive::filter::{categories, filter_by_category};
use crate::derive::search::search;
use crate::model::inventory::{InventoryItem, ItemDraft};
use crate::model::record::RecordId;
use crate::notify::event::ChangeEvent;
use crate::notify::notifier::SubscriptionId;
use crate::service::collection_service::{CollectionService, ServiceContext, ServiceResult};
use crate::service::id_policy::IdGenerator;
use crate::store::entity_store::StoreResult;
use crate::store::memory::MemoryStore;

pub struct InventoryService {
    inner: CollectionService<InventoryItem>,
}

impl InventoryService {
    pub fn new(
        store: MemoryStore<InventoryItem>,
        ids: Box<dyn IdGenerator>,
        ctx: ServiceContext,
    ) -> Self {
        Self {
            inner: CollectionService::new(store, ids, ctx),
        }
    }

    /// Adds one item from a partial draft.
    ///
    /// # Errors
    /// - `ServiceError::Validation` for blank names or out-of-range quantities.
    pub fn add_item(&mut self, draft: ItemDraft) -> ServiceResult<InventoryItem> {
        self.inner.add(draft)
    }

    /// Removes one item; absent ids are a silent no-op.
    pub fn delete_item(&mut self, id: &RecordId) -> bool {
        self.inner.delete(id)
    }

    pub fn all(&self) -> Vec<InventoryItem> {
        self.inner.all()
    }

    pub fn get(&self, id: &RecordId) -> StoreResult<InventoryItem> {
        self.inner.get(id)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Name/category search.
    pub fn search(&self, query: &str) -> Vec<InventoryItem> {
        search(self.inner.store().records(), query)
    }

    pub fn filter_by_category(&self, category: &str) -> Vec<InventoryItem> {
        filter_by_category(self.inner.store().records(), category)
    }

    pub fn categories(&self) -> Vec<String> {
        categories(self.inner.store().records())
    }

    /// Items matching `query`, each with its status as of today.
    pub fn freshness(&self, query: &str) -> Vec<ItemFreshness> {
        annotate(&self.search(query), self.today(), self.policy())
    }

    pub fn expiry_summary(&self) -> ExpirySummary {
        expiry_summary(self.inner.store().records(), self.today(), self.policy())
    }

    pub fn policy(&self) -> ExpiryPolicy {
        ExpiryPolicy::from(self.inner.context().config.as_ref())
    }

    pub fn subscribe(&mut self, callback: impl Fn(&ChangeEvent) + 'static) -> SubscriptionId {
        self.inner.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe(id)
    }

    pub(crate) fn records(&self) -> &[InventoryItem] {
        self.inner.store().records()
    }

    fn today(&self) -> chrono::NaiveDate {
        self.inner.context().clock.today()
    }
}
