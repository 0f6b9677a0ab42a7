//! Process-lifetime store backed by a vector.

use crate::model::record::{Record, RecordId};
use crate::store::entity_store::{EntityStore, StoreError, StoreResult};

/// In-memory `EntityStore`. State is lost when the process exits.
#[derive(Debug, Clone)]
pub struct MemoryStore<T: Record> {
    records: Vec<T>,
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> MemoryStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-populated with `records`, in order.
    ///
    /// # Errors
    /// - `StoreError::DuplicateId` on the first repeated id.
    pub fn with_records(records: impl IntoIterator<Item = T>) -> StoreResult<Self> {
        let mut store = Self::new();
        for record in records {
            store.insert(record)?;
        }
        Ok(store)
    }

    /// Borrowing view for derivations that do not need an owned snapshot.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    fn position(&self, id: &RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }
}

impl<T: Record> EntityStore<T> for MemoryStore<T> {
    fn insert(&mut self, record: T) -> StoreResult<()> {
        if self.contains(record.id()) {
            return Err(StoreError::DuplicateId(record.id().clone()));
        }
        self.records.push(record);
        Ok(())
    }

    fn remove(&mut self, id: &RecordId) -> Option<T> {
        let index = self.position(id)?;
        Some(self.records.remove(index))
    }

    fn all(&self) -> Vec<T> {
        self.records.clone()
    }

    fn get(&self, id: &RecordId) -> StoreResult<T> {
        self.records
            .iter()
            .find(|record| record.id() == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    fn contains(&self, id: &RecordId) -> bool {
        self.position(id).is_some()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
