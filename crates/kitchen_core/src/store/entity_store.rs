//! Store contract shared by every domain.

use crate::model::record::{Record, RecordId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Semantic store failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Insert with an id that is already present.
    DuplicateId(RecordId),
    /// Lookup of an id that is not present.
    NotFound(RecordId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "record id already exists: {id}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Ordered, id-keyed collection of one record type.
pub trait EntityStore<T: Record> {
    /// Appends `record`, keeping insertion order.
    ///
    /// # Errors
    /// - `StoreError::DuplicateId` when `record.id()` is already stored; the
    ///   store is left unchanged.
    fn insert(&mut self, record: T) -> StoreResult<()>;

    /// Removes the record with `id` and returns it; `None` when absent.
    fn remove(&mut self, id: &RecordId) -> Option<T>;

    /// Snapshot of all records in insertion order.
    ///
    /// The returned vector is detached from later mutations.
    fn all(&self) -> Vec<T>;

    /// Returns a copy of the record with `id`.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no record has `id`.
    fn get(&self, id: &RecordId) -> StoreResult<T>;

    fn contains(&self, id: &RecordId) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
