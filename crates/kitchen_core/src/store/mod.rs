//! Entity store contracts and the in-memory implementation.
//!
//! # Responsibility
//! - Own the authoritative ordered collection of one domain's records.
//! - Keep storage details behind the `EntityStore` contract so a durable
//!   backend can replace the in-memory one without touching services.
//!
//! # Invariants
//! - Ids are unique within one store.
//! - Insertion order is preserved by `all()`.
//! - Removal of an absent id is a no-op, not an error.

pub mod entity_store;
pub mod memory;
