//! Domain model for inventory, recipe and meal-plan records.
//!
//! # Responsibility
//! - Define canonical record shapes owned by entity stores.
//! - Define partial drafts accepted from callers and their validation.
//!
//! # Invariants
//! - Every record is identified by a `RecordId` that never changes after creation.
//! - Records are replaced wholesale; there is no partial-field update path.

pub mod inventory;
pub mod meal;
pub mod recipe;
pub mod record;
pub mod validation;
