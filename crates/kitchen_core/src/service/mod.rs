//! Mutation services and read facades per domain.
//!
//! # Responsibility
//! - Provide the only write path into entity stores.
//! - Assign ids, apply draft defaults and validation, then notify observers.
//!
//! # Invariants
//! - A failed add leaves the store unchanged and emits no notification.
//! - Delete is idempotent and always notifies.

pub mod collection_service;
pub mod id_policy;
pub mod inventory_service;
pub mod meal_plan_service;
pub mod recipe_catalog;
