//! Change notification for display layers.
//!
//! # Responsibility
//! - Fan out store change events to registered observers synchronously.
//!
//! # Invariants
//! - Observers run in registration order.
//! - A panicking observer never prevents the remaining observers from running.
//! - Past events are not replayed to new observers.

pub mod event;
pub mod notifier;
