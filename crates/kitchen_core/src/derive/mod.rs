//! Read-only projections over store snapshots.
//!
//! # Responsibility
//! - Compute search, filter, grouping and freshness views on demand.
//!
//! # Invariants
//! - Every function is pure: same snapshot and parameters, same output.
//! - Outputs preserve the snapshot's relative order unless documented otherwise.
//! - Derivations never fail on well-typed input.

pub mod expiry;
pub mod filter;
pub mod recipes;
pub mod schedule;
pub mod search;
