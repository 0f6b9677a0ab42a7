//! Field validation for caller-supplied drafts.
//!
//! # Invariants
//! - Text fields are whitespace-collapsed before emptiness checks.
//! - Validation never mutates a store; it only builds or rejects a record.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Draft rejected because a field violates its invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field absent or blank after normalization.
    MissingField(&'static str),
    /// Inventory quantity below zero.
    NegativeQuantity(i64),
    /// Inventory quantity too large for storage.
    QuantityOutOfRange(i64),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field `{field}` is missing or blank"),
            Self::NegativeQuantity(value) => {
                write!(f, "quantity must be >= 0, got {value}")
            }
            Self::QuantityOutOfRange(value) => {
                write!(f, "quantity {value} exceeds supported maximum {}", u32::MAX)
            }
        }
    }
}

impl Error for ValidationError {}

/// Trims and collapses internal whitespace runs to a single space.
pub fn normalize_text(value: &str) -> String {
    WHITESPACE_RE.replace_all(value.trim(), " ").into_owned()
}

/// Normalizes a required text field, rejecting blank input.
pub(crate) fn require_text(
    value: Option<String>,
    field: &'static str,
) -> Result<String, ValidationError> {
    let normalized = value.as_deref().map(normalize_text).unwrap_or_default();
    if normalized.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(normalized)
}
