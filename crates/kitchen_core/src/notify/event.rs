//! Change events emitted by mutation services.

use crate::model::record::{Domain, RecordId};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Added,
    Removed,
}

/// Severity hint for user-facing toasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Success,
    Info,
}

/// One completed store mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeEvent {
    pub domain: Domain,
    pub kind: ChangeKind,
    pub id: RecordId,
    pub level: NotificationLevel,
    /// Short user-facing message.
    pub message: &'static str,
}

impl ChangeEvent {
    pub fn added(domain: Domain, id: RecordId) -> Self {
        Self {
            domain,
            kind: ChangeKind::Added,
            id,
            level: NotificationLevel::Success,
            message: added_message(domain),
        }
    }

    pub fn removed(domain: Domain, id: RecordId) -> Self {
        Self {
            domain,
            kind: ChangeKind::Removed,
            id,
            level: NotificationLevel::Info,
            message: removed_message(domain),
        }
    }
}

fn added_message(domain: Domain) -> &'static str {
    match domain {
        Domain::Inventory => "Item added to inventory!",
        Domain::MealPlan => "Meal added to plan!",
        Domain::Recipes => "Recipe added!",
    }
}

fn removed_message(domain: Domain) -> &'static str {
    match domain {
        Domain::Inventory => "Item removed from inventory",
        Domain::MealPlan => "Meal removed from plan",
        Domain::Recipes => "Recipe removed",
    }
}
