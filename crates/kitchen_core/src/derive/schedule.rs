//! Per-day views over the weekly meal plan.

use crate::model::meal::{MealEntry, MealType, Weekday};
use std::collections::BTreeMap;

/// Groups entries by day for every value in `days`.
///
/// Every requested day is present as a key, mapped to an empty vector when
/// nothing is planned. Entries keep insertion order within a day. Map
/// iteration follows calendar order.
pub fn group_by_day(
    snapshot: &[MealEntry],
    days: &[Weekday],
) -> BTreeMap<Weekday, Vec<MealEntry>> {
    let mut groups: BTreeMap<Weekday, Vec<MealEntry>> =
        days.iter().map(|day| (*day, Vec::new())).collect();
    for entry in snapshot {
        if let Some(group) = groups.get_mut(&entry.day) {
            group.push(entry.clone());
        }
    }
    groups
}

/// Entries planned for `day`, in insertion order.
pub fn meals_for_day(snapshot: &[MealEntry], day: Weekday) -> Vec<MealEntry> {
    snapshot
        .iter()
        .filter(|entry| entry.day == day)
        .cloned()
        .collect()
}

/// Entries in one `(day, meal_type)` slot; a slot may hold several dishes.
pub fn meals_for_slot(
    snapshot: &[MealEntry],
    day: Weekday,
    meal_type: MealType,
) -> Vec<MealEntry> {
    snapshot
        .iter()
        .filter(|entry| entry.day == day && entry.meal_type == meal_type)
        .cloned()
        .collect()
}
