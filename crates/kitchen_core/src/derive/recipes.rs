//! Recipe browsing and "use my ingredients" suggestions.

use crate::derive::expiry::ExpiryPolicy;
use crate::derive::filter::filter_by_category;
use crate::derive::search::search;
use crate::model::inventory::InventoryItem;
use crate::model::recipe::Recipe;
use chrono::NaiveDate;
use serde::Serialize;

/// Category filter followed by title/description search.
pub fn browse(snapshot: &[Recipe], category: &str, query: &str) -> Vec<Recipe> {
    search(&filter_by_category(snapshot, category), query)
}

/// First `limit` ingredients joined by `", "`, with `"..."` when truncated.
pub fn ingredient_preview(recipe: &Recipe, limit: usize) -> String {
    let mut preview = recipe
        .ingredients
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if recipe.ingredients.len() > limit {
        preview.push_str("...");
    }
    preview
}

/// Recipe ranked against what is currently on hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeSuggestion {
    pub recipe: Recipe,
    /// Recipe ingredients covered by a usable inventory item, in recipe order.
    pub matched: Vec<String>,
    /// Recipe ingredients with no usable inventory item, in recipe order.
    pub missing: Vec<String>,
}

/// Ranks recipes by how many ingredients are covered by usable inventory.
///
/// An item is usable when its quantity is non-zero and it has not expired as
/// of `reference_date`. Matching is case-insensitive substring in either
/// direction, so `"Tomato"` covers `"Tomatoes"`. Blank item names and blank
/// ingredients never match. Recipes with no match are omitted; ties keep
/// catalog order.
pub fn suggest_recipes(
    recipes: &[Recipe],
    inventory: &[InventoryItem],
    reference_date: NaiveDate,
    policy: ExpiryPolicy,
) -> Vec<RecipeSuggestion> {
    let on_hand: Vec<String> = inventory
        .iter()
        .filter(|item| item.quantity > 0)
        .filter(|item| policy.classify(item.expiry_date, reference_date).is_usable())
        .map(|item| item.name.trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .collect();

    let mut suggestions: Vec<RecipeSuggestion> = recipes
        .iter()
        .filter_map(|recipe| {
            let (matched, missing): (Vec<String>, Vec<String>) = recipe
                .ingredients
                .iter()
                .cloned()
                .partition(|ingredient| ingredient_covered(ingredient, &on_hand));
            if matched.is_empty() {
                return None;
            }
            Some(RecipeSuggestion {
                recipe: recipe.clone(),
                matched,
                missing,
            })
        })
        .collect();

    // Stable sort keeps catalog order among equal match counts.
    suggestions.sort_by(|left, right| right.matched.len().cmp(&left.matched.len()));
    suggestions
}

fn ingredient_covered(ingredient: &str, on_hand: &[String]) -> bool {
    let ingredient = ingredient.trim().to_lowercase();
    if ingredient.is_empty() {
        return false;
    }
    on_hand
        .iter()
        .any(|name| ingredient.contains(name.as_str()) || name.contains(ingredient.as_str()))
}
