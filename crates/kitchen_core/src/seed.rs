//! Demo records matching the starter kitchen shown on first launch.

use crate::model::inventory::InventoryItem;
use crate::model::meal::{MealEntry, MealType, Weekday};
use crate::model::recipe::{Difficulty, Recipe};
use crate::model::record::RecordId;
use chrono::NaiveDate;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn item(
    id: &str,
    name: &str,
    category: &str,
    quantity: u32,
    expiry: NaiveDate,
    added: NaiveDate,
) -> InventoryItem {
    InventoryItem {
        id: RecordId::from(id),
        name: name.to_string(),
        category: category.to_string(),
        quantity,
        expiry_date: expiry,
        added_date: added,
    }
}

pub fn demo_inventory() -> Vec<InventoryItem> {
    vec![
        item("1", "Avocado", "Fruits", 3, ymd(2024, 2, 15), ymd(2024, 1, 20)),
        item("2", "Tomato", "Vegetables", 5, ymd(2024, 2, 10), ymd(2024, 1, 22)),
        item("3", "Eggs", "Dairy", 12, ymd(2024, 2, 5), ymd(2024, 1, 25)),
    ]
}

fn recipe(
    id: &str,
    title: &str,
    description: &str,
    cook_time: &str,
    difficulty: Difficulty,
    ingredients: &[&str],
    category: &str,
) -> Recipe {
    Recipe {
        id: RecordId::from(id),
        title: title.to_string(),
        description: description.to_string(),
        cook_time: cook_time.to_string(),
        difficulty,
        ingredients: ingredients.iter().map(|value| value.to_string()).collect(),
        category: category.to_string(),
    }
}

pub fn demo_recipes() -> Vec<Recipe> {
    vec![
        recipe(
            "1",
            "Avocado Toast",
            "Creamy avocado on crispy toast with a sprinkle of chili flakes.",
            "10 mins",
            Difficulty::Easy,
            &["Avocado", "Bread", "Lemon", "Chili Flakes", "Salt"],
            "Breakfast",
        ),
        recipe(
            "2",
            "Tomato Pasta",
            "Fresh tomato sauce with herbs over al dente pasta.",
            "25 mins",
            Difficulty::Medium,
            &["Pasta", "Tomatoes", "Garlic", "Basil", "Olive Oil"],
            "Lunch",
        ),
        recipe(
            "3",
            "Vegetable Stir Fry",
            "Quick and healthy stir fry with fresh seasonal vegetables.",
            "15 mins",
            Difficulty::Easy,
            &["Mixed Vegetables", "Soy Sauce", "Ginger", "Garlic", "Sesame Oil"],
            "Dinner",
        ),
    ]
}

pub fn demo_meal_plan() -> Vec<MealEntry> {
    vec![
        MealEntry {
            id: RecordId::from("1"),
            day: Weekday::Monday,
            meal_type: MealType::Dinner,
            recipe: "Tomato Pasta".to_string(),
            notes: "Use fresh tomatoes from inventory".to_string(),
        },
        MealEntry {
            id: RecordId::from("2"),
            day: Weekday::Tuesday,
            meal_type: MealType::Lunch,
            recipe: "Avocado Toast".to_string(),
            notes: "Add chili flakes for spice".to_string(),
        },
    ]
}
