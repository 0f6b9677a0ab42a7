//! CLI smoke entry point.
//!
//! # Responsibility
//! - Build the demo kitchen and print each derived view.
//! - Accept an optional `YYYY-MM-DD` reference date so output is reproducible.

use chrono::NaiveDate;
use kitchen_core::{
    ingredient_preview, Clock, FixedClock, Kitchen, KitchenSeed, SystemClock, ALL_CATEGORIES,
};
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    let clock: Arc<dyn Clock> = match std::env::args().nth(1) {
        Some(raw) => match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
            Ok(date) => Arc::new(FixedClock::on(date)),
            Err(_) => {
                eprintln!("expected reference date as YYYY-MM-DD, got `{raw}`");
                return ExitCode::FAILURE;
            }
        },
        None => Arc::new(SystemClock),
    };

    let kitchen = match Kitchen::builder()
        .clock(clock)
        .seed(KitchenSeed::demo())
        .build()
    {
        Ok(kitchen) => kitchen,
        Err(err) => {
            eprintln!("failed to build demo kitchen: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("kitchen_core version={}", kitchen_core::core_version());
    println!("reference date={}", kitchen.today());

    println!("\n[inventory]");
    for entry in kitchen.inventory.freshness("") {
        println!(
            "  {:<10} {:<11} qty={:<3} expires={} ({}, {} days)",
            entry.item.name,
            entry.item.category,
            entry.item.quantity,
            entry.item.expiry_date,
            entry.status.label(),
            entry.days_left
        );
    }
    let summary = kitchen.inventory.expiry_summary();
    println!(
        "  expired={} expiring_soon={} fresh={}",
        summary.expired, summary.expiring_soon, summary.fresh
    );

    println!("\n[recipes]");
    for recipe in kitchen.recipes.browse(ALL_CATEGORIES, "") {
        println!(
            "  {:<20} {:<9} {:<7} {}",
            recipe.title,
            recipe.category,
            recipe.difficulty.as_str(),
            ingredient_preview(&recipe, 3)
        );
    }

    println!("\n[suggestions]");
    for suggestion in kitchen.suggest_recipes() {
        println!(
            "  {:<20} have={} missing={}",
            suggestion.recipe.title,
            suggestion.matched.join(", "),
            suggestion.missing.len()
        );
    }

    println!("\n[meal plan]");
    for (day, meals) in kitchen.meal_plan.week() {
        if meals.is_empty() {
            println!("  {:<9} no meals planned", day.as_str());
            continue;
        }
        for meal in meals {
            println!(
                "  {:<9} {:<9} {}",
                day.as_str(),
                meal.meal_type.as_str(),
                meal.recipe
            );
        }
    }

    ExitCode::SUCCESS
}

