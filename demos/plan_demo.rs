//! # Meal Planning Walk-Through
//!
//! This file walks the full engine pipeline on a small in-memory
//! pantry: scoring, planning with the reservation ledger, and the
//! cook-time deduction.

use chrono::NaiveDate;
use pantry_planner::inventory::InventoryItem;
use pantry_planner::recipe::{Recipe, RecipeIngredient};
use pantry_planner::{cook_recipe, plan_meals, rank_recipes, EngineConfig};

fn main() {
    let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();

    let pantry = vec![
        InventoryItem::new(1, "tomato")
            .with_quantity(1.5)
            .with_unit("kg")
            .with_expiry(NaiveDate::from_ymd_opt(2025, 6, 12).unwrap()),
        InventoryItem::new(2, "onion").with_quantity(1.0).with_unit("kg"),
        InventoryItem::new(3, "basmati rice").with_quantity(2.0).with_unit("kg"),
        InventoryItem::new(4, "milk 500 ml")
            .with_quantity(0.5)
            .with_unit("l")
            .with_expiry(NaiveDate::from_ymd_opt(2025, 6, 11).unwrap()),
    ];

    let recipes = vec![
        Recipe::new("Tomato Rice")
            .with_ingredient(RecipeIngredient::new("tomato").with_quantity(0.5, "kg"))
            .with_ingredient(RecipeIngredient::new("rice").with_quantity(0.3, "kg"))
            .with_ingredient(RecipeIngredient::new("salt"))
            .with_tags(&["indian", "veg"])
            .with_time(30),
        Recipe::new("Onion Soup")
            .with_ingredient(RecipeIngredient::new("onion").with_quantity(0.7, "kg"))
            .with_tags(&["soup"])
            .with_time(40),
        Recipe::new("Milk Pudding")
            .with_ingredient(RecipeIngredient::new("milk").with_quantity(0.4, "l"))
            .with_tags(&["dessert"])
            .with_time(20),
    ];

    let config = EngineConfig::default();

    println!("Suggestions (best first):");
    for score in rank_recipes(&recipes, &pantry, today, &config) {
        println!(
            "  {} -> {:.2} (base {:.2}, expiring bonus {:.2}, missing: {:?})",
            score.recipe_title, score.overall_score, score.base_score, score.expiring_bonus,
            score.missing
        );
    }

    let plan = plan_meals(&recipes, &pantry, today, &config).expect("planning succeeds");
    println!("\nMeal plan:");
    for meal in &plan.meals {
        println!("  {} (effective {:.2})", meal.recipe_title, meal.effective_score);
        for reserved in &meal.reserved {
            println!(
                "    reserve {:.2} {} of {}",
                reserved.quantity,
                reserved.unit.as_deref().unwrap_or("units"),
                reserved.item_name
            );
        }
    }

    let cooked = cook_recipe(&recipes[0], &pantry, &config);
    println!("\nAfter cooking {}:", cooked.recipe_title);
    for used in &cooked.used {
        println!(
            "  {}: used {:.2}, {:.2} left",
            used.item_name, used.used, used.remaining_after
        );
    }
}
