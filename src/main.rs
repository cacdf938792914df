use anyhow::Result;
use chrono::Local;
use log::info;
use std::env;
use std::path::Path;

use pantry_planner::recipe::{load_inventory_snapshot, load_recipe_catalog};
use pantry_planner::{plan_meals, rank_recipes, EngineConfig};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    info!("Starting Pantry Planner");

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Paths to the snapshot and catalog files
    let inventory_path = env::var("INVENTORY_PATH").unwrap_or_else(|_| "inventory.json".into());
    let recipes_path = env::var("RECIPES_PATH").unwrap_or_else(|_| "recipes.json".into());

    info!("Loading inventory from {inventory_path} and recipes from {recipes_path}");

    let items = load_inventory_snapshot(Path::new(&inventory_path))?;
    let recipes = load_recipe_catalog(Path::new(&recipes_path))?;

    let config = EngineConfig::default();
    let today = Local::now().date_naive();

    let suggestions = rank_recipes(&recipes, &items, today, &config);
    let plan = plan_meals(&recipes, &items, today, &config)?;

    let output = serde_json::json!({
        "suggestions": suggestions,
        "meal_plan": plan,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
