//! # Cook Executor Module
//!
//! This module computes the inventory deduction applied when a recipe
//! is actually prepared. The one rule that matters: the deduction is
//! always `min(required, available)`, never the raw requirement —
//! deducting a full requirement when only part was on hand is how
//! pantries end up with negative stock.
//!
//! The executor only computes deltas; the storage collaborator applies
//! them, atomically per item, so two concurrent cooks cannot both
//! deduct from the same pre-cook quantity.

use crate::category::categorize;
use crate::config::EngineConfig;
use crate::errors::EngineError;
use crate::inventory::InventoryItem;
use crate::matcher::match_ingredient;
use crate::recipe::Recipe;
use crate::units;
use log::{debug, info};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// One ingredient deduction that a cook performed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsedIngredient {
    /// Ingredient name as written in the recipe
    pub ingredient: String,
    /// Inventory item the amount came from
    pub item_id: i64,
    /// Item name, for display
    pub item_name: String,
    /// Requirement converted into the item's unit
    pub required: f64,
    /// Amount actually deducted, capped by availability
    pub used: f64,
    /// The item's unit tag
    pub unit: Option<String>,
    /// Quantity left on the item after this deduction
    pub remaining_after: f64,
}

/// Outcome of cooking one recipe against a snapshot
#[derive(Debug, Clone, Serialize)]
pub struct CookResult {
    /// Recipe that was cooked
    pub recipe_title: String,
    /// New remaining quantity per touched item, to be persisted
    /// atomically by the caller
    pub deltas: BTreeMap<i64, f64>,
    /// Per-ingredient deduction detail
    pub used: Vec<UsedIngredient>,
    /// Ingredients that could not be (fully) supplied: no match, unit
    /// mismatch, or empty stock
    pub shortfalls: Vec<String>,
}

/// Compute the deduction deltas for cooking one recipe.
///
/// The snapshot is not mutated; `deltas` maps each touched item id to
/// its new remaining quantity. Ingredients without a positive
/// requirement are skipped entirely. Unmatched or unit-mismatched
/// ingredients are reported as shortfalls and deduct nothing.
pub fn cook_recipe(recipe: &Recipe, items: &[InventoryItem], config: &EngineConfig) -> CookResult {
    let mut deltas: BTreeMap<i64, f64> = BTreeMap::new();
    let mut used: Vec<UsedIngredient> = Vec::new();
    let mut shortfalls: Vec<String> = Vec::new();
    // Running quantities while this cook walks the ingredient list, so
    // two lines drawing on one item cannot both see the full stock.
    let mut current: HashMap<i64, f64> = HashMap::new();

    for ingredient in &recipe.ingredients {
        let required_qty = ingredient.required_quantity();
        if required_qty <= 0.0 {
            continue;
        }

        let hint = {
            let (category, confidence) = categorize(&ingredient.name);
            (confidence >= config.scoring.category_hint_floor).then_some(category)
        };
        let matches = match_ingredient(
            &ingredient.name,
            &ingredient.substitutes,
            hint,
            items,
            &config.matcher,
        );
        let item = match matches
            .first()
            .and_then(|m| items.iter().find(|item| item.id == m.item_id))
        {
            Some(item) => item,
            None => {
                shortfalls.push(ingredient.name.clone());
                continue;
            }
        };

        let required_in_item_units =
            match units::convert(required_qty, ingredient.unit.as_deref(), item.unit.as_deref()) {
                Some(quantity) => quantity,
                None => {
                    debug!(
                        "Unit mismatch cooking '{}': {:?} vs {:?}",
                        ingredient.name, ingredient.unit, item.unit
                    );
                    shortfalls.push(ingredient.name.clone());
                    continue;
                }
            };

        let previous = current
            .get(&item.id)
            .copied()
            .unwrap_or(item.remaining_quantity);
        let actual_used = required_in_item_units.min(previous);
        if actual_used <= 0.0 {
            shortfalls.push(ingredient.name.clone());
            continue;
        }
        let new_remaining = (previous - actual_used).max(0.0);

        current.insert(item.id, new_remaining);
        deltas.insert(item.id, new_remaining);
        used.push(UsedIngredient {
            ingredient: ingredient.name.clone(),
            item_id: item.id,
            item_name: item.name.clone(),
            required: required_in_item_units,
            used: actual_used,
            unit: item.unit.clone(),
            remaining_after: new_remaining,
        });
    }

    info!(
        "Cooked '{}': {} item(s) deducted, {} shortfall(s)",
        recipe.title,
        used.len(),
        shortfalls.len()
    );

    CookResult {
        recipe_title: recipe.title.clone(),
        deltas,
        used,
        shortfalls,
    }
}

/// Cook a recipe identified by catalog title.
pub fn cook_by_title(
    title: &str,
    recipes: &[Recipe],
    items: &[InventoryItem],
    config: &EngineConfig,
) -> Result<CookResult, EngineError> {
    let recipe = recipes
        .iter()
        .find(|recipe| recipe.title == title)
        .ok_or_else(|| EngineError::UnknownRecipe(title.to_string()))?;
    Ok(cook_recipe(recipe, items, config))
}
