//! # Recipe Scorer Module
//!
//! This module aggregates per-ingredient match confidence and coverage
//! into one ranking score per recipe, with a bonus for recipes that
//! consume soon-to-expire stock.
//!
//! The aggregate is a confidence-weighted coverage mean over the
//! ingredients that actually require something: an unmatched required
//! ingredient contributes zero to the numerator but still counts in the
//! denominator, and garnish lines (no required quantity) stay out of
//! both. The expiring bonus is additive and unclamped by default so a
//! near-expiry ingredient can deliberately push a recipe above nominal
//! coverage; `ScoringConfig::score_cap` caps it where that is unwanted.

use crate::category::categorize;
use crate::config::EngineConfig;
use crate::coverage::{compute_coverage, Coverage};
use crate::inventory::InventoryItem;
use crate::matcher::{match_ingredient, MatchResult};
use crate::recipe::Recipe;
use crate::units;
use chrono::NaiveDate;
use log::debug;
use serde::Serialize;

/// How one recipe ingredient fared against the snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientBreakdown {
    /// Ingredient name as written in the recipe
    pub ingredient: String,
    /// Best inventory match, if any cleared the confidence floor
    pub matched: Option<MatchResult>,
    /// Coverage ratio in [0,1]
    pub coverage: f64,
    /// Amount consumable, in the ingredient's own unit
    pub usable: f64,
    /// Units were present on both sides and incompatible
    pub unit_mismatch: bool,
    /// The matched item expires within the configured horizon
    pub expiring: bool,
    /// The line carries a positive requirement
    pub required: bool,
}

/// Score of one recipe against an inventory snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeScore {
    /// Recipe title
    pub recipe_title: String,
    /// Ranking score: base + expiring bonus
    pub overall_score: f64,
    /// Confidence-weighted mean coverage over required ingredients
    pub base_score: f64,
    /// Additive bonus for expiring matched ingredients
    pub expiring_bonus: f64,
    /// Per-ingredient detail, in recipe order
    pub per_ingredient: Vec<IngredientBreakdown>,
    /// Required ingredients with no match or zero coverage
    pub missing: Vec<String>,
    /// Portions the pantry could plausibly supply
    pub estimated_portions: u32,
    /// Cooking time, carried through for ranking tie-breaks
    pub time_minutes: u32,
}

/// Score a single recipe against an inventory snapshot.
///
/// Pure: the same snapshot and date always produce the same score.
pub fn score_recipe(
    recipe: &Recipe,
    items: &[InventoryItem],
    today: NaiveDate,
    config: &EngineConfig,
) -> RecipeScore {
    let mut per_ingredient = Vec::with_capacity(recipe.ingredients.len());
    let mut missing = Vec::new();
    let mut weighted_sum = 0.0;
    let mut required_count = 0u32;
    let mut expiring_count = 0u32;
    let mut min_portions = f64::INFINITY;

    for ingredient in &recipe.ingredients {
        let required_qty = ingredient.required_quantity();

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
        let best = matches.into_iter().next();
        let backing = best
            .as_ref()
            .and_then(|m| items.iter().find(|item| item.id == m.item_id));

        let coverage = match (&best, backing, required_qty > 0.0) {
            (Some(_), Some(item), true) => compute_coverage(
                item.remaining_quantity,
                required_qty,
                item.unit.as_deref(),
                ingredient.unit.as_deref(),
            ),
            _ => Coverage::none(),
        };

        let expiring = backing
            .map(|item| item.expires_within(today, config.scoring.expiry_horizon_days))
            .unwrap_or(false);
        if best.is_some() && expiring {
            expiring_count += 1;
        }

        if required_qty > 0.0 {
            required_count += 1;
            match &best {
                Some(result) => {
                    weighted_sum += result.confidence * coverage.ratio;
                    if coverage.ratio == 0.0 {
                        missing.push(ingredient.name.clone());
                    }
                }
                None => missing.push(ingredient.name.clone()),
            }

            // Portions follow the scarcest required ingredient.
            if let Some(item) = backing {
                if let Some(available) = units::convert(
                    item.remaining_quantity,
                    item.unit.as_deref(),
                    ingredient.unit.as_deref(),
                ) {
                    min_portions = min_portions.min(available / required_qty);
                }
            }
        }

        per_ingredient.push(IngredientBreakdown {
            ingredient: ingredient.name.clone(),
            matched: best,
            coverage: coverage.ratio,
            usable: coverage.usable,
            unit_mismatch: coverage.unit_mismatch,
            expiring,
            required: required_qty > 0.0,
        });
    }

    let base_score = if required_count > 0 {
        weighted_sum / required_count as f64
    } else {
        0.0
    };
    let expiring_bonus = config.scoring.expiring_bonus_weight * expiring_count as f64;
    let mut overall_score = base_score + expiring_bonus;
    if let Some(cap) = config.scoring.score_cap {
        overall_score = overall_score.min(cap);
    }

    let estimated_portions = if min_portions.is_finite() {
        (min_portions.floor() as u32).max(1)
    } else {
        2
    };

    debug!(
        "Scored '{}': base={:.3} bonus={:.3} missing={}",
        recipe.title,
        base_score,
        expiring_bonus,
        missing.len()
    );

    RecipeScore {
        recipe_title: recipe.title.clone(),
        overall_score,
        base_score,
        expiring_bonus,
        per_ingredient,
        missing,
        estimated_portions,
        time_minutes: recipe.time_minutes,
    }
}

/// Score and rank a catalog against a snapshot, best first.
///
/// Ties on score go to the recipe with fewer missing ingredients, then
/// to the shorter cooking time.
pub fn rank_recipes(
    recipes: &[Recipe],
    items: &[InventoryItem],
    today: NaiveDate,
    config: &EngineConfig,
) -> Vec<RecipeScore> {
    let mut scored: Vec<RecipeScore> = recipes
        .iter()
        .map(|recipe| score_recipe(recipe, items, today, config))
        .collect();
    scored.sort_by(|a, b| {
        b.overall_score
            .total_cmp(&a.overall_score)
            .then_with(|| a.missing.len().cmp(&b.missing.len()))
            .then_with(|| a.time_minutes.cmp(&b.time_minutes))
    });
    scored
}
