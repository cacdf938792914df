//! # Meal Planner Module
//!
//! This module selects recipes for a multi-day plan with a greedy pass
//! over the ranked candidates, tracking every intended deduction in a
//! per-session reservation ledger so that two recipes can never both
//! claim the same units of an item.
//!
//! The ledger is the only mutable state in the engine. It is created
//! fresh per planning session, lives in session scope only, and is
//! handed back to the caller on success — to be persisted as intended
//! deductions if the plan is confirmed, or dropped if it is abandoned.
//! Planning never mutates the inventory snapshot.

use crate::config::EngineConfig;
use crate::coverage::compute_coverage;
use crate::errors::EngineError;
use crate::inventory::InventoryItem;
use crate::matcher::match_ingredient;
use crate::recipe::Recipe;
use crate::scorer::rank_recipes;
use crate::units;
use crate::category::categorize;
use chrono::NaiveDate;
use log::{debug, info, warn};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

// Tolerance for accumulated float error when summing reservations.
const RESERVE_EPSILON: f64 = 1e-9;

/// Per-session record of how much of each item is already committed
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReservationLedger {
    reserved: BTreeMap<i64, f64>,
}

impl ReservationLedger {
    /// Start an empty ledger for a new planning session
    pub fn new() -> Self {
        Self::default()
    }

    /// Amount already reserved for an item
    pub fn reserved_for(&self, item_id: i64) -> f64 {
        self.reserved.get(&item_id).copied().unwrap_or(0.0)
    }

    /// Snapshot quantity minus what this session has reserved, floored
    /// at zero
    pub fn available_for(&self, item: &InventoryItem) -> f64 {
        (item.remaining_quantity - self.reserved_for(item.id)).max(0.0)
    }

    /// Commit a reservation, in the item's own unit.
    ///
    /// Exceeding the snapshot amount is an accounting bug in the
    /// caller, not a recoverable condition: the error is surfaced hard
    /// and nothing is clamped.
    pub fn reserve(&mut self, item: &InventoryItem, amount: f64) -> Result<(), EngineError> {
        if amount <= 0.0 {
            return Ok(());
        }
        let total = self.reserved_for(item.id) + amount;
        if total > item.remaining_quantity + RESERVE_EPSILON {
            return Err(EngineError::OverReservation {
                item_id: item.id,
                requested: total,
                available: item.remaining_quantity,
            });
        }
        self.reserved.insert(item.id, total);
        Ok(())
    }

    /// Iterate over (item_id, reserved_amount)
    pub fn iter(&self) -> impl Iterator<Item = (&i64, &f64)> {
        self.reserved.iter()
    }

    /// Whether anything has been reserved
    pub fn is_empty(&self) -> bool {
        self.reserved.is_empty()
    }
}

/// One ingredient amount a planned meal holds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReservedAmount {
    /// Inventory item the amount is held against
    pub item_id: i64,
    /// Item name, for display
    pub item_name: String,
    /// Reserved quantity, in the item's own unit
    pub quantity: f64,
    /// The item's unit tag
    pub unit: Option<String>,
}

/// One accepted recipe with its reservations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedMeal {
    /// Recipe title
    pub recipe_title: String,
    /// Score recomputed against post-reservation availability
    pub effective_score: f64,
    /// Amounts committed into the ledger for this meal
    pub reserved: Vec<ReservedAmount>,
}

/// Output of one planning session
#[derive(Debug, Clone, Serialize)]
pub struct MealPlan {
    /// Accepted recipes in acceptance order
    pub meals: Vec<PlannedMeal>,
    /// The session ledger: intended deductions per item
    pub ledger: ReservationLedger,
}

/// Build a meal plan from a catalog and an inventory snapshot.
///
/// Candidates are visited in ranked order. Each is re-evaluated against
/// availability *reduced by earlier reservations* and accepted only if
/// its effective score clears the acceptance threshold and the
/// diversity rules allow it. Accepted amounts are committed into the
/// ledger.
///
/// Ingredients without a positive requirement are never reserved and
/// never block acceptance.
pub fn plan_meals(
    recipes: &[Recipe],
    items: &[InventoryItem],
    today: NaiveDate,
    config: &EngineConfig,
) -> Result<MealPlan, EngineError> {
    let ranked = rank_recipes(recipes, items, today, config);
    let mut ledger = ReservationLedger::new();
    let mut meals: Vec<PlannedMeal> = Vec::new();
    let mut used_titles: HashSet<&str> = HashSet::new();
    let mut last_main_tag: Option<String> = None;

    info!(
        "Planning {} meal(s) from {} candidate(s)",
        config.planner.target_recipes,
        ranked.len()
    );

    for candidate in &ranked {
        if meals.len() >= config.planner.target_recipes {
            break;
        }
        let recipe = match recipes.iter().find(|r| r.title == candidate.recipe_title) {
            Some(recipe) => recipe,
            None => continue,
        };
        if !used_titles.insert(recipe.title.as_str()) {
            debug!("Skipping duplicate title '{}'", recipe.title);
            continue;
        }
        if config.planner.vary_main_tag {
            if let (Some(last), Some(main)) = (last_main_tag.as_deref(), recipe.main_tag()) {
                if last == main {
                    debug!(
                        "Skipping '{}' for tag variety (repeated '{}')",
                        recipe.title, main
                    );
                    continue;
                }
            }
        }

        let evaluation = evaluate_candidate(recipe, items, today, config, &ledger);
        if evaluation.effective_score >= config.planner.acceptance_threshold {
            for reservation in &evaluation.reservations {
                if let Some(item) = items.iter().find(|item| item.id == reservation.item_id) {
                    ledger.reserve(item, reservation.quantity)?;
                }
            }
            debug!(
                "Accepted '{}' at effective score {:.3} ({} reservation(s))",
                recipe.title,
                evaluation.effective_score,
                evaluation.reservations.len()
            );
            last_main_tag = recipe.main_tag().map(|t| t.to_string());
            meals.push(PlannedMeal {
                recipe_title: recipe.title.clone(),
                effective_score: evaluation.effective_score,
                reserved: evaluation.reservations,
            });
        } else {
            debug!(
                "Rejected '{}': effective score {:.3} below threshold",
                recipe.title, evaluation.effective_score
            );
        }
    }

    if meals.len() < config.planner.target_recipes {
        info!(
            "Plan closed with {}/{} meal(s); candidates exhausted",
            meals.len(),
            config.planner.target_recipes
        );
    }
    Ok(MealPlan { meals, ledger })
}

struct CandidateEvaluation {
    effective_score: f64,
    reservations: Vec<ReservedAmount>,
}

/// Re-score one candidate against availability reduced by the ledger
/// and by this candidate's own earlier ingredient lines.
fn evaluate_candidate(
    recipe: &Recipe,
    items: &[InventoryItem],
    today: NaiveDate,
    config: &EngineConfig,
    ledger: &ReservationLedger,
) -> CandidateEvaluation {
    let mut weighted_sum = 0.0;
    let mut required_count = 0u32;
    let mut expiring_count = 0u32;
    let mut reservations: Vec<ReservedAmount> = Vec::new();
    // Two lines of the same recipe may resolve to the same item; the
    // second must see the first one's claim.
    let mut pending: HashMap<i64, f64> = HashMap::new();

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

        if let Some(item) = backing {
            if item.expires_within(today, config.scoring.expiry_horizon_days) {
                expiring_count += 1;
            }
        }

        if required_qty <= 0.0 {
            continue;
        }
        required_count += 1;

        let (result, item) = match (best, backing) {
            (Some(result), Some(item)) => (result, item),
            _ => continue,
        };

        let effective_available = (ledger.available_for(item)
            - pending.get(&item.id).copied().unwrap_or(0.0))
        .max(0.0);
        let coverage = compute_coverage(
            effective_available,
            required_qty,
            item.unit.as_deref(),
            ingredient.unit.as_deref(),
        );
        weighted_sum += result.confidence * coverage.ratio;

        if coverage.usable > 0.0 {
            // The ledger holds amounts in the item's unit; convert the
            // usable amount (required units) back.
            match units::convert(
                coverage.usable,
                ingredient.unit.as_deref(),
                item.unit.as_deref(),
            ) {
                Some(in_item_units) => {
                    *pending.entry(item.id).or_insert(0.0) += in_item_units;
                    reservations.push(ReservedAmount {
                        item_id: item.id,
                        item_name: item.name.clone(),
                        quantity: in_item_units,
                        unit: item.unit.clone(),
                    });
                }
                None => {
                    // compute_coverage only yields usable > 0 for
                    // convertible unit pairs, so this cannot happen.
                    warn!(
                        "Unconvertible usable amount for '{}' on item {}",
                        ingredient.name, item.id
                    );
                }
            }
        }
    }

    let base = if required_count > 0 {
        weighted_sum / required_count as f64
    } else {
        0.0
    };
    let bonus = config.scoring.expiring_bonus_weight * expiring_count as f64;
    let mut effective_score = base + bonus;
    if let Some(cap) = config.scoring.score_cap {
        effective_score = effective_score.min(cap);
    }

    CandidateEvaluation {
        effective_score,
        reservations,
    }
}
