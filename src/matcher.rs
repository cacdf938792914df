//! # Ingredient Matcher Module
//!
//! This module resolves a recipe's free-text ingredient name to
//! concrete inventory items, each with a confidence score. Matching is
//! a pure function over normalized strings with an explicit, ordered
//! confidence-tier policy:
//!
//! 1. exact normalized equality → 1.0
//! 2. contiguous substring either way → 0.8
//! 3. token-set similarity above the configured threshold → similarity
//!    scaled into (0, 0.8)
//! 4. a declared substitute name hit → 0.6
//!
//! Ties between equally-confident candidates are broken by category
//! hint, then soonest expiry (so near-expiry stock gets picked up by
//! the scorer's bonus), then item id for determinism.

use crate::category::Category;
use crate::config::MatcherConfig;
use crate::inventory::InventoryItem;
use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;

/// One candidate inventory item for an ingredient name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// Matched inventory item id
    pub item_id: i64,
    /// Match strength in [0,1]
    pub confidence: f64,
    /// The matched item's name, for display
    pub matched_name: String,
}

lazy_static! {
    // Embedded pack sizes ("500 g", "1kg") say nothing about what the
    // item is, so they are stripped before comparison.
    static ref PACK_SIZE: Regex = Regex::new(r"(?i)\b\d+\s*(g|gm|kg|ml|l|lt)\b")
        .expect("Pack-size pattern should be valid");
    static ref NON_ALNUM: Regex =
        Regex::new(r"[^a-z0-9\s]+").expect("Non-alphanumeric pattern should be valid");
    static ref WHITESPACE: Regex =
        Regex::new(r"\s+").expect("Whitespace pattern should be valid");
}

/// Normalize a name for comparison: case-fold, strip pack sizes and
/// punctuation, collapse whitespace.
///
/// # Examples
///
/// ```rust
/// use pantry_planner::matcher::normalize_name;
///
/// assert_eq!(normalize_name("Amul Butter 500g"), "amul butter");
/// assert_eq!(normalize_name("  Olive-Oil "), "olive oil");
/// ```
pub fn normalize_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    let without_pack = PACK_SIZE.replace_all(&lowered, " ");
    let alnum = NON_ALNUM.replace_all(&without_pack, " ");
    WHITESPACE.replace_all(&alnum, " ").trim().to_string()
}

/// Jaccard similarity between the token sets of two normalized names
fn token_set_similarity(a: &str, b: &str) -> f64 {
    let tokens_a: HashSet<&str> = a.split_whitespace().collect();
    let tokens_b: HashSet<&str> = b.split_whitespace().collect();
    let union = tokens_a.union(&tokens_b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = tokens_a.intersection(&tokens_b).count();
    intersection as f64 / union as f64
}

/// Confidence for one ingredient-name / item-name pair, highest tier
/// wins. Returns 0.0 below the fuzzy threshold.
fn pair_confidence(ingredient_norm: &str, item_norm: &str, config: &MatcherConfig) -> f64 {
    if ingredient_norm.is_empty() || item_norm.is_empty() {
        return 0.0;
    }
    if ingredient_norm == item_norm {
        return 1.0;
    }
    if ingredient_norm.contains(item_norm) || item_norm.contains(ingredient_norm) {
        return 0.8;
    }
    let similarity = token_set_similarity(ingredient_norm, item_norm);
    if similarity > config.fuzzy_threshold {
        return similarity * 0.8;
    }
    0.0
}

/// Resolve an ingredient name to candidate inventory items, best first.
///
/// Pure function of its inputs: no side effects, no hidden state. May
/// return an empty vector when nothing clears the confidence floor.
pub fn match_ingredient(
    ingredient_name: &str,
    substitutes: &[String],
    category_hint: Option<Category>,
    items: &[InventoryItem],
    config: &MatcherConfig,
) -> Vec<MatchResult> {
    let ingredient_norm = normalize_name(ingredient_name);
    let substitute_norms: Vec<String> = substitutes.iter().map(|s| normalize_name(s)).collect();

    let mut candidates: Vec<(&InventoryItem, f64)> = Vec::new();
    for item in items {
        let item_norm = normalize_name(&item.name);
        let mut confidence = pair_confidence(&ingredient_norm, &item_norm, config);

        // A declared substitute counts, but below any direct hit.
        if confidence < 0.6 && !item_norm.is_empty() {
            let substitute_hit = substitute_norms.iter().any(|sub| {
                !sub.is_empty()
                    && (sub == &item_norm || sub.contains(&item_norm) || item_norm.contains(sub))
            });
            if substitute_hit {
                confidence = 0.6;
            }
        }

        trace!(
            "Match '{}' vs '{}' -> {:.2}",
            ingredient_name,
            item.name,
            confidence
        );
        if confidence >= config.confidence_floor {
            candidates.push((item, confidence));
        }
    }

    candidates.sort_by(|(item_a, conf_a), (item_b, conf_b)| {
        conf_b
            .total_cmp(conf_a)
            .then_with(|| {
                let hinted = |item: &InventoryItem| match category_hint {
                    Some(hint) if item.category == hint => 0u8,
                    _ => 1u8,
                };
                hinted(item_a).cmp(&hinted(item_b))
            })
            .then_with(|| {
                // Soonest expiry first, undated stock last.
                let expiry_key =
                    |item: &InventoryItem| (item.expiry_date.is_none(), item.expiry_date);
                expiry_key(item_a).cmp(&expiry_key(item_b))
            })
            .then_with(|| item_a.id.cmp(&item_b.id))
    });

    debug!(
        "Matcher: '{}' -> {} candidate(s)",
        ingredient_name,
        candidates.len()
    );

    candidates
        .into_iter()
        .map(|(item, confidence)| MatchResult {
            item_id: item.id,
            confidence,
            matched_name: item.name.clone(),
        })
        .collect()
}
