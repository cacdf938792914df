//! # Recipe Model Module
//!
//! This module defines recipes and their ingredient lines as supplied
//! by the catalog collaborator, plus a JSON catalog loader.
//!
//! Ingredient quantities are optional by construction: a catalog line
//! like `{"name": "salt"}` is valid, parses to a `None` quantity, and
//! must flow through scoring and planning without ever being read as a
//! required amount. The `required_quantity` accessor collapses absent
//! and zero to `0.0` so downstream code has a single guard to apply.

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// One ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Free-text ingredient name (e.g. "tomato", "olive oil")
    pub name: String,

    /// Required amount in `unit`. Catalogs may omit this entirely
    /// ("salt", "to taste"); such lines never block planning.
    #[serde(default, alias = "qty")]
    pub quantity: Option<f64>,

    /// Unit tag for `quantity`
    #[serde(default)]
    pub unit: Option<String>,

    /// Acceptable substitute names, matched at reduced confidence
    #[serde(default, alias = "sub")]
    pub substitutes: Vec<String>,
}

/// Cooking difficulty of a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

/// A recipe from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Title, unique within a catalog
    pub title: String,

    /// Ordered ingredient lines
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,

    /// Diet/cuisine tags; the first tag is the recipe's main tag for
    /// variety rules
    #[serde(default)]
    pub tags: Vec<String>,

    /// Cooking difficulty
    #[serde(default)]
    pub difficulty: Difficulty,

    /// Active cooking time
    #[serde(default, alias = "time_min")]
    pub time_minutes: u32,
}

impl RecipeIngredient {
    /// Create an ingredient line with just a name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity: None,
            unit: None,
            substitutes: Vec::new(),
        }
    }

    /// Set the required quantity and unit
    pub fn with_quantity(mut self, quantity: f64, unit: &str) -> Self {
        self.quantity = Some(quantity);
        self.unit = Some(unit.to_string());
        self
    }

    /// Set the required quantity without a unit
    pub fn with_bare_quantity(mut self, quantity: f64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Add a substitute name
    pub fn with_substitute(mut self, substitute: &str) -> Self {
        self.substitutes.push(substitute.to_string());
        self
    }

    /// The required amount with absent collapsed to zero. Negative
    /// catalog values are also treated as zero.
    pub fn required_quantity(&self) -> f64 {
        match self.quantity {
            Some(quantity) if quantity > 0.0 => quantity,
            _ => 0.0,
        }
    }

    /// Whether this line carries a positive requirement at all.
    /// Lines without one are optional garnish: never reserved, never
    /// counted against coverage.
    pub fn is_required(&self) -> bool {
        self.required_quantity() > 0.0
    }
}

impl Recipe {
    /// Create an empty recipe with a title
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ingredients: Vec::new(),
            tags: Vec::new(),
            difficulty: Difficulty::default(),
            time_minutes: 0,
        }
    }

    /// Append an ingredient line
    pub fn with_ingredient(mut self, ingredient: RecipeIngredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Set the tags
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Set the cooking time
    pub fn with_time(mut self, minutes: u32) -> Self {
        self.time_minutes = minutes;
        self
    }

    /// First tag, used by the planner's variety rule
    pub fn main_tag(&self) -> Option<&str> {
        self.tags.first().map(|t| t.as_str())
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} ingredients, {} min)",
            self.title,
            self.ingredients.len(),
            self.time_minutes
        )
    }
}

/// Load a recipe catalog from a JSON file.
///
/// Accepts the legacy catalog spellings (`qty`, `sub`, `time_min`)
/// alongside the canonical field names. Duplicate titles are kept but
/// logged, since the planner deduplicates by title anyway.
pub fn load_recipe_catalog(path: &Path) -> Result<Vec<Recipe>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read recipe catalog at {}", path.display()))?;
    let recipes: Vec<Recipe> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse recipe catalog at {}", path.display()))?;

    let mut seen = std::collections::HashSet::new();
    for recipe in &recipes {
        if !seen.insert(recipe.title.as_str()) {
            warn!("Duplicate recipe title in catalog: {}", recipe.title);
        }
    }

    info!("Loaded {} recipes from {}", recipes.len(), path.display());
    Ok(recipes)
}

/// Load an inventory snapshot from a JSON file.
///
/// Production callers hand the engine a snapshot straight from their
/// store; this loader backs the demo binary and file-based tests.
pub fn load_inventory_snapshot(path: &Path) -> Result<Vec<crate::inventory::InventoryItem>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read inventory snapshot at {}", path.display()))?;
    let items: Vec<crate::inventory::InventoryItem> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse inventory snapshot at {}", path.display()))?;
    info!("Loaded {} inventory items from {}", items.len(), path.display());
    Ok(items)
}
