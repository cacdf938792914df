//! # Engine Configuration Module
//!
//! This module defines configuration structures for the planning engine,
//! including matcher thresholds, scoring weights, and meal plan
//! parameters. All values have documented defaults so callers can start
//! from `EngineConfig::default()` and override selectively.

// Constants for engine configuration
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.5;
pub const DEFAULT_CONFIDENCE_FLOOR: f64 = 0.5;
pub const DEFAULT_EXPIRY_HORIZON_DAYS: i64 = 3;
pub const DEFAULT_EXPIRING_BONUS_WEIGHT: f64 = 0.15;
pub const DEFAULT_ACCEPTANCE_THRESHOLD: f64 = 0.5;
pub const DEFAULT_TARGET_RECIPES: usize = 3;
pub const DEFAULT_CATEGORY_HINT_FLOOR: f64 = 0.7;

/// Thresholds for ingredient-name matching
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// Minimum token-set similarity for a fuzzy match to count
    pub fuzzy_threshold: f64,
    /// Minimum confidence for a match to be reported at all
    pub confidence_floor: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            confidence_floor: DEFAULT_CONFIDENCE_FLOOR,
        }
    }
}

/// Weights and horizons for recipe scoring
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Days ahead within which an item counts as expiring
    pub expiry_horizon_days: i64,
    /// Score added per matched ingredient that is expiring
    pub expiring_bonus_weight: f64,
    /// Optional upper clamp on the overall score. The bonus is additive
    /// and unclamped by default, so a single near-expiry ingredient can
    /// push a recipe above nominal coverage; set this to cap it.
    pub score_cap: Option<f64>,
    /// Minimum categorizer confidence before an ingredient name yields
    /// a category hint for the matcher
    pub category_hint_floor: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            expiry_horizon_days: DEFAULT_EXPIRY_HORIZON_DAYS,
            expiring_bonus_weight: DEFAULT_EXPIRING_BONUS_WEIGHT,
            score_cap: None,
            category_hint_floor: DEFAULT_CATEGORY_HINT_FLOOR,
        }
    }
}

/// Parameters for greedy meal planning
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Number of recipes a plan should contain
    pub target_recipes: usize,
    /// Minimum effective overall score for a candidate to be accepted
    pub acceptance_threshold: f64,
    /// Skip a candidate whose leading tag matches the previously
    /// accepted recipe's leading tag
    pub vary_main_tag: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            target_recipes: DEFAULT_TARGET_RECIPES,
            acceptance_threshold: DEFAULT_ACCEPTANCE_THRESHOLD,
            vary_main_tag: true,
        }
    }
}

/// Configuration structure for the whole engine
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Ingredient-name matching thresholds
    pub matcher: MatcherConfig,
    /// Scoring weights and horizons
    pub scoring: ScoringConfig,
    /// Meal planning parameters
    pub planner: PlannerConfig,
}
