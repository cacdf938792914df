//! # Engine Error Types Module
//!
//! This module defines the error types raised by the planning engine.
//! Per-ingredient problems (missing quantities, unmatched names, unit
//! mismatches) are reported as structured data inside score and plan
//! outputs, never as errors; only internal invariant violations fail a
//! call.

/// Errors surfaced by planning and cooking calls
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A reservation would exceed what the inventory snapshot holds for
    /// an item. The planner computes usable amounts against reduced
    /// availability, so this can only happen through an accounting bug
    /// and is never silently clamped.
    OverReservation {
        /// Inventory item the ledger tried to over-commit
        item_id: i64,
        /// Amount the ledger would hold after the reservation
        requested: f64,
        /// Amount the snapshot holds for the item
        available: f64,
    },
    /// A recipe title was requested that the catalog does not contain
    UnknownRecipe(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::OverReservation {
                item_id,
                requested,
                available,
            } => write!(
                f,
                "Over-reservation on item {item_id}: requested {requested}, available {available}"
            ),
            EngineError::UnknownRecipe(title) => write!(f, "Unknown recipe: {title}"),
        }
    }
}

impl std::error::Error for EngineError {}
