//! # Coverage Calculator Module
//!
//! This module computes how much of a recipe ingredient's requirement
//! the matched inventory item can supply. The rules are deliberately
//! explicit — this is the part of the engine where silent bugs turn
//! into phantom 100% coverage or negative stock:
//!
//! - a zero or absent requirement reports **zero** coverage, never
//!   "fully satisfied";
//! - incompatible unit classes report zero coverage with a mismatch
//!   flag, no conversion is guessed;
//! - the usable amount is capped by both the requirement and what is
//!   available.

use crate::units;
use log::trace;
use serde::Serialize;

/// Result of one coverage computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coverage {
    /// Fraction of the requirement that can be supplied, in [0,1]
    pub ratio: f64,
    /// Amount actually consumable, in the required unit
    pub usable: f64,
    /// Units were present on both sides and not convertible
    pub unit_mismatch: bool,
}

impl Coverage {
    /// Zero coverage without a unit problem
    pub fn none() -> Self {
        Self {
            ratio: 0.0,
            usable: 0.0,
            unit_mismatch: false,
        }
    }

    /// Zero coverage caused by incompatible units
    pub fn mismatched() -> Self {
        Self {
            ratio: 0.0,
            usable: 0.0,
            unit_mismatch: true,
        }
    }
}

/// Compute coverage of a requirement from an available quantity.
///
/// `available_qty` is in `available_unit`; `required_qty` is in
/// `required_unit`. The available amount is converted into required
/// units when both tags are known and of the same class.
///
/// # Examples
///
/// ```rust
/// use pantry_planner::coverage::compute_coverage;
///
/// let cov = compute_coverage(1.5, 2.0, Some("kg"), Some("kg"));
/// assert_eq!(cov.ratio, 0.75);
/// assert_eq!(cov.usable, 1.5);
///
/// // A missing requirement never reads as satisfied.
/// let cov = compute_coverage(10.0, 0.0, Some("g"), Some("g"));
/// assert_eq!(cov.ratio, 0.0);
/// ```
pub fn compute_coverage(
    available_qty: f64,
    required_qty: f64,
    available_unit: Option<&str>,
    required_unit: Option<&str>,
) -> Coverage {
    if required_qty <= 0.0 {
        return Coverage::none();
    }

    let converted = match units::convert(available_qty, available_unit, required_unit) {
        Some(quantity) => quantity.max(0.0),
        None => {
            trace!(
                "Unit mismatch: {:?} vs {:?}",
                available_unit,
                required_unit
            );
            return Coverage::mismatched();
        }
    };

    Coverage {
        ratio: (converted / required_qty).min(1.0),
        usable: converted.min(required_qty),
        unit_mismatch: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_coverage() {
        let cov = compute_coverage(1.5, 2.0, Some("kg"), Some("kg"));
        assert_eq!(cov.ratio, 0.75);
        assert_eq!(cov.usable, 1.5);
        assert!(!cov.unit_mismatch);
    }

    #[test]
    fn test_full_coverage_caps_at_one() {
        let cov = compute_coverage(5.0, 2.0, Some("kg"), Some("kg"));
        assert_eq!(cov.ratio, 1.0);
        assert_eq!(cov.usable, 2.0);
    }

    #[test]
    fn test_zero_available() {
        let cov = compute_coverage(0.0, 2.0, Some("kg"), Some("kg"));
        assert_eq!(cov.ratio, 0.0);
        assert_eq!(cov.usable, 0.0);
    }

    #[test]
    fn test_zero_requirement_never_satisfied() {
        let cov = compute_coverage(10.0, 0.0, Some("g"), Some("g"));
        assert_eq!(cov.ratio, 0.0);
        assert_eq!(cov.usable, 0.0);
        assert!(!cov.unit_mismatch);

        let cov = compute_coverage(10.0, -1.0, None, None);
        assert_eq!(cov.ratio, 0.0);
    }

    #[test]
    fn test_in_class_conversion() {
        // 500 g available against 1 kg required -> half covered.
        let cov = compute_coverage(500.0, 1.0, Some("g"), Some("kg"));
        assert_eq!(cov.ratio, 0.5);
        assert_eq!(cov.usable, 0.5);
    }

    #[test]
    fn test_cross_class_flags_mismatch() {
        let cov = compute_coverage(1.0, 1.0, Some("kg"), Some("l"));
        assert_eq!(cov.ratio, 0.0);
        assert_eq!(cov.usable, 0.0);
        assert!(cov.unit_mismatch);
    }

    #[test]
    fn test_untagged_sides_compare_directly() {
        let cov = compute_coverage(3.0, 4.0, None, None);
        assert_eq!(cov.ratio, 0.75);

        let cov = compute_coverage(3.0, 4.0, Some("pieces"), None);
        assert_eq!(cov.ratio, 0.75);
    }
}
