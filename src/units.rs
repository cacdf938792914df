//! # Measurement Units Module
//!
//! This module classifies the free-text unit tags carried by inventory
//! items and recipe ingredients, and converts quantities between units
//! of the same class (gram to kilogram, millilitre to litre, dozen to
//! pieces).
//!
//! Conversion across classes is deliberately unsupported: a mass
//! requirement against a volume stock is a mismatch to be flagged, not
//! guessed at.

use lazy_static::lazy_static;
use log::trace;
use std::collections::HashMap;

/// Broad class of a measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitClass {
    /// Weight units (g, kg, ...)
    Mass,
    /// Volume units (ml, l, ...)
    Volume,
    /// Count units (pieces, dozen, ...)
    Count,
    /// Unrecognized unit tag
    Unknown,
}

// Each known tag maps to its class and a scale factor into the class's
// canonical unit (grams, millilitres, pieces).
lazy_static! {
    static ref UNIT_TABLE: HashMap<&'static str, (UnitClass, f64)> = {
        let mut map = HashMap::new();

        // Mass, canonical unit: gram
        map.insert("mg", (UnitClass::Mass, 0.001));
        map.insert("g", (UnitClass::Mass, 1.0));
        map.insert("gm", (UnitClass::Mass, 1.0));
        map.insert("gram", (UnitClass::Mass, 1.0));
        map.insert("grams", (UnitClass::Mass, 1.0));
        map.insert("kg", (UnitClass::Mass, 1000.0));
        map.insert("kilogram", (UnitClass::Mass, 1000.0));
        map.insert("kilograms", (UnitClass::Mass, 1000.0));

        // Volume, canonical unit: millilitre
        map.insert("ml", (UnitClass::Volume, 1.0));
        map.insert("millilitre", (UnitClass::Volume, 1.0));
        map.insert("millilitres", (UnitClass::Volume, 1.0));
        map.insert("milliliter", (UnitClass::Volume, 1.0));
        map.insert("milliliters", (UnitClass::Volume, 1.0));
        map.insert("cl", (UnitClass::Volume, 10.0));
        map.insert("dl", (UnitClass::Volume, 100.0));
        map.insert("l", (UnitClass::Volume, 1000.0));
        map.insert("lt", (UnitClass::Volume, 1000.0));
        map.insert("litre", (UnitClass::Volume, 1000.0));
        map.insert("litres", (UnitClass::Volume, 1000.0));
        map.insert("liter", (UnitClass::Volume, 1000.0));
        map.insert("liters", (UnitClass::Volume, 1000.0));

        // Count, canonical unit: piece
        map.insert("pc", (UnitClass::Count, 1.0));
        map.insert("pcs", (UnitClass::Count, 1.0));
        map.insert("piece", (UnitClass::Count, 1.0));
        map.insert("pieces", (UnitClass::Count, 1.0));
        map.insert("unit", (UnitClass::Count, 1.0));
        map.insert("units", (UnitClass::Count, 1.0));
        map.insert("dozen", (UnitClass::Count, 12.0));

        map
    };
}

/// Normalize a unit tag for lookup: lowercase and trimmed
pub fn normalize_unit(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// Classify a unit tag
pub fn unit_class(tag: &str) -> UnitClass {
    UNIT_TABLE
        .get(normalize_unit(tag).as_str())
        .map(|(class, _)| *class)
        .unwrap_or(UnitClass::Unknown)
}

/// Convert a quantity between two optional unit tags.
///
/// Returns `None` when the units are of different classes or either tag
/// is unrecognized and the tags differ. A missing tag on either side is
/// treated as "same unit as the other side" (the catalog and the pantry
/// both leave units off for piece-counted items).
///
/// # Examples
///
/// ```rust
/// use pantry_planner::units::convert;
///
/// assert_eq!(convert(1.5, Some("kg"), Some("g")), Some(1500.0));
/// assert_eq!(convert(2.0, None, Some("kg")), Some(2.0));
/// assert_eq!(convert(1.0, Some("kg"), Some("l")), None);
/// ```
pub fn convert(quantity: f64, from: Option<&str>, to: Option<&str>) -> Option<f64> {
    let (from, to) = match (from, to) {
        (Some(f), Some(t)) => (normalize_unit(f), normalize_unit(t)),
        // One or both sides untagged: nothing to convert between.
        _ => return Some(quantity),
    };

    if from == to {
        return Some(quantity);
    }

    match (UNIT_TABLE.get(from.as_str()), UNIT_TABLE.get(to.as_str())) {
        (Some((from_class, from_factor)), Some((to_class, to_factor)))
            if from_class == to_class =>
        {
            let converted = quantity * from_factor / to_factor;
            trace!("Converted {quantity} {from} -> {converted} {to}");
            Some(converted)
        }
        _ => None,
    }
}
