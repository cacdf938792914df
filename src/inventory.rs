//! # Inventory Model Module
//!
//! This module defines the pantry snapshot the engine computes over:
//! inventory items with remaining quantities, unit tags, and expiry
//! dates, plus expiry-status helpers used by the scorer's expiring
//! bonus and the matcher's tie-breaks.
//!
//! Items are created, mutated, and destroyed entirely outside the
//! engine. A snapshot is immutable input for one planning session; the
//! engine only ever emits quantity deltas for the caller to commit.

use crate::category::Category;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One pantry item as supplied by the persistence collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Unique item id
    pub id: i64,

    /// Free-text item name (e.g. "Amul Butter 500g", "tomatoes")
    pub name: String,

    /// Grocery category of the item
    #[serde(default)]
    pub category: Category,

    /// Quantity still on hand, in `unit`. Never negative.
    pub remaining_quantity: f64,

    /// Unit tag for `remaining_quantity` (e.g. "kg", "ml", "pieces")
    #[serde(default)]
    pub unit: Option<String>,

    /// Best-before date, when known
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
}

/// Freshness of an item relative to a reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryStatus {
    /// Past its expiry date
    Expired,
    /// Expires within the configured horizon
    Soon,
    /// Expiry comfortably ahead
    Fresh,
    /// No expiry date recorded
    Unknown,
}

impl fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExpiryStatus::Expired => "expired",
            ExpiryStatus::Soon => "soon",
            ExpiryStatus::Fresh => "fresh",
            ExpiryStatus::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

/// Compute the freshness status and days-left of an expiry date.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use pantry_planner::inventory::{expiry_status, ExpiryStatus};
///
/// let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
/// let expiry = NaiveDate::from_ymd_opt(2025, 6, 12).unwrap();
/// assert_eq!(expiry_status(Some(expiry), today, 3), (ExpiryStatus::Soon, Some(2)));
/// assert_eq!(expiry_status(None, today, 3), (ExpiryStatus::Unknown, None));
/// ```
pub fn expiry_status(
    expiry: Option<NaiveDate>,
    today: NaiveDate,
    horizon_days: i64,
) -> (ExpiryStatus, Option<i64>) {
    let expiry = match expiry {
        Some(date) => date,
        None => return (ExpiryStatus::Unknown, None),
    };
    let days_left = (expiry - today).num_days();
    let status = if days_left < 0 {
        ExpiryStatus::Expired
    } else if days_left <= horizon_days {
        ExpiryStatus::Soon
    } else {
        ExpiryStatus::Fresh
    };
    (status, Some(days_left))
}

impl InventoryItem {
    /// Create an item with just an id and a name; quantity defaults to
    /// zero so tests and callers opt into stock explicitly
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            category: Category::Other,
            remaining_quantity: 0.0,
            unit: None,
            expiry_date: None,
        }
    }

    /// Set the remaining quantity
    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.remaining_quantity = quantity;
        self
    }

    /// Set the unit tag
    pub fn with_unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }

    /// Set the category
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Set the expiry date
    pub fn with_expiry(mut self, expiry: NaiveDate) -> Self {
        self.expiry_date = Some(expiry);
        self
    }

    /// Whether the item is expired or expires within `horizon_days`
    pub fn expires_within(&self, today: NaiveDate, horizon_days: i64) -> bool {
        matches!(
            expiry_status(self.expiry_date, today, horizon_days).0,
            ExpiryStatus::Expired | ExpiryStatus::Soon
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_expiry_status_bands() {
        let today = day(2025, 6, 10);
        assert_eq!(
            expiry_status(Some(day(2025, 6, 8)), today, 3),
            (ExpiryStatus::Expired, Some(-2))
        );
        assert_eq!(
            expiry_status(Some(day(2025, 6, 10)), today, 3),
            (ExpiryStatus::Soon, Some(0))
        );
        assert_eq!(
            expiry_status(Some(day(2025, 6, 13)), today, 3),
            (ExpiryStatus::Soon, Some(3))
        );
        assert_eq!(
            expiry_status(Some(day(2025, 6, 14)), today, 3),
            (ExpiryStatus::Fresh, Some(4))
        );
    }

    #[test]
    fn test_expires_within() {
        let today = day(2025, 6, 10);
        let milk = InventoryItem::new(1, "milk")
            .with_quantity(1.0)
            .with_unit("l")
            .with_expiry(day(2025, 6, 11));
        let sugar = InventoryItem::new(2, "sugar")
            .with_quantity(1.0)
            .with_unit("kg")
            .with_expiry(day(2025, 7, 10));

        assert!(milk.expires_within(today, 3));
        assert!(!sugar.expires_within(today, 3));
    }

    #[test]
    fn test_no_expiry_is_unknown() {
        let today = day(2025, 6, 10);
        let rice = InventoryItem::new(3, "rice").with_quantity(5.0);
        assert!(!rice.expires_within(today, 3));
        assert_eq!(
            expiry_status(rice.expiry_date, today, 3),
            (ExpiryStatus::Unknown, None)
        );
    }
}
