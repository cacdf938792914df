//! # Item Category Module
//!
//! This module assigns grocery categories (fruits, vegetables, dairy,
//! ...) to free-text item names using keyword tables. The matcher uses
//! the result as a tie-breaking hint: when two pantry items match an
//! ingredient name equally well, the one in the expected category wins.
//!
//! Keyword tuning lives outside the engine; this table is intentionally
//! static.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grocery category of an inventory item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Fruits,
    Vegetables,
    Dairy,
    MeatFish,
    GrainsCereals,
    SpicesCondiments,
    OilsFats,
    Beverages,
    Snacks,
    Other,
}

impl Default for Category {
    fn default() -> Self {
        Category::Other
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Fruits => "fruits",
            Category::Vegetables => "vegetables",
            Category::Dairy => "dairy",
            Category::MeatFish => "meat_fish",
            Category::GrainsCereals => "grains_cereals",
            Category::SpicesCondiments => "spices_condiments",
            Category::OilsFats => "oils_fats",
            Category::Beverages => "beverages",
            Category::Snacks => "snacks",
            Category::Other => "other",
        };
        write!(f, "{name}")
    }
}

lazy_static! {
    static ref CATEGORY_KEYWORDS: Vec<(Category, Vec<&'static str>)> = vec![
        (
            Category::Fruits,
            vec![
                "apple", "banana", "orange", "mango", "grape", "strawberry", "blueberry",
                "pineapple", "watermelon", "melon", "papaya", "guava", "pomegranate", "kiwi",
                "peach", "pear", "plum", "cherry", "apricot", "lemon", "lime", "coconut",
                "avocado", "fig", "date", "raisin", "cranberry",
            ],
        ),
        (
            Category::Vegetables,
            vec![
                "tomato", "onion", "potato", "carrot", "cabbage", "spinach", "lettuce",
                "broccoli", "cauliflower", "cucumber", "capsicum", "bell pepper", "eggplant",
                "brinjal", "okra", "peas", "beans", "corn", "beetroot", "radish", "turnip",
                "ginger", "garlic", "chilli", "chili", "mushroom", "celery", "zucchini",
                "pumpkin", "shallot", "scallion", "leek",
            ],
        ),
        (
            Category::Dairy,
            vec![
                "milk", "cheese", "butter", "yogurt", "yoghurt", "curd", "cream", "paneer",
                "ghee", "lassi", "buttermilk",
            ],
        ),
        (
            Category::MeatFish,
            vec![
                "chicken", "mutton", "beef", "pork", "lamb", "fish", "prawn", "shrimp",
                "egg", "meat", "salmon", "tuna",
            ],
        ),
        (
            Category::GrainsCereals,
            vec![
                "rice", "wheat", "flour", "atta", "maida", "besan", "oats", "barley",
                "quinoa", "pasta", "noodles", "bread", "sooji", "rava", "dal", "lentil",
            ],
        ),
        (
            Category::SpicesCondiments,
            vec![
                "salt", "pepper", "turmeric", "cumin", "coriander", "cardamom", "cinnamon",
                "clove", "mustard", "vinegar", "sauce", "ketchup", "masala", "spice",
                "seasoning", "chutney",
            ],
        ),
        (
            Category::OilsFats,
            vec!["oil", "olive oil", "sunflower oil", "margarine", "lard"],
        ),
        (
            Category::Beverages,
            vec!["tea", "coffee", "juice", "soda", "water", "cola", "squash"],
        ),
        (
            Category::Snacks,
            vec![
                "biscuit", "cookie", "chips", "chocolate", "namkeen", "popcorn", "cake",
                "wafer",
            ],
        ),
    ];
}

/// Categorize an item name by keyword lookup.
///
/// Returns the category and a confidence in [0,1]. A whole-word keyword
/// hit is strong evidence; a substring hit (e.g. "tomatoes" against
/// "tomato") is slightly weaker. Unmatched names land in
/// `Category::Other` with zero confidence.
pub fn categorize(name: &str) -> (Category, f64) {
    let lowered = name.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();

    let mut best = (Category::Other, 0.0_f64);
    for (category, keywords) in CATEGORY_KEYWORDS.iter() {
        for keyword in keywords {
            let confidence = if words.contains(keyword) {
                0.9
            } else if lowered.contains(keyword) {
                0.75
            } else {
                continue;
            };
            if confidence > best.1 {
                best = (*category, confidence);
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_word_hit() {
        let (category, confidence) = categorize("fresh tomato");
        assert_eq!(category, Category::Vegetables);
        assert!(confidence >= 0.9);
    }

    #[test]
    fn test_substring_hit() {
        let (category, confidence) = categorize("tomatoes");
        assert_eq!(category, Category::Vegetables);
        assert!(confidence >= 0.7);
        assert!(confidence < 0.9);
    }

    #[test]
    fn test_dairy_and_oils() {
        assert_eq!(categorize("whole milk").0, Category::Dairy);
        assert_eq!(categorize("sunflower oil").0, Category::OilsFats);
    }

    #[test]
    fn test_unknown_name() {
        let (category, confidence) = categorize("mystery jar");
        assert_eq!(category, Category::Other);
        assert_eq!(confidence, 0.0);
    }
}
