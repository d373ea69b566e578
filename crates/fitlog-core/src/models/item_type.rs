//! Category enumeration for plan items.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of plan item categories.
///
/// The category is fixed when an item is created; edits change the other
/// fields but never move an item between meals and exercises.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    /// Food intake; `calories` counts towards intake
    Meal,

    /// Physical activity; `calories` counts towards burn
    Exercise,
}

impl FromStr for ItemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "meal" => Ok(ItemType::Meal),
            "exercise" => Ok(ItemType::Exercise),
            _ => Err(format!("Invalid item type: {s}")),
        }
    }
}

impl ItemType {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Meal => "meal",
            ItemType::Exercise => "exercise",
        }
    }

    /// Heading used when a day's items are listed by category.
    pub fn heading(&self) -> &'static str {
        match self {
            ItemType::Meal => "Meals",
            ItemType::Exercise => "Exercises",
        }
    }
}
