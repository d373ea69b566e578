//! Plan item model definition and related functionality.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::ItemType;

/// A single meal or exercise entry for one calendar date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanItem {
    /// Unique identifier for the item
    pub id: u64,

    /// Calendar date the item belongs to
    pub date: Date,

    /// Meal or exercise
    #[serde(rename = "type")]
    pub item_type: ItemType,

    /// Display label, never empty
    pub name: String,

    /// Intake for meals, burn for exercises (kcal, never negative)
    pub calories: f64,

    /// Planned duration in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,

    /// Duration actually spent, recorded on completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_duration: Option<u32>,

    /// Whether the item has been carried out
    #[serde(default)]
    pub completed: bool,

    /// Timestamp when the item was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the item was last written (UTC)
    pub updated_at: Timestamp,
}

impl PlanItem {
    pub fn is_meal(&self) -> bool {
        self.item_type == ItemType::Meal
    }

    pub fn is_exercise(&self) -> bool {
        self.item_type == ItemType::Exercise
    }

    /// Minutes this item contributes to the exercise total: the recorded
    /// actual duration when present, otherwise the planned one. Meals always
    /// contribute zero.
    pub fn effective_duration(&self) -> u32 {
        if !self.is_exercise() {
            return 0;
        }
        self.actual_duration.or(self.duration).unwrap_or(0)
    }
}

/// A validated item ready to be written to the store.
///
/// Produced from [`crate::params::CreateItem`] so that the store only ever
/// sees typed, checked values.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub date: Date,
    pub item_type: ItemType,
    pub name: String,
    pub calories: f64,
    pub duration: Option<u32>,
    pub actual_duration: Option<u32>,
    pub completed: bool,
}
