//! All items of one date, split by category.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::PlanItem;

/// The contents of one date partition, meals and exercises in insertion
/// order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayPlan {
    pub date: Date,
    pub meals: Vec<PlanItem>,
    pub exercises: Vec<PlanItem>,
}

impl DayPlan {
    /// Split items of a single date into meals and exercises, keeping their
    /// relative order.
    pub fn from_items(date: Date, items: Vec<PlanItem>) -> Self {
        let (meals, exercises): (Vec<_>, Vec<_>) =
            items.into_iter().partition(PlanItem::is_meal);
        Self {
            date,
            meals,
            exercises,
        }
    }

    pub fn total_items(&self) -> usize {
        self.meals.len() + self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_items() == 0
    }
}
