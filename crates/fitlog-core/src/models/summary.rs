//! Derived statistics for a date and for a date range.
//!
//! None of these types are stored. They are rebuilt from the plan items on
//! every request, see [`crate::stats`] and [`crate::history`].

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Calorie and completion figures for one date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyStats {
    pub date: Date,
    pub total_calories_intake: f64,
    pub total_calories_burned: f64,
    /// Intake minus burned; negative when more was burned than eaten
    pub net_calories: f64,
    /// Exercise minutes, preferring recorded actual durations
    pub total_exercise_duration: u32,
    pub total_items: u32,
    pub completed_items: u32,
    /// Percentage of completed items, one decimal; 0 for an empty date
    pub completion_rate: f64,
}

/// Per-date entry of a history listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DateSummary {
    pub date: Date,
    pub meal_count: u32,
    pub exercise_count: u32,
    pub stats: DailyStats,
}

/// Aggregate over every populated date of a range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RangeStats {
    /// Lower bound of the range, `None` when unbounded
    pub start_date: Option<Date>,
    /// Upper bound of the range, `None` when unbounded
    pub end_date: Option<Date>,
    /// Distinct dates with at least one item
    pub total_training_days: u32,
    pub total_calories_burned: f64,
    pub total_exercise_duration: u32,
    pub average_daily_calories_burned: f64,
    pub average_daily_exercise_duration: f64,
    pub total_items: u32,
    pub completed_items: u32,
    /// Mean of the per-date completion rates
    pub average_completion_rate: f64,
}
