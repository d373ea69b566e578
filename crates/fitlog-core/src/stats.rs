//! Per-date statistics.
//!
//! [`daily_stats`] is a pure function of the items stored for a date. The
//! tracker calls it on every request with freshly read items, so there is no
//! cached figure that could drift from the store.

use jiff::civil::Date;

use crate::models::{DailyStats, PlanItem};

/// Compute the statistics of one date from its items.
///
/// Items belonging to other dates must already be filtered out.
///
/// # Examples
///
/// ```rust
/// use fitlog_core::{models::{ItemType, PlanItem}, stats::daily_stats};
/// use jiff::{civil::date, Timestamp};
///
/// let day = date(2024, 1, 1);
/// let item = |id: u64, item_type: ItemType, calories: f64, completed: bool| PlanItem {
///     id,
///     date: day,
///     item_type,
///     name: format!("item {id}"),
///     calories,
///     duration: None,
///     actual_duration: None,
///     completed,
///     created_at: Timestamp::UNIX_EPOCH,
///     updated_at: Timestamp::UNIX_EPOCH,
/// };
///
/// let stats = daily_stats(
///     day,
///     &[item(1, ItemType::Meal, 500.0, false), item(2, ItemType::Exercise, 300.0, true)],
/// );
/// assert_eq!(stats.net_calories, 200.0);
/// assert_eq!(stats.completion_rate, 50.0);
///
/// assert_eq!(daily_stats(day, &[]).completion_rate, 0.0);
/// ```
pub fn daily_stats(date: Date, items: &[PlanItem]) -> DailyStats {
    let mut intake = 0.0;
    let mut burned = 0.0;
    let mut exercise_minutes: u32 = 0;
    let mut completed: u32 = 0;

    for item in items {
        if item.is_meal() {
            intake += item.calories;
        } else {
            burned += item.calories;
            exercise_minutes = exercise_minutes.saturating_add(item.effective_duration());
        }
        if item.completed {
            completed += 1;
        }
    }

    let total = items.len() as u32;

    DailyStats {
        date,
        total_calories_intake: intake,
        total_calories_burned: burned,
        net_calories: intake - burned,
        total_exercise_duration: exercise_minutes,
        total_items: total,
        completed_items: completed,
        completion_rate: completion_rate(completed, total),
    }
}

/// Percentage of completed items rounded to one decimal, `0` when there is
/// nothing to complete.
pub fn completion_rate(completed: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to(f64::from(completed) / f64::from(total) * 100.0, 1)
}

/// Round half away from zero to the given number of decimals.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
