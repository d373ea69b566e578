//! Multi-day summaries built on top of [`crate::stats`].

use std::collections::BTreeMap;

use jiff::civil::Date;

use crate::{
    models::{DateRange, DateSummary, PlanItem, RangeStats},
    stats::{daily_stats, round_to},
};

/// Group items by date and summarize every populated date, oldest first.
///
/// Dates without items never appear: the result is sparse.
pub fn summarize_dates(items: Vec<PlanItem>) -> Vec<DateSummary> {
    let mut by_date: BTreeMap<Date, Vec<PlanItem>> = BTreeMap::new();
    for item in items {
        by_date.entry(item.date).or_default().push(item);
    }

    by_date
        .into_iter()
        .map(|(date, items)| {
            let meal_count = items.iter().filter(|i| i.is_meal()).count() as u32;
            DateSummary {
                date,
                meal_count,
                exercise_count: items.len() as u32 - meal_count,
                stats: daily_stats(date, &items),
            }
        })
        .collect()
}

/// Aggregate per-date summaries into range statistics.
///
/// The completion figure is the arithmetic mean of each date's own
/// completion rate. A date with one item counts as much as a date with ten.
pub fn range_stats(range: DateRange, summaries: &[DateSummary]) -> RangeStats {
    let days = summaries.len() as u32;
    let burned: f64 = summaries.iter().map(|s| s.stats.total_calories_burned).sum();
    let minutes: u32 = summaries
        .iter()
        .map(|s| s.stats.total_exercise_duration)
        .fold(0, u32::saturating_add);
    let total_items: u32 = summaries.iter().map(|s| s.stats.total_items).sum();
    let completed_items: u32 = summaries.iter().map(|s| s.stats.completed_items).sum();
    let rate_sum: f64 = summaries.iter().map(|s| s.stats.completion_rate).sum();

    let per_day = |total: f64, decimals: i32| {
        if days == 0 {
            0.0
        } else {
            round_to(total / f64::from(days), decimals)
        }
    };

    RangeStats {
        start_date: range.start,
        end_date: range.end,
        total_training_days: days,
        total_calories_burned: round_to(burned, 2),
        total_exercise_duration: minutes,
        average_daily_calories_burned: per_day(burned, 2),
        average_daily_exercise_duration: per_day(f64::from(minutes), 2),
        total_items,
        completed_items,
        average_completion_rate: per_day(rate_sum, 1),
    }
}
