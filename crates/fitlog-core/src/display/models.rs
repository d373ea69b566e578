//! Display implementations for domain models.
//!
//! Output is markdown, rendered by the CLI and returned verbatim by MCP
//! tools.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{DailyStats, DateSummary, DayPlan, ItemType, PlanItem, RangeStats};

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PlanItem {
    fn fmt_minutes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.duration, self.actual_duration) {
            (Some(planned), Some(actual)) => {
                writeln!(f, "- Duration: {planned} min (actual {actual} min)")
            }
            (Some(planned), None) => writeln!(f, "- Duration: {planned} min"),
            (None, Some(actual)) => writeln!(f, "- Duration: {actual} min (actual)"),
            (None, None) => Ok(()),
        }
    }
}

impl fmt::Display for PlanItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let check = if self.completed { "x" } else { " " };
        writeln!(f, "- [{check}] **{}** (ID: {})", self.name, self.id)?;

        let direction = if self.is_meal() { "eaten" } else { "burned" };
        writeln!(f, "  - Calories: {} kcal {direction}", self.calories)?;

        if self.is_exercise() && (self.duration.is_some() || self.actual_duration.is_some()) {
            write!(f, "  ")?;
            self.fmt_minutes(f)?;
        }

        Ok(())
    }
}

/// Full record of a single item, used by `item show` and write results.
pub struct ItemDetails<'a>(pub &'a PlanItem);

impl fmt::Display for ItemDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let item = self.0;
        writeln!(f, "# {}. {}", item.id, item.name)?;
        writeln!(f)?;
        writeln!(f, "- Date: {}", item.date)?;
        writeln!(f, "- Type: {}", item.item_type)?;
        writeln!(f, "- Calories: {} kcal", item.calories)?;
        item.fmt_minutes(f)?;
        writeln!(
            f,
            "- Status: {}",
            if item.completed { "completed" } else { "pending" }
        )?;
        writeln!(f, "- Created: {}", LocalDateTime(&item.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&item.updated_at))
    }
}

impl fmt::Display for DayPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Plan for {}", self.date)?;
        writeln!(f)?;

        if self.is_empty() {
            return writeln!(f, "Nothing planned for this date.");
        }

        for (item_type, items) in [
            (ItemType::Meal, &self.meals),
            (ItemType::Exercise, &self.exercises),
        ] {
            writeln!(f, "## {}", item_type.heading())?;
            writeln!(f)?;
            if items.is_empty() {
                writeln!(f, "None.")?;
            }
            for item in items {
                write!(f, "{item}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for DailyStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Statistics for {}", self.date)?;
        writeln!(f)?;
        writeln!(f, "- Calories eaten: {} kcal", self.total_calories_intake)?;
        writeln!(f, "- Calories burned: {} kcal", self.total_calories_burned)?;
        writeln!(f, "- Net calories: {} kcal", self.net_calories)?;
        writeln!(f, "- Exercise time: {} min", self.total_exercise_duration)?;
        writeln!(
            f,
            "- Completed: {}/{} ({}%)",
            self.completed_items, self.total_items, self.completion_rate
        )
    }
}

impl fmt::Display for DateSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "| {} | {} | {} | {} | {} | {} | {}% |",
            self.date,
            self.meal_count,
            self.exercise_count,
            self.stats.total_calories_intake,
            self.stats.total_calories_burned,
            self.stats.net_calories,
            self.stats.completion_rate
        )
    }
}

impl fmt::Display for RangeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound = |date: Option<jiff::civil::Date>| {
            date.map_or_else(|| "…".to_string(), |d| d.to_string())
        };
        writeln!(
            f,
            "# Statistics from {} to {}",
            bound(self.start_date),
            bound(self.end_date)
        )?;
        writeln!(f)?;
        writeln!(f, "- Training days: {}", self.total_training_days)?;
        writeln!(f, "- Calories burned: {} kcal", self.total_calories_burned)?;
        writeln!(f, "- Exercise time: {} min", self.total_exercise_duration)?;
        writeln!(
            f,
            "- Daily average burned: {} kcal",
            self.average_daily_calories_burned
        )?;
        writeln!(
            f,
            "- Daily average exercise: {} min",
            self.average_daily_exercise_duration
        )?;
        writeln!(
            f,
            "- Completed items: {}/{}",
            self.completed_items, self.total_items
        )?;
        writeln!(
            f,
            "- Average completion rate: {}%",
            self.average_completion_rate
        )
    }
}
