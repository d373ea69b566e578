//! Statistics and history for the Tracker.
//!
//! Every figure is recomputed from freshly read items.

use log::debug;

use super::Tracker;
use crate::{
    display::DateSummaries,
    error::Result,
    history,
    models::{DailyStats, PlanItem, RangeStats},
    params::{DateParam, DateRangeParams},
    stats,
};

impl Tracker {
    /// Calorie and completion statistics for one date.
    pub async fn daily_stats(&self, params: &DateParam) -> Result<DailyStats> {
        let date = params.validate()?;
        let items = self
            .with_database(move |db| db.get_items_by_date(date))
            .await?;

        debug!("Computing stats for {date} over {} items", items.len());

        Ok(stats::daily_stats(date, &items))
    }

    /// Per-date summaries of every populated date in the range, oldest
    /// first. Dates without items are omitted.
    ///
    /// # Errors
    ///
    /// * `TrackerError::Validation` - When a bound is malformed or the start
    ///   falls after the end
    pub async fn list_dates(&self, params: &DateRangeParams) -> Result<DateSummaries> {
        let range = params.validate()?;
        let items = self
            .with_database(move |db| db.get_items_in_range(&range))
            .await?;

        Ok(DateSummaries(history::summarize_dates(items)))
    }

    /// Aggregate statistics over the populated dates of a range.
    pub async fn range_stats(&self, params: &DateRangeParams) -> Result<RangeStats> {
        let range = params.validate()?;
        let items = self
            .with_database(move |db| db.get_items_in_range(&range))
            .await?;

        let summaries = history::summarize_dates(items);

        debug!(
            "Computing range stats over {} populated dates",
            summaries.len()
        );

        Ok(history::range_stats(range, &summaries))
    }

    /// Every item of the range in export order: by date, then by id.
    ///
    /// # Errors
    ///
    /// * `TrackerError::Validation` - When a bound is malformed or the start
    ///   falls after the end
    pub async fn export_items(&self, params: &DateRangeParams) -> Result<Vec<PlanItem>> {
        let range = params.validate()?;
        let items = self
            .with_database(move |db| db.get_items_in_range(&range))
            .await?;

        debug!("Exporting {} items", items.len());

        Ok(items)
    }
}
