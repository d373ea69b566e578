//! Filter types for querying plan items.

use jiff::civil::Date;

use crate::error::{Result, TrackerError};

/// Inclusive date range; either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<Date>,
    pub end: Option<Date>,
}

impl DateRange {
    /// Build a range, rejecting a start that falls after the end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fitlog_core::models::DateRange;
    /// use jiff::civil::date;
    ///
    /// let range = DateRange::new(Some(date(2024, 1, 1)), Some(date(2024, 1, 31)))?;
    /// assert!(range.contains(date(2024, 1, 15)));
    /// assert!(!range.contains(date(2024, 2, 1)));
    ///
    /// assert!(DateRange::new(Some(date(2024, 2, 1)), Some(date(2024, 1, 1))).is_err());
    /// # fitlog_core::Result::<()>::Ok(())
    /// ```
    pub fn new(start: Option<Date>, end: Option<Date>) -> Result<Self> {
        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(TrackerError::validation("date_range")
                    .with_reason(format!("Start date {s} is after end date {e}")));
            }
        }
        Ok(Self { start, end })
    }

    /// A range without bounds.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn contains(&self, date: Date) -> bool {
        self.start.is_none_or(|s| date >= s) && self.end.is_none_or(|e| date <= e)
    }
}
