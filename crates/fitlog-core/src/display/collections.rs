//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use serde::Serialize;

use crate::models::DateSummary;

/// Newtype wrapper for a history listing, one entry per populated date.
///
/// # Examples
///
/// ```rust
/// use fitlog_core::{display::DateSummaries, history::summarize_dates};
///
/// let summaries = DateSummaries(summarize_dates(vec![]));
/// assert!(summaries.is_empty());
/// assert!(summaries.to_string().contains("No recorded dates"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DateSummaries(pub Vec<DateSummary>);

impl DateSummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&DateSummary> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DateSummary> {
        self.0.iter()
    }
}

impl Index<usize> for DateSummaries {
    type Output = DateSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for DateSummaries {
    type Item = DateSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a DateSummaries {
    type Item = &'a DateSummary;
    type IntoIter = std::slice::Iter<'a, DateSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for DateSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No recorded dates found.");
        }

        writeln!(
            f,
            "| Date | Meals | Exercises | Eaten (kcal) | Burned (kcal) | Net (kcal) | Completed |"
        )?;
        writeln!(f, "|---|---|---|---|---|---|---|")?;
        for summary in &self.0 {
            write!(f, "{summary}")?;
        }
        Ok(())
    }
}
