//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::models::ItemDetails;
use crate::{import::ImportReport, models::PlanItem};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use fitlog_core::{
///     display::CreateResult,
///     models::{ItemType, PlanItem},
/// };
/// use jiff::{civil::date, Timestamp};
///
/// let item = PlanItem {
///     id: 1,
///     date: date(2024, 1, 1),
///     item_type: ItemType::Meal,
///     name: "Oatmeal".to_string(),
///     calories: 350.0,
///     duration: None,
///     actual_duration: None,
///     completed: false,
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
/// };
///
/// let output = CreateResult::new(item).to_string();
/// assert!(output.contains("Created meal with ID: 1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<PlanItem> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Created {} with ID: {}",
            self.resource.item_type, self.resource.id
        )?;
        writeln!(f)?;
        write!(f, "{}", ItemDetails(&self.resource))
    }
}

/// Wrapper type for displaying the result of update operations, optionally
/// listing what changed.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<PlanItem> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated item with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", ItemDetails(&self.resource))
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<PlanItem> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted {} '{}' (ID: {}) from {}",
            self.resource.item_type, self.resource.name, self.resource.id, self.resource.date
        )
    }
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Imported {} of {} rows.",
            self.created.len(),
            self.total_rows()
        )?;

        if !self.created.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Created")?;
            writeln!(f)?;
            for item in &self.created {
                writeln!(
                    f,
                    "- {} {} '{}' (ID: {})",
                    item.date, item.item_type, item.name, item.id
                )?;
            }
        }

        if !self.failed.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Failed")?;
            writeln!(f)?;
            for failure in &self.failed {
                writeln!(f, "- {failure}")?;
            }
        }

        Ok(())
    }
}
