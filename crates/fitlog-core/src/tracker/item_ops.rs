//! Plan item operations for the Tracker.
//!
//! Parameters are validated before a worker is spawned, so invalid input
//! never opens the database.

use log::debug;

use super::Tracker;
use crate::{
    error::{Result, TrackerError},
    models::{DayPlan, PlanItem},
    params::{CreateItem, DateParam, Id, SetCompleted, UpdateItem},
};

impl Tracker {
    /// Validates and stores a new item.
    ///
    /// # Errors
    ///
    /// * `TrackerError::Validation` - When any field is invalid; nothing is
    ///   written
    pub async fn create_item(&self, params: &CreateItem) -> Result<PlanItem> {
        let item = params.validate()?;
        self.with_database(move |db| db.create_item(&item)).await
    }

    /// Retrieves a single item, `None` when the id is unknown.
    pub async fn get_item(&self, params: &Id) -> Result<Option<PlanItem>> {
        let id = params.id;
        self.with_database(move |db| db.get_item(id)).await
    }

    /// Returns every item of a date split into meals and exercises.
    ///
    /// A date without items yields an empty [`DayPlan`], not an error.
    pub async fn get_day(&self, params: &DateParam) -> Result<DayPlan> {
        let date = params.validate()?;
        let items = self
            .with_database(move |db| db.get_items_by_date(date))
            .await?;
        Ok(DayPlan::from_items(date, items))
    }

    /// Merges the provided fields into an existing item.
    ///
    /// # Errors
    ///
    /// * `TrackerError::Validation` - When a provided field is invalid
    /// * `TrackerError::ItemNotFound` - When the id does not exist
    pub async fn update_item(&self, params: &UpdateItem) -> Result<PlanItem> {
        let id = params.id;
        let request = params.validate()?;
        self.with_database(move |db| db.update_item(id, request))
            .await
    }

    /// Permanently deletes an item and returns it.
    ///
    /// # Errors
    ///
    /// * `TrackerError::ItemNotFound` - When the id does not exist
    pub async fn delete_item(&self, params: &Id) -> Result<PlanItem> {
        let id = params.id;
        self.with_database(move |db| db.delete_item(id)).await
    }

    /// Marks an item completed or pending.
    ///
    /// Calling this again with the same arguments changes nothing, not even
    /// `updated_at`.
    ///
    /// # Errors
    ///
    /// * `TrackerError::Validation` - When an actual duration is negative,
    ///   given for a meal, or given while reopening an item
    /// * `TrackerError::ItemNotFound` - When the id does not exist
    pub async fn set_completed(&self, params: &SetCompleted) -> Result<PlanItem> {
        let id = params.id;
        let completed = params.completed;
        let actual_duration = params.validate()?;

        debug!("Setting completed={completed} on item {id}");

        self.with_database(move |db| db.set_completed(id, completed, actual_duration))
            .await
    }

    /// Like [`Tracker::get_item`] but treats a missing id as an error.
    pub async fn require_item(&self, params: &Id) -> Result<PlanItem> {
        self.get_item(params)
            .await?
            .ok_or(TrackerError::ItemNotFound { id: params.id })
    }
}
