//! Request types for updating models.

/// Validated partial update of a plan item.
///
/// Every field is optional; only the provided ones are merged into the
/// stored item. For durations `Some(None)` clears the stored value. There is
/// no category field: an item's type is fixed at creation.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub calories: Option<f64>,
    pub duration: Option<Option<u32>>,
    pub actual_duration: Option<Option<u32>>,
    pub completed: Option<bool>,
}

impl UpdateItemRequest {
    /// Whether the request carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.calories.is_none()
            && self.duration.is_none()
            && self.actual_duration.is_none()
            && self.completed.is_none()
    }
}

impl TryFrom<crate::params::UpdateItem> for UpdateItemRequest {
    type Error = crate::TrackerError;

    /// Convert update parameters into a validated request.
    ///
    /// # Errors
    ///
    /// * `TrackerError::Validation` - When a provided name is blank, calories
    ///   are negative or not finite, or a duration is negative
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fitlog_core::{models::UpdateItemRequest, params::UpdateItem};
    ///
    /// let params = UpdateItem {
    ///     id: 1,
    ///     calories: Some(420.0),
    ///     ..Default::default()
    /// };
    /// let request: UpdateItemRequest = params.try_into()?;
    /// assert_eq!(request.calories, Some(420.0));
    /// # fitlog_core::Result::<()>::Ok(())
    /// ```
    fn try_from(params: crate::params::UpdateItem) -> Result<Self, Self::Error> {
        params.validate()
    }
}
