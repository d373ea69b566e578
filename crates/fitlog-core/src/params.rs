//! Parameter structures for fitlog operations
//!
//! These structures are shared by every interface (CLI, MCP, importers) and
//! carry the loosely typed values a caller hands over: dates as `YYYY-MM-DD`
//! strings, the item category as a string and durations as signed integers so
//! that negative input can be reported instead of failing to parse.
//!
//! Each structure validates itself into the typed records of
//! [`crate::models`] before anything reaches the store:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │  Typed Models   │
//! │  MCP requests   │───▶│  (this module)  │───▶│ NewItem, Date.. │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Interface layers wrap these types with their own derives (clap `Args`,
//! MCP schema wrappers) and convert via `From`.

use jiff::civil::Date;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    error::{Result, TrackerError},
    models::{DateRange, ItemType, NewItem, UpdateItemRequest},
};

/// Longest accepted item name, in characters.
pub const MAX_NAME_LENGTH: usize = 200;

/// Highest calorie value a single item may carry.
pub const MAX_CALORIES: f64 = 10_000.0;

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the plan item to operate on
    pub id: u64,
}

/// Parameters for creating a plan item.
///
/// Also the shape of a draft item proposed by an assistant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateItem {
    /// Date of the item (YYYY-MM-DD)
    pub date: String,
    /// Item category: 'meal' or 'exercise'
    #[serde(rename = "type")]
    pub item_type: String,
    /// Name of the meal or exercise
    pub name: String,
    /// Calories eaten (meal) or burned (exercise); must not be negative
    pub calories: f64,
    /// Planned duration in minutes
    #[serde(default)]
    pub duration: Option<i64>,
    /// Actual duration in minutes
    #[serde(default)]
    pub actual_duration: Option<i64>,
    /// Whether the item is already done
    #[serde(default)]
    pub completed: bool,
}

impl CreateItem {
    /// Validate the parameters and convert them into a [`NewItem`].
    ///
    /// # Errors
    ///
    /// * `TrackerError::Validation` - When the date is not `YYYY-MM-DD`, the
    ///   type is neither 'meal' nor 'exercise', the name is blank or too
    ///   long, calories are negative, above [`MAX_CALORIES`] or not finite, a
    ///   duration is negative,
    ///   or a meal carries an actual duration
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fitlog_core::{models::ItemType, params::CreateItem};
    ///
    /// let params = CreateItem {
    ///     date: "2024-01-01".to_string(),
    ///     item_type: "exercise".to_string(),
    ///     name: " Running ".to_string(),
    ///     calories: 300.0,
    ///     duration: Some(30),
    ///     ..Default::default()
    /// };
    /// let item = params.validate()?;
    /// assert_eq!(item.item_type, ItemType::Exercise);
    /// assert_eq!(item.name, "Running");
    /// assert_eq!(item.duration, Some(30));
    ///
    /// let negative = CreateItem {
    ///     calories: -1.0,
    ///     ..params
    /// };
    /// assert!(negative.validate().is_err());
    /// # fitlog_core::Result::<()>::Ok(())
    /// ```
    pub fn validate(&self) -> Result<NewItem> {
        let date = parse_date("date", &self.date)?;
        let item_type = self.item_type.parse::<ItemType>().map_err(|_| {
            TrackerError::validation("type").with_reason(format!(
                "Invalid type: {}. Must be 'meal' or 'exercise'",
                self.item_type
            ))
        })?;

        let actual_duration = validate_minutes("actual_duration", self.actual_duration)?;
        if item_type == ItemType::Meal && actual_duration.is_some() {
            return Err(TrackerError::validation("actual_duration")
                .with_reason("An actual duration can only be recorded for exercises"));
        }

        Ok(NewItem {
            date,
            item_type,
            name: validate_name(&self.name)?,
            calories: validate_calories(self.calories)?,
            duration: validate_minutes("duration", self.duration)?,
            actual_duration,
            completed: self.completed,
        })
    }
}

/// Parameters for updating an existing plan item.
///
/// Only provided fields are changed. The category cannot be changed.
/// Durations distinguish an omitted field (`None`, keep) from an explicit
/// null (`Some(None)`, clear).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateItem {
    /// Item ID to update (required)
    pub id: u64,
    /// New name
    #[serde(default)]
    pub name: Option<String>,
    /// New calories value; must not be negative
    #[serde(default)]
    pub calories: Option<f64>,
    /// New planned duration in minutes; null clears it
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "schema", schemars(with = "Option<i64>"))]
    pub duration: Option<Option<i64>>,
    /// New actual duration in minutes; null clears it
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "schema", schemars(with = "Option<i64>"))]
    pub actual_duration: Option<Option<i64>>,
    /// New completion flag
    #[serde(default)]
    pub completed: Option<bool>,
}

impl UpdateItem {
    /// Validate the provided fields with the same rules as creation.
    pub fn validate(&self) -> Result<UpdateItemRequest> {
        Ok(UpdateItemRequest {
            name: self.name.as_deref().map(validate_name).transpose()?,
            calories: self.calories.map(validate_calories).transpose()?,
            duration: self
                .duration
                .map(|minutes| validate_minutes("duration", minutes))
                .transpose()?,
            actual_duration: self
                .actual_duration
                .map(|minutes| validate_minutes("actual_duration", minutes))
                .transpose()?,
            completed: self.completed,
        })
    }
}

/// Deserialize a present field, null included, as `Some`.
fn double_option<'de, D, T>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Parameters for marking an item completed or pending.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetCompleted {
    /// Item ID
    pub id: u64,
    /// `true` to complete, `false` to reopen
    pub completed: bool,
    /// Minutes actually spent; exercises only
    #[serde(default)]
    pub actual_duration: Option<i64>,
}

impl SetCompleted {
    /// Validate the recorded duration, if any.
    pub fn validate(&self) -> Result<Option<u32>> {
        validate_minutes("actual_duration", self.actual_duration)
    }
}

/// Parameters naming a single date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DateParam {
    /// Date (YYYY-MM-DD)
    pub date: String,
}

impl DateParam {
    pub fn validate(&self) -> Result<Date> {
        parse_date("date", &self.date)
    }
}

/// Parameters for history queries over an optional inclusive range.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DateRangeParams {
    /// First date to include (YYYY-MM-DD); unbounded when omitted
    #[serde(default)]
    pub start_date: Option<String>,
    /// Last date to include (YYYY-MM-DD); unbounded when omitted
    #[serde(default)]
    pub end_date: Option<String>,
}

impl DateRangeParams {
    /// Parse both bounds and check their order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fitlog_core::params::DateRangeParams;
    ///
    /// let params = DateRangeParams {
    ///     start_date: Some("2024-03-01".to_string()),
    ///     end_date: None,
    /// };
    /// let range = params.validate()?;
    /// assert!(range.start.is_some());
    /// assert!(range.end.is_none());
    /// # fitlog_core::Result::<()>::Ok(())
    /// ```
    pub fn validate(&self) -> Result<DateRange> {
        let start = self
            .start_date
            .as_deref()
            .map(|s| parse_date("start_date", s))
            .transpose()?;
        let end = self
            .end_date
            .as_deref()
            .map(|s| parse_date("end_date", s))
            .transpose()?;
        DateRange::new(start, end)
    }
}

/// A list of draft items to accept in one go.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ApplyPlan {
    /// Draft items; each one is created independently
    pub items: Vec<CreateItem>,
}

/// Parse a `YYYY-MM-DD` date, reporting failures against `field`.
pub fn parse_date(field: &str, value: &str) -> Result<Date> {
    let trimmed = value.trim();
    let well_formed = trimmed.len() == 10
        && trimmed
            .char_indices()
            .all(|(i, c)| if i == 4 || i == 7 { c == '-' } else { c.is_ascii_digit() });
    if !well_formed {
        return Err(TrackerError::validation(field)
            .with_reason(format!("Expected a date formatted as YYYY-MM-DD, got '{value}'")));
    }
    trimmed.parse::<Date>().map_err(|e| {
        TrackerError::validation(field).with_reason(format!("Invalid date '{value}': {e}"))
    })
}

pub(crate) fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::validation("name").with_reason("Name must not be empty"));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(TrackerError::validation("name").with_reason(format!(
            "Name must be at most {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn validate_calories(calories: f64) -> Result<f64> {
    if !calories.is_finite() {
        return Err(TrackerError::validation("calories").with_reason("Calories must be a number"));
    }
    if calories < 0.0 {
        return Err(TrackerError::validation("calories")
            .with_reason(format!("Calories must not be negative: {calories}")));
    }
    if calories > MAX_CALORIES {
        return Err(TrackerError::validation("calories")
            .with_reason(format!("Calories must be at most {MAX_CALORIES}: {calories}")));
    }
    Ok(calories)
}

pub(crate) fn validate_minutes(field: &str, minutes: Option<i64>) -> Result<Option<u32>> {
    minutes
        .map(|m| {
            u32::try_from(m).map_err(|_| {
                TrackerError::validation(field)
                    .with_reason(format!("Duration must be a non-negative number of minutes: {m}"))
            })
        })
        .transpose()
}
