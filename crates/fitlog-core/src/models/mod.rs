//! Data models for plan items and their derived statistics.
//!
//! Stored data is limited to [`PlanItem`]. Everything else in this module is
//! either a validated write request ([`NewItem`], [`UpdateItemRequest`]), a
//! view over stored items ([`DayPlan`]) or a derived figure ([`DailyStats`],
//! [`DateSummary`], [`RangeStats`]) that is recomputed on demand.
//!
//! Display implementations live in [`crate::display::models`] and produce
//! markdown suitable for terminal rendering.
//!
//! # Examples
//!
//! ```rust
//! use fitlog_core::models::{DayPlan, ItemType, PlanItem};
//! use jiff::{civil::date, Timestamp};
//!
//! let breakfast = PlanItem {
//!     id: 1,
//!     date: date(2024, 1, 1),
//!     item_type: ItemType::Meal,
//!     name: "Oatmeal".to_string(),
//!     calories: 350.0,
//! #   duration: None,
//! #   actual_duration: None,
//! #   completed: false,
//! #   created_at: Timestamp::now(),
//! #   updated_at: Timestamp::now(),
//! };
//!
//! let day = DayPlan::from_items(date(2024, 1, 1), vec![breakfast]);
//! assert_eq!(day.meals.len(), 1);
//! assert!(day.exercises.is_empty());
//! ```

pub mod day;
pub mod filters;
pub mod item;
pub mod item_type;
pub mod requests;
pub mod summary;


pub use day::DayPlan;
pub use filters::DateRange;
pub use item::{NewItem, PlanItem};
pub use item_type::ItemType;
pub use requests::UpdateItemRequest;
pub use summary::{DailyStats, DateSummary, RangeStats};
