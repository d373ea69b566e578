//! Core library for the fitlog meal and exercise tracker.
//!
//! Plan items (meals and exercises) are stored per calendar date in SQLite.
//! Statistics for a date and for a date range are derived from the stored
//! items on every request; nothing derived is ever persisted.
//!
//! - [`tracker`]: the async entry point used by front ends
//! - [`db`]: the SQLite store
//! - [`stats`] and [`history`]: pure aggregation over items
//! - [`params`]: loosely typed request parameters and their validation
//! - [`import`]: sheet rows and best-effort import reports
//! - [`display`]: markdown presentation
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use fitlog_core::{
//!     params::{CreateItem, DateParam, Id, SetCompleted},
//!     TrackerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("fitlog.db"))
//!     .build()
//!     .await?;
//!
//! let run = tracker
//!     .create_item(&CreateItem {
//!         date: "2024-01-01".to_string(),
//!         item_type: "exercise".to_string(),
//!         name: "Running".to_string(),
//!         calories: 300.0,
//!         duration: Some(30),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! tracker
//!     .set_completed(&SetCompleted {
//!         id: run.id,
//!         completed: true,
//!         actual_duration: Some(35),
//!     })
//!     .await?;
//!
//! let stats = tracker
//!     .daily_stats(&DateParam { date: "2024-01-01".to_string() })
//!     .await?;
//! println!("{stats}");
//! # let _ = Id { id: run.id };
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod history;
pub mod import;
pub mod models;
pub mod params;
pub mod stats;
pub mod tracker;

pub use db::Database;
pub use display::{CreateResult, DateSummaries, DeleteResult, OperationStatus, UpdateResult};
pub use error::{ImportRowError, Result, TrackerError};
pub use import::{ImportReport, ImportRow};
pub use models::{
    DailyStats, DateRange, DateSummary, DayPlan, ItemType, NewItem, PlanItem, RangeStats,
    UpdateItemRequest,
};
pub use params::{ApplyPlan, CreateItem, DateParam, DateRangeParams, Id, SetCompleted, UpdateItem};
pub use tracker::{Tracker, TrackerBuilder};
