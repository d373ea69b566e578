//! High-level tracker API for plan items, statistics and history.
//!
//! [`Tracker`] is the entry point every front end talks to. It owns no
//! connection and caches nothing: each call opens the database on a blocking
//! worker, runs one store operation or one aggregation, and returns typed
//! results.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Front ends    │    │    Tracker      │    │    Database     │
//! │  (CLI, MCP,     │───▶│ (item_ops,      │───▶│   (via db/)     │
//! │   importers)    │    │  report_ops..)  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   untyped params        validation, stats       SQLite storage
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`Tracker`] instances
//! - [`item_ops`]: Create, read, update, delete and completion of items
//! - [`report_ops`]: Daily statistics, history listing and range statistics
//! - [`import_ops`]: Best-effort batches from importers and assistants
//!
//! # Examples
//!
//! ```rust,no_run
//! use fitlog_core::{params::{CreateItem, DateParam}, TrackerBuilder};
//!
//! # async fn example() -> fitlog_core::Result<()> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("/tmp/fitlog.db"))
//!     .build()
//!     .await?;
//!
//! tracker
//!     .create_item(&CreateItem {
//!         date: "2024-01-01".to_string(),
//!         item_type: "meal".to_string(),
//!         name: "Oatmeal".to_string(),
//!         calories: 350.0,
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let stats = tracker
//!     .daily_stats(&DateParam { date: "2024-01-01".to_string() })
//!     .await?;
//! assert_eq!(stats.total_calories_intake, 350.0);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Database,
    error::{Result, TrackerError},
};

pub mod builder;
pub mod import_ops;
pub mod item_ops;
pub mod report_ops;


pub use builder::TrackerBuilder;

/// Main interface for recording plan items and reading their statistics.
#[derive(Debug, Clone)]
pub struct Tracker {
    pub(crate) db_path: PathBuf,
}

impl Tracker {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Location of the SQLite file backing this tracker.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Run `op` against a fresh connection on the blocking thread pool.
    pub(crate) async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
