//! Markdown presentation of models and operation results.
//!
//! Domain models implement `Display` directly (see [`models`]). Collections
//! and write outcomes get small wrapper types so that each context can pick
//! the framing it needs:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │   Markdown      │
//! │ (PlanItem, ..)  │───▶│ (CreateResult,  │───▶│ (termimad/MCP)  │
//! │                 │    │  DateSummaries) │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: [`DateSummaries`] for history listings
//! - [`results`]: [`CreateResult`], [`UpdateResult`], [`DeleteResult`] and the
//!   import report
//! - [`status`]: [`OperationStatus`]
//! - [`datetime`]: [`LocalDateTime`]
//!
//! # Examples
//!
//! ```rust
//! use fitlog_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Item 7 marked completed");
//! assert_eq!(status.to_string(), "Success: Item 7 marked completed\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::DateSummaries;
pub use datetime::LocalDateTime;
pub use models::ItemDetails;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
