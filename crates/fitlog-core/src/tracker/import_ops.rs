//! Best-effort batches for the Tracker.
//!
//! Each row is validated on its own and inserted in its own transaction. A
//! rejected row is recorded in the report and never rolls back rows that
//! were already committed, nor stops the rows after it.

use log::{error, info, warn};

use super::Tracker;
use crate::{
    db::Database,
    error::{ImportRowError, Result},
    import::{ImportReport, ImportRow},
    params::{ApplyPlan, CreateItem},
};

impl Tracker {
    /// Creates an item for every valid sheet row.
    ///
    /// Row numbers in the report start at 1.
    ///
    /// # Errors
    ///
    /// Row problems, including a failed insert, are reported in
    /// [`ImportReport::failed`]. The call itself fails only when the database
    /// cannot be opened, in which case nothing was written.
    pub async fn import_rows(&self, rows: Vec<ImportRow>) -> Result<ImportReport> {
        let drafts = rows
            .iter()
            .map(|row| row.to_create_item())
            .collect::<Vec<_>>();

        self.with_database(move |db| Ok(apply_drafts(db, drafts)))
            .await
    }

    /// Applies an assistant's confirmed draft items, creating each valid one.
    pub async fn apply_plan(&self, params: &ApplyPlan) -> Result<ImportReport> {
        let drafts = params.items.iter().cloned().map(Ok).collect::<Vec<_>>();

        self.with_database(move |db| Ok(apply_drafts(db, drafts)))
            .await
    }
}

fn apply_drafts(
    db: &mut Database,
    drafts: Vec<std::result::Result<CreateItem, String>>,
) -> ImportReport {
    let mut report = ImportReport::default();

    for (index, draft) in drafts.into_iter().enumerate() {
        let row = index + 1;

        let outcome = draft.and_then(|params| params.validate().map_err(|e| e.to_string()));
        let item = match outcome {
            Ok(item) => item,
            Err(reason) => {
                warn!("Rejected row {row}: {reason}");
                report.failed.push(ImportRowError::new(row, reason));
                continue;
            }
        };

        match db.create_item(&item) {
            Ok(created) => report.created.push(created),
            Err(e) => {
                if e.is_client_error() {
                    warn!("Rejected row {row}: {e}");
                } else {
                    error!("Failed to store row {row}: {e}");
                }
                report.failed.push(ImportRowError::new(row, e.to_string()));
            }
        }
    }

    info!(
        "Import finished: {} created, {} failed",
        report.created.len(),
        report.failed.len()
    );

    report
}
