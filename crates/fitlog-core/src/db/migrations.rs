//! Database schema initialization and migrations.

use log::info;

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Databases created before completion tracking lack actual_duration
        let has_actual_duration: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('plan_items') WHERE name = 'actual_duration'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect plan_items columns")?;

        if !has_actual_duration {
            info!("Adding actual_duration column to plan_items");
            self.connection
                .execute(
                    "ALTER TABLE plan_items ADD COLUMN actual_duration INTEGER \
                     CHECK (actual_duration IS NULL OR actual_duration >= 0)",
                    [],
                )
                .db_context("Failed to add actual_duration column to plan_items table")?;
        }

        Ok(())
    }
}
