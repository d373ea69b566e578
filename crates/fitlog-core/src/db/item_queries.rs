//! Plan item CRUD operations and queries.

use jiff::{civil::Date, Timestamp};
use log::debug;
use rusqlite::{params, types::Type, OptionalExtension, TransactionBehavior};

use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::{DateRange, ItemType, NewItem, PlanItem, UpdateItemRequest},
};

const ITEM_COLUMNS: &str = "id, date, item_type, name, calories, duration, actual_duration, completed, created_at, updated_at";
const INSERT_ITEM_SQL: &str = "INSERT INTO plan_items (date, item_type, name, calories, duration, actual_duration, completed, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const UPDATE_ITEM_SQL: &str = "UPDATE plan_items SET name = ?1, calories = ?2, duration = ?3, actual_duration = ?4, completed = ?5, updated_at = ?6 WHERE id = ?7";
const UPDATE_COMPLETED_SQL: &str =
    "UPDATE plan_items SET completed = ?1, actual_duration = ?2, updated_at = ?3 WHERE id = ?4";
const DELETE_ITEM_SQL: &str = "DELETE FROM plan_items WHERE id = ?1";

impl super::Database {
    /// Helper function to construct a PlanItem from a database row
    fn build_item_from_row(row: &rusqlite::Row) -> rusqlite::Result<PlanItem> {
        let type_str: String = row.get(2)?;
        let item_type = type_str.parse::<ItemType>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                2,
                Type::Text,
                format!("Invalid item type: {type_str}").into(),
            )
        })?;

        Ok(PlanItem {
            id: row.get::<_, i64>(0)? as u64,
            date: row
                .get::<_, String>(1)?
                .parse::<Date>()
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?,
            item_type,
            name: row.get(3)?,
            calories: row.get(4)?,
            duration: row.get(5)?,
            actual_duration: row.get(6)?,
            completed: row.get(7)?,
            created_at: row.get::<_, String>(8)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(8, Type::Text, Box::new(e))
            })?,
            updated_at: row.get::<_, String>(9)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(9, Type::Text, Box::new(e))
            })?,
        })
    }

    /// Loads an item inside an open transaction, failing when it is absent.
    fn load_item(tx: &rusqlite::Transaction<'_>, id: u64) -> Result<PlanItem> {
        tx.query_row(
            &format!("SELECT {ITEM_COLUMNS} FROM plan_items WHERE id = ?1"),
            params![id as i64],
            Self::build_item_from_row,
        )
        .optional()
        .db_context("Failed to query plan item")?
        .ok_or(TrackerError::ItemNotFound { id })
    }

    /// Stores a validated item and returns it with its assigned id and
    /// timestamps.
    pub fn create_item(&mut self, item: &NewItem) -> Result<PlanItem> {
        if item.item_type == ItemType::Meal && item.actual_duration.is_some() {
            return Err(meal_actual_duration_error());
        }

        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_ITEM_SQL,
            params![
                item.date.to_string(),
                item.item_type.as_str(),
                &item.name,
                item.calories,
                item.duration,
                item.actual_duration,
                item.completed,
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert plan item")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Created {} item {id} on {}", item.item_type, item.date);

        Ok(PlanItem {
            id,
            date: item.date,
            item_type: item.item_type,
            name: item.name.clone(),
            calories: item.calories,
            duration: item.duration,
            actual_duration: item.actual_duration,
            completed: item.completed,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a single item by its ID.
    pub fn get_item(&self, id: u64) -> Result<Option<PlanItem>> {
        let mut stmt = self
            .connection
            .prepare(&format!("SELECT {ITEM_COLUMNS} FROM plan_items WHERE id = ?1"))
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![id as i64], Self::build_item_from_row)
            .optional()
            .db_context("Failed to get plan item")
    }

    /// Retrieves every item of a date in insertion order.
    pub fn get_items_by_date(&self, date: Date) -> Result<Vec<PlanItem>> {
        let mut stmt = self
            .connection
            .prepare(&format!(
                "SELECT {ITEM_COLUMNS} FROM plan_items WHERE date = ?1 ORDER BY id"
            ))
            .db_context("Failed to prepare query")?;

        let items = stmt
            .query_map(params![date.to_string()], Self::build_item_from_row)
            .db_context("Failed to query plan items")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch plan items")?;

        Ok(items)
    }

    /// Retrieves every item inside an inclusive date range, ordered by date
    /// and then by insertion order.
    pub fn get_items_in_range(&self, range: &DateRange) -> Result<Vec<PlanItem>> {
        let mut query = format!("SELECT {ITEM_COLUMNS} FROM plan_items");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<String> = Vec::new();

        if let Some(start) = range.start {
            conditions.push("date >= ?");
            params_vec.push(start.to_string());
        }

        if let Some(end) = range.end {
            conditions.push("date <= ?");
            params_vec.push(end.to_string());
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY date, id");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let items = stmt
            .query_map(rusqlite::params_from_iter(params_vec.iter()), Self::build_item_from_row)
            .db_context("Failed to query plan items")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch plan items")?;

        Ok(items)
    }

    /// Merges the provided fields into a stored item.
    ///
    /// An empty request leaves the item untouched, including its
    /// `updated_at`.
    pub fn update_item(&mut self, id: u64, request: UpdateItemRequest) -> Result<PlanItem> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let mut item = Self::load_item(&tx, id)?;

        if request.is_empty() {
            return Ok(item);
        }

        if item.is_meal() && matches!(request.actual_duration, Some(Some(_))) {
            return Err(meal_actual_duration_error());
        }

        if let Some(name) = request.name {
            item.name = name;
        }
        if let Some(calories) = request.calories {
            item.calories = calories;
        }
        if let Some(duration) = request.duration {
            item.duration = duration;
        }
        if let Some(actual_duration) = request.actual_duration {
            item.actual_duration = actual_duration;
        }
        if let Some(completed) = request.completed {
            item.completed = completed;
        }

        let now = Timestamp::now();
        item.updated_at = now;

        tx.execute(
            UPDATE_ITEM_SQL,
            params![
                &item.name,
                item.calories,
                item.duration,
                item.actual_duration,
                item.completed,
                now.to_string(),
                id as i64
            ],
        )
        .db_context("Failed to update plan item")?;

        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Updated item {id}");

        Ok(item)
    }

    /// Sets the completion flag of an item.
    ///
    /// When the stored state already matches the request nothing is written
    /// and the stored item is returned as is. An actual duration can only be
    /// recorded while completing an exercise; reopening keeps whatever was
    /// recorded before.
    pub fn set_completed(
        &mut self,
        id: u64,
        completed: bool,
        actual_duration: Option<u32>,
    ) -> Result<PlanItem> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let mut item = Self::load_item(&tx, id)?;

        if actual_duration.is_some() {
            if item.is_meal() {
                return Err(meal_actual_duration_error());
            }
            if !completed {
                return Err(TrackerError::validation("actual_duration")
                    .with_reason("An actual duration can only be recorded when completing an item"));
            }
        }

        let duration_unchanged = actual_duration.is_none() || actual_duration == item.actual_duration;
        if item.completed == completed && duration_unchanged {
            debug!("Item {id} already has completed={completed}");
            return Ok(item);
        }

        item.completed = completed;
        if actual_duration.is_some() {
            item.actual_duration = actual_duration;
        }
        let now = Timestamp::now();
        item.updated_at = now;

        tx.execute(
            UPDATE_COMPLETED_SQL,
            params![item.completed, item.actual_duration, now.to_string(), id as i64],
        )
        .db_context("Failed to update completion")?;

        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Set item {id} completed={completed}");

        Ok(item)
    }

    /// Permanently removes an item and returns what was deleted.
    pub fn delete_item(&mut self, id: u64) -> Result<PlanItem> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let item = Self::load_item(&tx, id)?;

        tx.execute(DELETE_ITEM_SQL, params![id as i64])
            .db_context("Failed to delete plan item")?;

        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Deleted item {id} from {}", item.date);

        Ok(item)
    }
}

fn meal_actual_duration_error() -> TrackerError {
    TrackerError::validation("actual_duration")
        .with_reason("An actual duration can only be recorded for exercises")
}
