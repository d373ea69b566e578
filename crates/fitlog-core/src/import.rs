//! Spreadsheet-style rows and the report of a best-effort import.
//!
//! An importer hands over rows exactly as they were read from a sheet: every
//! cell is free-form, numbers may arrive as text and the category uses the
//! labels people write in their sheets. [`ImportRow::to_create_item`] turns a
//! row into creation parameters or explains why it cannot.
//!
//! [`write_items`] produces the matching export: stored items as a JSON
//! array whose objects [`read_rows`] accepts again.

use std::io::{Read, Write};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{ImportRowError, Result},
    models::{ItemType, PlanItem},
    params::{CreateItem, MAX_CALORIES},
};

/// Longest duration accepted from an imported row, one full day in minutes.
pub const MAX_IMPORT_DURATION: i64 = 1440;

/// A spreadsheet cell holding either a number or text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
}

impl Cell {
    fn to_number(&self, field: &str) -> std::result::Result<Option<f64>, String> {
        match self {
            Cell::Number(n) => Ok(Some(*n)),
            Cell::Text(text) if text.trim().is_empty() => Ok(None),
            Cell::Text(text) => text
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| format!("{field} is not a number: '{text}'")),
        }
    }
}

/// One row of an imported sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ImportRow {
    /// Date of the row (YYYY-MM-DD)
    #[serde(default)]
    pub date: String,
    /// Category label, e.g. 'meal', '餐食', 'exercise' or '运动'
    #[serde(rename = "type", default)]
    pub item_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub calories: Option<Cell>,
    /// Duration in minutes
    #[serde(default)]
    pub duration: Option<Cell>,
}

/// Map a category label from a sheet to an item type.
///
/// ASCII labels are matched case-insensitively.
///
/// # Examples
///
/// ```rust
/// use fitlog_core::{import::parse_type_label, models::ItemType};
///
/// assert_eq!(parse_type_label("餐食"), Some(ItemType::Meal));
/// assert_eq!(parse_type_label(" Exercise "), Some(ItemType::Exercise));
/// assert_eq!(parse_type_label("snack"), None);
/// ```
pub fn parse_type_label(label: &str) -> Option<ItemType> {
    match label.trim().to_lowercase().as_str() {
        "meal" | "餐食" | "食物" => Some(ItemType::Meal),
        "exercise" | "运动" | "锻炼" => Some(ItemType::Exercise),
        _ => None,
    }
}

impl ImportRow {
    /// Convert the row into creation parameters.
    ///
    /// Checks the sheet-specific rules: a known category label, present
    /// calories within `0..=10000` and a duration of at most one day. Field
    /// rules shared with every other caller are applied later by
    /// [`CreateItem::validate`].
    pub fn to_create_item(&self) -> std::result::Result<CreateItem, String> {
        let item_type = parse_type_label(&self.item_type)
            .ok_or_else(|| format!("Unknown item type '{}'", self.item_type))?;

        let calories = self
            .calories
            .as_ref()
            .map(|cell| cell.to_number("calories"))
            .transpose()?
            .flatten()
            .ok_or_else(|| "calories is required".to_string())?;
        if calories > MAX_CALORIES {
            return Err(format!(
                "calories must be at most {MAX_CALORIES}: {calories}"
            ));
        }

        let duration = match self.duration.as_ref() {
            Some(cell) => match cell.to_number("duration")? {
                Some(minutes) if minutes.fract() != 0.0 => {
                    return Err(format!("duration must be whole minutes: {minutes}"));
                }
                Some(minutes) if minutes > MAX_IMPORT_DURATION as f64 => {
                    return Err(format!(
                        "duration must be at most {MAX_IMPORT_DURATION} minutes: {minutes}"
                    ));
                }
                Some(minutes) => Some(minutes as i64),
                None => None,
            },
            None => None,
        };

        Ok(CreateItem {
            date: self.date.trim().to_string(),
            item_type: item_type.as_str().to_string(),
            name: self.name.clone(),
            calories,
            duration,
            actual_duration: None,
            completed: false,
        })
    }
}

/// Read a JSON array of rows.
///
/// # Errors
///
/// * `TrackerError::Serialization` - When the input is not an array of row
///   objects
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<ImportRow>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Write items as a pretty-printed JSON array followed by a newline.
pub fn write_items<W: Write>(mut writer: W, items: &[PlanItem]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, items)?;
    writeln!(writer).map_err(serde_json::Error::io)?;
    writer.flush().map_err(serde_json::Error::io)?;
    Ok(())
}

/// Outcome of a best-effort batch: what was created and which rows failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportReport {
    pub created: Vec<PlanItem>,
    pub failed: Vec<ImportRowError>,
}

impl ImportReport {
    pub fn is_complete_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total_rows(&self) -> usize {
        self.created.len() + self.failed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(item_type: &str, calories: Option<Cell>, duration: Option<Cell>) -> ImportRow {
        ImportRow {
            date: "2024-01-01".to_string(),
            item_type: item_type.to_string(),
            name: "Row".to_string(),
            calories,
            duration,
        }
    }

    #[test]
    fn test_type_labels() {
        for label in ["meal", "MEAL", "餐食", "食物"] {
            assert_eq!(parse_type_label(label), Some(ItemType::Meal), "{label}");
        }
        for label in ["exercise", "Exercise", "运动", "锻炼"] {
            assert_eq!(parse_type_label(label), Some(ItemType::Exercise), "{label}");
        }
        assert_eq!(parse_type_label(""), None);
    }

    #[test]
    fn test_row_with_text_cells() {
        let params = row(
            "运动",
            Some(Cell::Text(" 300 ".to_string())),
            Some(Cell::Text("30".to_string())),
        )
        .to_create_item()
        .unwrap();

        assert_eq!(params.item_type, "exercise");
        assert_eq!(params.calories, 300.0);
        assert_eq!(params.duration, Some(30));
    }

    #[test]
    fn test_row_blank_duration_is_absent() {
        let params = row(
            "餐食",
            Some(Cell::Number(450.0)),
            Some(Cell::Text(String::new())),
        )
        .to_create_item()
        .unwrap();
        assert_eq!(params.duration, None);
    }

    #[test]
    fn test_row_rejections() {
        assert!(row("snack", Some(Cell::Number(1.0)), None)
            .to_create_item()
            .is_err());
        assert!(row("meal", None, None).to_create_item().is_err());
        assert!(row("meal", Some(Cell::Text("lots".to_string())), None)
            .to_create_item()
            .is_err());
        assert!(row("meal", Some(Cell::Number(10_001.0)), None)
            .to_create_item()
            .is_err());
        assert!(row("exercise", Some(Cell::Number(1.0)), Some(Cell::Number(1441.0)))
            .to_create_item()
            .is_err());
        assert!(row("exercise", Some(Cell::Number(1.0)), Some(Cell::Number(2.5)))
            .to_create_item()
            .is_err());
    }

    #[test]
    fn test_negative_calories_pass_through_to_validation() {
        let params = row("meal", Some(Cell::Number(-5.0)), None)
            .to_create_item()
            .unwrap();
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_read_rows_mixed_cells() {
        let json = r#"[
            {"date": "2024-01-01", "type": "餐食", "name": "早餐", "calories": 500},
            {"date": "2024-01-01", "type": "运动", "name": "跑步", "calories": "300", "duration": 30}
        ]"#;

        let rows = read_rows(json.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].calories, Some(Cell::Number(500.0)));
        assert_eq!(rows[1].calories, Some(Cell::Text("300".to_string())));
        assert_eq!(rows[1].duration, Some(Cell::Number(30.0)));
    }

    #[test]
    fn test_read_rows_rejects_non_array() {
        assert!(read_rows(r#"{"date": "2024-01-01"}"#.as_bytes()).is_err());
    }

    #[test]
    fn test_exported_items_read_back_as_rows() {
        let item = PlanItem {
            id: 7,
            date: jiff::civil::date(2024, 1, 1),
            item_type: ItemType::Exercise,
            name: "跑步".to_string(),
            calories: 300.0,
            duration: Some(30),
            actual_duration: Some(35),
            completed: true,
            created_at: jiff::Timestamp::UNIX_EPOCH,
            updated_at: jiff::Timestamp::UNIX_EPOCH,
        };

        let mut buffer = Vec::new();
        write_items(&mut buffer, std::slice::from_ref(&item)).unwrap();
        assert!(buffer.ends_with(b"]\n"));

        let rows = read_rows(buffer.as_slice()).unwrap();
        assert_eq!(rows.len(), 1);
        let params = rows[0].to_create_item().unwrap();
        assert_eq!(params.date, "2024-01-01");
        assert_eq!(params.item_type, "exercise");
        assert_eq!(params.name, "跑步");
        assert_eq!(params.calories, 300.0);
        assert_eq!(params.duration, Some(30));
    }
}
