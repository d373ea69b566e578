use fitlog_core::{params::CreateItem, Tracker, TrackerBuilder};
use tempfile::TempDir;

/// Helper function to create a tracker backed by a temporary database
pub async fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

pub fn meal(date: &str, name: &str, calories: f64) -> CreateItem {
    CreateItem {
        date: date.to_string(),
        item_type: "meal".to_string(),
        name: name.to_string(),
        calories,
        ..Default::default()
    }
}

pub fn exercise(date: &str, name: &str, calories: f64, duration: Option<i64>) -> CreateItem {
    CreateItem {
        date: date.to_string(),
        item_type: "exercise".to_string(),
        name: name.to_string(),
        calories,
        duration,
        ..Default::default()
    }
}
