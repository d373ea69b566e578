mod common;

use common::{create_test_tracker, exercise, meal};
use fitlog_core::{
    import::{Cell, ImportRow},
    params::{ApplyPlan, DateParam, DateRangeParams, Id, SetCompleted, UpdateItem},
    ItemType, TrackerError,
};

fn day(date: &str) -> DateParam {
    DateParam {
        date: date.to_string(),
    }
}

fn range(start: Option<&str>, end: Option<&str>) -> DateRangeParams {
    DateRangeParams {
        start_date: start.map(str::to_string),
        end_date: end.map(str::to_string),
    }
}

#[tokio::test]
async fn test_create_then_get_day_round_trip() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let mut params = exercise("2024-01-01", "Running", 300.5, Some(30));
    params.actual_duration = Some(35);
    params.completed = true;

    let created = tracker.create_item(&params).await.unwrap();
    let plan = tracker.get_day(&day("2024-01-01")).await.unwrap();

    assert!(plan.meals.is_empty());
    assert_eq!(plan.exercises, vec![created.clone()]);

    let stored = &plan.exercises[0];
    assert_eq!(stored.name, "Running");
    assert_eq!(stored.item_type, ItemType::Exercise);
    assert_eq!(stored.calories, 300.5);
    assert_eq!(stored.duration, Some(30));
    assert_eq!(stored.actual_duration, Some(35));
    assert!(stored.completed);
}

#[tokio::test]
async fn test_breakfast_and_run_scenario() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    tracker
        .create_item(&meal("2024-01-01", "早餐", 500.0))
        .await
        .unwrap();
    let run = tracker
        .create_item(&exercise("2024-01-01", "跑步", 300.0, Some(30)))
        .await
        .unwrap();
    tracker
        .set_completed(&SetCompleted {
            id: run.id,
            completed: true,
            actual_duration: Some(35),
        })
        .await
        .unwrap();

    let stats = tracker.daily_stats(&day("2024-01-01")).await.unwrap();

    assert_eq!(stats.total_calories_intake, 500.0);
    assert_eq!(stats.total_calories_burned, 300.0);
    assert_eq!(stats.net_calories, 200.0);
    assert_eq!(stats.total_exercise_duration, 35);
    assert_eq!(stats.total_items, 2);
    assert_eq!(stats.completed_items, 1);
    assert_eq!(stats.completion_rate, 50.0);
}

#[tokio::test]
async fn test_stats_for_empty_date() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let stats = tracker.daily_stats(&day("2030-12-31")).await.unwrap();
    assert_eq!(stats.total_items, 0);
    assert_eq!(stats.completion_rate, 0.0);

    let plan = tracker.get_day(&day("2030-12-31")).await.unwrap();
    assert!(plan.is_empty());
}

#[tokio::test]
async fn test_stats_follow_edits() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let lunch = tracker
        .create_item(&meal("2024-02-01", "Lunch", 600.0))
        .await
        .unwrap();
    assert_eq!(
        tracker
            .daily_stats(&day("2024-02-01"))
            .await
            .unwrap()
            .total_calories_intake,
        600.0
    );

    tracker
        .update_item(&UpdateItem {
            id: lunch.id,
            calories: Some(450.0),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(
        tracker
            .daily_stats(&day("2024-02-01"))
            .await
            .unwrap()
            .total_calories_intake,
        450.0
    );

    tracker.delete_item(&Id { id: lunch.id }).await.unwrap();
    let stats = tracker.daily_stats(&day("2024-02-01")).await.unwrap();
    assert_eq!(stats.total_calories_intake, 0.0);
    assert_eq!(stats.total_items, 0);
}

#[tokio::test]
async fn test_create_rejects_invalid_input() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let cases = [
        meal("2024-01-01", "Cake", -10.0),
        meal("2024-01-01", "  ", 10.0),
        meal("01/01/2024", "Cake", 10.0),
        {
            let mut params = meal("2024-01-01", "Cake", 10.0);
            params.item_type = "dessert".to_string();
            params
        },
    ];

    for params in &cases {
        let err = tracker.create_item(params).await.unwrap_err();
        assert!(
            matches!(err, TrackerError::Validation { .. }),
            "{params:?} gave {err:?}"
        );
    }

    let plan = tracker.get_day(&day("2024-01-01")).await.unwrap();
    assert!(plan.is_empty());
}

#[tokio::test]
async fn test_update_validation_is_never_partial() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let dinner = tracker
        .create_item(&meal("2024-01-01", "Dinner", 700.0))
        .await
        .unwrap();

    let err = tracker
        .update_item(&UpdateItem {
            id: dinner.id,
            name: Some("Late dinner".to_string()),
            calories: Some(-1.0),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, TrackerError::Validation { .. }));

    let stored = tracker.require_item(&Id { id: dinner.id }).await.unwrap();
    assert_eq!(stored, dinner);
}

#[tokio::test]
async fn test_update_and_delete_missing_item() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let err = tracker
        .update_item(&UpdateItem {
            id: 77,
            name: Some("Nothing".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, TrackerError::ItemNotFound { id: 77 }));

    let err = tracker.delete_item(&Id { id: 77 }).await.unwrap_err();
    assert!(matches!(err, TrackerError::ItemNotFound { id: 77 }));

    assert!(tracker.get_item(&Id { id: 77 }).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_removes_from_day() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let keep = tracker
        .create_item(&meal("2024-01-01", "Keep", 100.0))
        .await
        .unwrap();
    let dropped = tracker
        .create_item(&meal("2024-01-01", "Drop", 100.0))
        .await
        .unwrap();

    let deleted = tracker.delete_item(&Id { id: dropped.id }).await.unwrap();
    assert_eq!(deleted.name, "Drop");

    let plan = tracker.get_day(&day("2024-01-01")).await.unwrap();
    assert_eq!(plan.meals, vec![keep]);
}

#[tokio::test]
async fn test_complete_twice_is_idempotent() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let run = tracker
        .create_item(&exercise("2024-01-01", "Run", 300.0, Some(30)))
        .await
        .unwrap();

    let complete = SetCompleted {
        id: run.id,
        completed: true,
        actual_duration: None,
    };
    let first = tracker.set_completed(&complete).await.unwrap();
    let second = tracker.set_completed(&complete).await.unwrap();

    assert!(first.completed);
    assert_eq!(second, first);
    assert_eq!(second.updated_at, first.updated_at);
}

#[tokio::test]
async fn test_completion_is_reversible() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let snack = tracker
        .create_item(&meal("2024-01-01", "Snack", 150.0))
        .await
        .unwrap();

    for completed in [true, false, true] {
        let item = tracker
            .set_completed(&SetCompleted {
                id: snack.id,
                completed,
                actual_duration: None,
            })
            .await
            .unwrap();
        assert_eq!(item.completed, completed);
    }

    let stats = tracker.daily_stats(&day("2024-01-01")).await.unwrap();
    assert_eq!(stats.completion_rate, 100.0);
}

#[tokio::test]
async fn test_history_is_sparse() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    tracker
        .create_item(&exercise("2024-01-01", "Run", 300.0, Some(30)))
        .await
        .unwrap();
    tracker
        .create_item(&meal("2024-01-03", "Lunch", 600.0))
        .await
        .unwrap();
    tracker
        .create_item(&exercise("2024-01-03", "Walk", 100.0, Some(20)))
        .await
        .unwrap();

    let summaries = tracker
        .list_dates(&range(Some("2024-01-01"), Some("2024-01-03")))
        .await
        .unwrap();

    let dates: Vec<String> = summaries.iter().map(|s| s.date.to_string()).collect();
    assert_eq!(dates, vec!["2024-01-01", "2024-01-03"]);
    assert_eq!(summaries[1].meal_count, 1);
    assert_eq!(summaries[1].exercise_count, 1);
    assert_eq!(summaries[1].stats.net_calories, 500.0);

    let stats = tracker
        .range_stats(&range(Some("2024-01-01"), Some("2024-01-03")))
        .await
        .unwrap();
    assert_eq!(stats.total_training_days, 2);
    assert_eq!(stats.total_calories_burned, 400.0);
    assert_eq!(stats.total_exercise_duration, 50);
    assert_eq!(stats.average_daily_calories_burned, 200.0);
    assert_eq!(stats.average_daily_exercise_duration, 25.0);
}

#[tokio::test]
async fn test_range_bounds_are_inclusive_and_optional() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    for date in ["2024-01-01", "2024-01-15", "2024-01-31"] {
        tracker
            .create_item(&meal(date, "Meal", 100.0))
            .await
            .unwrap();
    }

    let count = |summaries: fitlog_core::DateSummaries| summaries.len();

    assert_eq!(count(tracker.list_dates(&range(None, None)).await.unwrap()), 3);
    assert_eq!(
        count(tracker.list_dates(&range(Some("2024-01-15"), None)).await.unwrap()),
        2
    );
    assert_eq!(
        count(tracker.list_dates(&range(None, Some("2024-01-15"))).await.unwrap()),
        2
    );
    assert_eq!(
        count(
            tracker
                .list_dates(&range(Some("2024-01-15"), Some("2024-01-15")))
                .await
                .unwrap()
        ),
        1
    );
}

#[tokio::test]
async fn test_inverted_range_is_rejected() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let err = tracker
        .range_stats(&range(Some("2024-02-01"), Some("2024-01-01")))
        .await
        .unwrap_err();
    match err {
        TrackerError::Validation { field, .. } => assert_eq!(field, "date_range"),
        other => panic!("Expected Validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_average_completion_rate_is_mean_of_days() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    // 2024-03-01: 1 of 2 completed. 2024-03-02: 2 of 4 completed.
    let mut ids = Vec::new();
    for (date, count) in [("2024-03-01", 2), ("2024-03-02", 4)] {
        for n in 0..count {
            let item = tracker
                .create_item(&meal(date, &format!("Meal {n}"), 100.0))
                .await
                .unwrap();
            ids.push((date, n, item.id));
        }
    }
    for (_, n, id) in &ids {
        if n % 2 == 0 {
            tracker
                .set_completed(&SetCompleted {
                    id: *id,
                    completed: true,
                    actual_duration: None,
                })
                .await
                .unwrap();
        }
    }

    let stats = tracker.range_stats(&range(None, None)).await.unwrap();
    assert_eq!(stats.total_items, 6);
    assert_eq!(stats.completed_items, 3);
    assert_eq!(stats.average_completion_rate, 50.0);

    // A third date at 100% moves the mean to (50 + 50 + 100) / 3
    let extra = tracker
        .create_item(&meal("2024-03-03", "Solo", 100.0))
        .await
        .unwrap();
    tracker
        .set_completed(&SetCompleted {
            id: extra.id,
            completed: true,
            actual_duration: None,
        })
        .await
        .unwrap();

    let stats = tracker.range_stats(&range(None, None)).await.unwrap();
    assert_eq!(stats.average_completion_rate, 66.7);
}

#[tokio::test]
async fn test_empty_range_stats() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let stats = tracker.range_stats(&range(None, None)).await.unwrap();
    assert_eq!(stats.total_training_days, 0);
    assert_eq!(stats.average_daily_calories_burned, 0.0);
    assert_eq!(stats.average_completion_rate, 0.0);
    assert!(tracker.list_dates(&range(None, None)).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_import_with_one_bad_row() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let row = |item_type: &str, name: &str, calories: f64| ImportRow {
        date: "2024-01-01".to_string(),
        item_type: item_type.to_string(),
        name: name.to_string(),
        calories: Some(Cell::Number(calories)),
        duration: None,
    };

    let report = tracker
        .import_rows(vec![
            row("餐食", "早餐", 500.0),
            row("餐食", "午餐", -200.0),
            row("运动", "跑步", 300.0),
        ])
        .await
        .unwrap();

    assert_eq!(report.created.len(), 2);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].row, 2);
    assert!(report.failed[0].reason.contains("calories"));

    let plan = tracker.get_day(&day("2024-01-01")).await.unwrap();
    assert_eq!(plan.total_items(), 2);
    assert_eq!(plan.meals[0].name, "早餐");
    assert_eq!(plan.exercises[0].name, "跑步");
}

#[tokio::test]
async fn test_import_reports_sheet_level_problems() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let rows = vec![
        ImportRow {
            date: "2024-01-01".to_string(),
            item_type: "snack".to_string(),
            name: "Chips".to_string(),
            calories: Some(Cell::Number(100.0)),
            duration: None,
        },
        ImportRow {
            date: "2024-01-01".to_string(),
            item_type: "运动".to_string(),
            name: "Marathon".to_string(),
            calories: Some(Cell::Text("2500".to_string())),
            duration: Some(Cell::Number(240.0)),
        },
        ImportRow {
            date: "not a date".to_string(),
            item_type: "meal".to_string(),
            name: "Dinner".to_string(),
            calories: Some(Cell::Number(100.0)),
            duration: None,
        },
    ];

    let report = tracker.import_rows(rows).await.unwrap();

    let failed_rows: Vec<usize> = report.failed.iter().map(|f| f.row).collect();
    assert_eq!(failed_rows, vec![1, 3]);
    assert_eq!(report.created.len(), 1);
    assert_eq!(report.created[0].duration, Some(240));
}

#[tokio::test]
async fn test_apply_plan_is_best_effort() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let report = tracker
        .apply_plan(&ApplyPlan {
            items: vec![
                meal("2024-05-01", "Oatmeal", 350.0),
                meal("2024-05-01", "", 100.0),
                exercise("2024-05-01", "Yoga", 150.0, Some(45)),
            ],
        })
        .await
        .unwrap();

    assert_eq!(report.created.len(), 2);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].row, 2);
    assert!(!report.is_complete_success());

    let stats = tracker.daily_stats(&day("2024-05-01")).await.unwrap();
    assert_eq!(stats.total_items, 2);
    assert_eq!(stats.total_exercise_duration, 45);
}

#[tokio::test]
async fn test_concurrent_edits_to_different_fields_all_survive() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let mut ids = Vec::new();
    for n in 0..5 {
        let item = tracker
            .create_item(&exercise("2024-01-01", &format!("Run {n}"), 300.0, Some(30)))
            .await
            .unwrap();
        ids.push(item.id);
    }

    let mut handles = Vec::new();
    for &id in &ids {
        let t = tracker.clone();
        handles.push(tokio::spawn(async move {
            t.update_item(&UpdateItem {
                id,
                name: Some(format!("Tempo {id}")),
                ..Default::default()
            })
            .await
        }));
        let t = tracker.clone();
        handles.push(tokio::spawn(async move {
            t.update_item(&UpdateItem {
                id,
                calories: Some(420.0),
                ..Default::default()
            })
            .await
        }));
        let t = tracker.clone();
        handles.push(tokio::spawn(async move {
            t.update_item(&UpdateItem {
                id,
                duration: Some(Some(50)),
                ..Default::default()
            })
            .await
        }));
        let t = tracker.clone();
        handles.push(tokio::spawn(async move {
            t.set_completed(&SetCompleted {
                id,
                completed: true,
                actual_duration: Some(55),
            })
            .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    for id in ids {
        let stored = tracker.require_item(&Id { id }).await.unwrap();
        assert_eq!(stored.name, format!("Tempo {id}"));
        assert_eq!(stored.calories, 420.0);
        assert_eq!(stored.duration, Some(50));
        assert!(stored.completed);
        assert_eq!(stored.actual_duration, Some(55));
    }

    let stats = tracker.daily_stats(&day("2024-01-01")).await.unwrap();
    assert_eq!(stats.completed_items, 5);
    assert_eq!(stats.total_calories_burned, 2100.0);
    assert_eq!(stats.total_exercise_duration, 275);
}

#[tokio::test]
async fn test_batch_continues_after_store_failure() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let conn = rusqlite::Connection::open(tracker.database_path()).unwrap();
    conn.execute_batch(
        "CREATE TRIGGER reject_name BEFORE INSERT ON plan_items \
         WHEN NEW.name = 'Rejected' \
         BEGIN SELECT RAISE(ABORT, 'name rejected by trigger'); END;",
    )
    .unwrap();
    drop(conn);

    let report = tracker
        .apply_plan(&ApplyPlan {
            items: vec![
                meal("2024-07-01", "Porridge", 300.0),
                meal("2024-07-01", "Rejected", 100.0),
                exercise("2024-07-01", "Walk", 120.0, Some(40)),
            ],
        })
        .await
        .unwrap();

    let created: Vec<&str> = report.created.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(created, vec!["Porridge", "Walk"]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].row, 2);
    assert!(report.failed[0].reason.contains("Database error"));

    let plan = tracker.get_day(&day("2024-07-01")).await.unwrap();
    assert_eq!(plan.total_items(), 2);
}

#[tokio::test]
async fn test_calorie_ceiling_keeps_net_calories_finite() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    for params in [
        meal("2024-08-01", "Feast", f64::MAX),
        exercise("2024-08-01", "Marathon", f64::MAX, None),
    ] {
        let err = tracker.create_item(&params).await.unwrap_err();
        assert!(matches!(err, TrackerError::Validation { ref field, .. } if field == "calories"));
    }

    for _ in 0..2 {
        tracker
            .create_item(&meal("2024-08-01", "Feast", 10_000.0))
            .await
            .unwrap();
        tracker
            .create_item(&exercise("2024-08-01", "Marathon", 10_000.0, None))
            .await
            .unwrap();
    }

    let stats = tracker.daily_stats(&day("2024-08-01")).await.unwrap();
    assert_eq!(stats.total_calories_intake, 20_000.0);
    assert_eq!(stats.total_calories_burned, 20_000.0);
    assert_eq!(stats.net_calories, 0.0);
    assert!(stats.net_calories.is_finite());
}

#[tokio::test]
async fn test_clearing_actual_duration_restores_planned_minutes() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let run = tracker
        .create_item(&exercise("2024-09-01", "Run", 300.0, Some(30)))
        .await
        .unwrap();
    tracker
        .set_completed(&SetCompleted {
            id: run.id,
            completed: true,
            actual_duration: Some(300),
        })
        .await
        .unwrap();
    assert_eq!(
        tracker
            .daily_stats(&day("2024-09-01"))
            .await
            .unwrap()
            .total_exercise_duration,
        300
    );

    let updated = tracker
        .update_item(&UpdateItem {
            id: run.id,
            actual_duration: Some(None),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(updated.actual_duration, None);
    assert!(updated.completed);

    let stats = tracker.daily_stats(&day("2024-09-01")).await.unwrap();
    assert_eq!(stats.total_exercise_duration, 30);
}

#[tokio::test]
async fn test_concurrent_creates_on_different_dates() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let mut handles = Vec::new();
    for n in 1..=6 {
        let tracker = tracker.clone();
        handles.push(tokio::spawn(async move {
            tracker
                .create_item(&meal(&format!("2024-06-0{n}"), "Meal", 100.0))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let stats = tracker.range_stats(&range(None, None)).await.unwrap();
    assert_eq!(stats.total_training_days, 6);
    assert_eq!(stats.total_items, 6);
}

#[tokio::test]
async fn test_export_items_in_range_sorted_by_date() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    tracker
        .create_item(&meal("2024-02-03", "Dinner", 700.0))
        .await
        .unwrap();
    tracker
        .create_item(&exercise("2024-02-01", "Run", 300.0, Some(30)))
        .await
        .unwrap();
    tracker
        .create_item(&meal("2024-02-01", "Lunch", 600.0))
        .await
        .unwrap();
    tracker
        .create_item(&meal("2024-03-01", "Late", 100.0))
        .await
        .unwrap();

    let items = tracker
        .export_items(&range(Some("2024-02-01"), Some("2024-02-28")))
        .await
        .unwrap();
    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Run", "Lunch", "Dinner"]);

    let everything = tracker.export_items(&range(None, None)).await.unwrap();
    assert_eq!(everything.len(), 4);

    let err = tracker
        .export_items(&range(Some("2024-03-01"), Some("2024-02-01")))
        .await
        .unwrap_err();
    assert!(matches!(err, TrackerError::Validation { ref field, .. } if field == "date_range"));
}
