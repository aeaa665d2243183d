// ABOUTME: Integration tests for the database layer
// ABOUTME: Validates the uniqueness invariant and the filtered log query directly
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

mod common;

use chrono::NaiveDate;
use common::create_test_database;
use trackd::models::NewExercise;
use trackd::validation::DateRange;
use uuid::Uuid;

#[tokio::test]
async fn test_create_user_enforces_normalized_uniqueness() {
    let database = create_test_database().await;

    let first = database.create_user("Alice").await.unwrap();
    // Same normalized username: the existing row wins
    let second = database.create_user("  alice ").await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.username, "Alice");

    let users = database.get_users().await.unwrap();
    assert_eq!(users.len(), 1);
}

#[tokio::test]
async fn test_get_user_by_normalized_username() {
    let database = create_test_database().await;
    let created = database.create_user("Bob").await.unwrap();

    let found = database
        .get_user_by_normalized_username("bob")
        .await
        .unwrap()
        .expect("user should be found by normalized name");
    assert_eq!(found.id, created.id);

    let missing = database
        .get_user_by_normalized_username("carol")
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_get_user_by_unknown_id_is_none() {
    let database = create_test_database().await;
    assert!(database.get_user(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_exercise_round_trip_preserves_fields() {
    let database = create_test_database().await;
    let user = database.create_user("alice").await.unwrap();

    let created = database
        .create_exercise(&NewExercise {
            user_id: user.id,
            description: "interval run".to_owned(),
            duration: 42,
            date: NaiveDate::from_ymd_opt(2020, 6, 15).unwrap(),
        })
        .await
        .unwrap();

    let entries = database
        .get_exercises(user.id, &DateRange::default(), 100)
        .await
        .unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, created.id);
    assert_eq!(entries[0].user_id, user.id);
    assert_eq!(entries[0].description, "interval run");
    assert_eq!(entries[0].duration, 42);
    assert_eq!(entries[0].date, created.date);
}

#[tokio::test]
async fn test_get_exercises_applies_range_and_limit() {
    let database = create_test_database().await;
    let user = database.create_user("alice").await.unwrap();

    for (month, duration) in [(1, 10), (4, 20), (7, 30), (10, 40)] {
        database
            .create_exercise(&NewExercise {
                user_id: user.id,
                description: format!("month {month}"),
                duration,
                date: NaiveDate::from_ymd_opt(2020, month, 15).unwrap(),
            })
            .await
            .unwrap();
    }

    let range = DateRange {
        from: NaiveDate::from_ymd_opt(2020, 3, 1),
        to: NaiveDate::from_ymd_opt(2020, 8, 31),
    };
    let in_range = database.get_exercises(user.id, &range, 100).await.unwrap();
    assert_eq!(in_range.len(), 2);

    let capped = database
        .get_exercises(user.id, &DateRange::default(), 3)
        .await
        .unwrap();
    assert_eq!(capped.len(), 3);

    // Negative limit takes SQLite's "no limit" semantics
    let unbounded = database
        .get_exercises(user.id, &DateRange::default(), -1)
        .await
        .unwrap();
    assert_eq!(unbounded.len(), 4);
}

#[tokio::test]
async fn test_get_exercises_scoped_to_user() {
    let database = create_test_database().await;
    let alice = database.create_user("alice").await.unwrap();
    let bob = database.create_user("bob").await.unwrap();

    database
        .create_exercise(&NewExercise {
            user_id: alice.id,
            description: "run".to_owned(),
            duration: 30,
            date: NaiveDate::from_ymd_opt(2020, 6, 15).unwrap(),
        })
        .await
        .unwrap();

    let bobs = database
        .get_exercises(bob.id, &DateRange::default(), 100)
        .await
        .unwrap();
    assert!(bobs.is_empty());
}
