//! Tests for CarMirror loading and locking.

use std::sync::Arc;

use super::CarMirror;
use crate::db::{Car, CarRepository, Database, SqliteDatabase};

fn car(id: &str) -> Car {
    Car {
        id: id.to_string(),
        year: 2020,
        make: "Honda".to_string(),
        model: "Civic".to_string(),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn load_seeds_from_store_in_order() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    for id in ["b", "a", "c"] {
        db.cars().create(&car(id)).await.expect("Insert should succeed");
    }

    let mirror = CarMirror::load(&db).await.expect("Load should succeed");

    let cars = mirror.read().await;
    let ids: Vec<&str> = cars.all().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn load_from_empty_store_is_empty() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");

    let mirror = CarMirror::load(&db).await.expect("Load should succeed");
    assert!(mirror.read().await.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn load_propagates_store_errors() {
    // No migration: the cars table is missing
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    assert!(CarMirror::load(&db).await.is_err());
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_appends_are_all_kept() {
    let mirror = Arc::new(CarMirror::default());

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let mirror = Arc::clone(&mirror);
            tokio::spawn(async move {
                mirror.write().await.append(car(&i.to_string()));
            })
        })
        .collect();

    for handle in handles {
        handle.await.expect("Task should not panic");
    }

    assert_eq!(mirror.read().await.len(), 32);
}

#[tokio::test(flavor = "multi_thread")]
async fn load_fails_on_undecodable_row() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    sqlx::query("INSERT INTO cars (id, year, make, model) VALUES ('1', 'nineteen', 'Ford', 'T')")
        .execute(db.pool())
        .await
        .expect("Insert should succeed");

    assert!(CarMirror::load(&db).await.is_err());
}
