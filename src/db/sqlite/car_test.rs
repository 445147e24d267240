//! Tests for SqliteCarRepository.

use crate::db::{Car, CarRepository, Database, DbError, SqliteDatabase};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    db
}

fn car(id: &str, year: i64, make: &str, model: &str) -> Car {
    Car {
        id: id.to_string(),
        year,
        make: make.to_string(),
        model: model.to_string(),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn car_list_initially_empty() {
    let db = setup_db().await;

    let cars = db.cars().list().await.expect("List should succeed");
    assert!(cars.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn car_create_and_list() {
    let db = setup_db().await;
    let cars = db.cars();

    let civic = car("1", 2020, "Honda", "Civic");
    cars.create(&civic).await.expect("Create should succeed");

    let listed = cars.list().await.expect("List should succeed");
    assert_eq!(listed, vec![civic]);
}

#[tokio::test(flavor = "multi_thread")]
async fn car_list_preserves_insertion_order() {
    let db = setup_db().await;
    let cars = db.cars();

    // Ids deliberately out of lexical order
    let inserted = vec![
        car("c", 2001, "Toyota", "Corolla"),
        car("a", 1999, "Ford", "Focus"),
        car("b", 2015, "Mazda", "3"),
    ];
    for c in &inserted {
        cars.create(c).await.expect("Create should succeed");
    }

    let listed = cars.list().await.expect("List should succeed");
    assert_eq!(listed, inserted);
}

#[tokio::test(flavor = "multi_thread")]
async fn car_create_duplicate_id_returns_already_exists() {
    let db = setup_db().await;
    let cars = db.cars();

    cars.create(&car("1", 2020, "Honda", "Civic"))
        .await
        .expect("Create should succeed");

    let err = cars
        .create(&car("1", 1990, "Volvo", "240"))
        .await
        .expect_err("Duplicate id should fail");

    match err {
        DbError::AlreadyExists { entity_type, id } => {
            assert_eq!(entity_type, "Car");
            assert_eq!(id, "1");
        }
        other => panic!("Expected AlreadyExists, got {other:?}"),
    }

    // The original row is untouched
    let listed = cars.list().await.expect("List should succeed");
    assert_eq!(listed, vec![car("1", 2020, "Honda", "Civic")]);
}

#[tokio::test(flavor = "multi_thread")]
async fn car_delete_removes_row() {
    let db = setup_db().await;
    let cars = db.cars();

    cars.create(&car("1", 2020, "Honda", "Civic"))
        .await
        .expect("Create should succeed");
    cars.create(&car("2", 2018, "Ford", "Fiesta"))
        .await
        .expect("Create should succeed");

    cars.delete("1").await.expect("Delete should succeed");

    let listed = cars.list().await.expect("List should succeed");
    assert_eq!(listed, vec![car("2", 2018, "Ford", "Fiesta")]);
}

#[tokio::test(flavor = "multi_thread")]
async fn car_delete_unknown_id_is_noop() {
    let db = setup_db().await;
    let cars = db.cars();

    cars.create(&car("1", 2020, "Honda", "Civic"))
        .await
        .expect("Create should succeed");

    cars.delete("nope").await.expect("Delete should succeed");

    let listed = cars.list().await.expect("List should succeed");
    assert_eq!(listed.len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn car_list_fails_without_migration() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    // A failed seed load is an error, not an empty table
    let result = db.cars().list().await;
    assert!(matches!(result, Err(DbError::Database { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn car_list_reports_undecodable_row_as_error() {
    let db = setup_db().await;

    // INTEGER affinity keeps a non-numeric string as TEXT
    sqlx::query("INSERT INTO cars (id, year, make, model) VALUES ('1', 'abc', 'Honda', 'Civic')")
        .execute(db.pool())
        .await
        .expect("Insert should succeed");

    match db.cars().list().await {
        Err(DbError::Database { message }) => {
            assert!(message.starts_with("Unreadable car row"), "{message}");
        }
        other => panic!("Expected Database error, got {other:?}"),
    }
}
