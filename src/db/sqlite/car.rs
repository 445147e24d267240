//! SQLite CarRepository implementation.

use sqlx::{Row, SqlitePool};

use crate::db::{Car, CarRepository, DbError, DbResult};

/// SQLx-backed car repository.
pub struct SqliteCarRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl<'a> CarRepository for SqliteCarRepository<'a> {
    async fn list(&self) -> DbResult<Vec<Car>> {
        let rows = sqlx::query("SELECT id, year, make, model FROM cars ORDER BY rowid")
            .fetch_all(self.pool)
            .await
            .map_err(|e| DbError::Database {
                message: e.to_string(),
            })?;

        rows.iter()
            .map(|row| {
                Ok(Car {
                    id: row.try_get("id")?,
                    year: row.try_get("year")?,
                    make: row.try_get("make")?,
                    model: row.try_get("model")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(|e| DbError::Database {
                message: format!("Unreadable car row: {}", e),
            })
    }

    async fn create(&self, car: &Car) -> DbResult<()> {
        sqlx::query("INSERT INTO cars (id, year, make, model) VALUES (?, ?, ?, ?)")
            .bind(&car.id)
            .bind(car.year)
            .bind(&car.make)
            .bind(&car.model)
            .execute(self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                    DbError::AlreadyExists {
                        entity_type: "Car".to_string(),
                        id: car.id.clone(),
                    }
                }
                _ => DbError::Database {
                    message: e.to_string(),
                },
            })?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> DbResult<()> {
        sqlx::query("DELETE FROM cars WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| DbError::Database {
                message: e.to_string(),
            })?;

        Ok(())
    }
}
