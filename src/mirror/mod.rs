//! In-memory mirror of the `cars` table.
//!
//! All reads are served from the mirror. It is a write-through cache over
//! the store: writers take the write lock, persist to the database, and only
//! then update the list, so readers never see a car the store rejected.

mod car_list;

#[cfg(test)]
mod mirror_test;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;

use crate::db::{Car, CarRepository, Database, DbResult};

pub use car_list::CarList;

/// Concurrency-safe, insertion-ordered list of cars.
#[derive(Debug, Default)]
pub struct CarMirror {
    cars: RwLock<CarList>,
}

impl CarMirror {
    /// Create a mirror seeded with the given cars.
    pub fn new(cars: Vec<Car>) -> Self {
        Self {
            cars: RwLock::new(CarList::new(cars)),
        }
    }

    /// Seed a mirror from every row in the store.
    pub async fn load<D: Database>(db: &D) -> DbResult<Self> {
        let cars = db.cars().list().await?;
        info!(count = cars.len(), "Loaded cars into mirror");
        Ok(Self::new(cars))
    }

    /// Acquire shared read access.
    pub async fn read(&self) -> RwLockReadGuard<'_, CarList> {
        self.cars.read().await
    }

    /// Acquire exclusive write access.
    ///
    /// Hold the guard across the store write so the mirror and the store
    /// change together.
    pub async fn write(&self) -> RwLockWriteGuard<'_, CarList> {
        self.cars.write().await
    }
}
