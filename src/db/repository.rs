//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing business logic.
//!
//! Methods return `impl Future + Send` so handlers generic over
//! [`Database`] stay `Send` and can be served by axum.

use std::future::Future;

use crate::db::{DbResult, models::Car};

/// Repository for Car operations.
pub trait CarRepository: Send + Sync {
    /// Get all cars in insertion order.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Car>>> + Send;

    /// Insert a new car.
    ///
    /// Returns [`DbError::AlreadyExists`](crate::db::DbError::AlreadyExists)
    /// when a car with the same id is already stored.
    fn create(&self, car: &Car) -> impl Future<Output = DbResult<()>> + Send;

    /// Delete a car by ID. Deleting an unknown id is a no-op.
    fn delete(&self, id: &str) -> impl Future<Output = DbResult<()>> + Send;
}

/// Combined database interface.
pub trait Database: Send + Sync {
    type Cars<'a>: CarRepository
    where
        Self: 'a;

    /// Run pending migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the car repository.
    fn cars(&self) -> Self::Cars<'_>;
}
