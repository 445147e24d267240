//! SQLite implementation of the database traits.
//!
//! This module provides a SQLx-backed implementation of the repository
//! traits defined in the parent module.

mod car;
mod connection;

#[cfg(test)]
mod car_test;

pub use car::SqliteCarRepository;
pub use connection::SqliteDatabase;
