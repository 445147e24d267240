//! Database abstraction layer.
//!
//! The API layer talks to storage through the traits in `repository`, so
//! the SQLite backend in `sqlite` can be swapped out (or replaced by an
//! in-memory database in tests) without touching handlers.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (Car)
//! - `repository`: Trait definitions for data access
//! - `sqlite`: SQLx-backed implementation

mod error;
mod models;
mod repository;
mod sqlite;


pub use error::{DbError, DbResult};
pub use models::*;
pub use repository::*;
pub use sqlite::{SqliteCarRepository, SqliteDatabase};
