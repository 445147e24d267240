//! Car inventory HTTP service.
//!
//! - [`db`]: SQLite storage behind repository traits
//! - [`mirror`]: in-memory, lock-guarded copy of the `cars` table that serves reads
//! - [`api`]: axum router, handlers and server startup
//! - [`serde_utils`]: lenient decoding helpers for request bodies

pub mod api;
pub mod db;
pub mod mirror;
pub mod serde_utils;
