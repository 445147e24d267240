//! Domain models for the car database.
//!
//! These models are storage-agnostic and represent the core entities
//! used throughout the application.

use serde::{Deserialize, Serialize};

/// A car record.
///
/// `id` is meant to be unique but its format is never validated; `year`
/// carries no range check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub id: String,
    pub year: i64,
    pub make: String,
    pub model: String,
}
