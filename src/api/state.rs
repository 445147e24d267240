//! Application state for the API server.

use std::sync::Arc;

use crate::db::{Database, DbResult};
use crate::mirror::CarMirror;

/// Shared application state.
///
/// Generic over `D: Database` so tests can run against an in-memory
/// database. Dependencies are injected via constructor, not created
/// internally.
pub struct AppState<D: Database> {
    db: Arc<D>,
    mirror: Arc<CarMirror>,
}

// Manual Clone impl - only the Arcs need to be cloneable, not D
impl<D: Database> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            mirror: Arc::clone(&self.mirror),
        }
    }
}

impl<D: Database> AppState<D> {
    /// Create a new AppState from a database and an already seeded mirror.
    pub fn new(db: D, mirror: CarMirror) -> Self {
        Self {
            db: Arc::new(db),
            mirror: Arc::new(mirror),
        }
    }

    /// Create a new AppState, seeding the mirror from the database.
    pub async fn load(db: D) -> DbResult<Self> {
        let mirror = CarMirror::load(&db).await?;
        Ok(Self::new(db, mirror))
    }

    /// Get a reference to the database.
    pub fn db(&self) -> &D {
        &self.db
    }

    /// Get a reference to the in-memory mirror.
    pub fn mirror(&self) -> &CarMirror {
        &self.mirror
    }
}
