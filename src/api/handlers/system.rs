//! System health and status handlers.

use axum::extract::State;
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::{AppState, PrettyJson};
use crate::db::Database;

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    #[schema(example = "ok")]
    pub status: String,
    /// Number of cars currently held in memory
    #[schema(example = 3)]
    pub cars: usize,
}

/// Health check endpoint
///
/// Reports liveness and the size of the in-memory mirror
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Health check successful", body = HealthResponse)
    )
)]
#[instrument(skip(state))]
pub async fn health<D: Database>(State(state): State<AppState<D>>) -> PrettyJson<HealthResponse> {
    let cars = state.mirror().read().await.len();
    PrettyJson(HealthResponse {
        status: "ok".to_string(),
        cars,
    })
}
