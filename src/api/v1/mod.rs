//! V1 API handlers.

mod cars;


pub use cars::*;

use axum::http::StatusCode;
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use super::PrettyJson;
use crate::db::DbError;

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable reason
    #[schema(example = "car not found.")]
    pub message: String,
}

/// Rejection returned by every v1 handler.
pub type ApiFailure = (StatusCode, PrettyJson<ErrorResponse>);

pub(crate) fn failure(status: StatusCode, message: impl Into<String>) -> ApiFailure {
    (
        status,
        PrettyJson(ErrorResponse {
            message: message.into(),
        }),
    )
}

/// Map a storage error on the request path to a 500.
pub(crate) fn storage_failure(e: DbError) -> ApiFailure {
    error!(error = %e, "Storage operation failed");
    failure(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
