//! Car handlers.
//!
//! Reads are answered from the in-memory mirror. Writes go to the store
//! first and reach the mirror only once the store has accepted them, with
//! the mirror's write lock held across both steps.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, instrument};
use utoipa::ToSchema;

use super::{ApiFailure, ErrorResponse, failure, storage_failure};
use crate::api::{AppState, PrettyJson};
use crate::db::{Car, CarRepository, Database, DbError};
use crate::serde_utils::{fold_field_names, null_as_default};

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Car response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct CarResponse {
    /// Caller-chosen identifier
    #[schema(example = "1")]
    pub id: String,
    /// Model year
    #[schema(example = 2020)]
    pub year: i64,
    /// Manufacturer
    #[schema(example = "Honda")]
    pub make: String,
    /// Model name
    #[schema(example = "Civic")]
    pub model: String,
}

impl From<Car> for CarResponse {
    fn from(c: Car) -> Self {
        Self {
            id: c.id,
            year: c.year,
            make: c.make,
            model: c.model,
        }
    }
}

/// Create car request DTO
///
/// Keys match case-insensitively. Missing or `null` fields take their zero
/// value (`""` or `0`).
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCarRequest {
    /// Caller-chosen identifier, must not already exist
    #[schema(example = "1")]
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Model year
    #[schema(example = 2020)]
    #[serde(default, deserialize_with = "null_as_default")]
    pub year: i64,
    /// Manufacturer
    #[schema(example = "Honda")]
    #[serde(default, deserialize_with = "null_as_default")]
    pub make: String,
    /// Model name
    #[schema(example = "Civic")]
    #[serde(default, deserialize_with = "null_as_default")]
    pub model: String,
}

impl CreateCarRequest {
    const FIELDS: &'static [&'static str] = &["id", "year", "make", "model"];

    /// Decode a request body. Anything but a JSON object is rejected, as is
    /// a field of the wrong type.
    pub fn from_body(body: &[u8]) -> serde_json::Result<Self> {
        let value: Value = serde_json::from_slice(body)?;
        serde_json::from_value(fold_field_names(value, Self::FIELDS))
    }
}

impl From<CreateCarRequest> for Car {
    fn from(req: CreateCarRequest) -> Self {
        Self {
            id: req.id,
            year: req.year,
            make: req.make,
            model: req.model,
        }
    }
}

fn to_responses(cars: impl IntoIterator<Item = Car>) -> Vec<CarResponse> {
    cars.into_iter().map(CarResponse::from).collect()
}

// =============================================================================
// Handlers
// =============================================================================

/// List all cars
///
/// Returns every car in insertion order
#[utoipa::path(
    get,
    path = "/cars",
    tag = "cars",
    responses(
        (status = 200, description = "All cars", body = Vec<CarResponse>)
    )
)]
#[instrument(skip(state))]
pub async fn list_cars<D: Database>(
    State(state): State<AppState<D>>,
) -> PrettyJson<Vec<CarResponse>> {
    let cars = state.mirror().read().await;
    PrettyJson(to_responses(cars.all().iter().cloned()))
}

/// Get a car by ID
#[utoipa::path(
    get,
    path = "/cars/{id}",
    tag = "cars",
    params(
        ("id" = String, Path, description = "Car ID")
    ),
    responses(
        (status = 200, description = "Car found", body = CarResponse),
        (status = 404, description = "Car not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_car<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<PrettyJson<CarResponse>, ApiFailure> {
    let cars = state.mirror().read().await;
    cars.find_by_id(&id)
        .cloned()
        .map(|c| PrettyJson(CarResponse::from(c)))
        .ok_or_else(|| failure(StatusCode::NOT_FOUND, "car not found."))
}

/// List cars by year
///
/// The year must be a whole number; anything else is rejected before the
/// lookup
#[utoipa::path(
    get,
    path = "/cars/year/{year}",
    tag = "cars",
    params(
        ("year" = String, Path, description = "Model year, e.g. 2020")
    ),
    responses(
        (status = 200, description = "Cars from that year", body = Vec<CarResponse>),
        (status = 400, description = "Year is not an integer", body = ErrorResponse),
        (status = 404, description = "No car from that year", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_cars_by_year<D: Database>(
    State(state): State<AppState<D>>,
    Path(year): Path<String>,
) -> Result<PrettyJson<Vec<CarResponse>>, ApiFailure> {
    let year: i64 = year
        .parse()
        .map_err(|_| failure(StatusCode::BAD_REQUEST, "invalid year."))?;

    let cars = state.mirror().read().await;
    cars.filter_by_year(year)
        .map(|matches| PrettyJson(to_responses(matches)))
        .ok_or_else(|| failure(StatusCode::NOT_FOUND, "year not found."))
}

/// List cars by make
///
/// Exact, case-sensitive match
#[utoipa::path(
    get,
    path = "/cars/make/{make}",
    tag = "cars",
    params(
        ("make" = String, Path, description = "Manufacturer")
    ),
    responses(
        (status = 200, description = "Cars of that make", body = Vec<CarResponse>),
        (status = 404, description = "No car of that make", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_cars_by_make<D: Database>(
    State(state): State<AppState<D>>,
    Path(make): Path<String>,
) -> Result<PrettyJson<Vec<CarResponse>>, ApiFailure> {
    let cars = state.mirror().read().await;
    cars.filter_by_make(&make)
        .map(|matches| PrettyJson(to_responses(matches)))
        .ok_or_else(|| failure(StatusCode::NOT_FOUND, "make not found."))
}

/// List cars by model
///
/// Exact, case-sensitive match
#[utoipa::path(
    get,
    path = "/cars/model/{model}",
    tag = "cars",
    params(
        ("model" = String, Path, description = "Model name")
    ),
    responses(
        (status = 200, description = "Cars of that model", body = Vec<CarResponse>),
        (status = 404, description = "No car of that model", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_cars_by_model<D: Database>(
    State(state): State<AppState<D>>,
    Path(model): Path<String>,
) -> Result<PrettyJson<Vec<CarResponse>>, ApiFailure> {
    let cars = state.mirror().read().await;
    cars.filter_by_model(&model)
        .map(|matches| PrettyJson(to_responses(matches)))
        .ok_or_else(|| failure(StatusCode::NOT_FOUND, "model not found."))
}

/// Create a new car
///
/// Persists the car and echoes it back. The body is decoded regardless of
/// its content type; missing or `null` fields default to `""` / `0`.
#[utoipa::path(
    post,
    path = "/cars",
    tag = "cars",
    request_body = CreateCarRequest,
    responses(
        (status = 201, description = "Car created", body = CarResponse),
        (status = 400, description = "Body is not a JSON object or a field has the wrong type", body = ErrorResponse),
        (status = 409, description = "A car with this id already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, body))]
pub async fn create_car<D: Database>(
    State(state): State<AppState<D>>,
    body: Bytes,
) -> Result<(StatusCode, PrettyJson<CarResponse>), ApiFailure> {
    let req = CreateCarRequest::from_body(&body).map_err(|e| {
        debug!(error = %e, "Rejected car body");
        failure(StatusCode::BAD_REQUEST, "invalid car.")
    })?;
    let car = Car::from(req);

    let mut cars = state.mirror().write().await;
    if cars.find_by_id(&car.id).is_some() {
        return Err(failure(StatusCode::CONFLICT, "car already exists."));
    }

    state.db().cars().create(&car).await.map_err(|e| match e {
        DbError::AlreadyExists { .. } => failure(StatusCode::CONFLICT, "car already exists."),
        _ => storage_failure(e),
    })?;
    cars.append(car.clone());

    info!(id = %car.id, "Car created");
    Ok((StatusCode::CREATED, PrettyJson(CarResponse::from(car))))
}

/// Delete a car
///
/// Deletes a car by its ID and returns the deleted record
#[utoipa::path(
    delete,
    path = "/cars/{id}",
    tag = "cars",
    params(
        ("id" = String, Path, description = "Car ID")
    ),
    responses(
        (status = 200, description = "Car deleted", body = CarResponse),
        (status = 404, description = "Car not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_car<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<PrettyJson<CarResponse>, ApiFailure> {
    let mut cars = state.mirror().write().await;
    let Some(index) = cars.position(&id) else {
        return Err(failure(StatusCode::NOT_FOUND, "car not found."));
    };

    state
        .db()
        .cars()
        .delete(&id)
        .await
        .map_err(storage_failure)?;

    // Still valid: the write lock has been held since the lookup
    let car = cars.remove_at(index);

    info!(id = %car.id, "Car deleted");
    Ok(PrettyJson(CarResponse::from(car)))
}
