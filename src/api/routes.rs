//! API route configuration.

use axum::Router;
use axum::routing::{delete, get, post};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{self, HealthResponse};
use super::state::AppState;
use super::v1::{self, CarResponse, CreateCarRequest, ErrorResponse};
use crate::db::Database;

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Car API",
        version = "0.1.0",
        description = "CRUD over car records backed by SQLite",
        license(name = "MIT")
    ),
    paths(
        handlers::health,
        v1::list_cars,
        v1::get_car,
        v1::list_cars_by_year,
        v1::list_cars_by_make,
        v1::list_cars_by_model,
        v1::create_car,
        v1::delete_car,
    ),
    components(
        schemas(
            HealthResponse,
            CarResponse,
            CreateCarRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "cars", description = "Car management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation
pub fn create_router<D: Database + 'static>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    let system_routes = routes!(D => {
        get "/health" => handlers::health,
    });

    // Car routes (generic over Database)
    let car_routes = routes!(D => {
        get "/cars" => v1::list_cars,
        post "/cars" => v1::create_car,
        get "/cars/{id}" => v1::get_car,
        delete "/cars/{id}" => v1::delete_car,
        get "/cars/year/{year}" => v1::list_cars_by_year,
        get "/cars/make/{make}" => v1::list_cars_by_make,
        get "/cars/model/{model}" => v1::list_cars_by_model,
    });

    system_routes
        .merge(car_routes)
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
}
