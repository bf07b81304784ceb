//! HTTP route handlers for the city table API.

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{delete, get, put};
use serde::Deserialize;
use tracing::debug;

use tracker::core::error::TrackError;
use tracker::core::ops::{add_city, remove_city, set_building_count, set_neighbors};
use tracker::core::types::{BuildingKind, CityRecord};
use tracker::io::store::{load_cities, write_cities};

use crate::state::AppState;

/// Build the API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route(
            "/cities",
            get(list_cities).put(replace_cities).post(create_city),
        )
        .route("/cities/{name}", delete(delete_city))
        .route("/cities/{name}/buildings", put(update_building))
        .route("/cities/{name}/neighbors", put(update_neighbors))
}

async fn health() -> &'static str {
    "ok"
}

/// GET /api/cities - full record list.
async fn list_cities(
    State(state): State<AppState>,
) -> Result<Json<Vec<CityRecord>>, (StatusCode, String)> {
    let cities = load_cities(&state.data_path).map_err(internal_error)?;
    Ok(Json(cities))
}

/// PUT /api/cities - replace the whole list as-is.
async fn replace_cities(
    State(state): State<AppState>,
    Json(cities): Json<Vec<CityRecord>>,
) -> Result<Json<Vec<CityRecord>>, (StatusCode, String)> {
    let _guard = state.lock_store().await;
    write_cities(&state.data_path, &cities).map_err(internal_error)?;
    Ok(Json(cities))
}

#[derive(Deserialize)]
struct CreateCity {
    name: String,
}

/// POST /api/cities - add a city.
async fn create_city(
    State(state): State<AppState>,
    Json(body): Json<CreateCity>,
) -> Result<Json<Vec<CityRecord>>, (StatusCode, String)> {
    mutate_store(&state, |cities| add_city(cities, &body.name)).await
}

/// DELETE /api/cities/:name - remove a city.
async fn delete_city(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<CityRecord>>, (StatusCode, String)> {
    mutate_store(&state, |cities| remove_city(cities, &name)).await
}

#[derive(Deserialize)]
struct UpdateBuilding {
    kind: BuildingKind,
    count: i64,
}

/// PUT /api/cities/:name/buildings - set one occupant counter.
async fn update_building(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(body): Json<UpdateBuilding>,
) -> Result<Json<Vec<CityRecord>>, (StatusCode, String)> {
    mutate_store(&state, |cities| {
        set_building_count(cities, &name, body.kind, body.count)
    })
    .await
}

#[derive(Deserialize)]
struct UpdateNeighbors {
    neighbors: Vec<String>,
}

/// PUT /api/cities/:name/neighbors - replace the nearby-cities list.
async fn update_neighbors(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(body): Json<UpdateNeighbors>,
) -> Result<Json<Vec<CityRecord>>, (StatusCode, String)> {
    mutate_store(&state, |cities| {
        set_neighbors(cities, &name, body.neighbors)
    })
    .await
}

/// Load → apply one record operation → save, under the store lock.
///
/// Returns the updated list so the table can re-render without a second
/// fetch.
async fn mutate_store<F>(
    state: &AppState,
    op: F,
) -> Result<Json<Vec<CityRecord>>, (StatusCode, String)>
where
    F: FnOnce(&mut Vec<CityRecord>) -> Result<(), TrackError>,
{
    let _guard = state.lock_store().await;
    let mut cities = load_cities(&state.data_path).map_err(internal_error)?;
    op(&mut cities).map_err(mutation_error)?;
    write_cities(&state.data_path, &cities).map_err(internal_error)?;
    debug!(count = cities.len(), "store mutated");
    Ok(Json(cities))
}

fn mutation_error(err: TrackError) -> (StatusCode, String) {
    let status = match err {
        TrackError::CityNotFound(_) => StatusCode::NOT_FOUND,
        TrackError::CityExists(_) => StatusCode::CONFLICT,
        TrackError::CountTooHigh { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    };
    (status, err.to_string())
}

fn internal_error(err: anyhow::Error) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", err))
}
