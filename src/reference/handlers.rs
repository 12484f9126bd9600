use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use super::dto::{FoodListItem, GuidelineItem, HealthResponse, ReloadResponse};
use super::services;
use super::types::FoodGroupId;
use crate::error::ApiError;
use crate::state::AppState;

pub fn reference_routes() -> Router<AppState> {
    Router::new()
        .route("/guidelines", get(list_guidelines))
        .route("/foods/:fgid", get(list_foods))
        .route("/reference/reload", post(reload_reference))
        .route("/health", get(health))
}

#[instrument(skip(state))]
pub async fn list_guidelines(
    State(state): State<AppState>,
) -> Result<Json<Vec<GuidelineItem>>, ApiError> {
    let data = state.reference.current().map_err(|e| e.to_api())?;
    Ok(Json(services::guidelines(&data)))
}

#[instrument(skip(state))]
pub async fn list_foods(
    State(state): State<AppState>,
    Path(fgid): Path<FoodGroupId>,
) -> Result<Json<Vec<FoodListItem>>, ApiError> {
    let data = state.reference.current().map_err(|e| e.to_api())?;
    Ok(Json(services::foods_in_group(&data, fgid)))
}

#[instrument(skip(state))]
pub async fn reload_reference(
    State(state): State<AppState>,
) -> Result<Json<ReloadResponse>, ApiError> {
    let tables = state.reload().await.map_err(|e| e.to_api())?;
    Ok(Json(ReloadResponse {
        source: state.source.describe(),
        tables,
    }))
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        reference: state.reference.status(),
    })
}
