use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use super::dto::{FamilyMenuResponse, RequirementsResponse, UserMenuQuery, UserMenuResponse};
use super::services;
use crate::error::ApiError;
use crate::state::AppState;

pub fn menu_routes() -> Router<AppState> {
    Router::new()
        .route("/menus/user", post(create_user_menu))
        .route("/menus/family", post(create_family_menu))
        .route("/profiles/:id/requirements", get(get_requirements))
}

#[instrument(skip(state))]
pub async fn create_user_menu(
    State(state): State<AppState>,
    Query(q): Query<UserMenuQuery>,
) -> Result<Json<UserMenuResponse>, ApiError> {
    services::user_menu(&state, q.profile_id)
        .map(Json)
        .map_err(|e| e.to_api())
}

#[instrument(skip(state))]
pub async fn create_family_menu(
    State(state): State<AppState>,
) -> Result<Json<FamilyMenuResponse>, ApiError> {
    services::family_menu(&state)
        .map(Json)
        .map_err(|e| e.to_api())
}

#[instrument(skip(state))]
pub async fn get_requirements(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RequirementsResponse>, ApiError> {
    services::requirements(&state, id)
        .map(Json)
        .map_err(|e| e.to_api())
}
