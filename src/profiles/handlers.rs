use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use super::dto::CreateProfileRequest;
use super::repo_types::UserProfile;
use super::services::{add_profile, remove_profile};
use crate::error::ApiError;
use crate::state::AppState;

pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profiles", get(list_profiles).post(create_profile))
        .route("/profiles/:id", delete(delete_profile))
}

#[instrument(skip(state))]
pub async fn list_profiles(State(state): State<AppState>) -> Json<Vec<UserProfile>> {
    Json(state.profiles.list())
}

#[instrument(skip(state, payload))]
pub async fn create_profile(
    State(state): State<AppState>,
    Json(payload): Json<CreateProfileRequest>,
) -> Result<(StatusCode, Json<UserProfile>), ApiError> {
    let profile = add_profile(&state.profiles, payload).map_err(|e| e.to_api())?;
    Ok((StatusCode::CREATED, Json(profile)))
}

#[instrument(skip(state))]
pub async fn delete_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    remove_profile(&state.profiles, id).map_err(|e| e.to_api())?;
    Ok(StatusCode::NO_CONTENT)
}
