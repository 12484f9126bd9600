pub mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub use self::repo::ProfileStore;
pub use self::repo_types::UserProfile;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::profile_routes())
}
