pub mod dto;
pub mod handlers;
pub mod loader;
pub mod repo;
pub mod services;
pub mod store;
pub mod types;

use crate::state::AppState;
use axum::Router;

pub use self::store::ReferenceData;
pub use self::types::{FoodGroupId, Gender};

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::reference_routes())
}
