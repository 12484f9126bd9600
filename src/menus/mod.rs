pub mod assembler;
pub mod dto;
pub mod family;
pub mod handlers;
pub mod requirements;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub use self::assembler::{generate_user_menu, DailyMenu, MealItem, MenuPlan};
pub use self::family::{generate_family_menu, FamilyMenuPlan};

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::menu_routes())
}
