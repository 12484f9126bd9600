use thiserror::Error;
use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use super::assembler::generate_user_menu;
use super::dto::{FamilyMenuResponse, MemberPlanResponse, RequirementsResponse, UserMenuResponse};
use super::family::generate_family_menu;
use super::requirements::{age_band, required_servings};
use crate::error::{ApiError, ProfileError, ReferenceError};
use crate::reference::types::PerGroup;
use crate::state::AppState;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error(transparent)]
    Reference(#[from] ReferenceError),
    #[error(transparent)]
    Profile(#[from] ProfileError),
}

impl MenuError {
    pub fn to_api(&self) -> ApiError {
        match self {
            Self::Reference(e) => e.to_api(),
            Self::Profile(e) => e.to_api(),
        }
    }
}

/// Menu for one profile, or for the first profile in the list when no id is given.
pub fn user_menu(state: &AppState, profile_id: Option<Uuid>) -> Result<UserMenuResponse, MenuError> {
    let profile = match profile_id {
        Some(id) => state.profiles.get(id).ok_or(ProfileError::NotFound(id))?,
        None => state.profiles.first().ok_or(ProfileError::Empty)?,
    };
    let data = state.reference.current()?;

    let plan = state.with_rng(|rng| generate_user_menu(&data, &profile, rng));
    let required = required_servings(&data, &profile);
    info!(profile_id = %profile.id, items = plan.menu.len(), "user menu generated");

    Ok(UserMenuResponse {
        plan,
        required,
        generated_at: OffsetDateTime::now_utc(),
    })
}

pub fn family_menu(state: &AppState) -> Result<FamilyMenuResponse, MenuError> {
    let profiles = state.profiles.list();
    if profiles.is_empty() {
        return Err(ProfileError::Empty.into());
    }
    let data = state.reference.current()?;

    let family = state.with_rng(|rng| generate_family_menu(&data, &profiles, rng));
    info!(
        members = profiles.len(),
        items = family.family_menu.len(),
        "family menu generated"
    );

    let member_plans = family
        .member_plans
        .into_iter()
        .zip(&profiles)
        .map(|(plan, profile)| MemberPlanResponse {
            required: required_servings(&data, profile),
            plan,
        })
        .collect();

    Ok(FamilyMenuResponse {
        family_menu: family.family_menu,
        member_plans,
        total_servings: family.total_servings,
        generated_at: OffsetDateTime::now_utc(),
    })
}

pub fn requirements(state: &AppState, profile_id: Uuid) -> Result<RequirementsResponse, MenuError> {
    let profile = state
        .profiles
        .get(profile_id)
        .ok_or(ProfileError::NotFound(profile_id))?;
    let data = state.reference.current()?;

    let required = required_servings(&data, &profile);
    Ok(RequirementsResponse {
        profile_id,
        age_band: age_band(profile.age),
        targets: PerGroup::from_fn(|fgid| required.get(fgid).target()),
        required,
    })
}
