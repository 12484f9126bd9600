use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::assembler::{DailyMenu, MenuPlan};
use super::requirements::ServingRange;
use crate::reference::types::PerGroup;

#[derive(Debug, Default, Deserialize)]
pub struct UserMenuQuery {
    pub profile_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct UserMenuResponse {
    #[serde(flatten)]
    pub plan: MenuPlan,
    pub required: PerGroup<ServingRange>,
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
}

#[derive(Debug, Serialize)]
pub struct MemberPlanResponse {
    #[serde(flatten)]
    pub plan: MenuPlan,
    pub required: PerGroup<ServingRange>,
}

#[derive(Debug, Serialize)]
pub struct FamilyMenuResponse {
    pub family_menu: DailyMenu,
    pub member_plans: Vec<MemberPlanResponse>,
    pub total_servings: PerGroup<u32>,
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
}

#[derive(Debug, Serialize)]
pub struct RequirementsResponse {
    pub profile_id: Uuid,
    pub age_band: &'static str,
    pub required: PerGroup<ServingRange>,
    pub targets: PerGroup<u32>,
}
