use serde::Serialize;

use super::repo::ReferenceStatus;
use super::store::TableSizes;
use super::types::FoodGroupId;

#[derive(Debug, Serialize)]
pub struct GuidelineItem {
    pub fgid: FoodGroupId,
    pub label: &'static str,
    pub statement: String,
}

#[derive(Debug, Serialize)]
pub struct FoodListItem {
    pub food: String,
    pub serving_size: String,
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub source: String,
    pub tables: TableSizes,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub reference: ReferenceStatus,
}
