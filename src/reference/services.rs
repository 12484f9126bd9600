use super::dto::{FoodListItem, GuidelineItem};
use super::store::ReferenceData;
use super::types::FoodGroupId;

/// Directional statements in table order, each under its group's short label.
pub fn guidelines(data: &ReferenceData) -> Vec<GuidelineItem> {
    data.directional_statements()
        .iter()
        .map(|s| GuidelineItem {
            fgid: s.fgid,
            label: s.fgid.summary_label(),
            statement: s.statement.clone(),
        })
        .collect()
}

pub fn foods_in_group(data: &ReferenceData, fgid: FoodGroupId) -> Vec<FoodListItem> {
    data.foods_by_group(fgid)
        .into_iter()
        .map(|f| FoodListItem {
            food: f.food.clone(),
            serving_size: f.srvg_sz.clone(),
            category: data.category_name(fgid, f.fgcat_id),
        })
        .collect()
}
