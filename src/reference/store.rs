use serde::Serialize;

use super::types::{DirectionalStatement, FoodGroup, FoodGroupId, FoodItem, ServingRequirement};

/// The four reference tables, immutable once built. Queries are linear scans;
/// the tables hold a few hundred rows at most.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    foods: Vec<FoodItem>,
    food_groups: Vec<FoodGroup>,
    serving_requirements: Vec<ServingRequirement>,
    directional_statements: Vec<DirectionalStatement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableSizes {
    pub foods: usize,
    pub food_groups: usize,
    pub serving_requirements: usize,
    pub directional_statements: usize,
}

impl ReferenceData {
    pub fn new(
        foods: Vec<FoodItem>,
        food_groups: Vec<FoodGroup>,
        serving_requirements: Vec<ServingRequirement>,
        directional_statements: Vec<DirectionalStatement>,
    ) -> Self {
        Self {
            foods,
            food_groups,
            serving_requirements,
            directional_statements,
        }
    }

    #[cfg(test)]
    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    pub fn serving_requirements(&self) -> &[ServingRequirement] {
        &self.serving_requirements
    }

    pub fn directional_statements(&self) -> &[DirectionalStatement] {
        &self.directional_statements
    }

    pub fn sizes(&self) -> TableSizes {
        TableSizes {
            foods: self.foods.len(),
            food_groups: self.food_groups.len(),
            serving_requirements: self.serving_requirements.len(),
            directional_statements: self.directional_statements.len(),
        }
    }

    pub fn foods_by_group(&self, fgid: FoodGroupId) -> Vec<&FoodItem> {
        self.foods.iter().filter(|f| f.fgid == fgid).collect()
    }

    /// Foods of one category, in table order.
    pub fn foods_by_category(&self, fgid: FoodGroupId, fgcat_id: u32) -> Vec<&FoodItem> {
        self.foods
            .iter()
            .filter(|f| f.fgid == fgid && f.fgcat_id == fgcat_id)
            .collect()
    }

    /// Group name from the food group table, or the id itself.
    pub fn food_group_name(&self, fgid: FoodGroupId) -> String {
        self.food_groups
            .iter()
            .find(|g| g.fgid == fgid)
            .map(|g| g.foodgroup.clone())
            .unwrap_or_else(|| fgid.as_str().to_string())
    }

    /// Category name for the pair, or an empty string.
    pub fn category_name(&self, fgid: FoodGroupId, fgcat_id: u32) -> String {
        self.food_groups
            .iter()
            .find(|g| g.fgid == fgid && g.fgcat_id == fgcat_id)
            .map(|g| g.fgcat.clone())
            .unwrap_or_default()
    }
}
