use std::collections::HashSet;

use rand::Rng;
use serde::Serialize;

use super::assembler::{generate_user_menu, DailyMenu, Meal, MealItem, MenuPlan};
use crate::profiles::UserProfile;
use crate::reference::store::ReferenceData;
use crate::reference::types::{FoodGroupId, PerGroup};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyMenuPlan {
    pub family_menu: DailyMenu,
    pub member_plans: Vec<MenuPlan>,
    pub total_servings: PerGroup<u32>,
}

/// Generates every member's menu independently and merges them.
pub fn generate_family_menu<R: Rng + ?Sized>(
    data: &ReferenceData,
    profiles: &[UserProfile],
    rng: &mut R,
) -> FamilyMenuPlan {
    let plans = profiles
        .iter()
        .map(|profile| generate_user_menu(data, profile, &mut *rng))
        .collect();
    merge_plans(plans)
}

/// Unions the members' meals slot by slot, keeping the first occurrence of
/// each (food, serving size) pair, and sums the achieved servings. The tally
/// is summed before deduplication.
pub fn merge_plans(member_plans: Vec<MenuPlan>) -> FamilyMenuPlan {
    let mut family_menu = DailyMenu::default();
    let mut total_servings = PerGroup::<u32>::default();

    for plan in &member_plans {
        for meal in Meal::CYCLE {
            family_menu
                .slot_mut(meal)
                .extend(plan.menu.slot(meal).iter().cloned());
        }
        for fgid in FoodGroupId::ALL {
            *total_servings.get_mut(fgid) += *plan.servings.get(fgid);
        }
    }
    for meal in Meal::CYCLE {
        let merged = std::mem::take(family_menu.slot_mut(meal));
        *family_menu.slot_mut(meal) = unique_meals(merged);
    }

    FamilyMenuPlan {
        family_menu,
        member_plans,
        total_servings,
    }
}

fn unique_meals(items: Vec<MealItem>) -> Vec<MealItem> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert((item.food.clone(), item.serving_size.clone())))
        .collect()
}
