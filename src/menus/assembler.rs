use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use super::requirements::{required_servings, ServingRange};
use crate::profiles::UserProfile;
use crate::reference::store::ReferenceData;
use crate::reference::types::{category, FoodGroupId, FoodItem, PerGroup};

const DARK_GREEN_LABEL: &str = "Dark green vegetable";
const ORANGE_LABEL: &str = "Orange vegetable";
const WHOLE_GRAIN_LABEL: &str = "Whole grain";
const NON_WHOLE_GRAIN_LABEL: &str = "Non whole grain";
const MEAT_ALTERNATIVES_LABEL: &str = "Meat Alternatives";
const MEAT_LABEL: &str = "Meat, fish, poultry and shellfish";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl Meal {
    /// Order used when spreading servings over the day.
    pub const CYCLE: [Meal; 4] = [Meal::Breakfast, Meal::Lunch, Meal::Dinner, Meal::Snacks];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealItem {
    pub food: String,
    pub serving_size: String,
    pub food_group: String,
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DailyMenu {
    pub breakfast: Vec<MealItem>,
    pub lunch: Vec<MealItem>,
    pub dinner: Vec<MealItem>,
    pub snacks: Vec<MealItem>,
}

impl DailyMenu {
    pub fn slot(&self, meal: Meal) -> &[MealItem] {
        match meal {
            Meal::Breakfast => &self.breakfast,
            Meal::Lunch => &self.lunch,
            Meal::Dinner => &self.dinner,
            Meal::Snacks => &self.snacks,
        }
    }

    pub fn slot_mut(&mut self, meal: Meal) -> &mut Vec<MealItem> {
        match meal {
            Meal::Breakfast => &mut self.breakfast,
            Meal::Lunch => &mut self.lunch,
            Meal::Dinner => &mut self.dinner,
            Meal::Snacks => &mut self.snacks,
        }
    }

    /// All items, breakfast through snacks.
    pub fn items(&self) -> impl Iterator<Item = &MealItem> {
        Meal::CYCLE.into_iter().flat_map(move |meal| self.slot(meal).iter())
    }

    pub fn len(&self) -> usize {
        Meal::CYCLE.iter().map(|m| self.slot(*m).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One member's generated day and the servings it actually contains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuPlan {
    pub user: UserProfile,
    pub menu: DailyMenu,
    pub servings: PerGroup<u32>,
}

/// Resolves the profile's requirements and assembles a fresh menu.
pub fn generate_user_menu<R: Rng + ?Sized>(
    data: &ReferenceData,
    profile: &UserProfile,
    rng: &mut R,
) -> MenuPlan {
    let required = required_servings(data, profile);
    assemble_menu(data, profile.clone(), &required, rng)
}

/// Fills each group up to the floored midpoint of its range. Groups are
/// placed in a fixed order (vegetables and fruit, grains, milk, meat); an
/// empty category simply leaves the tally short of its target.
pub fn assemble_menu<R: Rng + ?Sized>(
    data: &ReferenceData,
    user: UserProfile,
    required: &PerGroup<ServingRange>,
    rng: &mut R,
) -> MenuPlan {
    let mut builder = MenuBuilder::new(data);
    builder.vegetables_and_fruit(required.vf.target(), rng);
    builder.grains(required.gr.target(), rng);
    builder.milk_and_alternatives(required.mi.target(), rng);
    builder.meat_and_alternatives(required.me.target(), rng);

    debug!(
        profile_id = %user.id,
        vf = builder.servings.vf,
        gr = builder.servings.gr,
        mi = builder.servings.mi,
        me = builder.servings.me,
        "menu assembled"
    );
    MenuPlan {
        user,
        menu: builder.menu,
        servings: builder.servings,
    }
}

struct MenuBuilder<'a> {
    data: &'a ReferenceData,
    menu: DailyMenu,
    servings: PerGroup<u32>,
}

impl<'a> MenuBuilder<'a> {
    fn new(data: &'a ReferenceData) -> Self {
        Self {
            data,
            menu: DailyMenu::default(),
            servings: PerGroup::default(),
        }
    }

    fn place(&mut self, meal: Meal, food: &FoodItem, category: impl Into<String>) {
        self.menu.slot_mut(meal).push(MealItem {
            food: food.food.clone(),
            serving_size: food.srvg_sz.clone(),
            food_group: food.fgid.display_name().to_string(),
            category: category.into(),
        });
        *self.servings.get_mut(food.fgid) += 1;
    }

    /// A dark green vegetable at breakfast and an orange one at lunch when the
    /// target allows, then random picks dealt round the meals.
    fn vegetables_and_fruit<R: Rng + ?Sized>(&mut self, target: u32, rng: &mut R) {
        let data = self.data;
        let dark_green = data.foods_by_category(FoodGroupId::Vf, category::VF_DARK_GREEN);
        let orange = data.foods_by_category(FoodGroupId::Vf, category::VF_ORANGE);
        let other = data.foods_by_category(FoodGroupId::Vf, category::VF_OTHER);

        if target >= 1 {
            if let Some(food) = dark_green.first() {
                self.place(Meal::Breakfast, food, DARK_GREEN_LABEL);
            }
        }
        if target >= 2 {
            if let Some(food) = orange.first() {
                self.place(Meal::Lunch, food, ORANGE_LABEL);
            }
        }

        let pool: Vec<&FoodItem> = dark_green
            .iter()
            .chain(&orange)
            .chain(&other)
            .copied()
            .collect();
        for meal in Meal::CYCLE.iter().cycle() {
            if self.servings.vf >= target {
                break;
            }
            let Some(food) = pool.choose(rng) else { break };
            let label = data.category_name(FoodGroupId::Vf, food.fgcat_id);
            self.place(*meal, food, label);
        }
    }

    /// At least half whole grain: whole grains in table order (first at
    /// breakfast, the rest at lunch), the remainder random at dinner.
    fn grains<R: Rng + ?Sized>(&mut self, target: u32, rng: &mut R) {
        let data = self.data;
        let whole = data.foods_by_category(FoodGroupId::Gr, category::GR_WHOLE);
        let other = data.foods_by_category(FoodGroupId::Gr, category::GR_NON_WHOLE);
        let whole_target = target.div_ceil(2) as usize;

        for (i, food) in whole.iter().take(whole_target).enumerate() {
            let meal = if i == 0 { Meal::Breakfast } else { Meal::Lunch };
            self.place(meal, food, WHOLE_GRAIN_LABEL);
        }
        while self.servings.gr < target {
            let Some(food) = other.choose(rng) else { break };
            self.place(Meal::Dinner, food, NON_WHOLE_GRAIN_LABEL);
        }
    }

    /// Milk at breakfast, alternatives as snacks. Without milk the breakfast
    /// serving comes from the alternatives.
    fn milk_and_alternatives<R: Rng + ?Sized>(&mut self, target: u32, rng: &mut R) {
        let data = self.data;
        let milk = data.foods_by_category(FoodGroupId::Mi, category::MI_MILK);
        let alternatives = data.foods_by_category(FoodGroupId::Mi, category::MI_ALTERNATIVES);

        for i in 0..target {
            let source = if i == 0 && !milk.is_empty() { &milk } else { &alternatives };
            let Some(food) = source.choose(rng) else { continue };
            let meal = if i == 0 { Meal::Breakfast } else { Meal::Snacks };
            let label = data.category_name(FoodGroupId::Mi, food.fgcat_id);
            self.place(meal, food, label);
        }
    }

    /// Plant alternatives at lunch first, bounded by how many exist; meat,
    /// fish and poultry at dinner for the rest.
    fn meat_and_alternatives<R: Rng + ?Sized>(&mut self, target: u32, rng: &mut R) {
        let data = self.data;
        let alternatives = data.foods_by_category(FoodGroupId::Me, category::ME_ALTERNATIVES);
        let meat = data.foods_by_category(FoodGroupId::Me, category::ME_MEAT);

        let from_alternatives = target.min(alternatives.len() as u32);
        for _ in 0..from_alternatives {
            let Some(food) = alternatives.choose(rng) else { break };
            self.place(Meal::Lunch, food, MEAT_ALTERNATIVES_LABEL);
        }
        while self.servings.me < target {
            let Some(food) = meat.choose(rng) else { break };
            self.place(Meal::Dinner, food, MEAT_LABEL);
        }
    }
}
