// ABOUTME: Nutrition plan records: meal slots, food portions, and macro targets
// ABOUTME: Plans are immutable values; check-ins and rebalancing produce new plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EvolveYou

use serde::{Deserialize, Serialize};

use super::metabolic::MacroGrams;
use super::profile::Goal;
use crate::errors::{EngineError, EngineResult};

/// Meal category used to pick candidate foods for a slot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealCategory {
    /// Morning meal
    Breakfast,
    /// Small meal between main meals
    Snack,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
}

/// A quantity of one catalog food, scaled from its per-100 profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodPortion {
    /// Catalog identifier
    pub food_id: String,
    /// Display name
    pub name: String,
    /// Quantity in `unit`s (grams or millilitres)
    pub quantity: u32,
    /// Unit of `quantity`
    pub unit: String,
    /// Energy (kcal), rounded to an integer
    pub calories: i32,
    /// Protein (g), one decimal
    pub protein_g: f64,
    /// Carbohydrates (g), one decimal
    pub carbs_g: f64,
    /// Fat (g), one decimal
    pub fat_g: f64,
    /// Fiber (g), one decimal
    pub fiber_g: f64,
}

/// Macro reduction attached to a slot by the rebalancer
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct SlotReduction {
    /// Kilocalories removed from the planned budget
    pub kcal: i32,
    /// Fat removed (g)
    pub fat_g: f64,
    /// Carbohydrates removed (g)
    pub carbs_g: f64,
    /// Protein removed (g)
    pub protein_g: f64,
}

/// One meal in the daily plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealSlot {
    /// Stable slot identifier (`breakfast`, `lunch`, ...)
    pub id: String,
    /// Display label
    pub label: String,
    /// Scheduled time, `HH:MM`
    pub time_of_day: String,
    /// Category the foods were drawn from
    pub category: MealCategory,
    /// Budget assigned when the plan was generated
    pub planned_budget_kcal: i32,
    /// Current budget after any rebalancing
    pub calorie_budget_kcal: i32,
    /// Foods filling the current budget
    pub foods: Vec<FoodPortion>,
    /// Reduction applied by the most recent rebalance, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduction: Option<SlotReduction>,
    /// True once the user has checked the meal in as eaten
    #[serde(default)]
    pub checked_in: bool,
}

impl MealSlot {
    /// Sum of food calories in the slot
    #[must_use]
    pub fn food_calories(&self) -> i32 {
        self.foods.iter().map(|food| food.calories).sum()
    }
}

/// Meal plan for one day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionPlan {
    /// Goal the plan was built for
    pub goal: Goal,
    /// Daily calorie target
    pub total_target_kcal: i32,
    /// Daily macro targets
    pub macro_targets: MacroGrams,
    /// Ordered meal slots
    pub meals: Vec<MealSlot>,
}

impl NutritionPlan {
    /// Sum of the current slot budgets
    #[must_use]
    pub fn budgeted_kcal(&self) -> i32 {
        self.meals.iter().map(|slot| slot.calorie_budget_kcal).sum()
    }

    /// Slot with the given identifier
    #[must_use]
    pub fn slot(&self, slot_id: &str) -> Option<&MealSlot> {
        self.meals.iter().find(|slot| slot.id == slot_id)
    }

    /// Slots not yet checked in
    pub fn remaining_slots(&self) -> impl Iterator<Item = &MealSlot> {
        self.meals.iter().filter(|slot| !slot.checked_in)
    }

    /// New plan with `slot_id` marked as eaten
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownMealSlot`] if the plan has no such slot
    pub fn check_in(&self, slot_id: &str) -> EngineResult<Self> {
        if self.slot(slot_id).is_none() {
            return Err(EngineError::unknown_slot(slot_id));
        }
        let meals = self
            .meals
            .iter()
            .map(|slot| MealSlot {
                checked_in: slot.checked_in || slot.id == slot_id,
                ..slot.clone()
            })
            .collect();
        Ok(Self {
            meals,
            ..self.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(id: &str, budget: i32) -> MealSlot {
        MealSlot {
            id: id.to_owned(),
            label: id.to_owned(),
            time_of_day: "12:00".to_owned(),
            category: MealCategory::Lunch,
            planned_budget_kcal: budget,
            calorie_budget_kcal: budget,
            foods: Vec::new(),
            reduction: None,
            checked_in: false,
        }
    }

    fn plan() -> NutritionPlan {
        NutritionPlan {
            goal: Goal::Maintain,
            total_target_kcal: 1000,
            macro_targets: MacroGrams::default(),
            meals: vec![slot("breakfast", 400), slot("lunch", 600)],
        }
    }

    #[test]
    fn test_check_in_returns_new_plan() {
        let original = plan();
        let updated = original.check_in("breakfast").unwrap();

        assert!(!original.meals[0].checked_in);
        assert!(updated.meals[0].checked_in);
        assert!(!updated.meals[1].checked_in);
        assert_eq!(updated.remaining_slots().count(), 1);
    }

    #[test]
    fn test_check_in_unknown_slot_fails() {
        let err = plan().check_in("brunch").unwrap_err();
        assert_eq!(err, EngineError::unknown_slot("brunch"));
    }

    #[test]
    fn test_budgeted_kcal_sums_slots() {
        assert_eq!(plan().budgeted_kcal(), 1000);
    }
}
