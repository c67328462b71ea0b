// ABOUTME: Nutrition plan builder distributing the daily target over meal slots
// ABOUTME: Greedy catalog-order food fill and remaining-meal rebuild after rebalancing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EvolveYou

//! Nutrition Plan Builder
//!
//! Budgets come from the canonical meal weights, re-normalized over the
//! slots used for the requested meal count. Foods are allocated greedily in
//! catalog order: each of the first `count` candidates receives an equal kcal
//! share, and its quantity is whatever delivers that share. Reordering a
//! candidate list changes every plan built from it.

use evolveyou_core::constants::meals::{KCAL_PER_CANDIDATE, MIN_CANDIDATES};
use evolveyou_core::models::{
    FoodPortion, Goal, MealCategory, MealSlot, MetabolicTargets, NutritionPlan,
    RebalancingAdjustment, SlotReduction,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::{FoodCatalog, FoodCatalogEntry};
use crate::config::MealWeightsConfig;
use crate::metabolic::round1;

/// The six canonical meals, in day order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalMeal {
    /// 08:00
    Breakfast,
    /// 10:30
    MorningSnack,
    /// 12:30
    Lunch,
    /// 15:30
    AfternoonSnack,
    /// 19:00
    Dinner,
    /// 21:30
    Supper,
}

impl CanonicalMeal {
    /// Slot identifier
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::MorningSnack => "morning_snack",
            Self::Lunch => "lunch",
            Self::AfternoonSnack => "afternoon_snack",
            Self::Dinner => "dinner",
            Self::Supper => "supper",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::MorningSnack => "Morning Snack",
            Self::Lunch => "Lunch",
            Self::AfternoonSnack => "Afternoon Snack",
            Self::Dinner => "Dinner",
            Self::Supper => "Supper",
        }
    }

    /// Scheduled time, `HH:MM`
    #[must_use]
    pub const fn time_of_day(self) -> &'static str {
        match self {
            Self::Breakfast => "08:00",
            Self::MorningSnack => "10:30",
            Self::Lunch => "12:30",
            Self::AfternoonSnack => "15:30",
            Self::Dinner => "19:00",
            Self::Supper => "21:30",
        }
    }

    /// Food category the slot draws candidates from
    #[must_use]
    pub const fn category(self) -> MealCategory {
        match self {
            Self::Breakfast => MealCategory::Breakfast,
            Self::MorningSnack | Self::AfternoonSnack | Self::Supper => MealCategory::Snack,
            Self::Lunch => MealCategory::Lunch,
            Self::Dinner => MealCategory::Dinner,
        }
    }

    /// Configured weight of the slot, in percent
    #[must_use]
    pub const fn weight_pct(self, weights: &MealWeightsConfig) -> u8 {
        match self {
            Self::Breakfast => weights.breakfast_pct,
            Self::MorningSnack => weights.morning_snack_pct,
            Self::Lunch => weights.lunch_pct,
            Self::AfternoonSnack => weights.afternoon_snack_pct,
            Self::Dinner => weights.dinner_pct,
            Self::Supper => weights.supper_pct,
        }
    }
}

/// Slots used for a daily meal count; counts outside 1-6 are clamped
#[must_use]
pub const fn meals_for_count(meals_per_day: u8) -> &'static [CanonicalMeal] {
    use CanonicalMeal::{AfternoonSnack, Breakfast, Dinner, Lunch, MorningSnack, Supper};
    match meals_per_day {
        0 | 1 => &[Lunch],
        2 => &[Lunch, Dinner],
        3 => &[Breakfast, Lunch, Dinner],
        4 => &[Breakfast, Lunch, AfternoonSnack, Dinner],
        5 => &[Breakfast, MorningSnack, Lunch, AfternoonSnack, Dinner],
        _ => &[
            Breakfast,
            MorningSnack,
            Lunch,
            AfternoonSnack,
            Dinner,
            Supper,
        ],
    }
}

/// Allocate `budget_kcal` across candidate foods in catalog order
///
/// `count = min(len, max(2, budget / 100))` candidates each receive up to
/// `budget / count` kcal. Portion kcal is the rounded allocation; quantities
/// are rounded to whole units and macros to one decimal. Foods without
/// energy cannot carry a kcal share and are never allocated.
#[must_use]
pub fn greedy_fill(candidates: &[&FoodCatalogEntry], budget_kcal: i32) -> Vec<FoodPortion> {
    let candidates: Vec<&FoodCatalogEntry> = candidates
        .iter()
        .copied()
        .filter(|food| food.kcal_per_100 > 0.0)
        .collect();
    if budget_kcal <= 0 || candidates.is_empty() {
        return Vec::new();
    }

    let by_budget = usize::try_from(budget_kcal / KCAL_PER_CANDIDATE).unwrap_or(0);
    let count = candidates.len().min(by_budget.max(MIN_CANDIDATES));
    let budget = f64::from(budget_kcal);
    let share = budget / count as f64;
    let mut remaining = budget;
    let mut foods = Vec::with_capacity(count);

    for food in candidates.iter().take(count) {
        if remaining <= 0.0 {
            break;
        }
        let allocation = remaining.min(share);
        let quantity = (allocation / food.kcal_per_100 * 100.0).round();
        if quantity > 0.0 {
            foods.push(portion(food, quantity as u32, allocation));
            remaining -= allocation;
        }
    }
    foods
}

fn portion(food: &FoodCatalogEntry, quantity: u32, allocation: f64) -> FoodPortion {
    let scale = f64::from(quantity) / 100.0;
    FoodPortion {
        food_id: food.id.to_owned(),
        name: food.name.to_owned(),
        quantity,
        unit: food.unit.to_owned(),
        calories: allocation.round() as i32,
        protein_g: round1(food.protein_per_100 * scale),
        carbs_g: round1(food.carbs_per_100 * scale),
        fat_g: round1(food.fat_per_100 * scale),
        fiber_g: round1(food.fiber_per_100 * scale),
    }
}

/// Builds and adjusts daily meal plans from a food catalog
pub struct NutritionPlanBuilder<'a, F: FoodCatalog + ?Sized> {
    catalog: &'a F,
    meal_weights: &'a MealWeightsConfig,
}

impl<'a, F: FoodCatalog + ?Sized> NutritionPlanBuilder<'a, F> {
    /// Create a builder over `catalog`
    #[must_use]
    pub const fn new(catalog: &'a F, meal_weights: &'a MealWeightsConfig) -> Self {
        Self {
            catalog,
            meal_weights,
        }
    }

    /// Meal plan for one day
    #[must_use]
    pub fn build(&self, targets: &MetabolicTargets, goal: Goal, meals_per_day: u8) -> NutritionPlan {
        let meals = meals_for_count(meals_per_day);
        let weight_sum: u32 = meals
            .iter()
            .map(|meal| u32::from(meal.weight_pct(self.meal_weights)))
            .sum();
        let target = f64::from(targets.target_kcal);

        let slots: Vec<MealSlot> = meals
            .iter()
            .map(|meal| {
                let weight = f64::from(meal.weight_pct(self.meal_weights));
                let budget = if weight_sum == 0 {
                    0
                } else {
                    (target * weight / f64::from(weight_sum)).round() as i32
                };
                MealSlot {
                    id: meal.id().to_owned(),
                    label: meal.label().to_owned(),
                    time_of_day: meal.time_of_day().to_owned(),
                    category: meal.category(),
                    planned_budget_kcal: budget,
                    calorie_budget_kcal: budget,
                    foods: self.fill(meal.category(), budget),
                    reduction: None,
                    checked_in: false,
                }
            })
            .collect();

        let plan = NutritionPlan {
            goal,
            total_target_kcal: targets.target_kcal,
            macro_targets: targets.macro_grams,
            meals: slots,
        };
        info!(
            target = plan.total_target_kcal,
            meals = plan.meals.len(),
            budgeted = plan.budgeted_kcal(),
            "Generated nutrition plan"
        );
        plan
    }

    /// Rebuild the meals not yet checked in after a rebalance
    ///
    /// Each remaining slot starts again from its planned budget and gives up
    /// its share of the surplus, proportional to that planned budget. Foods
    /// are refilled for the new budget. Checked-in slots are left untouched,
    /// and a zero adjustment restores the planned budgets.
    #[must_use]
    pub fn apply_adjustment(
        &self,
        plan: &NutritionPlan,
        adjustment: &RebalancingAdjustment,
    ) -> NutritionPlan {
        let remaining_planned: i32 = plan
            .remaining_slots()
            .map(|slot| slot.planned_budget_kcal)
            .sum();

        let meals = plan
            .meals
            .iter()
            .map(|slot| {
                if slot.checked_in {
                    return slot.clone();
                }
                let reduction = if adjustment.is_zero() || remaining_planned <= 0 {
                    None
                } else {
                    Some(slot_reduction(slot, adjustment, remaining_planned))
                };
                let budget = reduction.map_or(slot.planned_budget_kcal, |cut| {
                    (slot.planned_budget_kcal - cut.kcal).max(0)
                });
                MealSlot {
                    calorie_budget_kcal: budget,
                    foods: self.fill(slot.category, budget),
                    reduction,
                    ..slot.clone()
                }
            })
            .collect();

        debug!(
            surplus = adjustment.surplus_kcal,
            remaining_planned, "Applied rebalancing to remaining meals"
        );
        NutritionPlan {
            meals,
            ..plan.clone()
        }
    }

    fn fill(&self, category: MealCategory, budget: i32) -> Vec<FoodPortion> {
        greedy_fill(&self.catalog.candidates(category), budget)
    }
}

fn slot_reduction(
    slot: &MealSlot,
    adjustment: &RebalancingAdjustment,
    remaining_planned: i32,
) -> SlotReduction {
    let share = f64::from(slot.planned_budget_kcal) / f64::from(remaining_planned);
    SlotReduction {
        kcal: (f64::from(adjustment.surplus_kcal) * share).round() as i32,
        fat_g: round1(adjustment.fat_reduction_g * share),
        carbs_g: round1(adjustment.carb_reduction_g * share),
        protein_g: round1(adjustment.protein_reduction_g * share),
    }
}
