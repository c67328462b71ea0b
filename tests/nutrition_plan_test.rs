// ABOUTME: Integration tests for daily meal plan generation and meal check-ins
// ABOUTME: Validates slot budgets, meal counts, food portions, and plan determinism
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EvolveYou

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use evolveyou_core::models::MealCategory;
use evolveyou::{AnamnesisProfile, EngineError};

#[test]
fn test_five_meal_budgets_follow_weights() {
    let engine = common::test_engine();
    let (profile, targets) = common::profile_and_targets(&engine, &common::beginner_intake());
    let plan = engine.generate_nutrition_plan(&targets, &profile);

    let ids: Vec<&str> = plan.meals.iter().map(|slot| slot.id.as_str()).collect();
    assert_eq!(
        ids,
        ["breakfast", "morning_snack", "lunch", "afternoon_snack", "dinner"]
    );
    let budgets: Vec<i32> = plan
        .meals
        .iter()
        .map(|slot| slot.calorie_budget_kcal)
        .collect();
    assert_eq!(budgets, [553, 221, 774, 221, 442]);
    assert_eq!(plan.total_target_kcal, 2211);
    assert_eq!(plan.macro_targets, targets.macro_grams);
}

#[test]
fn test_budgets_sum_to_target_for_every_meal_count() {
    let engine = common::test_engine();
    for meals in 1..=6 {
        let intake = AnamnesisProfile {
            meals_per_day: Some(meals),
            ..common::advanced_intake()
        };
        let (profile, targets) = common::profile_and_targets(&engine, &intake);
        let plan = engine.generate_nutrition_plan(&targets, &profile);

        assert_eq!(plan.meals.len(), usize::from(meals));
        let slack = i32::try_from(plan.meals.len()).unwrap();
        assert!(
            (plan.budgeted_kcal() - targets.target_kcal).abs() <= slack,
            "{meals} meals budget {} for target {}",
            plan.budgeted_kcal(),
            targets.target_kcal
        );
    }
}

#[test]
fn test_slots_are_filled_close_to_budget() {
    let engine = common::test_engine();
    let (profile, targets) = common::profile_and_targets(&engine, &common::advanced_intake());
    let plan = engine.generate_nutrition_plan(&targets, &profile);

    for slot in &plan.meals {
        assert!(!slot.foods.is_empty(), "{} has no foods", slot.id);
        assert!((slot.food_calories() - slot.calorie_budget_kcal).abs() <= 3);
        assert!(slot.foods.iter().all(|food| food.quantity > 0));
        assert!(!slot.checked_in);
        assert!(slot.reduction.is_none());
    }
    assert_eq!(plan.slot("supper").unwrap().category, MealCategory::Snack);
}

#[test]
fn test_plan_is_deterministic() {
    let engine = common::test_engine();
    let (profile, targets) = common::profile_and_targets(&engine, &common::beginner_intake());
    assert_eq!(
        engine.generate_nutrition_plan(&targets, &profile),
        engine.generate_nutrition_plan(&targets, &profile)
    );
}

#[test]
fn test_check_in_marks_slot_and_rejects_unknown_ids() {
    let engine = common::test_engine();
    let (profile, targets) = common::profile_and_targets(&engine, &common::beginner_intake());
    let plan = engine.generate_nutrition_plan(&targets, &profile);

    let checked = plan.check_in("lunch").unwrap();
    assert!(checked.slot("lunch").unwrap().checked_in);
    assert!(!plan.slot("lunch").unwrap().checked_in);
    assert_eq!(checked.remaining_slots().count(), 4);

    let err = plan.check_in("brunch").unwrap_err();
    assert!(matches!(err, EngineError::UnknownMealSlot { .. }));
}

#[test]
fn test_plan_serializes_snake_case() {
    let engine = common::test_engine();
    let (profile, targets) = common::profile_and_targets(&engine, &common::beginner_intake());
    let plan = engine.generate_nutrition_plan(&targets, &profile);

    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["goal"], "lose_fat");
    assert_eq!(json["meals"][0]["category"], "breakfast");
}
