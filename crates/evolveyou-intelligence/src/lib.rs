// ABOUTME: Personalization algorithms for workout programs and meal plans
// ABOUTME: Normalizer, metabolic calculator, split selector, assignment, nutrition, rebalancer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EvolveYou

#![deny(unsafe_code)]

//! # `EvolveYou` Intelligence
//!
//! Turns an intake questionnaire into a weekly training program and a daily
//! meal plan, then keeps the meal plan honest as unplanned food and activity
//! are logged.
//!
//! ```text
//! AnamnesisProfile -> NormalizedProfile -> MetabolicTargets
//!                                       -> WorkoutSplit -> WeeklyProgram
//!                                       -> NutritionPlan -> (ledger) -> RebalancingAdjustment
//! ```

/// Exercise assignment engine
pub mod assignment;
/// Exercise, food, and activity catalogs
pub mod catalog;
/// Engine configuration with environment overrides
pub mod config;
/// Injury constraint modifier
pub mod constraints;
/// Engine facade
pub mod engine;
/// BMR, TDEE, and macro targets
pub mod metabolic;
/// Intake normalization
pub mod normalizer;
/// Meal plan builder
pub mod nutrition_plan;
/// Randomness seam
pub mod random;
/// Adaptive rebalancer
pub mod rebalancer;
/// Split selection
pub mod split;

pub use catalog::{
    activity_entry, ActivityIntensity, BuiltinExerciseCatalog, BuiltinFoodCatalog,
    ExerciseCatalog, ExerciseEntry, FoodCatalog, FoodCatalogEntry,
};
pub use config::{ConfigError, EngineConfig};
pub use constraints::apply_constraints;
pub use engine::{
    apply_adjustment, compute_metabolic_targets, generate_day_workout, generate_nutrition_plan,
    generate_weekly_program, rebalance, PersonalizationEngine,
};
pub use normalizer::normalize_profile;
pub use random::{seeded_source, RandomSource};
pub use rebalancer::PlannedBalance;
pub use split::select_split;
