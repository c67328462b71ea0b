// ABOUTME: Main library entry point for the EvolveYou personalization engine
// ABOUTME: Re-exports the core models and intelligence pipeline and owns logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EvolveYou

#![deny(unsafe_code)]

//! # `EvolveYou`
//!
//! Personalization engine for a fitness application. An intake questionnaire
//! becomes a weekly training program and a daily meal plan, and the meal plan
//! is rebalanced as the day's unplanned food and activity are logged.
//!
//! ## Architecture
//!
//! - **`evolveyou_core`**: error type, constants and the records passed between stages
//! - **`evolveyou_intelligence`**: normalizer, metabolic calculator, split selector,
//!   exercise assignment, meal plan builder and rebalancer
//! - **logging**: `tracing` subscriber setup for binaries embedding the engine
//!
//! ## Example Usage
//!
//! ```rust
//! use evolveyou::{seeded_source, AnamnesisProfile, BodyMetrics, PersonalizationEngine};
//!
//! # fn main() -> Result<(), evolveyou::EngineError> {
//! let engine = PersonalizationEngine::new();
//! let intake = AnamnesisProfile {
//!     age: Some(30),
//!     sex: Some("male".to_owned()),
//!     height_cm: Some(175.0),
//!     weight_kg: Some(80.0),
//!     goal: Some("lose_fat".to_owned()),
//!     ..AnamnesisProfile::default()
//! };
//!
//! let profile = engine.normalize_profile(&intake);
//! let targets = engine.compute_metabolic_targets(&profile, &BodyMetrics::from(&intake))?;
//! let program = engine.generate_weekly_program(&profile, &targets, &mut seeded_source(42));
//! let plan = engine.generate_nutrition_plan(&targets, &profile);
//!
//! assert_eq!(program.days.len(), 7);
//! assert_eq!(plan.total_target_kcal, targets.target_kcal);
//! # Ok(())
//! # }
//! ```

/// Structured logging configuration
pub mod logging;

pub use evolveyou_core::constants;
pub use evolveyou_core::errors::{EngineError, EngineResult};
pub use evolveyou_core::models::{
    AnamnesisProfile, BodyMetrics, DailyLedger, DayPlan, LedgerEntry, MetabolicTargets,
    NormalizedProfile, NutritionPlan, RebalancingAdjustment, WeeklyProgram, WorkoutSplit,
};
pub use evolveyou_intelligence::{
    activity_entry, apply_adjustment, apply_constraints, compute_metabolic_targets,
    generate_day_workout, generate_nutrition_plan, generate_weekly_program, normalize_profile,
    rebalance, seeded_source, select_split, ActivityIntensity, BuiltinExerciseCatalog,
    BuiltinFoodCatalog, EngineConfig, ExerciseCatalog, FoodCatalog, PersonalizationEngine,
    PlannedBalance, RandomSource,
};
