// ABOUTME: Domain models shared by every stage of the personalization pipeline
// ABOUTME: Re-exports profile, metabolic, workout, nutrition, and ledger records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EvolveYou

//! Domain models.
//!
//! Records are plain serde values. Stages never mutate their inputs; each
//! returns a fresh record.

/// Intake questionnaire and normalized profile
pub mod profile;

/// Metabolic targets and macro grams
pub mod metabolic;

/// Workout split and plans
pub mod workout;

/// Meal plan records
pub mod nutrition;

/// Daily ledger and rebalancing result
pub mod ledger;

pub use ledger::{DailyLedger, LedgerEntry, LedgerEntryKind, RebalanceState, RebalancingAdjustment};
pub use metabolic::{MacroGrams, MetabolicTargets};
pub use nutrition::{FoodPortion, MealCategory, MealSlot, NutritionPlan, SlotReduction};
pub use profile::{
    ActivityLevel, AnamnesisProfile, BodyMetrics, ExperienceTier, Goal, LocationTier,
    NormalizedProfile, Sex,
};
pub use workout::{
    DayPlan, DayType, Equipment, ExerciseAssignment, ExerciseRole, MuscleGroup, SplitKind,
    WeeklyProgram, WorkoutSplit,
};
