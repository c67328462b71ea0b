// ABOUTME: PersonalizationEngine facade wiring catalogs and configuration into every stage
// ABOUTME: Free functions run the same pipeline over the built-in catalogs and global config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EvolveYou

//! Personalization engine.
//!
//! Every operation is a pure function of its inputs plus the engine's
//! catalogs and configuration; none of them touch the system clock or a
//! global RNG.

use chrono::Weekday;
use evolveyou_core::errors::EngineResult;
use evolveyou_core::models::{
    AnamnesisProfile, BodyMetrics, DailyLedger, DayPlan, MetabolicTargets, NormalizedProfile,
    NutritionPlan, RebalancingAdjustment, WeeklyProgram, WorkoutSplit,
};

use crate::assignment::WorkoutGenerator;
use crate::catalog::{BuiltinExerciseCatalog, BuiltinFoodCatalog, ExerciseCatalog, FoodCatalog};
use crate::config::EngineConfig;
use crate::metabolic;
use crate::normalizer;
use crate::nutrition_plan::NutritionPlanBuilder;
use crate::random::RandomSource;
use crate::rebalancer::{self, PlannedBalance};
use crate::split;

/// Personalization pipeline over injectable catalogs
///
/// ```
/// use evolveyou_intelligence::engine::PersonalizationEngine;
/// use evolveyou_intelligence::random::seeded_source;
/// use evolveyou_core::models::{AnamnesisProfile, BodyMetrics};
///
/// let engine = PersonalizationEngine::new();
/// let intake = AnamnesisProfile {
///     age: Some(30),
///     height_cm: Some(175.0),
///     weight_kg: Some(80.0),
///     ..AnamnesisProfile::default()
/// };
/// let profile = engine.normalize_profile(&intake);
/// let targets = engine
///     .compute_metabolic_targets(&profile, &BodyMetrics::from(&intake))
///     .unwrap();
/// let program = engine.generate_weekly_program(&profile, &targets, &mut seeded_source(7));
/// assert_eq!(program.days.len(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct PersonalizationEngine<
    E: ExerciseCatalog = BuiltinExerciseCatalog,
    F: FoodCatalog = BuiltinFoodCatalog,
> {
    exercises: E,
    foods: F,
    config: EngineConfig,
}

impl Default for PersonalizationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonalizationEngine {
    /// Engine over the built-in catalogs with the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::global().clone())
    }

    /// Engine over the built-in catalogs with an explicit configuration
    #[must_use]
    pub const fn with_config(config: EngineConfig) -> Self {
        Self {
            exercises: BuiltinExerciseCatalog,
            foods: BuiltinFoodCatalog,
            config,
        }
    }
}

impl<E: ExerciseCatalog, F: FoodCatalog> PersonalizationEngine<E, F> {
    /// Engine over caller-supplied catalogs
    #[must_use]
    pub const fn with_catalogs(exercises: E, foods: F, config: EngineConfig) -> Self {
        Self {
            exercises,
            foods,
            config,
        }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Canonical view of a raw intake
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn normalize_profile(&self, intake: &AnamnesisProfile) -> NormalizedProfile {
        normalizer::normalize_profile(intake)
    }

    /// BMR, TDEE, target calories and macro grams
    ///
    /// # Errors
    ///
    /// Returns an error when a body measurement is missing or out of range
    pub fn compute_metabolic_targets(
        &self,
        profile: &NormalizedProfile,
        metrics: &BodyMetrics,
    ) -> EngineResult<MetabolicTargets> {
        metabolic::compute_metabolic_targets(profile, metrics, &self.config)
    }

    /// Weekly split for a profile
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn select_split(&self, profile: &NormalizedProfile) -> WorkoutSplit {
        split::select_split(profile)
    }

    /// Workout for one weekday
    #[must_use]
    pub fn generate_day_workout(
        &self,
        split: &WorkoutSplit,
        weekday: Weekday,
        profile: &NormalizedProfile,
        targets: &MetabolicTargets,
        rng: &mut dyn RandomSource,
    ) -> DayPlan {
        self.workouts()
            .day_plan(split, weekday, profile, targets, rng)
    }

    /// Seven-day program
    #[must_use]
    pub fn generate_weekly_program(
        &self,
        profile: &NormalizedProfile,
        targets: &MetabolicTargets,
        rng: &mut dyn RandomSource,
    ) -> WeeklyProgram {
        self.workouts().weekly_program(profile, targets, rng)
    }

    /// Daily meal plan
    #[must_use]
    pub fn generate_nutrition_plan(
        &self,
        targets: &MetabolicTargets,
        profile: &NormalizedProfile,
    ) -> NutritionPlan {
        self.meals()
            .build(targets, profile.goal, profile.meals_per_day)
    }

    /// Reductions needed to bring the day back to its planned balance
    #[must_use]
    pub fn rebalance(
        &self,
        plan: &NutritionPlan,
        ledger: &DailyLedger,
        planned: PlannedBalance,
    ) -> RebalancingAdjustment {
        rebalancer::rebalance(plan, ledger, planned, &self.config.rebalance)
    }

    /// Rebuild the remaining meals of `plan` for `adjustment`
    #[must_use]
    pub fn apply_adjustment(
        &self,
        plan: &NutritionPlan,
        adjustment: &RebalancingAdjustment,
    ) -> NutritionPlan {
        self.meals().apply_adjustment(plan, adjustment)
    }

    /// Rebalance from the ledger and rebuild the remaining meals in one step
    #[must_use]
    pub fn rebalance_plan(
        &self,
        plan: &NutritionPlan,
        ledger: &DailyLedger,
        planned: PlannedBalance,
    ) -> (RebalancingAdjustment, NutritionPlan) {
        let adjustment = self.rebalance(plan, ledger, planned);
        let adjusted = self.apply_adjustment(plan, &adjustment);
        (adjustment, adjusted)
    }

    fn workouts(&self) -> WorkoutGenerator<'_, E> {
        WorkoutGenerator::new(&self.exercises, &self.config.load_factors)
    }

    fn meals(&self) -> NutritionPlanBuilder<'_, F> {
        NutritionPlanBuilder::new(&self.foods, &self.config.meal_weights)
    }
}

/// BMR, TDEE, target calories and macro grams under the global configuration
///
/// # Errors
///
/// Returns an error when a body measurement is missing or out of range
pub fn compute_metabolic_targets(
    profile: &NormalizedProfile,
    metrics: &BodyMetrics,
) -> EngineResult<MetabolicTargets> {
    metabolic::compute_metabolic_targets(profile, metrics, EngineConfig::global())
}

/// Workout for one weekday from the built-in exercise catalog
#[must_use]
pub fn generate_day_workout(
    split: &WorkoutSplit,
    weekday: Weekday,
    profile: &NormalizedProfile,
    targets: &MetabolicTargets,
    rng: &mut dyn RandomSource,
) -> DayPlan {
    WorkoutGenerator::new(&BuiltinExerciseCatalog, &EngineConfig::global().load_factors)
        .day_plan(split, weekday, profile, targets, rng)
}

/// Seven-day program from the built-in exercise catalog
#[must_use]
pub fn generate_weekly_program(
    profile: &NormalizedProfile,
    targets: &MetabolicTargets,
    rng: &mut dyn RandomSource,
) -> WeeklyProgram {
    WorkoutGenerator::new(&BuiltinExerciseCatalog, &EngineConfig::global().load_factors)
        .weekly_program(profile, targets, rng)
}

/// Daily meal plan from the built-in food catalog
#[must_use]
pub fn generate_nutrition_plan(
    targets: &MetabolicTargets,
    profile: &NormalizedProfile,
) -> NutritionPlan {
    NutritionPlanBuilder::new(&BuiltinFoodCatalog, &EngineConfig::global().meal_weights).build(
        targets,
        profile.goal,
        profile.meals_per_day,
    )
}

/// Reductions needed to bring the day back to its planned balance
#[must_use]
pub fn rebalance(
    plan: &NutritionPlan,
    ledger: &DailyLedger,
    planned: PlannedBalance,
) -> RebalancingAdjustment {
    rebalancer::rebalance(plan, ledger, planned, &EngineConfig::global().rebalance)
}

/// Rebuild the remaining meals of `plan` from `catalog`
#[must_use]
pub fn apply_adjustment(
    plan: &NutritionPlan,
    adjustment: &RebalancingAdjustment,
    catalog: &dyn FoodCatalog,
) -> NutritionPlan {
    NutritionPlanBuilder::new(catalog, &EngineConfig::global().meal_weights)
        .apply_adjustment(plan, adjustment)
}
