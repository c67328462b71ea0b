// ABOUTME: Read-only catalogs consumed by the engine: exercises, foods, and activities
// ABOUTME: Trait seams let callers inject their own catalogs; built-in tables are static data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EvolveYou

//! Catalogs.
//!
//! Catalog order is significant: primary exercise selection takes the first
//! suitable entry and the meal fill walks candidate foods in order, so
//! reordering a table changes generated plans.

/// Extra-activity energy rates for ledger entries
pub mod activities;
/// Built-in exercise tables per location tier
pub mod exercises;
/// Built-in food table and meal candidates
pub mod foods;

use evolveyou_core::models::{
    Equipment, ExerciseRole, ExperienceTier, LocationTier, MealCategory, MuscleGroup,
};
use serde::Serialize;

pub use activities::{activity_entry, ActivityIntensity, ActivityRate};
pub use exercises::BuiltinExerciseCatalog;
pub use foods::BuiltinFoodCatalog;

/// One exercise in a location's catalog
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ExerciseEntry {
    /// Display name
    pub name: &'static str,
    /// Muscle group it is listed under
    pub group: MuscleGroup,
    /// Natural role of the movement
    pub role: ExerciseRole,
    /// Tier the movement suits
    pub difficulty: ExperienceTier,
    /// Equipment required
    pub equipment: Equipment,
}

/// Nutrient profile of one food, per 100 g (or 100 ml)
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct FoodCatalogEntry {
    /// Stable identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Energy per 100 units
    pub kcal_per_100: f64,
    /// Protein per 100 units (g)
    pub protein_per_100: f64,
    /// Carbohydrates per 100 units (g)
    pub carbs_per_100: f64,
    /// Fat per 100 units (g)
    pub fat_per_100: f64,
    /// Fiber per 100 units (g)
    pub fiber_per_100: f64,
    /// `"g"` or `"ml"`
    pub unit: &'static str,
}

/// Source of exercises keyed by location tier and muscle group
pub trait ExerciseCatalog {
    /// Exercises for `group` at `location`, in catalog order; empty when the
    /// location does not list the group
    fn exercises(&self, location: LocationTier, group: MuscleGroup) -> Vec<&ExerciseEntry>;

    /// Exercises for `group` at `location`, falling back to the full-gym list
    /// when the location has none
    fn exercises_or_fallback(
        &self,
        location: LocationTier,
        group: MuscleGroup,
    ) -> Vec<&ExerciseEntry> {
        let found = self.exercises(location, group);
        if found.is_empty() && location != LocationTier::GymFull {
            return self.exercises(LocationTier::GymFull, group);
        }
        found
    }
}

/// Source of foods keyed by id and by meal category
pub trait FoodCatalog {
    /// Food with identifier `id`
    fn food(&self, id: &str) -> Option<&FoodCatalogEntry>;

    /// Candidate foods for a meal category, in catalog order
    fn candidates(&self, category: MealCategory) -> Vec<&FoodCatalogEntry>;
}
