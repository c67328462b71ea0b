// ABOUTME: Metabolic targets derived from body metrics and the normalized profile
// ABOUTME: BMR, TDEE, goal-adjusted target calories, and macro gram targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EvolveYou

use serde::{Deserialize, Serialize};

use crate::constants::energy::{KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};

/// Daily macronutrient amounts in grams
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MacroGrams {
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
}

impl MacroGrams {
    /// Energy represented by these grams
    #[must_use]
    pub fn kcal(&self) -> f64 {
        self.protein_g.mul_add(
            KCAL_PER_GRAM_PROTEIN,
            self.carbs_g
                .mul_add(KCAL_PER_GRAM_CARBS, self.fat_g * KCAL_PER_GRAM_FAT),
        )
    }
}

/// Output of the metabolic calculator
///
/// `target_kcal == tdee_kcal + goal_adjustment_kcal` before rounding; each
/// figure is rounded independently from the unrounded intermediates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MetabolicTargets {
    /// Basal metabolic rate (kcal/day)
    pub bmr_kcal: i32,
    /// Total daily energy expenditure (kcal/day)
    pub tdee_kcal: i32,
    /// Goal adjustment applied on top of TDEE
    pub goal_adjustment_kcal: i32,
    /// Goal-adjusted daily calorie target
    pub target_kcal: i32,
    /// Macro split of the target
    pub macro_grams: MacroGrams,
    /// Body weight the targets were computed for, reused for load prescriptions
    pub body_weight_kg: f64,
}
