// ABOUTME: Nutrition configuration: BMR coefficients, activity factors, goal adjustments
// ABOUTME: Per-goal macro distributions, meal slot weights, and rebalancing macro shares
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EvolveYou

use evolveyou_core::models::{ActivityLevel, Goal};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// BMR calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityFactorsConfig {
    /// Sedentary: 1.2
    pub sedentary: f64,
    /// Light: 1.375
    pub light: f64,
    /// Moderate: 1.55
    pub moderate: f64,
    /// Intense: 1.725
    pub intense: f64,
    /// Very intense: 1.9
    pub very_intense: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            intense: 1.725,
            very_intense: 1.9,
        }
    }
}

impl ActivityFactorsConfig {
    /// Multiplier for `level`
    #[must_use]
    pub const fn factor(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Intense => self.intense,
            ActivityLevel::VeryIntense => self.very_intense,
        }
    }
}

/// Calories added to TDEE per goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalAdjustmentConfig {
    /// Deficit for fat loss (negative)
    pub lose_fat_kcal: i32,
    /// Surplus for muscle gain
    pub gain_muscle_kcal: i32,
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            lose_fat_kcal: -500,
            gain_muscle_kcal: 300,
        }
    }
}

impl GoalAdjustmentConfig {
    /// Adjustment for `goal`; maintain and recondition stay at zero
    #[must_use]
    pub const fn adjustment(&self, goal: Goal) -> i32 {
        match goal {
            Goal::LoseFat => self.lose_fat_kcal,
            Goal::GainMuscle => self.gain_muscle_kcal,
            Goal::Maintain | Goal::Recondition => 0,
        }
    }
}

/// Macronutrient split as whole percentages of energy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroDistribution {
    /// Protein percentage (0-100)
    pub protein_pct: u8,
    /// Carbohydrate percentage (0-100)
    pub carbs_pct: u8,
    /// Fat percentage (0-100)
    pub fat_pct: u8,
}

impl MacroDistribution {
    /// Create a new macro distribution
    ///
    /// # Panics
    ///
    /// Panics in debug mode if percentages don't sum to 100
    #[must_use]
    pub const fn new(protein_pct: u8, carbs_pct: u8, fat_pct: u8) -> Self {
        debug_assert!(
            protein_pct
                .saturating_add(carbs_pct)
                .saturating_add(fat_pct)
                == 100,
            "Macro percentages must sum to 100"
        );
        Self {
            protein_pct,
            carbs_pct,
            fat_pct,
        }
    }

    /// Ratios as fractions of one: (protein, carbs, fat)
    #[must_use]
    pub fn as_ratios(&self) -> (f64, f64, f64) {
        (
            f64::from(self.protein_pct) / 100.0,
            f64::from(self.carbs_pct) / 100.0,
            f64::from(self.fat_pct) / 100.0,
        )
    }

    fn sum(self) -> u16 {
        u16::from(self.protein_pct) + u16::from(self.carbs_pct) + u16::from(self.fat_pct)
    }
}

/// Macro distribution per goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroRatiosConfig {
    /// Fat loss: 35/35/30
    pub lose_fat: MacroDistribution,
    /// Muscle gain: 25/45/30
    pub gain_muscle: MacroDistribution,
    /// Maintenance: 25/45/30
    pub maintain: MacroDistribution,
    /// Reconditioning: 30/40/30
    pub recondition: MacroDistribution,
}

impl Default for MacroRatiosConfig {
    fn default() -> Self {
        Self {
            lose_fat: MacroDistribution::new(35, 35, 30),
            gain_muscle: MacroDistribution::new(25, 45, 30),
            maintain: MacroDistribution::new(25, 45, 30),
            recondition: MacroDistribution::new(30, 40, 30),
        }
    }
}

impl MacroRatiosConfig {
    /// Distribution for `goal`
    #[must_use]
    pub const fn for_goal(&self, goal: Goal) -> MacroDistribution {
        match goal {
            Goal::LoseFat => self.lose_fat,
            Goal::GainMuscle => self.gain_muscle,
            Goal::Maintain => self.maintain,
            Goal::Recondition => self.recondition,
        }
    }

    /// Validate that every distribution sums to 100%
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` naming the first goal whose
    /// percentages do not sum to exactly 100.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let goals = [
            ("lose_fat macro percentages must sum to 100", self.lose_fat),
            ("gain_muscle macro percentages must sum to 100", self.gain_muscle),
            ("maintain macro percentages must sum to 100", self.maintain),
            ("recondition macro percentages must sum to 100", self.recondition),
        ];
        for (message, distribution) in goals {
            if distribution.sum() != 100 {
                return Err(ConfigError::InvalidWeights(message));
            }
        }
        Ok(())
    }
}

/// Share of the daily target per canonical meal slot, in percent
///
/// The five default slots sum to 100; supper is only used in six-meal plans,
/// where all weights are re-normalized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealWeightsConfig {
    /// Breakfast (08:00): 25
    pub breakfast_pct: u8,
    /// Morning snack (10:30): 10
    pub morning_snack_pct: u8,
    /// Lunch (12:30): 35
    pub lunch_pct: u8,
    /// Afternoon snack (15:30): 10
    pub afternoon_snack_pct: u8,
    /// Dinner (19:00): 20
    pub dinner_pct: u8,
    /// Supper (21:30): 10
    pub supper_pct: u8,
}

impl Default for MealWeightsConfig {
    fn default() -> Self {
        Self {
            breakfast_pct: 25,
            morning_snack_pct: 10,
            lunch_pct: 35,
            afternoon_snack_pct: 10,
            dinner_pct: 20,
            supper_pct: 10,
        }
    }
}

impl MealWeightsConfig {
    /// Validate the default five-meal weights
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` when the five default slots do not
    /// sum to 100, or `ConfigError::InvalidRange` when any weight is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let five = [
            self.breakfast_pct,
            self.morning_snack_pct,
            self.lunch_pct,
            self.afternoon_snack_pct,
            self.dinner_pct,
        ];
        if five.iter().chain([&self.supper_pct]).any(|pct| *pct == 0) {
            return Err(ConfigError::InvalidRange("meal weights must be positive"));
        }
        if five.iter().map(|pct| u16::from(*pct)).sum::<u16>() != 100 {
            return Err(ConfigError::InvalidWeights(
                "five-meal weights must sum to 100",
            ));
        }
        Ok(())
    }
}

/// How a calorie surplus is removed from the remaining meals, in percent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RebalanceConfig {
    /// Share of the surplus removed as fat: 60
    pub fat_share_pct: u8,
    /// Share removed as carbohydrate: 30
    pub carb_share_pct: u8,
    /// Share removed as protein: 10
    pub protein_share_pct: u8,
}

impl Default for RebalanceConfig {
    fn default() -> Self {
        Self {
            fat_share_pct: 60,
            carb_share_pct: 30,
            protein_share_pct: 10,
        }
    }
}

impl RebalanceConfig {
    /// Validate that the shares sum to 100%
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` otherwise
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sum = u16::from(self.fat_share_pct)
            + u16::from(self.carb_share_pct)
            + u16::from(self.protein_share_pct);
        if sum == 100 {
            Ok(())
        } else {
            Err(ConfigError::InvalidWeights(
                "rebalance shares must sum to 100",
            ))
        }
    }
}
