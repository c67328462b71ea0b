// ABOUTME: Metabolic calculator: Mifflin-St Jeor BMR, TDEE, and goal-adjusted targets
// ABOUTME: Also derives macro grams from the unrounded target using per-goal ratios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EvolveYou

//! Metabolic Calculator
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise Physiology*.
//!
//! Intermediate values keep full `f64` precision; rounding to whole kcal
//! happens once, when [`MetabolicTargets`] is assembled, so identical inputs
//! always give identical outputs.

use evolveyou_core::constants::energy::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use evolveyou_core::errors::{EngineError, EngineResult};
use evolveyou_core::models::{
    ActivityLevel, BodyMetrics, MacroGrams, MetabolicTargets, NormalizedProfile, Sex,
};
use tracing::info;

use crate::config::{ActivityFactorsConfig, BmrConfig, EngineConfig, MacroDistribution};

/// Upper bound accepted for weight (kg) and height (cm)
const MAX_BODY_MEASURE: f64 = 300.0;
/// Upper bound accepted for age
const MAX_AGE: u32 = 120;

/// Round to one decimal place
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Male: +5
/// - Female: -161
///
/// # Arguments
/// * `weight_kg` - Body weight in kilograms
/// * `height_cm` - Height in centimeters
/// * `age` - Age in years
/// * `sex` - Male or Female
/// * `config` - BMR configuration with formula coefficients
///
/// # Errors
///
/// Returns `EngineError::InvalidValue` if weight or height is not positive or
/// any measure is implausibly large
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: Sex,
    config: &BmrConfig,
) -> EngineResult<f64> {
    if !(weight_kg > 0.0 && weight_kg <= MAX_BODY_MEASURE) {
        return Err(EngineError::invalid(
            "weight_kg",
            "weight must be between 0 and 300 kg",
        ));
    }
    if !(height_cm > 0.0 && height_cm <= MAX_BODY_MEASURE) {
        return Err(EngineError::invalid(
            "height_cm",
            "height must be between 0 and 300 cm",
        ));
    }
    if age > MAX_AGE {
        return Err(EngineError::invalid("age", "age must be at most 120 years"));
    }

    let sex_constant = match sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
    };

    Ok(config.msj_weight_coef.mul_add(
        weight_kg,
        config.msj_height_coef.mul_add(
            height_cm,
            config.msj_age_coef.mul_add(f64::from(age), sex_constant),
        ),
    ))
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x Activity Factor
#[must_use]
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> f64 {
    bmr * config.factor(activity_level)
}

/// Split a calorie target into macro grams
///
/// `protein = kcal·P/4`, `carbs = kcal·C/4`, `fat = kcal·F/9`, one decimal each.
#[must_use]
pub fn calculate_macro_grams(target_kcal: f64, distribution: MacroDistribution) -> MacroGrams {
    let (protein, carbs, fat) = distribution.as_ratios();
    MacroGrams {
        protein_g: round1(target_kcal * protein / KCAL_PER_GRAM_PROTEIN),
        carbs_g: round1(target_kcal * carbs / KCAL_PER_GRAM_CARBS),
        fat_g: round1(target_kcal * fat / KCAL_PER_GRAM_FAT),
    }
}

/// Compute BMR, TDEE, target calories and macro grams
///
/// # Errors
///
/// Returns `EngineError::MissingRequiredField` when weight, height or age is
/// absent, or `EngineError::InvalidValue` when one is out of range
pub fn compute_metabolic_targets(
    profile: &NormalizedProfile,
    metrics: &BodyMetrics,
    config: &EngineConfig,
) -> EngineResult<MetabolicTargets> {
    let weight_kg = metrics
        .weight_kg
        .ok_or(EngineError::missing("weight_kg"))?;
    let height_cm = metrics
        .height_cm
        .ok_or(EngineError::missing("height_cm"))?;
    let age = metrics.age.ok_or(EngineError::missing("age"))?;

    let bmr = calculate_mifflin_st_jeor(weight_kg, height_cm, age, profile.sex, &config.bmr)?;
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors);
    let adjustment = config.goal_adjustment.adjustment(profile.goal);
    let target = tdee + f64::from(adjustment);

    let targets = MetabolicTargets {
        bmr_kcal: bmr.round() as i32,
        tdee_kcal: tdee.round() as i32,
        goal_adjustment_kcal: adjustment,
        target_kcal: target.round() as i32,
        macro_grams: calculate_macro_grams(target, config.macro_ratios.for_goal(profile.goal)),
        body_weight_kg: weight_kg,
    };

    info!(
        bmr = targets.bmr_kcal,
        tdee = targets.tdee_kcal,
        target = targets.target_kcal,
        goal = profile.goal.as_str(),
        "Computed metabolic targets"
    );
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mifflin_st_jeor_male_typical() {
        let bmr = calculate_mifflin_st_jeor(75.0, 180.0, 30, Sex::Male, &BmrConfig::default())
            .unwrap();
        // 750 + 1125 - 150 + 5
        assert!((bmr - 1730.0).abs() < 1e-9);
    }

    #[test]
    fn test_mifflin_st_jeor_female_typical() {
        let bmr = calculate_mifflin_st_jeor(60.0, 165.0, 25, Sex::Female, &BmrConfig::default())
            .unwrap();
        // 600 + 1031.25 - 125 - 161
        assert!((bmr - 1345.25).abs() < 1e-9);
    }

    #[test]
    fn test_non_positive_weight_is_invalid() {
        let err = calculate_mifflin_st_jeor(0.0, 170.0, 30, Sex::Male, &BmrConfig::default())
            .unwrap_err();
        assert_eq!(err.field(), Some("weight_kg"));
    }

    #[test]
    fn test_tdee_uses_activity_factor() {
        let config = ActivityFactorsConfig::default();
        let tdee = calculate_tdee(1000.0, ActivityLevel::VeryIntense, &config);
        assert!((tdee - 1900.0).abs() < 1e-9);
    }

    #[test]
    fn test_macro_grams_reconstruct_target() {
        let grams = calculate_macro_grams(2000.0, MacroDistribution::new(30, 40, 30));
        assert!((grams.protein_g - 150.0).abs() < 1e-9);
        assert!((grams.carbs_g - 200.0).abs() < 1e-9);
        assert!((grams.fat_g - 66.7).abs() < 1e-9);
        assert!((grams.kcal() - 2000.0).abs() < 1.0);
    }

    #[test]
    fn test_missing_age_is_reported() {
        let metrics = BodyMetrics {
            age: None,
            ..BodyMetrics::new(80.0, 175.0, 30)
        };
        let err = compute_metabolic_targets(
            &NormalizedProfile::default(),
            &metrics,
            &EngineConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err, EngineError::missing("age"));
    }
}
