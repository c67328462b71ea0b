// ABOUTME: Engine configuration container with environment overrides and validation
// ABOUTME: Global singleton falls back to defaults when the environment is invalid
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EvolveYou

//! Engine configuration.
//!
//! Defaults reproduce the fixed tables of the personalization pipeline. A
//! deployment may override individual coefficients through `EVOLVEYOU_*`
//! environment variables; the result is validated before use.

/// Configuration error types
pub mod error;
/// Nutrition coefficients and tables
pub mod nutrition;
/// Training load coefficients
pub mod training;

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, MacroDistribution, MacroRatiosConfig,
    MealWeightsConfig, RebalanceConfig,
};
pub use training::LoadFactorsConfig;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Main engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// TDEE multipliers
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie adjustment per goal
    pub goal_adjustment: GoalAdjustmentConfig,
    /// Macro split per goal
    pub macro_ratios: MacroRatiosConfig,
    /// Meal slot weights
    pub meal_weights: MealWeightsConfig,
    /// Load prescription factors
    pub load_factors: LoadFactorsConfig,
    /// Surplus redistribution shares
    pub rebalance: RebalanceConfig,
}

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or validation fails
    pub fn load_from<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self::default().apply_overrides(&lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every subsystem
    ///
    /// # Errors
    ///
    /// Returns the first validation failure
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors = &self.activity_factors;
        let ordered = [
            factors.sedentary,
            factors.light,
            factors.moderate,
            factors.intense,
            factors.very_intense,
        ];
        if ordered[0] < 1.0 {
            return Err(ConfigError::InvalidRange(
                "sedentary activity factor must be at least 1.0",
            ));
        }
        if ordered.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(ConfigError::InvalidRange(
                "activity factors must not decrease with activity level",
            ));
        }
        if self.goal_adjustment.lose_fat_kcal > 0 {
            return Err(ConfigError::ValueOutOfRange(
                "fat loss adjustment must be a deficit",
            ));
        }
        if self.goal_adjustment.gain_muscle_kcal < 0 {
            return Err(ConfigError::ValueOutOfRange(
                "muscle gain adjustment must be a surplus",
            ));
        }

        self.macro_ratios.validate()?;
        self.meal_weights.validate()?;
        self.load_factors.validate()?;
        self.rebalance.validate()?;
        Ok(())
    }

    fn apply_var<T, F>(lookup: &F, name: &str, target: &mut T) -> Result<(), ConfigError>
    where
        T: FromStr,
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {name}")))?;
        }
        Ok(())
    }

    fn apply_overrides<F>(mut self, lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::apply_var(
            lookup,
            "EVOLVEYOU_DEFICIT_KCAL",
            &mut self.goal_adjustment.lose_fat_kcal,
        )?;
        Self::apply_var(
            lookup,
            "EVOLVEYOU_SURPLUS_KCAL",
            &mut self.goal_adjustment.gain_muscle_kcal,
        )?;

        Self::apply_var(
            lookup,
            "EVOLVEYOU_ACTIVITY_SEDENTARY",
            &mut self.activity_factors.sedentary,
        )?;
        Self::apply_var(
            lookup,
            "EVOLVEYOU_ACTIVITY_LIGHT",
            &mut self.activity_factors.light,
        )?;
        Self::apply_var(
            lookup,
            "EVOLVEYOU_ACTIVITY_MODERATE",
            &mut self.activity_factors.moderate,
        )?;
        Self::apply_var(
            lookup,
            "EVOLVEYOU_ACTIVITY_INTENSE",
            &mut self.activity_factors.intense,
        )?;
        Self::apply_var(
            lookup,
            "EVOLVEYOU_ACTIVITY_VERY_INTENSE",
            &mut self.activity_factors.very_intense,
        )?;

        Self::apply_var(
            lookup,
            "EVOLVEYOU_LOAD_FEMALE_FACTOR",
            &mut self.load_factors.female_multiplier,
        )?;
        Self::apply_var(
            lookup,
            "EVOLVEYOU_LOAD_COMPOSITE_FACTOR",
            &mut self.load_factors.composite_multiplier,
        )?;

        Self::apply_var(
            lookup,
            "EVOLVEYOU_REBALANCE_FAT_SHARE",
            &mut self.rebalance.fat_share_pct,
        )?;
        Self::apply_var(
            lookup,
            "EVOLVEYOU_REBALANCE_CARB_SHARE",
            &mut self.rebalance.carb_share_pct,
        )?;
        Self::apply_var(
            lookup,
            "EVOLVEYOU_REBALANCE_PROTEIN_SHARE",
            &mut self.rebalance.protein_share_pct,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_validate() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = EngineConfig::load_from(lookup(&[
            ("EVOLVEYOU_DEFICIT_KCAL", "-400"),
            ("EVOLVEYOU_LOAD_FEMALE_FACTOR", " 0.75 "),
        ]))
        .unwrap();
        assert_eq!(config.goal_adjustment.lose_fat_kcal, -400);
        assert!((config.load_factors.female_multiplier - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unparsable_override_is_reported() {
        let err = EngineConfig::load_from(lookup(&[("EVOLVEYOU_SURPLUS_KCAL", "lots")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Parse("Invalid EVOLVEYOU_SURPLUS_KCAL".to_owned())
        );
    }

    #[test]
    fn test_shares_must_sum_to_hundred() {
        let err = EngineConfig::load_from(lookup(&[("EVOLVEYOU_REBALANCE_FAT_SHARE", "70")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWeights(_)));
    }

    #[test]
    fn test_decreasing_activity_factors_are_rejected() {
        let err = EngineConfig::load_from(lookup(&[("EVOLVEYOU_ACTIVITY_LIGHT", "1.1")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRange(_)));
    }
}
