// ABOUTME: Training configuration for load prescriptions
// ABOUTME: Bodyweight fractions per experience tier with sex and role multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EvolveYou

use evolveyou_core::models::ExperienceTier;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Suggested load as a fraction of body weight
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoadFactorsConfig {
    /// Beginner base fraction: 0.3
    pub beginner: f64,
    /// Intermediate base fraction: 0.5
    pub intermediate: f64,
    /// Advanced base fraction: 0.7
    pub advanced: f64,
    /// Multiplier applied for female lifters: 0.8
    pub female_multiplier: f64,
    /// Multiplier applied to composite movements: 1.2
    pub composite_multiplier: f64,
}

impl Default for LoadFactorsConfig {
    fn default() -> Self {
        Self {
            beginner: 0.3,
            intermediate: 0.5,
            advanced: 0.7,
            female_multiplier: 0.8,
            composite_multiplier: 1.2,
        }
    }
}

impl LoadFactorsConfig {
    /// Base fraction for `tier`
    #[must_use]
    pub const fn base(&self, tier: ExperienceTier) -> f64 {
        match tier {
            ExperienceTier::Beginner => self.beginner,
            ExperienceTier::Intermediate => self.intermediate,
            ExperienceTier::Advanced => self.advanced,
        }
    }

    /// Validate that every factor is positive
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for a non-positive factor
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors = [
            self.beginner,
            self.intermediate,
            self.advanced,
            self.female_multiplier,
            self.composite_multiplier,
        ];
        if factors.iter().all(|factor| *factor > 0.0) {
            Ok(())
        } else {
            Err(ConfigError::ValueOutOfRange("load factors must be positive"))
        }
    }
}
