// ABOUTME: Intake questionnaire (anamnesis) and its canonical normalized view
// ABOUTME: Categorical enums for experience, location, goal, activity level, and sex
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EvolveYou

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::constants::intake_defaults;

/// Biological sex used by the BMR equation and load scaling
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male (Mifflin-St Jeor constant +5)
    #[default]
    Male,
    /// Female (Mifflin-St Jeor constant -161)
    Female,
}

/// Primary goal declared in the questionnaire
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric deficit
    LoseFat,
    /// Caloric surplus
    GainMuscle,
    /// Energy balance
    #[default]
    Maintain,
    /// Return to training after a break; energy balance
    Recondition,
}

impl Goal {
    /// Stable snake-case name, matching the serde representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoseFat => "lose_fat",
            Self::GainMuscle => "gain_muscle",
            Self::Maintain => "maintain",
            Self::Recondition => "recondition",
        }
    }
}

/// Training experience tier
///
/// Ordered so that difficulty comparisons read naturally.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceTier {
    /// Less than six months of consistent training
    #[default]
    Beginner,
    /// Six months to two years
    Intermediate,
    /// Several years of serious training
    Advanced,
}

/// Where the user trains, which bounds the available equipment
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LocationTier {
    /// At home with little or no equipment
    HomeNone,
    /// At home with dumbbells and bands
    HomeBasic,
    /// Basic gym
    GymBasic,
    /// Fully equipped gym
    #[default]
    GymFull,
    /// Crossfit box
    CrossfitBox,
}

impl LocationTier {
    /// True for the home tiers that force a bodyweight-oriented split
    #[must_use]
    pub const fn is_home(self) -> bool {
        matches!(self, Self::HomeNone | Self::HomeBasic)
    }
}

/// Daily activity outside training, selecting the TDEE multiplier
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Desk job, no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    #[default]
    Moderate,
    /// Hard exercise 6-7 days/week
    Intense,
    /// Physical job plus hard exercise
    VeryIntense,
}

/// Raw intake questionnaire as submitted by the user
///
/// Every field is optional: an incomplete questionnaire still produces a plan,
/// except where arithmetic needs a number (see [`BodyMetrics`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnamnesisProfile {
    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Free-text or enumerated sex answer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    /// Height in centimetres
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Body weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Goal answer (`lose_fat`, "Perder peso", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    /// Free-text training history answer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_experience: Option<String>,
    /// Sessions per week
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_frequency: Option<u8>,
    /// Training location answer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_location: Option<String>,
    /// Free-text injuries and pain, may contain keywords
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injuries: Option<String>,
    /// Activity level answer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<String>,
    /// Desired meals per day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meals_per_day: Option<u8>,
}

/// Canonical categorical view of an [`AnamnesisProfile`]
///
/// Derived deterministically on every generation request and never stored on
/// its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizedProfile {
    /// Experience tier
    pub experience_tier: ExperienceTier,
    /// Training sessions per week, within 1-7
    pub frequency: u8,
    /// Training location tier
    pub location_tier: LocationTier,
    /// Goal
    pub goal: Goal,
    /// Canonical injury tags (`knee`, `spine`, ...)
    pub injury_tags: BTreeSet<String>,
    /// Sex
    pub sex: Sex,
    /// Activity level for the TDEE multiplier
    pub activity_level: ActivityLevel,
    /// Meals per day, within 1-6
    pub meals_per_day: u8,
}

impl Default for NormalizedProfile {
    fn default() -> Self {
        Self {
            experience_tier: ExperienceTier::default(),
            frequency: intake_defaults::WEEKLY_FREQUENCY,
            location_tier: LocationTier::default(),
            goal: Goal::default(),
            injury_tags: BTreeSet::new(),
            sex: Sex::default(),
            activity_level: ActivityLevel::default(),
            meals_per_day: intake_defaults::MEALS_PER_DAY,
        }
    }
}

impl NormalizedProfile {
    /// True when the user reported at least one injury
    #[must_use]
    pub fn has_injuries(&self) -> bool {
        !self.injury_tags.is_empty()
    }
}

/// Numeric body measurements consumed by the metabolic calculator
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct BodyMetrics {
    /// Body weight in kilograms
    pub weight_kg: Option<f64>,
    /// Height in centimetres
    pub height_cm: Option<f64>,
    /// Age in years
    pub age: Option<u32>,
}

impl BodyMetrics {
    /// Fully specified measurements
    #[must_use]
    pub const fn new(weight_kg: f64, height_cm: f64, age: u32) -> Self {
        Self {
            weight_kg: Some(weight_kg),
            height_cm: Some(height_cm),
            age: Some(age),
        }
    }
}

impl From<&AnamnesisProfile> for BodyMetrics {
    fn from(profile: &AnamnesisProfile) -> Self {
        Self {
            weight_kg: profile.weight_kg,
            height_cm: profile.height_cm,
            age: profile.age,
        }
    }
}
