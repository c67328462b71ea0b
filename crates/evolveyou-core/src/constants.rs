// ABOUTME: Physiological constants and intake defaults for the personalization engine
// ABOUTME: Energy densities, intake fallbacks, and workout timing constants grouped by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EvolveYou

//! Constants grouped by domain.
//!
//! Tunable coefficients (activity factors, macro ratios, meal weights) live in
//! the engine configuration instead; these are the values that never change.

/// Energy content of macronutrients
pub mod energy {
    /// Kilocalories per gram of protein
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Kilocalories per gram of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// Fallbacks applied when an intake answer is missing or out of range
pub mod intake_defaults {
    /// Weekly training frequency when the answer is absent
    pub const WEEKLY_FREQUENCY: u8 = 3;
    /// Lowest accepted weekly frequency
    pub const MIN_WEEKLY_FREQUENCY: u8 = 1;
    /// Highest accepted weekly frequency
    pub const MAX_WEEKLY_FREQUENCY: u8 = 7;
    /// Meals per day when the answer is absent
    pub const MEALS_PER_DAY: u8 = 5;
    /// Lowest supported meal count
    pub const MIN_MEALS_PER_DAY: u8 = 1;
    /// Highest supported meal count
    pub const MAX_MEALS_PER_DAY: u8 = 6;
}

/// Workout session shape
pub mod workout {
    /// Primary list size below which filler exercises are considered
    pub const FILLER_THRESHOLD: usize = 4;
    /// Maximum filler exercises added to one day
    pub const MAX_FILLERS: usize = 2;
    /// Exercise cap for beginners
    pub const BEGINNER_EXERCISE_CAP: usize = 4;
    /// Exercise cap for intermediate and advanced lifters
    pub const EXERCISE_CAP: usize = 6;
    /// Warm-up minutes added to every session
    pub const WARMUP_MINUTES: u32 = 10;
    /// Working minutes per exercise
    pub const MINUTES_PER_EXERCISE: u32 = 10;
    /// Average rest minutes per exercise
    pub const REST_MINUTES_PER_EXERCISE: u32 = 2;
    /// Load label for bodyweight equipment
    pub const BODYWEIGHT_LOAD: &str = "bodyweight";
    /// Load label for household weights, which have no meaningful kilogram figure
    pub const HOUSEHOLD_LOAD: &str = "light household weight";
}

/// Meal filling
pub mod meals {
    /// Budget kcal per additional candidate food in a slot
    pub const KCAL_PER_CANDIDATE: i32 = 100;
    /// Minimum number of candidate foods considered per slot
    pub const MIN_CANDIDATES: usize = 2;
}
