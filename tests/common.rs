// ABOUTME: Shared test utilities and intake fixtures for integration tests
// ABOUTME: Provides quiet tracing setup and canonical questionnaire profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EvolveYou
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::wildcard_in_or_patterns,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `evolveyou`

use std::env;
use std::sync::Once;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use evolveyou::{
    AnamnesisProfile, BodyMetrics, EngineConfig, MetabolicTargets, NormalizedProfile,
    PersonalizationEngine,
};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Engine with default coefficients, independent of the process environment
pub fn test_engine() -> PersonalizationEngine {
    init_test_logging();
    PersonalizationEngine::with_config(EngineConfig::default())
}

/// Beginner, 3x/week, full gym, fat loss, 80 kg / 175 cm / 30 y male, moderate activity
pub fn beginner_intake() -> AnamnesisProfile {
    AnamnesisProfile {
        age: Some(30),
        sex: Some("male".to_owned()),
        height_cm: Some(175.0),
        weight_kg: Some(80.0),
        goal: Some("lose_fat".to_owned()),
        training_experience: Some("beginner".to_owned()),
        weekly_frequency: Some(3),
        training_location: Some("gym_full".to_owned()),
        injuries: Some("none".to_owned()),
        activity_level: Some("moderate".to_owned()),
        meals_per_day: Some(5),
    }
}

/// Advanced 6x/week lifter gaining muscle
pub fn advanced_intake() -> AnamnesisProfile {
    AnamnesisProfile {
        age: Some(28),
        sex: Some("female".to_owned()),
        height_cm: Some(165.0),
        weight_kg: Some(62.0),
        goal: Some("gain_muscle".to_owned()),
        training_experience: Some("advanced".to_owned()),
        weekly_frequency: Some(6),
        training_location: Some("gym_full".to_owned()),
        injuries: None,
        activity_level: Some("intense".to_owned()),
        meals_per_day: Some(6),
    }
}

/// Intermediate training at home without equipment, with a bad knee
pub fn home_intake_with_knee_injury() -> AnamnesisProfile {
    AnamnesisProfile {
        age: Some(45),
        sex: Some("male".to_owned()),
        height_cm: Some(180.0),
        weight_kg: Some(95.0),
        goal: Some("recondition".to_owned()),
        training_experience: Some("intermediate".to_owned()),
        weekly_frequency: Some(4),
        training_location: Some("home_none".to_owned()),
        injuries: Some("pain in the left knee".to_owned()),
        activity_level: Some("sedentary".to_owned()),
        meals_per_day: Some(3),
    }
}

/// Normalized profile and metabolic targets for an intake
pub fn profile_and_targets(
    engine: &PersonalizationEngine,
    intake: &AnamnesisProfile,
) -> (NormalizedProfile, MetabolicTargets) {
    let profile = engine.normalize_profile(intake);
    let targets = engine
        .compute_metabolic_targets(&profile, &BodyMetrics::from(intake))
        .unwrap();
    (profile, targets)
}

/// Fixed test date
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

/// Timestamp on the test date
pub fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, hour, 0, 0).unwrap()
}
