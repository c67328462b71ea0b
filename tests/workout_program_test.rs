// ABOUTME: Integration tests for split selection and weekly workout generation
// ABOUTME: Validates schedules, exercise caps, loads, rest days, and seeded determinism
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EvolveYou

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::BTreeSet;

use chrono::Weekday;
use evolveyou_core::constants::workout::{BEGINNER_EXERCISE_CAP, EXERCISE_CAP};
use evolveyou_core::models::{DayType, ExerciseRole, ExperienceTier, SplitKind};
use evolveyou::{seeded_source, AnamnesisProfile};

// ============================================================================
// Split Selection Tests
// ============================================================================

#[test]
fn test_beginner_three_days_trains_fullbody_monday_wednesday_friday() {
    let engine = common::test_engine();
    let profile = engine.normalize_profile(&common::beginner_intake());
    let split = engine.select_split(&profile);

    assert_eq!(split.kind, SplitKind::Fullbody);
    assert_eq!(split.training_days(), 3);
    for weekday in [Weekday::Mon, Weekday::Wed, Weekday::Fri] {
        assert_eq!(split.day_type(weekday), DayType::Fullbody);
    }
    for weekday in [Weekday::Tue, Weekday::Thu, Weekday::Sat, Weekday::Sun] {
        assert_eq!(split.day_type(weekday), DayType::Rest);
    }
}

#[test]
fn test_split_table() {
    let engine = common::test_engine();
    let cases = [
        ("beginner", 5, "gym_full", SplitKind::UpperLower),
        ("intermediate", 2, "gym_basic", SplitKind::UpperLower),
        ("intermediate", 4, "gym_full", SplitKind::Abc),
        ("intermediate", 6, "gym_full", SplitKind::PushPullLegs),
        ("advanced", 3, "crossfit", SplitKind::Abc),
        ("advanced", 5, "gym_full", SplitKind::PushPullLegs),
        ("advanced", 6, "gym_full", SplitKind::PushPullLegsArnold),
        ("advanced", 6, "home_none", SplitKind::HomeFullbody),
        ("beginner", 2, "home_basic", SplitKind::HomeUpperLower),
    ];

    for (experience, frequency, location, expected) in cases {
        let intake = AnamnesisProfile {
            training_experience: Some(experience.to_owned()),
            weekly_frequency: Some(frequency),
            training_location: Some(location.to_owned()),
            ..common::beginner_intake()
        };
        let profile = engine.normalize_profile(&intake);
        assert_eq!(
            engine.select_split(&profile).kind,
            expected,
            "{experience} x{frequency} at {location}"
        );
    }
}

// ============================================================================
// Weekly Program Tests
// ============================================================================

#[test]
fn test_beginner_program_volume_and_loads() {
    let engine = common::test_engine();
    let (profile, targets) = common::profile_and_targets(&engine, &common::beginner_intake());
    let program = engine.generate_weekly_program(&profile, &targets, &mut seeded_source(7));

    assert_eq!(program.days.len(), 7);
    assert_eq!(program.experience_tier, ExperienceTier::Beginner);
    assert_eq!(program.training_days().count(), 3);

    let monday = program.day(Weekday::Mon).unwrap();
    let names: Vec<&str> = monday
        .exercises
        .iter()
        .map(|exercise| exercise.exercise_name.as_str())
        .collect();
    assert_eq!(
        names,
        ["Barbell squat", "Bench press", "Seated cable row", "Lateral raise"]
    );
    assert_eq!(monday.estimated_duration_min, 58);

    let squat = &monday.exercises[0];
    assert_eq!(squat.role, ExerciseRole::Composite);
    // 80 kg x 0.3 x 1.2
    assert_eq!(squat.suggested_load, "29kg");
    assert!(!squat.filler);
    assert!(squat.cautions.is_empty());
}

#[test]
fn test_rest_days_carry_recommendations() {
    let engine = common::test_engine();
    let (profile, targets) = common::profile_and_targets(&engine, &common::beginner_intake());
    let program = engine.generate_weekly_program(&profile, &targets, &mut seeded_source(7));

    let sunday = program.day(Weekday::Sun).unwrap();
    assert!(sunday.is_rest());
    assert!(sunday.exercises.is_empty());
    assert_eq!(sunday.estimated_duration_min, 0);
    assert!(!sunday.observations.is_empty());
}

#[test]
fn test_exercise_caps_and_no_repeats() {
    let engine = common::test_engine();
    for intake in [common::beginner_intake(), common::advanced_intake()] {
        let (profile, targets) = common::profile_and_targets(&engine, &intake);
        let program = engine.generate_weekly_program(&profile, &targets, &mut seeded_source(3));
        let cap = if profile.experience_tier == ExperienceTier::Beginner {
            BEGINNER_EXERCISE_CAP
        } else {
            EXERCISE_CAP
        };

        for day in program.training_days() {
            assert!(!day.exercises.is_empty(), "{:?} has no exercises", day.weekday);
            assert!(day.exercises.len() <= cap);
            let unique: BTreeSet<&str> = day
                .exercises
                .iter()
                .map(|exercise| exercise.exercise_name.as_str())
                .collect();
            assert_eq!(unique.len(), day.exercises.len());
            assert!(day.exercises.iter().all(|exercise| exercise.sets > 0));
        }
    }
}

#[test]
fn test_advanced_arnold_week() {
    let engine = common::test_engine();
    let (profile, targets) = common::profile_and_targets(&engine, &common::advanced_intake());
    let program = engine.generate_weekly_program(&profile, &targets, &mut seeded_source(11));

    assert_eq!(program.split.kind, SplitKind::PushPullLegsArnold);
    assert_eq!(program.training_days().count(), 6);
    assert_eq!(
        program.day(Weekday::Thu).unwrap().day_type,
        DayType::ChestBack
    );
    assert!(program
        .observations
        .iter()
        .any(|note| note.contains("overtraining")));
}

#[test]
fn test_home_program_uses_bodyweight_loads() {
    let engine = common::test_engine();
    let (profile, targets) =
        common::profile_and_targets(&engine, &common::home_intake_with_knee_injury());
    let program = engine.generate_weekly_program(&profile, &targets, &mut seeded_source(5));

    assert_eq!(program.split.kind, SplitKind::HomeFullbody);
    let monday = program.day(Weekday::Mon).unwrap();
    let push_up = monday
        .exercises
        .iter()
        .find(|exercise| exercise.exercise_name == "Push-up")
        .unwrap();
    assert_eq!(push_up.suggested_load, "bodyweight");

    for day in &program.days {
        for exercise in &day.exercises {
            assert!(
                !exercise.suggested_load.ends_with("kg"),
                "{} prescribed {}",
                exercise.exercise_name,
                exercise.suggested_load
            );
        }
    }
}

#[test]
fn test_seeded_program_is_deterministic() {
    let engine = common::test_engine();
    for intake in [
        common::beginner_intake(),
        common::advanced_intake(),
        common::home_intake_with_knee_injury(),
    ] {
        let (profile, targets) = common::profile_and_targets(&engine, &intake);
        let first = engine.generate_weekly_program(&profile, &targets, &mut seeded_source(99));
        let second = engine.generate_weekly_program(&profile, &targets, &mut seeded_source(99));
        assert_eq!(first, second);
    }
}

#[test]
fn test_day_workout_free_function_matches_engine() {
    let engine = common::test_engine();
    let (profile, targets) = common::profile_and_targets(&engine, &common::beginner_intake());
    let split = engine.select_split(&profile);

    let from_engine =
        engine.generate_day_workout(&split, Weekday::Wed, &profile, &targets, &mut seeded_source(1));
    let from_fn = evolveyou::generate_day_workout(
        &split,
        Weekday::Wed,
        &profile,
        &targets,
        &mut seeded_source(1),
    );

    assert_eq!(from_engine.day_type, DayType::Fullbody);
    assert_eq!(from_engine.exercises.len(), from_fn.exercises.len());
}
