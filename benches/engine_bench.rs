// ABOUTME: Criterion benchmarks for the personalization pipeline
// ABOUTME: Measures program generation, meal planning, and ledger rebalancing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EvolveYou

//! Criterion benchmarks for the personalization engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used)]

use chrono::{NaiveDate, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use evolveyou::{
    seeded_source, AnamnesisProfile, BodyMetrics, DailyLedger, EngineConfig, LedgerEntry,
    PersonalizationEngine, PlannedBalance,
};

/// Experience/location combinations covering every split
const PROFILES: [(&str, u8, &str); 5] = [
    ("beginner", 3, "gym_full"),
    ("intermediate", 4, "gym_basic"),
    ("advanced", 6, "gym_full"),
    ("intermediate", 4, "home_none"),
    ("advanced", 5, "crossfit"),
];

fn intake(experience: &str, frequency: u8, location: &str) -> AnamnesisProfile {
    AnamnesisProfile {
        age: Some(32),
        sex: Some("female".to_owned()),
        height_cm: Some(168.0),
        weight_kg: Some(64.0),
        goal: Some("gain_muscle".to_owned()),
        training_experience: Some(experience.to_owned()),
        weekly_frequency: Some(frequency),
        training_location: Some(location.to_owned()),
        injuries: Some("knee and shoulder".to_owned()),
        activity_level: Some("light".to_owned()),
        meals_per_day: Some(6),
    }
}

fn bench_weekly_program(c: &mut Criterion) {
    let engine = PersonalizationEngine::with_config(EngineConfig::default());
    let mut group = c.benchmark_group("weekly_program");

    for (experience, frequency, location) in PROFILES {
        let intake = intake(experience, frequency, location);
        let profile = engine.normalize_profile(&intake);
        let targets = engine
            .compute_metabolic_targets(&profile, &BodyMetrics::from(&intake))
            .unwrap();
        let label = format!("{experience}_{location}_x{frequency}");

        group.bench_with_input(BenchmarkId::from_parameter(label), &profile, |b, profile| {
            b.iter(|| {
                engine.generate_weekly_program(
                    black_box(profile),
                    black_box(&targets),
                    &mut seeded_source(42),
                )
            });
        });
    }

    group.finish();
}

fn bench_nutrition_plan(c: &mut Criterion) {
    let engine = PersonalizationEngine::with_config(EngineConfig::default());
    let intake = intake("beginner", 3, "gym_full");
    let profile = engine.normalize_profile(&intake);
    let targets = engine
        .compute_metabolic_targets(&profile, &BodyMetrics::from(&intake))
        .unwrap();

    c.bench_function("nutrition_plan", |b| {
        b.iter(|| engine.generate_nutrition_plan(black_box(&targets), black_box(&profile)));
    });
}

fn bench_rebalance(c: &mut Criterion) {
    let engine = PersonalizationEngine::with_config(EngineConfig::default());
    let intake = intake("beginner", 3, "gym_full");
    let profile = engine.normalize_profile(&intake);
    let targets = engine
        .compute_metabolic_targets(&profile, &BodyMetrics::from(&intake))
        .unwrap();
    let plan = engine.generate_nutrition_plan(&targets, &profile);
    let planned = PlannedBalance::from_plan(&plan, 250);

    let mut group = c.benchmark_group("rebalance_plan");
    for entries in [1_u32, 10, 100] {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let timestamp = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        let ledger = (0..entries).fold(DailyLedger::new(date), |ledger, index| {
            let entry = if index % 3 == 0 {
                LedgerEntry::extra_activity(60, timestamp)
            } else {
                LedgerEntry::extra_food(90, timestamp)
            };
            ledger.with_entry(entry)
        });

        group.throughput(Throughput::Elements(u64::from(entries)));
        group.bench_with_input(BenchmarkId::from_parameter(entries), &ledger, |b, ledger| {
            b.iter(|| engine.rebalance_plan(black_box(&plan), black_box(ledger), planned));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_weekly_program,
    bench_nutrition_plan,
    bench_rebalance,
);
criterion_main!(benches);
