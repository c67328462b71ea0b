// ABOUTME: Exercise assignment engine turning a split day into a prescribed workout
// ABOUTME: Deterministic slot filling, volume and load tables, seeded filler picks, observations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EvolveYou

//! Exercise Assignment
//!
//! Each day type has a fixed, ordered slot list of `(muscle group, role)`
//! pairs, some with a preferred exercise keyword. Slots are filled from the
//! location's catalog without randomness:
//!
//! 1. the first unused entry whose name contains the slot keyword
//! 2. the first unused entry with the slot's role
//! 3. the first unused entry
//!
//! A slot with no unused entry is left out rather than repeating an
//! exercise. When fewer than four exercises result and the lifter is not a
//! beginner, up to two fillers are drawn through the caller's
//! [`RandomSource`]. Injury constraints run last.

use std::collections::BTreeSet;

use chrono::Weekday;
use evolveyou_core::constants::workout::{
    BEGINNER_EXERCISE_CAP, BODYWEIGHT_LOAD, EXERCISE_CAP, FILLER_THRESHOLD, HOUSEHOLD_LOAD,
    MAX_FILLERS, MINUTES_PER_EXERCISE, REST_MINUTES_PER_EXERCISE, WARMUP_MINUTES,
};
use evolveyou_core::models::{
    DayPlan, DayType, Equipment, ExerciseAssignment, ExerciseRole, ExperienceTier, Goal, MetabolicTargets,
    MuscleGroup, NormalizedProfile, Sex, WeeklyProgram, WorkoutSplit,
};
use tracing::{debug, info};

use crate::catalog::{ExerciseCatalog, ExerciseEntry};
use crate::config::LoadFactorsConfig;
use crate::constraints::apply_constraints;
use crate::random::RandomSource;
use crate::split::select_split;

use ExerciseRole::{Composite, Isolated};
use MuscleGroup::{Arms, Back, Chest, Core, Legs, Shoulders};

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// One position in a day's slot list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseSlot {
    /// Muscle group to fill
    pub group: MuscleGroup,
    /// Role the slot prescribes volume for
    pub role: ExerciseRole,
    /// Preferred exercise, matched as a case-insensitive name substring
    pub keyword: Option<&'static str>,
}

const fn slot(group: MuscleGroup, role: ExerciseRole, keyword: Option<&'static str>) -> ExerciseSlot {
    ExerciseSlot {
        group,
        role,
        keyword,
    }
}

const FULLBODY_SLOTS: &[ExerciseSlot] = &[
    slot(Legs, Composite, Some("squat")),
    slot(Chest, Composite, None),
    slot(Back, Composite, Some("row")),
    slot(Shoulders, Isolated, None),
    slot(Arms, Isolated, None),
    slot(Core, Isolated, Some("plank")),
];

const UPPER_SLOTS: &[ExerciseSlot] = &[
    slot(Chest, Composite, Some("bench press")),
    slot(Back, Composite, Some("pulldown")),
    slot(Shoulders, Composite, Some("press")),
    slot(Chest, Isolated, Some("fly")),
    slot(Back, Isolated, Some("row")),
    slot(Arms, Isolated, Some("curl")),
    slot(Arms, Isolated, Some("triceps")),
];

const LOWER_SLOTS: &[ExerciseSlot] = &[
    slot(Legs, Composite, Some("squat")),
    slot(Legs, Composite, Some("stiff")),
    slot(Legs, Composite, Some("leg press")),
    slot(Legs, Isolated, Some("extension")),
    slot(Legs, Isolated, Some("curl")),
    slot(Core, Isolated, Some("plank")),
];

const A_SLOTS: &[ExerciseSlot] = &[
    slot(Chest, Composite, Some("bench press")),
    slot(Chest, Composite, Some("incline")),
    slot(Shoulders, Composite, Some("press")),
    slot(Chest, Isolated, Some("fly")),
    slot(Shoulders, Isolated, Some("lateral")),
    slot(Arms, Isolated, Some("triceps")),
];

const B_SLOTS: &[ExerciseSlot] = &[
    slot(Back, Composite, Some("pulldown")),
    slot(Back, Composite, Some("row")),
    slot(Back, Isolated, Some("row")),
    slot(Back, Isolated, Some("pullover")),
    slot(Arms, Isolated, Some("curl")),
    slot(Arms, Isolated, Some("hammer")),
];

const PUSH_SLOTS: &[ExerciseSlot] = &[
    slot(Chest, Composite, None),
    slot(Shoulders, Composite, None),
    slot(Chest, Isolated, None),
    slot(Shoulders, Isolated, None),
    slot(Arms, Isolated, Some("triceps")),
];

const PULL_SLOTS: &[ExerciseSlot] = &[
    slot(Back, Composite, None),
    slot(Back, Composite, None),
    slot(Back, Isolated, None),
    slot(Arms, Isolated, Some("curl")),
    slot(Arms, Isolated, Some("curl")),
];

const LEGS_SLOTS: &[ExerciseSlot] = &[
    slot(Legs, Composite, None),
    slot(Legs, Composite, None),
    slot(Legs, Isolated, None),
    slot(Legs, Isolated, None),
    slot(Core, Isolated, None),
];

const CHEST_BACK_SLOTS: &[ExerciseSlot] = &[
    slot(Chest, Composite, None),
    slot(Back, Composite, None),
    slot(Chest, Isolated, None),
    slot(Back, Isolated, None),
    slot(Core, Isolated, None),
];

const SHOULDERS_ARMS_SLOTS: &[ExerciseSlot] = &[
    slot(Shoulders, Composite, None),
    slot(Shoulders, Isolated, None),
    slot(Arms, Isolated, None),
    slot(Arms, Isolated, None),
    slot(Arms, Isolated, None),
];

/// Ordered slot list for a day type; empty for rest days
#[must_use]
pub const fn day_slots(day_type: DayType) -> &'static [ExerciseSlot] {
    match day_type {
        DayType::Rest => &[],
        DayType::Fullbody => FULLBODY_SLOTS,
        DayType::Upper => UPPER_SLOTS,
        DayType::Lower | DayType::C => LOWER_SLOTS,
        DayType::A => A_SLOTS,
        DayType::B => B_SLOTS,
        DayType::Push => PUSH_SLOTS,
        DayType::Pull => PULL_SLOTS,
        DayType::Legs => LEGS_SLOTS,
        DayType::ChestBack => CHEST_BACK_SLOTS,
        DayType::ShouldersArms => SHOULDERS_ARMS_SLOTS,
    }
}

/// Display title for a day type
#[must_use]
pub const fn day_title(day_type: DayType) -> &'static str {
    match day_type {
        DayType::Rest => "Rest and Recovery",
        DayType::Fullbody => "Full Body",
        DayType::Upper => "Upper Body",
        DayType::Lower => "Lower Body",
        DayType::A => "Workout A: Chest, Shoulders and Triceps",
        DayType::B => "Workout B: Back and Biceps",
        DayType::C => "Workout C: Legs and Core",
        DayType::Push => "Push: Chest, Shoulders and Triceps",
        DayType::Pull => "Pull: Back and Biceps",
        DayType::Legs => "Legs and Core",
        DayType::ChestBack => "Chest and Back",
        DayType::ShouldersArms => "Shoulders and Arms",
    }
}

/// Sets, reps, and rest for one experience tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Volume {
    /// Sets for composite movements
    pub composite_sets: u8,
    /// Sets for isolated movements
    pub isolated_sets: u8,
    /// Rep range
    pub rep_range: &'static str,
    /// Rest between sets
    pub rest_label: &'static str,
}

impl Volume {
    /// Volume for a tier, with the goal's rep/rest pair taking precedence
    #[must_use]
    pub const fn prescribe(tier: ExperienceTier, goal: Goal) -> Self {
        let base = match tier {
            ExperienceTier::Beginner => Self {
                composite_sets: 3,
                isolated_sets: 2,
                rep_range: "12-15",
                rest_label: "60-90s",
            },
            ExperienceTier::Intermediate => Self {
                composite_sets: 4,
                isolated_sets: 3,
                rep_range: "8-12",
                rest_label: "90-120s",
            },
            ExperienceTier::Advanced => Self {
                composite_sets: 4,
                isolated_sets: 3,
                rep_range: "6-10",
                rest_label: "120-180s",
            },
        };
        match goal {
            Goal::LoseFat => Self {
                rep_range: "12-15",
                rest_label: "45-60s",
                ..base
            },
            Goal::GainMuscle => Self {
                rep_range: "8-12",
                rest_label: "90-120s",
                ..base
            },
            Goal::Maintain | Goal::Recondition => base,
        }
    }

    /// Working sets for `role`
    #[must_use]
    pub const fn sets(&self, role: ExerciseRole) -> u8 {
        match role {
            Composite => self.composite_sets,
            Isolated => self.isolated_sets,
        }
    }
}

/// Builds day plans and weekly programs from an exercise catalog
pub struct WorkoutGenerator<'a, E: ExerciseCatalog + ?Sized> {
    catalog: &'a E,
    load_factors: &'a LoadFactorsConfig,
}

impl<'a, E: ExerciseCatalog + ?Sized> WorkoutGenerator<'a, E> {
    /// Create a generator over `catalog`
    #[must_use]
    pub const fn new(catalog: &'a E, load_factors: &'a LoadFactorsConfig) -> Self {
        Self {
            catalog,
            load_factors,
        }
    }

    /// Workout for one weekday of `split`
    #[must_use]
    pub fn day_plan(
        &self,
        split: &WorkoutSplit,
        weekday: Weekday,
        profile: &NormalizedProfile,
        targets: &MetabolicTargets,
        rng: &mut dyn RandomSource,
    ) -> DayPlan {
        let day_type = split.day_type(weekday);
        if day_type.is_rest() {
            return rest_day(weekday);
        }

        let tier = profile.experience_tier;
        let volume = Volume::prescribe(tier, profile.goal);
        let slots = day_slots(day_type);
        let mut used: BTreeSet<&str> = BTreeSet::new();
        let mut exercises = Vec::with_capacity(slots.len());

        for slot in slots {
            let candidates = self
                .catalog
                .exercises_or_fallback(profile.location_tier, slot.group);
            if let Some(entry) = pick_primary(&candidates, slot, &used) {
                used.insert(entry.name);
                exercises.push(self.assign(entry, slot.role, &volume, profile, targets, false));
            }
        }

        if exercises.len() < FILLER_THRESHOLD && tier != ExperienceTier::Beginner {
            let fillers = self.pick_fillers(slots, profile, &used, rng);
            exercises.extend(
                fillers
                    .into_iter()
                    .map(|entry| self.assign(entry, entry.role, &volume, profile, targets, true)),
            );
        }

        let cap = if tier == ExperienceTier::Beginner {
            BEGINNER_EXERCISE_CAP
        } else {
            EXERCISE_CAP
        };
        exercises.truncate(cap);
        let exercises = apply_constraints(exercises, &profile.injury_tags);

        debug!(
            ?weekday,
            ?day_type,
            exercises = exercises.len(),
            "Assigned day workout"
        );

        DayPlan {
            weekday,
            day_type,
            title: day_title(day_type).to_owned(),
            estimated_duration_min: estimated_duration(exercises.len()),
            exercises,
            observations: session_observations(profile),
        }
    }

    /// Seven-day program for the profile's split
    #[must_use]
    pub fn weekly_program(
        &self,
        profile: &NormalizedProfile,
        targets: &MetabolicTargets,
        rng: &mut dyn RandomSource,
    ) -> WeeklyProgram {
        let split = select_split(profile);
        let days: Vec<DayPlan> = WEEK
            .iter()
            .map(|weekday| self.day_plan(&split, *weekday, profile, targets, rng))
            .collect();

        info!(
            split = %split.name,
            training_days = split.training_days(),
            "Generated weekly program"
        );

        WeeklyProgram {
            observations: session_observations(profile),
            experience_tier: profile.experience_tier,
            goal: profile.goal,
            split,
            days,
        }
    }

    fn pick_fillers(
        &self,
        slots: &[ExerciseSlot],
        profile: &NormalizedProfile,
        used: &BTreeSet<&str>,
        rng: &mut dyn RandomSource,
    ) -> Vec<&'a ExerciseEntry> {
        let mut groups: Vec<MuscleGroup> = Vec::new();
        for slot in slots {
            if !groups.contains(&slot.group) {
                groups.push(slot.group);
            }
        }

        let mut fillers: Vec<&'a ExerciseEntry> = Vec::new();
        for group in groups {
            if fillers.len() >= MAX_FILLERS {
                break;
            }
            let pool: Vec<&'a ExerciseEntry> = self
                .catalog
                .exercises_or_fallback(profile.location_tier, group)
                .into_iter()
                .filter(|entry| {
                    entry.difficulty == profile.experience_tier
                        && !used.contains(entry.name)
                        && !fillers.iter().any(|picked| picked.name == entry.name)
                })
                .collect();
            if pool.is_empty() {
                continue;
            }
            let index = rng.pick_index(pool.len()).min(pool.len() - 1);
            debug!(?group, exercise = pool[index].name, "Picked filler exercise");
            fillers.push(pool[index]);
        }
        fillers
    }

    fn assign(
        &self,
        entry: &ExerciseEntry,
        role: ExerciseRole,
        volume: &Volume,
        profile: &NormalizedProfile,
        targets: &MetabolicTargets,
        filler: bool,
    ) -> ExerciseAssignment {
        ExerciseAssignment {
            exercise_name: entry.name.to_owned(),
            muscle_group: entry.group,
            role,
            equipment: entry.equipment,
            sets: volume.sets(role),
            rep_range: volume.rep_range.to_owned(),
            rest_label: volume.rest_label.to_owned(),
            suggested_load: self.suggested_load(entry, role, profile, targets),
            notes: exercise_notes(entry, role),
            cautions: Vec::new(),
            filler,
        }
    }

    fn suggested_load(
        &self,
        entry: &ExerciseEntry,
        role: ExerciseRole,
        profile: &NormalizedProfile,
        targets: &MetabolicTargets,
    ) -> String {
        if entry.equipment.is_bodyweight() {
            return BODYWEIGHT_LOAD.to_owned();
        }
        if entry.equipment == Equipment::Household {
            return HOUSEHOLD_LOAD.to_owned();
        }
        let factors = self.load_factors;
        let mut factor = factors.base(profile.experience_tier);
        if profile.sex == Sex::Female {
            factor *= factors.female_multiplier;
        }
        if role == Composite {
            factor *= factors.composite_multiplier;
        }
        format!("{}kg", (targets.body_weight_kg * factor).round())
    }
}

fn pick_primary<'c>(
    candidates: &[&'c ExerciseEntry],
    slot: &ExerciseSlot,
    used: &BTreeSet<&str>,
) -> Option<&'c ExerciseEntry> {
    let mut unused = candidates.iter().copied().filter(|entry| !used.contains(entry.name));
    let by_keyword = slot.keyword.and_then(|keyword| {
        unused
            .clone()
            .find(|entry| entry.name.to_lowercase().contains(keyword))
    });
    by_keyword
        .or_else(|| unused.clone().find(|entry| entry.role == slot.role))
        .or_else(|| unused.next())
}

/// Session length: warm-up plus working and rest time per exercise
#[must_use]
pub fn estimated_duration(exercise_count: usize) -> u32 {
    let count = u32::try_from(exercise_count).unwrap_or(u32::MAX);
    WARMUP_MINUTES
        .saturating_add(count.saturating_mul(MINUTES_PER_EXERCISE + REST_MINUTES_PER_EXERCISE))
}

fn exercise_notes(entry: &ExerciseEntry, role: ExerciseRole) -> Vec<String> {
    let mut notes = Vec::new();
    if role == Composite {
        notes.push("Composite exercise: works multiple muscle groups".to_owned());
    }
    if entry.difficulty == ExperienceTier::Advanced {
        notes.push("Advanced exercise: master the technique before adding load".to_owned());
    }
    if entry.equipment.is_bodyweight() {
        notes.push("Bodyweight exercise: adjust difficulty with tempo or leverage".to_owned());
    }
    notes
}

/// General observations for a training session
#[must_use]
pub fn session_observations(profile: &NormalizedProfile) -> Vec<String> {
    let mut observations = vec![
        "Warm up for 5-10 minutes before starting".to_owned(),
        "Keep correct technique on every exercise".to_owned(),
        "Hydrate throughout the session".to_owned(),
    ];
    match profile.experience_tier {
        ExperienceTier::Beginner => {
            observations.push("Start with lighter loads and focus on technique".to_owned());
            observations.push("Increase the load gradually each week".to_owned());
        }
        ExperienceTier::Advanced => {
            observations.push("Consider advanced techniques such as drop sets or rest-pause".to_owned());
            observations.push("Monitor signs of overtraining".to_owned());
        }
        ExperienceTier::Intermediate => {}
    }
    if profile.has_injuries() {
        observations
            .push("Stop immediately if you feel pain and consult a professional".to_owned());
    }
    observations.push("Use a timer to keep rest intervals consistent".to_owned());
    observations
}

fn rest_day(weekday: Weekday) -> DayPlan {
    DayPlan {
        weekday,
        day_type: DayType::Rest,
        title: day_title(DayType::Rest).to_owned(),
        exercises: Vec::new(),
        estimated_duration_min: 0,
        observations: vec![
            "Optional light walk of 20-30 minutes".to_owned(),
            "Stretching or mobility work".to_owned(),
            "Keep hydration up".to_owned(),
            "Prioritise 7-9 hours of restorative sleep".to_owned(),
        ],
    }
}
