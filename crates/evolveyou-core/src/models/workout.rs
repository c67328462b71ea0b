// ABOUTME: Workout split, exercise assignment, day plan, and weekly program records
// ABOUTME: Muscle groups, exercise roles, equipment, and split day types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EvolveYou

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::profile::{ExperienceTier, Goal};

/// Muscle group targeted by an exercise slot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    /// Pectorals
    Chest,
    /// Lats, traps, rhomboids
    Back,
    /// Quads, hamstrings, glutes, calves
    Legs,
    /// Deltoids
    Shoulders,
    /// Biceps and triceps
    Arms,
    /// Abdominals and trunk
    Core,
}

/// Whether an exercise is multi-joint or single-joint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseRole {
    /// Multi-joint movement
    Composite,
    /// Single-joint movement
    Isolated,
}

/// Equipment an exercise needs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    /// No external load
    Bodyweight,
    /// Dumbbells
    Dumbbell,
    /// Water bottles, backpacks, and other light household weights
    Household,
    /// Barbell and plates
    Barbell,
    /// Selectorised machine
    Machine,
    /// Cable station
    Cable,
    /// Resistance band
    Band,
    /// Gymnastic rings or pull-up bar
    Rings,
    /// Kettlebell, box, or other functional implement
    Functional,
}

impl Equipment {
    /// True when the lifter's own body is the load
    #[must_use]
    pub const fn is_bodyweight(self) -> bool {
        matches!(self, Self::Bodyweight | Self::Rings)
    }
}

/// Training focus assigned to a weekday
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// No training
    Rest,
    /// Whole body
    Fullbody,
    /// Upper body
    Upper,
    /// Lower body
    Lower,
    /// Chest, shoulders, triceps
    A,
    /// Back and biceps
    B,
    /// Legs and core
    C,
    /// Pushing muscles
    Push,
    /// Pulling muscles
    Pull,
    /// Legs
    Legs,
    /// Chest and back supersets (Arnold variant)
    ChestBack,
    /// Shoulders and arms (Arnold variant)
    ShouldersArms,
}

impl DayType {
    /// True for rest days
    #[must_use]
    pub const fn is_rest(self) -> bool {
        matches!(self, Self::Rest)
    }
}

/// Named weekly split
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SplitKind {
    /// Full body, three days
    Fullbody,
    /// Full body with home equipment
    HomeFullbody,
    /// Upper/lower, four days
    UpperLower,
    /// Upper/lower with home equipment
    HomeUpperLower,
    /// A/B/C rotation
    Abc,
    /// Push/pull/legs
    PushPullLegs,
    /// Push/pull/legs with Arnold-style chest-back and shoulders-arms days
    PushPullLegsArnold,
}

/// A named split with its Monday-first weekly schedule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutSplit {
    /// Split identifier
    pub kind: SplitKind,
    /// Display name
    pub name: String,
    /// Day type for each weekday, Monday first
    pub weekly_schedule: [DayType; 7],
}

impl WorkoutSplit {
    /// Day type scheduled for `weekday`
    #[must_use]
    pub fn day_type(&self, weekday: Weekday) -> DayType {
        self.weekly_schedule[weekday.num_days_from_monday() as usize]
    }

    /// Number of training (non-rest) days in the week
    #[must_use]
    pub fn training_days(&self) -> usize {
        self.weekly_schedule
            .iter()
            .filter(|day| !day.is_rest())
            .count()
    }
}

/// One prescribed exercise with volume, load, and annotations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseAssignment {
    /// Exercise display name
    pub exercise_name: String,
    /// Muscle group the slot targets
    pub muscle_group: MuscleGroup,
    /// Composite or isolated
    pub role: ExerciseRole,
    /// Equipment used
    pub equipment: Equipment,
    /// Working sets, always > 0
    pub sets: u8,
    /// Rep range such as `"8-12"`
    pub rep_range: String,
    /// Rest between sets such as `"90-120s"`
    pub rest_label: String,
    /// Suggested load, `"{n}kg"`, `"bodyweight"`, or an injury downgrade
    pub suggested_load: String,
    /// Technique notes derived from the exercise itself
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    /// Injury cautions; empty unless an injury rule matched
    #[serde(default)]
    pub cautions: Vec<String>,
    /// True when the exercise was added as a random filler
    #[serde(default)]
    pub filler: bool,
}

/// Workout for a single weekday
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayPlan {
    /// Weekday this plan belongs to
    pub weekday: Weekday,
    /// Scheduled focus
    pub day_type: DayType,
    /// Display title
    pub title: String,
    /// Ordered exercises; empty on rest days
    pub exercises: Vec<ExerciseAssignment>,
    /// Estimated session length in minutes; zero on rest days
    pub estimated_duration_min: u32,
    /// Session-level observations or rest-day recommendations
    pub observations: Vec<String>,
}

impl DayPlan {
    /// True for rest days
    #[must_use]
    pub const fn is_rest(&self) -> bool {
        self.day_type.is_rest()
    }
}

/// Seven day plans generated from one split
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeeklyProgram {
    /// Split the program follows
    pub split: WorkoutSplit,
    /// Experience tier the volume was prescribed for
    pub experience_tier: ExperienceTier,
    /// Goal used for rep/rest overrides
    pub goal: Goal,
    /// One plan per weekday, Monday first
    pub days: Vec<DayPlan>,
    /// General observations for the whole program
    pub observations: Vec<String>,
}

impl WeeklyProgram {
    /// Plan for `weekday`
    #[must_use]
    pub fn day(&self, weekday: Weekday) -> Option<&DayPlan> {
        self.days.iter().find(|day| day.weekday == weekday)
    }

    /// Training days only
    pub fn training_days(&self) -> impl Iterator<Item = &DayPlan> {
        self.days.iter().filter(|day| !day.is_rest())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_is_indexed_monday_first() {
        let split = WorkoutSplit {
            kind: SplitKind::Fullbody,
            name: "Full body".to_owned(),
            weekly_schedule: [
                DayType::Fullbody,
                DayType::Rest,
                DayType::Fullbody,
                DayType::Rest,
                DayType::Fullbody,
                DayType::Rest,
                DayType::Rest,
            ],
        };
        assert_eq!(split.day_type(Weekday::Mon), DayType::Fullbody);
        assert_eq!(split.day_type(Weekday::Tue), DayType::Rest);
        assert_eq!(split.day_type(Weekday::Sun), DayType::Rest);
        assert_eq!(split.training_days(), 3);
    }

    #[test]
    fn test_day_type_wire_names() {
        let json = serde_json::to_string(&DayType::ShouldersArms).unwrap();
        assert_eq!(json, "\"shoulders_arms\"");
    }
}
