// ABOUTME: Built-in exercise tables for each training location tier
// ABOUTME: Static const slices grouped by muscle group, in selection order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EvolveYou

use evolveyou_core::models::{Equipment, ExerciseRole, ExperienceTier, LocationTier, MuscleGroup};

use super::{ExerciseCatalog, ExerciseEntry};

use Equipment::{
    Band, Barbell, Bodyweight, Cable, Dumbbell, Functional, Household, Machine, Rings,
};
use ExerciseRole::{Composite, Isolated};
use ExperienceTier::{Advanced, Beginner, Intermediate};
use MuscleGroup::{Arms, Back, Chest, Core, Legs, Shoulders};

const fn ex(
    name: &'static str,
    group: MuscleGroup,
    role: ExerciseRole,
    difficulty: ExperienceTier,
    equipment: Equipment,
) -> ExerciseEntry {
    ExerciseEntry {
        name,
        group,
        role,
        difficulty,
        equipment,
    }
}

/// Home training without equipment
const HOME_NONE: &[ExerciseEntry] = &[
    ex("Push-up", Chest, Composite, Beginner, Bodyweight),
    ex("Incline push-up", Chest, Composite, Beginner, Bodyweight),
    ex("Diamond push-up", Chest, Isolated, Intermediate, Bodyweight),
    ex("Inverted row", Back, Composite, Intermediate, Bodyweight),
    ex("Superman", Back, Isolated, Beginner, Bodyweight),
    ex("Reverse plank", Back, Isolated, Beginner, Bodyweight),
    ex("Bodyweight squat", Legs, Composite, Beginner, Bodyweight),
    ex("Lunge", Legs, Composite, Beginner, Bodyweight),
    ex("Bulgarian split squat", Legs, Composite, Intermediate, Bodyweight),
    ex("Pike push-up", Shoulders, Composite, Intermediate, Bodyweight),
    ex("Lateral raise with bottles", Shoulders, Isolated, Beginner, Household),
    ex("Handstand hold", Shoulders, Isolated, Advanced, Bodyweight),
    ex("Close-grip push-up", Arms, Composite, Intermediate, Bodyweight),
    ex("Floor triceps dip", Arms, Isolated, Beginner, Bodyweight),
    ex("Bottle curl", Arms, Isolated, Beginner, Household),
    ex("Plank", Core, Isolated, Beginner, Bodyweight),
    ex("Crunch", Core, Isolated, Beginner, Bodyweight),
    ex("Mountain climber", Core, Isolated, Intermediate, Bodyweight),
];

/// Home training with dumbbells and bands
const HOME_BASIC: &[ExerciseEntry] = &[
    ex("Dumbbell bench press", Chest, Composite, Beginner, Dumbbell),
    ex("Dumbbell fly", Chest, Isolated, Intermediate, Dumbbell),
    ex("Band push-up", Chest, Composite, Intermediate, Band),
    ex("Dumbbell row", Back, Composite, Beginner, Dumbbell),
    ex("Dumbbell pullover", Back, Isolated, Intermediate, Dumbbell),
    ex("Band row", Back, Isolated, Beginner, Band),
    ex("Dumbbell squat", Legs, Composite, Beginner, Dumbbell),
    ex("Dumbbell stiff-leg deadlift", Legs, Composite, Intermediate, Dumbbell),
    ex("Dumbbell lunge", Legs, Composite, Intermediate, Dumbbell),
    ex("Dumbbell shoulder press", Shoulders, Composite, Beginner, Dumbbell),
    ex("Lateral raise", Shoulders, Isolated, Beginner, Dumbbell),
    ex("Front raise", Shoulders, Isolated, Intermediate, Dumbbell),
    ex("Dumbbell curl", Arms, Isolated, Beginner, Dumbbell),
    ex("Dumbbell skull crusher", Arms, Isolated, Intermediate, Dumbbell),
    ex("Hammer curl", Arms, Isolated, Beginner, Dumbbell),
    ex("Weighted plank", Core, Isolated, Intermediate, Dumbbell),
    ex("Russian twist", Core, Isolated, Intermediate, Dumbbell),
    ex("Dead bug", Core, Isolated, Beginner, Bodyweight),
];

/// Gym with free weights and a few machines
const GYM_BASIC: &[ExerciseEntry] = &[
    ex("Bench press", Chest, Composite, Beginner, Barbell),
    ex("Incline bench press", Chest, Composite, Intermediate, Barbell),
    ex("Fly", Chest, Isolated, Beginner, Dumbbell),
    ex("Lat pulldown", Back, Composite, Beginner, Cable),
    ex("Seated cable row", Back, Composite, Beginner, Cable),
    ex("Pullover", Back, Isolated, Intermediate, Dumbbell),
    ex("Squat", Legs, Composite, Intermediate, Barbell),
    ex("Leg press", Legs, Composite, Beginner, Machine),
    ex("Stiff-leg deadlift", Legs, Composite, Intermediate, Barbell),
    ex("Shoulder press", Shoulders, Composite, Beginner, Dumbbell),
    ex("Lateral raise", Shoulders, Isolated, Beginner, Dumbbell),
    ex("Upright row", Shoulders, Isolated, Intermediate, Barbell),
    ex("Barbell curl", Arms, Isolated, Beginner, Barbell),
    ex("Triceps pushdown", Arms, Isolated, Beginner, Cable),
    ex("Hammer curl", Arms, Isolated, Beginner, Dumbbell),
    ex("Plank", Core, Isolated, Beginner, Bodyweight),
    ex("Machine crunch", Core, Isolated, Beginner, Machine),
    ex("Hanging leg raise", Core, Isolated, Intermediate, Rings),
];

/// Fully equipped gym; also the fallback for groups other tiers lack
const GYM_FULL: &[ExerciseEntry] = &[
    ex("Bench press", Chest, Composite, Beginner, Barbell),
    ex("Incline bench press", Chest, Composite, Intermediate, Barbell),
    ex("Fly", Chest, Isolated, Beginner, Dumbbell),
    ex("Pec deck", Chest, Isolated, Beginner, Machine),
    ex("Lat pulldown", Back, Composite, Beginner, Cable),
    ex("Seated cable row", Back, Composite, Beginner, Cable),
    ex("Pull-up", Back, Composite, Advanced, Rings),
    ex("Bent-over row", Back, Composite, Intermediate, Barbell),
    ex("Barbell squat", Legs, Composite, Intermediate, Barbell),
    ex("Leg press", Legs, Composite, Beginner, Machine),
    ex("Stiff-leg deadlift", Legs, Composite, Intermediate, Barbell),
    ex("Leg extension", Legs, Isolated, Beginner, Machine),
    ex("Lying leg curl", Legs, Isolated, Beginner, Machine),
    ex("Walking lunge", Legs, Composite, Beginner, Dumbbell),
    ex("Shoulder press", Shoulders, Composite, Beginner, Dumbbell),
    ex("Lateral raise", Shoulders, Isolated, Beginner, Dumbbell),
    ex("Rear delt fly", Shoulders, Isolated, Intermediate, Machine),
    ex("Upright row", Shoulders, Isolated, Intermediate, Barbell),
    ex("Barbell curl", Arms, Isolated, Beginner, Barbell),
    ex("Triceps pushdown", Arms, Isolated, Beginner, Cable),
    ex("21s curl", Arms, Isolated, Advanced, Barbell),
    ex("French press", Arms, Isolated, Intermediate, Dumbbell),
    ex("Hammer curl", Arms, Isolated, Beginner, Dumbbell),
    ex("Plank", Core, Isolated, Beginner, Bodyweight),
    ex("Machine crunch", Core, Isolated, Beginner, Machine),
    ex("Russian twist", Core, Isolated, Intermediate, Dumbbell),
    ex("Cable crunch", Core, Isolated, Intermediate, Cable),
];

/// Crossfit box: gymnastics, rings, and functional implements
const CROSSFIT_BOX: &[ExerciseEntry] = &[
    ex("Push-up", Chest, Composite, Beginner, Bodyweight),
    ex("Handstand push-up", Chest, Composite, Advanced, Bodyweight),
    ex("Dips", Chest, Composite, Intermediate, Rings),
    ex("Pull-up", Back, Composite, Intermediate, Rings),
    ex("Ring row", Back, Composite, Beginner, Rings),
    ex("Deadlift", Back, Composite, Intermediate, Barbell),
    ex("Air squat", Legs, Composite, Beginner, Bodyweight),
    ex("Box jump", Legs, Composite, Intermediate, Functional),
    ex("Walking lunge", Legs, Composite, Beginner, Bodyweight),
    ex("Strict press", Shoulders, Composite, Intermediate, Barbell),
    ex("Handstand walk", Shoulders, Isolated, Advanced, Bodyweight),
    ex("Pike push-up", Shoulders, Composite, Intermediate, Bodyweight),
    ex("Ring dips", Arms, Composite, Advanced, Rings),
    ex("Muscle-up progression", Arms, Composite, Advanced, Rings),
    ex("Farmer carry", Arms, Isolated, Beginner, Functional),
    ex("Hollow hold", Core, Isolated, Beginner, Bodyweight),
    ex("V-up", Core, Isolated, Intermediate, Bodyweight),
    ex("Toes-to-bar", Core, Isolated, Advanced, Rings),
];

/// Exercise catalog backed by the static tables above
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinExerciseCatalog;

impl BuiltinExerciseCatalog {
    /// Full table for a location tier
    #[must_use]
    pub const fn table(location: LocationTier) -> &'static [ExerciseEntry] {
        match location {
            LocationTier::HomeNone => HOME_NONE,
            LocationTier::HomeBasic => HOME_BASIC,
            LocationTier::GymBasic => GYM_BASIC,
            LocationTier::GymFull => GYM_FULL,
            LocationTier::CrossfitBox => CROSSFIT_BOX,
        }
    }
}

impl ExerciseCatalog for BuiltinExerciseCatalog {
    fn exercises(&self, location: LocationTier, group: MuscleGroup) -> Vec<&ExerciseEntry> {
        Self::table(location)
            .iter()
            .filter(|entry| entry.group == group)
            .collect()
    }
}
