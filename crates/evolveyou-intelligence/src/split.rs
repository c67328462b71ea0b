// ABOUTME: Split selector choosing a weekly training template from tier, frequency, and location
// ABOUTME: Home locations take precedence over the experience/frequency table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EvolveYou

//! Split selection.
//!
//! | tier | freq ≤ 3 | 4–5 | > 5 |
//! |---|---|---|---|
//! | beginner | fullbody | upper/lower | upper/lower |
//! | intermediate | upper/lower | ABC | PPL |
//! | advanced | ABC | PPL | PPL + Arnold |
//!
//! `home_none` always trains full body and `home_basic` upper/lower,
//! whatever the table says.

use evolveyou_core::models::{
    DayType, ExperienceTier, LocationTier, NormalizedProfile, SplitKind, WorkoutSplit,
};
use tracing::debug;

use DayType::{ChestBack, Fullbody, Legs, Lower, Pull, Push, Rest, ShouldersArms, Upper, A, B, C};

const FULLBODY_WEEK: [DayType; 7] = [Fullbody, Rest, Fullbody, Rest, Fullbody, Rest, Rest];
const UPPER_LOWER_WEEK: [DayType; 7] = [Upper, Lower, Rest, Upper, Lower, Rest, Rest];
const ABC_WEEK: [DayType; 7] = [A, B, C, A, B, C, Rest];
const PPL_WEEK: [DayType; 7] = [Push, Pull, Legs, Push, Pull, Legs, Rest];
const PPL_ARNOLD_WEEK: [DayType; 7] = [Push, Pull, Legs, ChestBack, ShouldersArms, Legs, Rest];

/// Monday-first schedule for a split
#[must_use]
pub const fn schedule(kind: SplitKind) -> [DayType; 7] {
    match kind {
        SplitKind::Fullbody | SplitKind::HomeFullbody => FULLBODY_WEEK,
        SplitKind::UpperLower | SplitKind::HomeUpperLower => UPPER_LOWER_WEEK,
        SplitKind::Abc => ABC_WEEK,
        SplitKind::PushPullLegs => PPL_WEEK,
        SplitKind::PushPullLegsArnold => PPL_ARNOLD_WEEK,
    }
}

/// Display name for a split
#[must_use]
pub const fn split_name(kind: SplitKind) -> &'static str {
    match kind {
        SplitKind::Fullbody => "Full Body",
        SplitKind::HomeFullbody => "Full Body (Home)",
        SplitKind::UpperLower => "Upper/Lower",
        SplitKind::HomeUpperLower => "Upper/Lower (Home)",
        SplitKind::Abc => "ABC",
        SplitKind::PushPullLegs => "Push/Pull/Legs",
        SplitKind::PushPullLegsArnold => "Push/Pull/Legs + Arnold",
    }
}

/// Split kind for a profile
#[must_use]
pub const fn select_split_kind(profile: &NormalizedProfile) -> SplitKind {
    match profile.location_tier {
        LocationTier::HomeNone => return SplitKind::HomeFullbody,
        LocationTier::HomeBasic => return SplitKind::HomeUpperLower,
        LocationTier::GymBasic | LocationTier::GymFull | LocationTier::CrossfitBox => {}
    }

    match (profile.experience_tier, profile.frequency) {
        (ExperienceTier::Beginner, 0..=3) => SplitKind::Fullbody,
        (ExperienceTier::Beginner, _) | (ExperienceTier::Intermediate, 0..=3) => {
            SplitKind::UpperLower
        }
        (ExperienceTier::Intermediate, 4..=5) | (ExperienceTier::Advanced, 0..=3) => {
            SplitKind::Abc
        }
        (ExperienceTier::Intermediate, _) | (ExperienceTier::Advanced, 4..=5) => {
            SplitKind::PushPullLegs
        }
        (ExperienceTier::Advanced, _) => SplitKind::PushPullLegsArnold,
    }
}

/// Choose the weekly split for a profile
#[must_use]
pub fn select_split(profile: &NormalizedProfile) -> WorkoutSplit {
    let kind = select_split_kind(profile);
    debug!(
        ?kind,
        tier = ?profile.experience_tier,
        frequency = profile.frequency,
        location = ?profile.location_tier,
        "Selected workout split"
    );
    WorkoutSplit {
        kind,
        name: split_name(kind).to_owned(),
        weekly_schedule: schedule(kind),
    }
}
