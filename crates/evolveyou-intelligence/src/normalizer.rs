// ABOUTME: Profile normalizer mapping free-text intake answers to canonical categories
// ABOUTME: Keyword tables for experience, location, goal, sex, activity level, and injuries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EvolveYou

//! Profile normalization.
//!
//! This is the only place that looks at questionnaire wording. Every other
//! stage works on the enums of [`NormalizedProfile`]. Unrecognised answers
//! resolve to documented defaults instead of failing:
//!
//! | field | default |
//! |---|---|
//! | experience | beginner |
//! | location | `gym_full` |
//! | goal | maintain |
//! | activity level | moderate |
//! | sex | male |
//! | frequency | 3 |
//! | meals per day | 5 |

use std::collections::BTreeSet;

use evolveyou_core::constants::intake_defaults;
use evolveyou_core::models::{
    ActivityLevel, AnamnesisProfile, ExperienceTier, Goal, LocationTier, NormalizedProfile, Sex,
};
use tracing::debug;

/// Injury tag for knee problems
pub const TAG_KNEE: &str = "knee";
/// Injury tag for spine and lower back problems
pub const TAG_SPINE: &str = "spine";
/// Injury tag for shoulder problems
pub const TAG_SHOULDER: &str = "shoulder";
/// Injury tag for wrist problems
pub const TAG_WRIST: &str = "wrist";
/// Injury tag when pain was reported but no body part was recognised
pub const TAG_UNSPECIFIED: &str = "unspecified";

/// Leading words of an answer meaning "no injuries"
const NO_INJURY_OPENERS: &[&str] = &[
    "não", "nao", "no", "none", "nenhuma", "nenhum", "nada", "nothing", "sem",
];

/// Phrases meaning "no injuries" anywhere in the answer
const NO_INJURY_PHRASES: &[&str] = &["não tenho", "nao tenho", "no injur", "sem lesão", "sem lesao"];

/// Injury keyword table: (keyword, tag)
const INJURY_KEYWORDS: &[(&str, &str)] = &[
    ("joelho", TAG_KNEE),
    ("knee", TAG_KNEE),
    ("coluna", TAG_SPINE),
    ("lombar", TAG_SPINE),
    ("spine", TAG_SPINE),
    ("back", TAG_SPINE),
    ("ombro", TAG_SHOULDER),
    ("shoulder", TAG_SHOULDER),
    ("punho", TAG_WRIST),
    ("wrist", TAG_WRIST),
];

/// Experience keywords, checked in order
const EXPERIENCE_KEYWORDS: &[(&str, ExperienceTier)] = &[
    ("beginner", ExperienceTier::Beginner),
    ("iniciante", ExperienceTier::Beginner),
    ("nunca treinei", ExperienceTier::Beginner),
    ("never", ExperienceTier::Beginner),
    ("intermedi", ExperienceTier::Intermediate),
    ("advanced", ExperienceTier::Advanced),
    ("avançad", ExperienceTier::Advanced),
    ("avancad", ExperienceTier::Advanced),
];

/// Location keywords, checked in order
const LOCATION_KEYWORDS: &[(&str, LocationTier)] = &[
    ("home_none", LocationTier::HomeNone),
    ("home_basic", LocationTier::HomeBasic),
    ("gym_basic", LocationTier::GymBasic),
    ("gym_full", LocationTier::GymFull),
    ("crossfit", LocationTier::CrossfitBox),
    ("nenhum equipamento", LocationTier::HomeNone),
    ("no equipment", LocationTier::HomeNone),
    ("alguns equipamentos", LocationTier::HomeBasic),
    ("some equipment", LocationTier::HomeBasic),
    ("academia básica", LocationTier::GymBasic),
    ("academia basica", LocationTier::GymBasic),
    ("equipamentos básicos", LocationTier::GymBasic),
    ("equipamentos basicos", LocationTier::GymBasic),
    ("basic gym", LocationTier::GymBasic),
    ("academia completa", LocationTier::GymFull),
    ("full gym", LocationTier::GymFull),
];

/// Goal keywords, checked in order
const GOAL_KEYWORDS: &[(&str, Goal)] = &[
    ("lose", Goal::LoseFat),
    ("perder", Goal::LoseFat),
    ("emagrec", Goal::LoseFat),
    ("gain", Goal::GainMuscle),
    ("ganhar", Goal::GainMuscle),
    ("hipertrofia", Goal::GainMuscle),
    ("muscle", Goal::GainMuscle),
    ("recondition", Goal::Recondition),
    ("recondicion", Goal::Recondition),
    ("reabilita", Goal::Recondition),
    ("rehab", Goal::Recondition),
    ("postur", Goal::Recondition),
    ("maintain", Goal::Maintain),
    ("manter", Goal::Maintain),
];

/// Activity keywords; `very_intense` precedes `intense` so the substring wins
const ACTIVITY_KEYWORDS: &[(&str, ActivityLevel)] = &[
    ("very_intense", ActivityLevel::VeryIntense),
    ("very intense", ActivityLevel::VeryIntense),
    ("muito intens", ActivityLevel::VeryIntense),
    ("sedentary", ActivityLevel::Sedentary),
    ("sedentári", ActivityLevel::Sedentary),
    ("sedentari", ActivityLevel::Sedentary),
    ("light", ActivityLevel::Light),
    ("leve", ActivityLevel::Light),
    ("moderate", ActivityLevel::Moderate),
    ("moderad", ActivityLevel::Moderate),
    ("intense", ActivityLevel::Intense),
    ("intens", ActivityLevel::Intense),
];

fn lookup<T: Copy>(table: &[(&str, T)], answer: Option<&str>) -> Option<T> {
    let text = answer?.trim().to_lowercase();
    if text.is_empty() {
        return None;
    }
    table
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map(|(_, value)| *value)
}

/// Canonical experience tier; beginner when unrecognised
#[must_use]
pub fn normalize_experience(answer: Option<&str>) -> ExperienceTier {
    lookup(EXPERIENCE_KEYWORDS, answer).unwrap_or_default()
}

/// Canonical location tier; `gym_full` when unset or unrecognised
#[must_use]
pub fn normalize_location(answer: Option<&str>) -> LocationTier {
    lookup(LOCATION_KEYWORDS, answer).unwrap_or_default()
}

/// Canonical goal; maintain when unrecognised
#[must_use]
pub fn normalize_goal(answer: Option<&str>) -> Goal {
    lookup(GOAL_KEYWORDS, answer).unwrap_or_default()
}

/// Canonical activity level; moderate when unrecognised
#[must_use]
pub fn normalize_activity_level(answer: Option<&str>) -> ActivityLevel {
    lookup(ACTIVITY_KEYWORDS, answer).unwrap_or_default()
}

/// Canonical sex; male when unrecognised
#[must_use]
pub fn normalize_sex(answer: Option<&str>) -> Sex {
    match answer.map(|s| s.trim().to_lowercase()).as_deref() {
        Some("female" | "feminino" | "f" | "mulher" | "woman") => Sex::Female,
        _ => Sex::Male,
    }
}

/// Injury tags found in the free-text answer
///
/// Body-part keywords win over negations. An answer that names no body part
/// is empty when it is a negative ("Não tenho lesões", "None."), and
/// [`TAG_UNSPECIFIED`] otherwise so downstream stages still know pain was
/// reported.
#[must_use]
pub fn injury_tags(answer: Option<&str>) -> BTreeSet<String> {
    let text: String = answer
        .unwrap_or_default()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut tags: BTreeSet<String> = INJURY_KEYWORDS
        .iter()
        .filter(|(keyword, _)| text.contains(keyword))
        .map(|(_, tag)| (*tag).to_owned())
        .collect();
    if tags.is_empty() && !denies_injury(&text) {
        tags.insert(TAG_UNSPECIFIED.to_owned());
    }
    tags
}

fn denies_injury(text: &str) -> bool {
    text.split_whitespace()
        .next()
        .is_none_or(|first| NO_INJURY_OPENERS.contains(&first))
        || NO_INJURY_PHRASES.iter().any(|phrase| text.contains(phrase))
}

/// Map a raw intake questionnaire to its canonical view
#[must_use]
pub fn normalize_profile(profile: &AnamnesisProfile) -> NormalizedProfile {
    let normalized = NormalizedProfile {
        experience_tier: normalize_experience(profile.training_experience.as_deref()),
        frequency: profile
            .weekly_frequency
            .unwrap_or(intake_defaults::WEEKLY_FREQUENCY)
            .clamp(
                intake_defaults::MIN_WEEKLY_FREQUENCY,
                intake_defaults::MAX_WEEKLY_FREQUENCY,
            ),
        location_tier: normalize_location(profile.training_location.as_deref()),
        goal: normalize_goal(profile.goal.as_deref()),
        injury_tags: injury_tags(profile.injuries.as_deref()),
        sex: normalize_sex(profile.sex.as_deref()),
        activity_level: normalize_activity_level(profile.activity_level.as_deref()),
        meals_per_day: profile
            .meals_per_day
            .unwrap_or(intake_defaults::MEALS_PER_DAY)
            .clamp(
                intake_defaults::MIN_MEALS_PER_DAY,
                intake_defaults::MAX_MEALS_PER_DAY,
            ),
    };

    debug!(
        experience = ?normalized.experience_tier,
        location = ?normalized.location_tier,
        goal = ?normalized.goal,
        frequency = normalized.frequency,
        injuries = normalized.injury_tags.len(),
        "Normalized intake profile"
    );
    normalized
}
