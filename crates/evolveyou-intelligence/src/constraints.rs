// ABOUTME: Injury constraint modifier annotating exercises with cautions and overrides
// ABOUTME: Ordered rule table; exercises are never removed and cautions only accumulate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EvolveYou

//! Injury constraints.
//!
//! Each rule pairs an injury tag with exercise-name patterns. When a user
//! tag contains the rule's tag and an exercise name contains one of the
//! patterns (both case-insensitive), the rule's caution is appended and its
//! rep/load overrides replace the prescription. Rules run in table order, so
//! a later override wins.

use std::collections::BTreeSet;

use evolveyou_core::models::ExerciseAssignment;
use tracing::debug;

use crate::normalizer::{TAG_KNEE, TAG_SHOULDER, TAG_SPINE, TAG_WRIST};

/// Load label used when an injury calls for a lighter prescription
pub const REDUCED_LOAD: &str = "reduced load";

/// One entry of the injury rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InjuryRule {
    /// Injury tag pattern
    pub injury: &'static str,
    /// Exercise-name patterns the rule applies to
    pub exercises: &'static [&'static str],
    /// Caution appended to matching exercises
    pub caution: &'static str,
    /// Replacement rep range
    pub rep_range: Option<&'static str>,
    /// Replacement load label
    pub suggested_load: Option<&'static str>,
}

impl InjuryRule {
    fn matches(&self, tags: &BTreeSet<String>, exercise_name: &str) -> bool {
        let name = exercise_name.to_lowercase();
        tags.iter()
            .any(|tag| tag.to_lowercase().contains(self.injury))
            && self.exercises.iter().any(|pattern| name.contains(pattern))
    }
}

/// Built-in injury rules, applied in order
pub const INJURY_RULES: &[InjuryRule] = &[
    InjuryRule {
        injury: TAG_KNEE,
        exercises: &["squat", "lunge", "agachamento"],
        caution: "Reduce range of motion, do not go below 90°",
        rep_range: Some("10-12"),
        suggested_load: None,
    },
    InjuryRule {
        injury: TAG_SPINE,
        exercises: &["stiff", "deadlift", "bent-over row"],
        caution: "Keep a neutral spine, controlled movement",
        rep_range: None,
        suggested_load: Some(REDUCED_LOAD),
    },
    InjuryRule {
        injury: TAG_SHOULDER,
        exercises: &[
            "overhead",
            "shoulder press",
            "handstand",
            "strict press",
            "pike",
        ],
        caution: "Limit range overhead, stop on pain",
        rep_range: None,
        suggested_load: Some(REDUCED_LOAD),
    },
    InjuryRule {
        injury: TAG_WRIST,
        exercises: &["push-up", "dips"],
        caution: "Use neutral grip or parallettes to unload the wrist",
        rep_range: None,
        suggested_load: None,
    },
];

/// Annotate exercises against the user's injury tags
///
/// Returns the same exercises, in the same order, with cautions appended and
/// overrides applied. An empty tag set returns the input unchanged.
#[must_use]
pub fn apply_constraints(
    exercises: Vec<ExerciseAssignment>,
    injury_tags: &BTreeSet<String>,
) -> Vec<ExerciseAssignment> {
    apply_rules(exercises, injury_tags, INJURY_RULES)
}

/// [`apply_constraints`] with a caller-supplied rule table
#[must_use]
pub fn apply_rules(
    exercises: Vec<ExerciseAssignment>,
    injury_tags: &BTreeSet<String>,
    rules: &[InjuryRule],
) -> Vec<ExerciseAssignment> {
    if injury_tags.is_empty() {
        return exercises;
    }

    exercises
        .into_iter()
        .map(|mut exercise| {
            for rule in rules
                .iter()
                .filter(|rule| rule.matches(injury_tags, &exercise.exercise_name))
            {
                debug!(
                    exercise = %exercise.exercise_name,
                    injury = rule.injury,
                    "Injury rule matched"
                );
                exercise.cautions.push(rule.caution.to_owned());
                if let Some(reps) = rule.rep_range {
                    reps.clone_into(&mut exercise.rep_range);
                }
                if let Some(load) = rule.suggested_load {
                    load.clone_into(&mut exercise.suggested_load);
                }
            }
            exercise
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use evolveyou_core::models::{Equipment, ExerciseRole, MuscleGroup};

    use super::*;

    fn exercise(name: &str) -> ExerciseAssignment {
        ExerciseAssignment {
            exercise_name: name.to_owned(),
            muscle_group: MuscleGroup::Legs,
            role: ExerciseRole::Composite,
            equipment: Equipment::Barbell,
            sets: 4,
            rep_range: "8-12".to_owned(),
            rest_label: "90-120s".to_owned(),
            suggested_load: "48kg".to_owned(),
            notes: Vec::new(),
            cautions: Vec::new(),
            filler: false,
        }
    }

    fn tags(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|tag| (*tag).to_owned()).collect()
    }

    #[test]
    fn test_knee_rule_overrides_reps() {
        let out = apply_constraints(vec![exercise("Barbell squat")], &tags(&["knee"]));
        assert_eq!(out[0].rep_range, "10-12");
        assert_eq!(out[0].suggested_load, "48kg");
        assert_eq!(
            out[0].cautions,
            vec!["Reduce range of motion, do not go below 90°"]
        );
    }

    #[test]
    fn test_spine_rule_reduces_load() {
        let out = apply_constraints(vec![exercise("Stiff-leg deadlift")], &tags(&["spine"]));
        assert_eq!(out[0].suggested_load, REDUCED_LOAD);
        assert_eq!(out[0].rep_range, "8-12");
    }

    #[test]
    fn test_cautions_accumulate_across_rules() {
        let mut input = exercise("Bent-over row");
        input.cautions.push("existing".to_owned());
        let out = apply_constraints(vec![input], &tags(&["spine", "knee"]));
        assert_eq!(out[0].cautions.len(), 2);
        assert_eq!(out[0].cautions[0], "existing");
    }

    #[test]
    fn test_unmatched_exercises_pass_through() {
        let input = vec![exercise("Leg extension"), exercise("Lunge")];
        let out = apply_constraints(input.clone(), &tags(&["shoulder"]));
        assert_eq!(out, input);
    }

    #[test]
    fn test_no_tags_returns_input() {
        let input = vec![exercise("Barbell squat")];
        assert_eq!(apply_constraints(input.clone(), &BTreeSet::new()), input);
    }

    #[test]
    fn test_last_override_wins() {
        let rules = [
            InjuryRule {
                injury: "knee",
                exercises: &["squat"],
                caution: "first",
                rep_range: Some("10-12"),
                suggested_load: None,
            },
            InjuryRule {
                injury: "knee",
                exercises: &["squat"],
                caution: "second",
                rep_range: Some("15-20"),
                suggested_load: None,
            },
        ];
        let out = apply_rules(vec![exercise("Squat")], &tags(&["left knee"]), &rules);
        assert_eq!(out[0].rep_range, "15-20");
        assert_eq!(out[0].cautions, vec!["first", "second"]);
    }
}
