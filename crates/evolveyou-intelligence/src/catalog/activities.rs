// ABOUTME: Energy expenditure rates for unplanned activities logged to the daily ledger
// ABOUTME: Rates are kcal per minute at low, moderate, and high intensity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EvolveYou

use chrono::{DateTime, Utc};
use evolveyou_core::models::LedgerEntry;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Self-reported effort of an activity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityIntensity {
    /// Easy effort
    Low,
    /// Sustained effort
    #[default]
    Moderate,
    /// Hard effort
    High,
}

/// Burn rate of one activity in kcal per minute
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityRate {
    /// Activity identifier
    pub activity: &'static str,
    /// kcal/min at low intensity
    pub low: f64,
    /// kcal/min at moderate intensity
    pub moderate: f64,
    /// kcal/min at high intensity
    pub high: f64,
}

impl ActivityRate {
    const fn new(activity: &'static str, low: f64, moderate: f64, high: f64) -> Self {
        Self {
            activity,
            low,
            moderate,
            high,
        }
    }

    /// kcal/min at `intensity`
    #[must_use]
    pub const fn per_minute(&self, intensity: ActivityIntensity) -> f64 {
        match intensity {
            ActivityIntensity::Low => self.low,
            ActivityIntensity::Moderate => self.moderate,
            ActivityIntensity::High => self.high,
        }
    }

    /// Rate for a named activity; unknown names use a generic rate
    #[must_use]
    pub fn lookup(activity: &str) -> Self {
        let key = activity.trim().to_lowercase().replace([' ', '-'], "_");
        ACTIVITY_RATES
            .iter()
            .find(|rate| rate.activity == key)
            .copied()
            .unwrap_or(GENERIC_RATE)
    }
}

const ACTIVITY_RATES: &[ActivityRate] = &[
    ActivityRate::new("walking", 3.0, 4.0, 5.0),
    ActivityRate::new("running", 8.0, 12.0, 16.0),
    ActivityRate::new("cycling", 4.0, 6.0, 10.0),
    ActivityRate::new("swimming", 6.0, 10.0, 14.0),
    ActivityRate::new("weight_training", 4.0, 6.0, 8.0),
    ActivityRate::new("yoga", 2.0, 3.0, 4.0),
    ActivityRate::new("stairs", 8.0, 10.0, 12.0),
    ActivityRate::new("housework", 2.0, 3.0, 4.0),
    ActivityRate::new("dancing", 4.0, 6.0, 8.0),
    ActivityRate::new("soccer", 6.0, 9.0, 12.0),
];

const GENERIC_RATE: ActivityRate = ActivityRate::new("other", 4.0, 6.0, 8.0);

/// Ledger entry for an unplanned activity
///
/// Burned energy is `round(rate × minutes)`; the activity name becomes the
/// entry description.
#[must_use]
pub fn activity_entry(
    activity: &str,
    intensity: ActivityIntensity,
    minutes: u32,
    timestamp: DateTime<Utc>,
) -> LedgerEntry {
    let rate = ActivityRate::lookup(activity);
    let kcal = (rate.per_minute(intensity) * f64::from(minutes)).round() as i32;
    debug!(activity, ?intensity, minutes, kcal, "Estimated activity burn");
    LedgerEntry::extra_activity(kcal, timestamp).with_description(activity)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use evolveyou_core::models::LedgerEntryKind;

    use super::*;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_running_at_high_intensity() {
        let entry = activity_entry("running", ActivityIntensity::High, 30, noon());
        assert_eq!(entry.kind, LedgerEntryKind::ExtraActivity);
        assert_eq!(entry.kcal_delta, 480);
        assert_eq!(entry.description.as_deref(), Some("running"));
    }

    #[test]
    fn test_names_are_normalized() {
        assert_eq!(ActivityRate::lookup("Weight Training").activity, "weight_training");
        assert_eq!(ActivityRate::lookup("weight-training").activity, "weight_training");
    }

    #[test]
    fn test_unknown_activity_uses_generic_rate() {
        let entry = activity_entry("rock climbing", ActivityIntensity::Moderate, 45, noon());
        assert_eq!(entry.kcal_delta, 270);
    }

    #[test]
    fn test_zero_minutes_burns_nothing() {
        assert_eq!(
            activity_entry("walking", ActivityIntensity::Low, 0, noon()).kcal_delta,
            0
        );
    }
}
