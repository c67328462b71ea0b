// ABOUTME: Daily ledger of unplanned food and activity, and the rebalancing result
// ABOUTME: Append-only entries for one user-day; adjustments are recomputed on demand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EvolveYou

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// What a ledger entry records
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LedgerEntryKind {
    /// Food eaten outside the plan
    ExtraFood,
    /// Activity performed outside the plan
    ExtraActivity,
}

/// One logged deviation from the plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LedgerEntry {
    /// Food or activity
    pub kind: LedgerEntryKind,
    /// Energy of the entry in kcal (consumed for food, burned for activity)
    pub kcal_delta: i32,
    /// When the entry was logged
    pub timestamp: DateTime<Utc>,
    /// What was eaten or done
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LedgerEntry {
    /// Unplanned food entry
    #[must_use]
    pub const fn extra_food(kcal: i32, timestamp: DateTime<Utc>) -> Self {
        Self {
            kind: LedgerEntryKind::ExtraFood,
            kcal_delta: kcal,
            timestamp,
            description: None,
        }
    }

    /// Unplanned activity entry
    #[must_use]
    pub const fn extra_activity(kcal: i32, timestamp: DateTime<Utc>) -> Self {
        Self {
            kind: LedgerEntryKind::ExtraActivity,
            kcal_delta: kcal,
            timestamp,
            description: None,
        }
    }

    /// Attach a description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Unplanned food and activity logged for one day
///
/// Entries are only ever appended; a new day starts a new ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyLedger {
    /// Day the ledger covers
    pub date: NaiveDate,
    entries: Vec<LedgerEntry>,
}

impl DailyLedger {
    /// Empty ledger for `date`
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            entries: Vec::new(),
        }
    }

    /// Append an entry
    pub fn record(&mut self, entry: LedgerEntry) {
        self.entries.push(entry);
    }

    /// Builder-style append
    #[must_use]
    pub fn with_entry(mut self, entry: LedgerEntry) -> Self {
        self.record(entry);
        self
    }

    /// All entries in logging order
    #[must_use]
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Sum of unplanned food kcal
    #[must_use]
    pub fn extra_food_kcal(&self) -> i32 {
        self.sum_of(LedgerEntryKind::ExtraFood)
    }

    /// Sum of unplanned activity kcal
    #[must_use]
    pub fn extra_activity_kcal(&self) -> i32 {
        self.sum_of(LedgerEntryKind::ExtraActivity)
    }

    fn sum_of(&self, kind: LedgerEntryKind) -> i32 {
        self.entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .fold(0_i32, |total, entry| total.saturating_add(entry.kcal_delta))
    }
}

/// Rebalancer state for the current ledger
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RebalanceState {
    /// Net balance at or below the planned balance
    #[default]
    OnTarget,
    /// Net balance above the planned balance
    OverTarget,
}

/// Recommended reductions for the remaining meals of the day
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct RebalancingAdjustment {
    /// Whether the ledger pushed the day over target
    pub state: RebalanceState,
    /// Kilocalories above the planned balance; zero when on target
    pub surplus_kcal: i32,
    /// Fat to remove (g)
    pub fat_reduction_g: f64,
    /// Carbohydrates to remove (g)
    pub carb_reduction_g: f64,
    /// Protein to remove (g)
    pub protein_reduction_g: f64,
}

impl RebalancingAdjustment {
    /// Zero adjustment
    #[must_use]
    pub fn on_target() -> Self {
        Self::default()
    }

    /// True when nothing needs to change
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.surplus_kcal == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_sums_by_kind() {
        let now = Utc::now();
        let ledger = DailyLedger::new(now.date_naive())
            .with_entry(LedgerEntry::extra_food(300, now))
            .with_entry(LedgerEntry::extra_activity(120, now).with_description("walk"))
            .with_entry(LedgerEntry::extra_food(240, now));

        assert_eq!(ledger.extra_food_kcal(), 540);
        assert_eq!(ledger.extra_activity_kcal(), 120);
        assert_eq!(ledger.entries().len(), 3);
        assert_eq!(ledger.entries()[1].description.as_deref(), Some("walk"));
    }

    #[test]
    fn test_ledger_sums_saturate() {
        let now = Utc::now();
        let ledger = DailyLedger::new(now.date_naive())
            .with_entry(LedgerEntry::extra_food(i32::MAX, now))
            .with_entry(LedgerEntry::extra_food(1, now))
            .with_entry(LedgerEntry::extra_activity(i32::MIN, now))
            .with_entry(LedgerEntry::extra_activity(-1, now));

        assert_eq!(ledger.extra_food_kcal(), i32::MAX);
        assert_eq!(ledger.extra_activity_kcal(), i32::MIN);
    }

    #[test]
    fn test_default_adjustment_is_zero() {
        let adjustment = RebalancingAdjustment::on_target();
        assert!(adjustment.is_zero());
        assert_eq!(adjustment.state, RebalanceState::OnTarget);
    }
}
