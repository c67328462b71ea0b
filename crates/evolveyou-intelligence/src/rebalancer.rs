// ABOUTME: Adaptive rebalancer comparing the day's net energy balance with the plan
// ABOUTME: Converts any surplus into fat, carbohydrate, and protein reductions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EvolveYou

//! Adaptive Rebalancer
//!
//! ```text
//! net = (plan target + extra food) - (planned burn + extra activity)
//! ```
//!
//! A net above the planned balance is a surplus, removed from the remaining
//! meals 60% as fat, 30% as carbohydrate and 10% as protein (by kcal). The
//! adjustment is always recomputed from the whole ledger, never accumulated.

use evolveyou_core::constants::energy::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use evolveyou_core::models::{DailyLedger, NutritionPlan, RebalanceState, RebalancingAdjustment};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::RebalanceConfig;
use crate::metabolic::round1;

/// Planned energy expenditure and the balance the day is aiming for
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlannedBalance {
    /// Energy the day's planned training and activity will burn
    pub planned_burned_kcal: i32,
    /// Intended net balance (intake minus expenditure)
    pub target_balance_kcal: i32,
}

impl PlannedBalance {
    /// Explicit planned burn and target balance
    #[must_use]
    pub const fn new(planned_burned_kcal: i32, target_balance_kcal: i32) -> Self {
        Self {
            planned_burned_kcal,
            target_balance_kcal,
        }
    }

    /// The plan's own balance: its target intake minus `planned_burned_kcal`
    #[must_use]
    pub const fn from_plan(plan: &NutritionPlan, planned_burned_kcal: i32) -> Self {
        Self::new(
            planned_burned_kcal,
            plan.total_target_kcal.saturating_sub(planned_burned_kcal),
        )
    }
}

/// Net energy balance of the day so far
#[must_use]
pub fn net_balance(plan: &NutritionPlan, ledger: &DailyLedger, planned: PlannedBalance) -> i32 {
    let intake = plan
        .total_target_kcal
        .saturating_add(ledger.extra_food_kcal());
    let expenditure = planned
        .planned_burned_kcal
        .saturating_add(ledger.extra_activity_kcal());
    intake.saturating_sub(expenditure)
}

/// Reductions needed to bring the day back to its planned balance
#[must_use]
pub fn rebalance(
    plan: &NutritionPlan,
    ledger: &DailyLedger,
    planned: PlannedBalance,
    config: &RebalanceConfig,
) -> RebalancingAdjustment {
    let net = net_balance(plan, ledger, planned);
    if net <= planned.target_balance_kcal {
        debug!(net, target = planned.target_balance_kcal, "Day is on target");
        return RebalancingAdjustment::on_target();
    }

    let surplus = net.saturating_sub(planned.target_balance_kcal);
    let kcal = f64::from(surplus);
    let adjustment = RebalancingAdjustment {
        state: RebalanceState::OverTarget,
        surplus_kcal: surplus,
        fat_reduction_g: round1(kcal * f64::from(config.fat_share_pct) / 100.0 / KCAL_PER_GRAM_FAT),
        carb_reduction_g: round1(
            kcal * f64::from(config.carb_share_pct) / 100.0 / KCAL_PER_GRAM_CARBS,
        ),
        protein_reduction_g: round1(
            kcal * f64::from(config.protein_share_pct) / 100.0 / KCAL_PER_GRAM_PROTEIN,
        ),
    };
    info!(
        surplus,
        fat_g = adjustment.fat_reduction_g,
        carbs_g = adjustment.carb_reduction_g,
        protein_g = adjustment.protein_reduction_g,
        "Day is over target"
    );
    adjustment
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use evolveyou_core::models::{Goal, LedgerEntry, MacroGrams};

    use super::*;

    fn plan(kcal: i32) -> NutritionPlan {
        NutritionPlan {
            goal: Goal::Maintain,
            total_target_kcal: kcal,
            macro_targets: MacroGrams::default(),
            meals: Vec::new(),
        }
    }

    fn ledger() -> DailyLedger {
        DailyLedger::new(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap())
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_extreme_ledger_values_saturate() {
        let plan = plan(2000);
        let ledger = ledger()
            .with_entry(LedgerEntry::extra_food(i32::MAX, at(9)))
            .with_entry(LedgerEntry::extra_food(i32::MAX, at(10)));
        let planned = PlannedBalance::from_plan(&plan, 300);

        assert_eq!(net_balance(&plan, &ledger, planned), i32::MAX - 300);
        let adjustment = rebalance(&plan, &ledger, planned, &RebalanceConfig::default());
        assert_eq!(adjustment.state, RebalanceState::OverTarget);
        assert!(adjustment.surplus_kcal > 0);
    }

    #[test]
    fn test_extra_food_becomes_surplus() {
        let plan = plan(2000);
        let ledger = ledger().with_entry(LedgerEntry::extra_food(540, at(16)));
        let adjustment = rebalance(
            &plan,
            &ledger,
            PlannedBalance::from_plan(&plan, 300),
            &RebalanceConfig::default(),
        );

        assert_eq!(adjustment.state, RebalanceState::OverTarget);
        assert_eq!(adjustment.surplus_kcal, 540);
        assert!((adjustment.fat_reduction_g - 36.0).abs() < 1e-9);
        assert!((adjustment.carb_reduction_g - 40.5).abs() < 1e-9);
        assert!((adjustment.protein_reduction_g - 13.5).abs() < 1e-9);
    }

    #[test]
    fn test_activity_offsets_food() {
        let plan = plan(2000);
        let ledger = ledger()
            .with_entry(LedgerEntry::extra_food(400, at(10)))
            .with_entry(LedgerEntry::extra_activity(400, at(18)));
        let adjustment = rebalance(
            &plan,
            &ledger,
            PlannedBalance::from_plan(&plan, 300),
            &RebalanceConfig::default(),
        );
        assert!(adjustment.is_zero());
        assert_eq!(adjustment.state, RebalanceState::OnTarget);
    }

    #[test]
    fn test_deficit_is_on_target() {
        let plan = plan(2000);
        let ledger = ledger().with_entry(LedgerEntry::extra_activity(250, at(7)));
        let adjustment = rebalance(
            &plan,
            &ledger,
            PlannedBalance::from_plan(&plan, 0),
            &RebalanceConfig::default(),
        );
        assert_eq!(adjustment, RebalancingAdjustment::on_target());
    }

    #[test]
    fn test_explicit_target_balance() {
        let plan = plan(2000);
        let adjustment = rebalance(
            &plan,
            &ledger(),
            PlannedBalance::new(500, 1400),
            &RebalanceConfig::default(),
        );
        // net 1500 vs target 1400
        assert_eq!(adjustment.surplus_kcal, 100);
    }

    #[test]
    fn test_net_balance() {
        let plan = plan(1800);
        let ledger = ledger()
            .with_entry(LedgerEntry::extra_food(200, at(11)))
            .with_entry(LedgerEntry::extra_activity(150, at(19)));
        assert_eq!(
            net_balance(&plan, &ledger, PlannedBalance::new(300, 0)),
            1550
        );
    }
}
