//! Percentile scenarios and the guaranteed worst-case bound.
//!
//! A batch of run outcomes reduces to three percentile picks plus the
//! deterministic guaranteed walk. The percentile labels keep the lookup
//! table's historical convention: `upper25` is the *cheaper* quartile pick
//! (sorted by gold ascending, index at 0.25), `lower25` the pricier one.

use std::collections::BTreeMap;

use serde::Serialize;

use super::outcome::RunOutcome;
use crate::constants::{PERCENTILE_LOWER25, PERCENTILE_MEDIAN, PERCENTILE_UPPER25};

/// One representative outcome, serialized into the lookup table.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Scenario {
    pub materials: BTreeMap<&'static str, u64>,
    pub gold: u64,
    pub attempts: u64,
    pub total_attempts: u64,
}

impl Scenario {
    pub fn from_outcome(outcome: &RunOutcome) -> Scenario {
        Scenario {
            materials: outcome.materials.to_display_map(),
            gold: outcome.gold,
            attempts: outcome.attempts.paid,
            total_attempts: outcome.attempts.total(),
        }
    }
}

/// One row of the lookup table: percentile scenarios plus the guaranteed
/// worst-case bound.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TableEntry {
    pub upper25: Scenario,
    pub median: Scenario,
    pub lower25: Scenario,
    pub guaranteed: Scenario,
}

/// The outcome at `floor(N * percentile)` of a cost-sorted batch.
fn pick(sorted: &[RunOutcome], percentile: f64) -> &RunOutcome {
    let idx = (sorted.len() as f64 * percentile).floor() as usize;
    &sorted[idx.min(sorted.len() - 1)]
}

/// Reduce a batch to its percentile scenarios. `outcomes` must be non-empty;
/// the batch runner never yields an empty batch for a positive iteration
/// count.
pub fn aggregate(mut outcomes: Vec<RunOutcome>, guaranteed: RunOutcome) -> TableEntry {
    assert!(!outcomes.is_empty(), "cannot aggregate an empty batch");
    outcomes.sort_by_key(|o| o.gold);

    TableEntry {
        upper25: Scenario::from_outcome(pick(&outcomes, PERCENTILE_UPPER25)),
        median: Scenario::from_outcome(pick(&outcomes, PERCENTILE_MEDIAN)),
        lower25: Scenario::from_outcome(pick(&outcomes, PERCENTILE_LOWER25)),
        guaranteed: Scenario::from_outcome(&guaranteed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{CostDelta, Material};

    fn outcome_with_gold(gold: u64) -> RunOutcome {
        let mut outcome = RunOutcome::new();
        outcome.pay(&CostDelta {
            materials: vec![(Material::Shard, gold)],
            gold,
        });
        outcome
    }

    #[test]
    fn test_percentiles_are_ordered() {
        // Unsorted input; aggregation must sort by gold first.
        let outcomes: Vec<RunOutcome> =
            [90, 10, 50, 70, 30, 20, 80, 40, 100, 60].iter().map(|&g| outcome_with_gold(g)).collect();
        let entry = aggregate(outcomes, outcome_with_gold(200));

        assert!(entry.upper25.gold <= entry.median.gold);
        assert!(entry.median.gold <= entry.lower25.gold);
        // floor(10 * 0.25) = 2 -> 30, floor(10 * 0.5) = 5 -> 60, floor(10 * 0.75) = 7 -> 80
        assert_eq!(entry.upper25.gold, 30);
        assert_eq!(entry.median.gold, 60);
        assert_eq!(entry.lower25.gold, 80);
    }

    #[test]
    fn test_guaranteed_is_passed_through() {
        let outcomes = vec![outcome_with_gold(10), outcome_with_gold(20)];
        let entry = aggregate(outcomes, outcome_with_gold(999));
        assert_eq!(entry.guaranteed.gold, 999);
    }

    #[test]
    fn test_single_run_batch() {
        let entry = aggregate(vec![outcome_with_gold(42)], outcome_with_gold(50));
        assert_eq!(entry.upper25.gold, 42);
        assert_eq!(entry.median.gold, 42);
        assert_eq!(entry.lower25.gold, 42);
    }

    #[test]
    fn test_scenario_resolves_display_names() {
        let entry = aggregate(vec![outcome_with_gold(10)], outcome_with_gold(10));
        assert_eq!(
            entry.median.materials.get("Destiny Shard").copied(),
            Some(10)
        );
    }
}
