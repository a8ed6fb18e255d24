//! Full parameter-space sweep assembling the lookup table.
//!
//! Combinations are independent; a failure in one (bad table entry, stalled
//! run) is recorded and the sweep moves on. Only failing to serialize the
//! finished table is fatal, and that is the binary's problem.

use std::collections::BTreeMap;

use log::{debug, info, warn};

use super::advanced::{self, AdvancedOptions};
use super::config::SweepConfig;
use super::runner::run_batch;
use super::scenarios::{aggregate, TableEntry};
use super::standard;
use crate::constants::{STANDARD_MAX_LEVEL, STANDARD_MIN_LEVEL};
use crate::error::SimError;
use crate::materials::Equipment;
use crate::rates::EnhancementOptions;
use crate::tables::{Band, ALL_BANDS};

pub const EQUIPMENT_KINDS: [Equipment; 2] = [Equipment::Weapon, Equipment::Armor];

/// One point in the sweep's parameter space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combination {
    Standard {
        start: u32,
        end: u32,
        equipment: Equipment,
        options: EnhancementOptions,
    },
    Advanced {
        band: Band,
        equipment: Equipment,
        options: AdvancedOptions,
    },
}

impl Combination {
    /// Stable lookup-table key. Distinct combinations always produce
    /// distinct keys; the format is the contract with the UI layer.
    pub fn key(&self) -> String {
        match self {
            Combination::Standard { start, end, equipment, options } => format!(
                "{}_{}_{}_{}_{}",
                start,
                end,
                equipment.key(),
                options.books,
                options.breaths
            ),
            Combination::Advanced { band, equipment, options } => format!(
                "adv_{}_{}_{}_{}_{}",
                band.start_level(),
                band.end_level(),
                equipment.key(),
                options.scrolls,
                options.breaths
            ),
        }
    }
}

/// Every standard-tier combination: all (start, end) windows inside the
/// level range, both equipment kinds, all four consumable combinations.
pub fn standard_combinations() -> Vec<Combination> {
    let mut combos = Vec::new();
    for start in STANDARD_MIN_LEVEL..STANDARD_MAX_LEVEL {
        for end in (start + 1)..=STANDARD_MAX_LEVEL {
            for equipment in EQUIPMENT_KINDS {
                for options in EnhancementOptions::ALL {
                    combos.push(Combination::Standard { start, end, equipment, options });
                }
            }
        }
    }
    combos
}

/// Every advanced-tier combination. Scroll combinations only exist for the
/// bands that sell scrolls.
pub fn advanced_combinations() -> Vec<Combination> {
    let mut combos = Vec::new();
    for band in ALL_BANDS {
        let mut option_sets = vec![
            AdvancedOptions { scrolls: false, breaths: false },
            AdvancedOptions { scrolls: false, breaths: true },
        ];
        if band.allows_scrolls() {
            option_sets.push(AdvancedOptions { scrolls: true, breaths: false });
            option_sets.push(AdvancedOptions { scrolls: true, breaths: true });
        }
        for equipment in EQUIPMENT_KINDS {
            for &options in &option_sets {
                combos.push(Combination::Advanced { band, equipment, options });
            }
        }
    }
    combos
}

pub fn all_combinations(config: &SweepConfig) -> Vec<Combination> {
    let mut combos = Vec::new();
    if config.standard {
        combos.extend(standard_combinations());
    }
    if config.advanced {
        combos.extend(advanced_combinations());
    }
    combos
}

/// A combination the sweep had to skip, with the reason.
#[derive(Debug)]
pub struct SweepFailure {
    pub key: String,
    pub error: SimError,
}

/// Result of a full sweep: the lookup table plus any skipped combinations.
#[derive(Debug)]
pub struct SweepSummary {
    pub table: BTreeMap<String, TableEntry>,
    pub failures: Vec<SweepFailure>,
    /// The base seed actually used (resolved from config or entropy).
    pub seed: u64,
}

/// Derive a per-combination seed from the base seed and the key, so a
/// combination's random stream does not depend on sweep order or on which
/// model subsets are enabled.
fn combination_seed(base: u64, key: &str) -> u64 {
    key.bytes()
        .fold(base, |h, b| h.wrapping_mul(31).wrapping_add(b as u64))
}

fn run_combination(
    combo: &Combination,
    config: &SweepConfig,
    base_seed: u64,
) -> Result<TableEntry, SimError> {
    let seed = combination_seed(base_seed, &combo.key());
    match *combo {
        Combination::Standard { start, end, equipment, options } => {
            let outcomes = run_batch(config.standard_iterations.max(1), seed, |rng| {
                standard::run_climb(start, end, equipment, options, rng)
            })?;
            let guaranteed = standard::guaranteed_cost(start, end, equipment, options)?;
            Ok(aggregate(outcomes, guaranteed))
        }
        Combination::Advanced { band, equipment, options } => {
            let outcomes = run_batch(config.advanced_iterations.max(1), seed, |rng| {
                advanced::run_climb(band, equipment, options, rng)
            })?;
            let guaranteed = advanced::guaranteed_cost(band, equipment, options);
            Ok(aggregate(outcomes, guaranteed))
        }
    }
}

/// Run an explicit list of combinations. Failures are isolated per
/// combination and recorded instead of aborting the sweep.
pub fn run_combinations(combos: &[Combination], config: &SweepConfig) -> SweepSummary {
    let base_seed = config.seed.unwrap_or_else(rand::random);
    info!(
        "sweep: {} combinations, base seed {}",
        combos.len(),
        base_seed
    );

    let mut table = BTreeMap::new();
    let mut failures = Vec::new();

    for (idx, combo) in combos.iter().enumerate() {
        let key = combo.key();
        debug!("processing {} ({}/{})", key, idx + 1, combos.len());

        match run_combination(combo, config, base_seed) {
            Ok(entry) => {
                table.insert(key, entry);
            }
            Err(error) => {
                warn!("skipping {}: {}", key, error);
                failures.push(SweepFailure { key, error });
            }
        }
    }

    SweepSummary { table, failures, seed: base_seed }
}

/// Run the full configured sweep.
pub fn run_sweep(config: &SweepConfig) -> SweepSummary {
    run_combinations(&all_combinations(config), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_standard_space_size() {
        // 15 start levels, windows up to 25, 2 kinds, 4 option sets:
        // sum(1..=15) * 8 = 960
        assert_eq!(standard_combinations().len(), 960);
    }

    #[test]
    fn test_advanced_space_size() {
        // Two scroll bands with 4 option sets, two without scrolls with 2,
        // both equipment kinds: (4 + 4 + 2 + 2) * 2 = 24
        assert_eq!(advanced_combinations().len(), 24);
    }

    #[test]
    fn test_keys_are_unique() {
        let config = SweepConfig::default();
        let combos = all_combinations(&config);
        let keys: BTreeSet<String> = combos.iter().map(|c| c.key()).collect();
        assert_eq!(keys.len(), combos.len());
    }

    #[test]
    fn test_key_format() {
        let combo = Combination::Standard {
            start: 10,
            end: 25,
            equipment: Equipment::Weapon,
            options: EnhancementOptions { books: true, breaths: true },
        };
        assert_eq!(combo.key(), "10_25_weapon_true_true");

        let combo = Combination::Advanced {
            band: Band::B1To10,
            equipment: Equipment::Armor,
            options: AdvancedOptions { scrolls: false, breaths: true },
        };
        assert_eq!(combo.key(), "adv_0_10_armor_false_true");
    }

    #[test]
    fn test_no_scroll_combinations_above_band_20() {
        for combo in advanced_combinations() {
            if let Combination::Advanced { band, options, .. } = combo {
                if options.scrolls {
                    assert!(band.allows_scrolls(), "scrolls offered in {:?}", band);
                }
            }
        }
    }

    #[test]
    fn test_failures_are_isolated() {
        let combos = [
            // Broken: outside the configured level window.
            Combination::Standard {
                start: 30,
                end: 31,
                equipment: Equipment::Weapon,
                options: EnhancementOptions::default(),
            },
            // Fine.
            Combination::Standard {
                start: 10,
                end: 11,
                equipment: Equipment::Weapon,
                options: EnhancementOptions::default(),
            },
        ];
        let config = SweepConfig {
            standard_iterations: 50,
            seed: Some(1),
            ..Default::default()
        };
        let summary = run_combinations(&combos, &config);

        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].key, "30_31_weapon_false_false");
        assert!(summary.table.contains_key("10_11_weapon_false_false"));
    }

    #[test]
    fn test_sweep_output_is_byte_identical_for_fixed_seed() {
        let combos = [Combination::Standard {
            start: 10,
            end: 12,
            equipment: Equipment::Armor,
            options: EnhancementOptions { books: true, breaths: false },
        }];
        let config = SweepConfig {
            standard_iterations: 300,
            seed: Some(424242),
            ..Default::default()
        };

        let a = run_combinations(&combos, &config);
        let b = run_combinations(&combos, &config);
        let json_a = serde_json::to_string_pretty(&a.table).unwrap();
        let json_b = serde_json::to_string_pretty(&b.table).unwrap();
        assert_eq!(json_a, json_b);
    }

    #[test]
    fn test_percentile_ordering_holds_in_sweep_output() {
        let combos = [Combination::Advanced {
            band: Band::B1To10,
            equipment: Equipment::Weapon,
            options: AdvancedOptions::default(),
        }];
        let config = SweepConfig {
            advanced_iterations: 500,
            seed: Some(5),
            ..Default::default()
        };
        let summary = run_combinations(&combos, &config);
        let entry = &summary.table["adv_0_10_weapon_false_false"];

        assert!(entry.upper25.gold <= entry.median.gold);
        assert!(entry.median.gold <= entry.lower25.gold);
        assert!(entry.guaranteed.gold >= entry.lower25.gold);
    }
}
