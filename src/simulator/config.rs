//! Sweep configuration.

use crate::constants::{ADVANCED_ITERATIONS, STANDARD_ITERATIONS};

/// Configuration for one generation sweep.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Runs per standard-tier combination
    pub standard_iterations: u32,

    /// Runs per advanced-tier combination
    pub advanced_iterations: u32,

    /// Base random seed (None = draw one from entropy at sweep start)
    pub seed: Option<u64>,

    /// Include the standard-tier combination space
    pub standard: bool,

    /// Include the advanced-tier combination space
    pub advanced: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            standard_iterations: STANDARD_ITERATIONS,
            advanced_iterations: ADVANCED_ITERATIONS,
            seed: None,
            standard: true,
            advanced: true,
        }
    }
}

impl SweepConfig {
    /// Quick config for smoke-testing the full pipeline.
    pub fn quick() -> Self {
        Self {
            standard_iterations: 1_000,
            advanced_iterations: 500,
            ..Default::default()
        }
    }
}
