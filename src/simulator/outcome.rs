//! Per-run results: accumulated costs and attempt counters.

use crate::materials::{CostDelta, MaterialTally};

/// Attempt counters for one run, split by how each attempt was paid for.
/// Free retries and blessing procs consume no materials but are still
/// reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttemptStats {
    pub paid: u64,
    pub free: u64,
    pub blessings: u64,
    pub enhanced_blessings: u64,
    /// Paid attempts whose success was forced by the pity meter.
    pub pity_forced: u64,
}

impl AttemptStats {
    pub fn total(&self) -> u64 {
        self.paid + self.free + self.blessings + self.enhanced_blessings
    }
}

/// Everything one simulated climb consumed.
#[derive(Debug, Clone, Default)]
pub struct RunOutcome {
    pub materials: MaterialTally,
    pub gold: u64,
    pub attempts: AttemptStats,
}

impl RunOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one paid attempt's consumption into the running totals.
    pub fn pay(&mut self, delta: &CostDelta) {
        self.materials.apply(delta);
        self.gold += delta.gold;
        self.attempts.paid += 1;
    }
}
