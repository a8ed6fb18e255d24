//! Standard-tier stage simulation: one climb from a start level to an end
//! level, one probabilistic stage per level.
//!
//! Every attempt charges the artisan energy meter before its outcome is
//! decided; an attempt that fills the meter succeeds outright. That makes
//! the always-fail walk in [`guaranteed_cost`] the exact per-stage worst
//! case, so the guaranteed scenario bounds every sampled run.

use rand::Rng;

use super::outcome::RunOutcome;
use super::pity::PityMeter;
use crate::constants::{MAX_ATTEMPTS_PER_STAGE, PITY_CEILING};
use crate::error::SimError;
use crate::materials::{BookBand, CostDelta, Equipment, Material};
use crate::rates::{EnhancementOptions, StageRates};
use crate::tables::{book_bonus, stage_cost};

/// Materials and gold consumed by a single attempt at `level`.
pub fn attempt_cost(
    level: u32,
    equipment: Equipment,
    options: EnhancementOptions,
) -> Result<CostDelta, SimError> {
    let cost = stage_cost(equipment, level).ok_or(SimError::UnknownCostEntry {
        equipment: equipment.key(),
        level,
    })?;

    let mut materials = vec![
        (equipment.stone(), cost.stone),
        (Material::Leapstone, cost.leapstone),
        (Material::FusionMaterial, cost.fusion),
        (Material::Shard, cost.shard),
    ];
    if options.breaths && cost.breath > 0 {
        materials.push((equipment.breath(), cost.breath));
    }
    if options.books && book_bonus(level) > 0.0 && cost.book > 0 {
        if let Some(band) = BookBand::for_level(level) {
            materials.push((Material::Book(equipment, band), cost.book));
        }
    }

    Ok(CostDelta { materials, gold: cost.gold })
}

/// Run one stage to completion with an explicit rate schedule and cost,
/// folding consumption into `outcome`. Returns the number of attempts taken.
pub fn run_stage_with<R: Rng>(
    level: u32,
    rates: &StageRates,
    cost: &CostDelta,
    outcome: &mut RunOutcome,
    rng: &mut R,
) -> Result<u32, SimError> {
    let mut pity = PityMeter::new(PITY_CEILING);
    let mut attempt = 1u32;

    loop {
        pity.charge(rates.gain(attempt));
        outcome.pay(cost);

        if pity.full() {
            outcome.attempts.pity_forced += 1;
            return Ok(attempt);
        }
        if rng.gen_range(0.0..100.0) < rates.rate(attempt) {
            return Ok(attempt);
        }
        if attempt >= MAX_ATTEMPTS_PER_STAGE {
            return Err(SimError::PityStalled { level, attempts: attempt });
        }
        attempt += 1;
    }
}

/// Run one level-up stage to completion.
pub fn run_stage<R: Rng>(
    level: u32,
    equipment: Equipment,
    options: EnhancementOptions,
    outcome: &mut RunOutcome,
    rng: &mut R,
) -> Result<u32, SimError> {
    let rates = StageRates::for_level(level, options)?;
    let cost = attempt_cost(level, equipment, options)?;
    run_stage_with(level, &rates, &cost, outcome, rng)
}

/// Simulate one full climb from `start` to `end`.
pub fn run_climb<R: Rng>(
    start: u32,
    end: u32,
    equipment: Equipment,
    options: EnhancementOptions,
    rng: &mut R,
) -> Result<RunOutcome, SimError> {
    if start >= end {
        return Err(SimError::InvalidRange { start, end });
    }

    let mut outcome = RunOutcome::new();
    for level in (start + 1)..=end {
        run_stage(level, equipment, options, &mut outcome, rng)?;
    }
    Ok(outcome)
}

/// Deterministic worst-case cost: every stage runs with the outcome draw
/// always failing, so the pity meter alone decides the attempt count.
pub fn guaranteed_cost(
    start: u32,
    end: u32,
    equipment: Equipment,
    options: EnhancementOptions,
) -> Result<RunOutcome, SimError> {
    if start >= end {
        return Err(SimError::InvalidRange { start, end });
    }

    let mut outcome = RunOutcome::new();
    for level in (start + 1)..=end {
        let rates = StageRates::for_level(level, options)?;
        let cost = attempt_cost(level, equipment, options)?;
        let mut pity = PityMeter::new(PITY_CEILING);
        let mut attempt = 1u32;

        loop {
            pity.charge(rates.gain(attempt));
            outcome.pay(&cost);
            if pity.full() {
                outcome.attempts.pity_forced += 1;
                break;
            }
            if attempt >= MAX_ATTEMPTS_PER_STAGE {
                return Err(SimError::PityStalled { level, attempts: attempt });
            }
            attempt += 1;
        }
    }
    Ok(outcome)
}
