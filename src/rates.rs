//! Per-attempt success rates for standard enhancement.
//!
//! Pure functions of (level, attempt count, modifier flags). All rates are
//! percentages in [0, 100+]; a rate of 100 or more means the draw cannot
//! fail (breaths at the top levels).

use crate::constants::{ARTISAN_DIVISOR, BREATH_GUARANTEE_LEVEL, ESCALATION_CAP, ESCALATION_STEP};
use crate::error::SimError;
use crate::tables;

/// Consumable flags for a standard enhancement climb.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnhancementOptions {
    pub books: bool,
    pub breaths: bool,
}

impl EnhancementOptions {
    pub const ALL: [EnhancementOptions; 4] = [
        EnhancementOptions { books: false, breaths: false },
        EnhancementOptions { books: true, breaths: false },
        EnhancementOptions { books: false, breaths: true },
        EnhancementOptions { books: true, breaths: true },
    ];
}

/// Base success rate for a target level. Unknown levels are a configuration
/// error, never a silent zero.
pub fn base_rate(level: u32) -> Result<f64, SimError> {
    tables::base_rate(level).ok_or(SimError::UnknownLevel { level })
}

/// Additive breath bonus: the base rate again below the guarantee level, a
/// full 100 points at or above it.
pub fn breath_bonus(level: u32, base: f64) -> f64 {
    if level >= BREATH_GUARANTEE_LEVEL {
        100.0
    } else {
        base
    }
}

/// Rate schedule for one stage: base rate and flat modifier bonuses resolved
/// once per level, escalation applied per attempt.
#[derive(Debug, Clone)]
pub struct StageRates {
    pub base: f64,
    pub flat_bonus: f64,
    pub escalation_step: f64,
    pub escalation_cap: u32,
    pub artisan_divisor: f64,
}

impl StageRates {
    pub fn for_level(level: u32, options: EnhancementOptions) -> Result<StageRates, SimError> {
        let base = base_rate(level)?;
        let mut flat_bonus = 0.0;
        if options.books {
            flat_bonus += tables::book_bonus(level);
        }
        if options.breaths {
            flat_bonus += breath_bonus(level, base);
        }
        Ok(StageRates {
            base,
            flat_bonus,
            escalation_step: ESCALATION_STEP,
            escalation_cap: ESCALATION_CAP,
            artisan_divisor: ARTISAN_DIVISOR,
        })
    }

    /// Success chance in percent for the given attempt number (1-based).
    /// Consecutive failures escalate the base rate up to the cap.
    pub fn rate(&self, attempt: u32) -> f64 {
        let stacks = attempt.saturating_sub(1).min(self.escalation_cap);
        self.base + self.base * stacks as f64 * self.escalation_step + self.flat_bonus
    }

    /// Artisan energy gained by one attempt at this rate, truncated to two
    /// decimals the way the in-game meter displays it.
    pub fn gain(&self, attempt: u32) -> f64 {
        (self.rate(attempt) / self.artisan_divisor * 100.0).floor() / 100.0
    }
}

/// Convenience entry point: final rate for a single attempt.
pub fn final_rate(
    level: u32,
    attempt: u32,
    options: EnhancementOptions,
) -> Result<f64, SimError> {
    Ok(StageRates::for_level(level, options)?.rate(attempt))
}
