// Simulation batch sizes (runs per parameter combination)
pub const STANDARD_ITERATIONS: u32 = 50_000;
pub const ADVANCED_ITERATIONS: u32 = 10_000;

// Failure escalation: rate = base + base * min(attempts - 1, CAP) * STEP
pub const ESCALATION_CAP: u32 = 10;
pub const ESCALATION_STEP: f64 = 0.1;

// Artisan energy gained per attempt = floor(rate / DIVISOR * 100) / 100
pub const ARTISAN_DIVISOR: f64 = 2.15;
pub const PITY_CEILING: f64 = 100.0;

// Breaths guarantee success at or above this target level
pub const BREATH_GUARANTEE_LEVEL: u32 = 24;

// Standard enhancement window (climbs run between these levels)
pub const STANDARD_MIN_LEVEL: u32 = 10;
pub const STANDARD_MAX_LEVEL: u32 = 25;

// Advanced refinement: experience climb per band
pub const ADVANCED_MAX_EXP: u32 = 1000;
pub const BLESSING_STACK: u32 = 6;
pub const EXP_GAIN_TIERS: [u32; 3] = [10, 20, 40]; // success, great success, great success x2

// Scrolls are only sold for bands starting below this level
pub const SCROLL_MAX_START_LEVEL: u32 = 20;

// Percentile sample points (batches are sorted by gold ascending)
pub const PERCENTILE_UPPER25: f64 = 0.25;
pub const PERCENTILE_MEDIAN: f64 = 0.50;
pub const PERCENTILE_LOWER25: f64 = 0.75;

// Defensive bound on attempts per stage. The pity meter makes forward
// progress every attempt, so hitting this means a broken rate table.
pub const MAX_ATTEMPTS_PER_STAGE: u32 = 10_000;
