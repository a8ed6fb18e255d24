//! Static configuration tables: success rates, modifier bonuses, and
//! per-attempt material costs. Read-only lookup data; everything here is
//! indexed by target level (standard) or refinement band (advanced).

use crate::materials::{Equipment, ScrollStage};

// Base success rate in percent, by target level.
pub const BASE_RATES: [(u32, f64); 15] = [
    (11, 10.0),
    (12, 10.0),
    (13, 10.0),
    (14, 5.0),
    (15, 5.0),
    (16, 5.0),
    (17, 5.0),
    (18, 4.0),
    (19, 4.0),
    (20, 4.0),
    (21, 3.0),
    (22, 3.0),
    (23, 3.0),
    (24, 1.5),
    (25, 1.5),
];

// Additive book bonus in percent. Books are only sold for levels 11-20.
pub const BOOK_BONUSES: [(u32, f64); 10] = [
    (11, 10.0),
    (12, 10.0),
    (13, 10.0),
    (14, 10.0),
    (15, 5.0),
    (16, 5.0),
    (17, 5.0),
    (18, 5.0),
    (19, 3.0),
    (20, 3.0),
];

pub fn base_rate(level: u32) -> Option<f64> {
    BASE_RATES
        .iter()
        .find(|(l, _)| *l == level)
        .map(|(_, rate)| *rate)
}

/// Book bonus for a level; 0 outside the 11-20 window (that is data, not an
/// error — books simply do not exist for other levels).
pub fn book_bonus(level: u32) -> f64 {
    BOOK_BONUSES
        .iter()
        .find(|(l, _)| *l == level)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(0.0)
}

/// Per-attempt material cost for one standard enhancement level.
/// `breath` and `book` are optional consumables, only charged when enabled.
#[derive(Debug, Clone, Copy)]
pub struct StageCost {
    pub stone: u64,
    pub leapstone: u64,
    pub fusion: u64,
    pub shard: u64,
    pub gold: u64,
    pub breath: u64,
    pub book: u64,
}

// Levels 11-25, indexed by level - 11.
pub const WEAPON_COSTS: [StageCost; 15] = [
    StageCost { stone: 500, leapstone: 9, fusion: 7, shard: 3000, gold: 950, breath: 10, book: 1 },
    StageCost { stone: 550, leapstone: 9, fusion: 7, shard: 3400, gold: 1000, breath: 10, book: 1 },
    StageCost { stone: 600, leapstone: 10, fusion: 8, shard: 3800, gold: 1100, breath: 12, book: 1 },
    StageCost { stone: 650, leapstone: 10, fusion: 8, shard: 4200, gold: 1200, breath: 12, book: 1 },
    StageCost { stone: 700, leapstone: 11, fusion: 9, shard: 4600, gold: 1300, breath: 14, book: 1 },
    StageCost { stone: 750, leapstone: 11, fusion: 9, shard: 5000, gold: 1400, breath: 14, book: 1 },
    StageCost { stone: 800, leapstone: 12, fusion: 10, shard: 5400, gold: 1500, breath: 16, book: 1 },
    StageCost { stone: 850, leapstone: 12, fusion: 10, shard: 5800, gold: 1600, breath: 16, book: 1 },
    StageCost { stone: 900, leapstone: 13, fusion: 11, shard: 6200, gold: 1700, breath: 18, book: 1 },
    StageCost { stone: 950, leapstone: 13, fusion: 11, shard: 6600, gold: 1800, breath: 18, book: 1 },
    StageCost { stone: 1000, leapstone: 14, fusion: 12, shard: 7000, gold: 1900, breath: 20, book: 0 },
    StageCost { stone: 1050, leapstone: 14, fusion: 12, shard: 7400, gold: 2000, breath: 20, book: 0 },
    StageCost { stone: 1100, leapstone: 15, fusion: 13, shard: 7800, gold: 2100, breath: 22, book: 0 },
    StageCost { stone: 1150, leapstone: 15, fusion: 13, shard: 8200, gold: 2200, breath: 22, book: 0 },
    StageCost { stone: 1200, leapstone: 16, fusion: 14, shard: 8600, gold: 2300, breath: 24, book: 0 },
];

pub const ARMOR_COSTS: [StageCost; 15] = [
    StageCost { stone: 400, leapstone: 7, fusion: 4, shard: 1800, gold: 760, breath: 8, book: 1 },
    StageCost { stone: 440, leapstone: 7, fusion: 4, shard: 2000, gold: 800, breath: 8, book: 1 },
    StageCost { stone: 480, leapstone: 8, fusion: 5, shard: 2300, gold: 880, breath: 10, book: 1 },
    StageCost { stone: 520, leapstone: 8, fusion: 5, shard: 2500, gold: 960, breath: 10, book: 1 },
    StageCost { stone: 560, leapstone: 9, fusion: 5, shard: 2800, gold: 1040, breath: 11, book: 1 },
    StageCost { stone: 600, leapstone: 9, fusion: 6, shard: 3000, gold: 1120, breath: 11, book: 1 },
    StageCost { stone: 640, leapstone: 10, fusion: 6, shard: 3200, gold: 1200, breath: 13, book: 1 },
    StageCost { stone: 680, leapstone: 10, fusion: 6, shard: 3500, gold: 1280, breath: 13, book: 1 },
    StageCost { stone: 720, leapstone: 11, fusion: 7, shard: 3700, gold: 1360, breath: 14, book: 1 },
    StageCost { stone: 760, leapstone: 11, fusion: 7, shard: 4000, gold: 1440, breath: 14, book: 1 },
    StageCost { stone: 800, leapstone: 12, fusion: 8, shard: 4200, gold: 1520, breath: 16, book: 0 },
    StageCost { stone: 840, leapstone: 12, fusion: 8, shard: 4400, gold: 1600, breath: 16, book: 0 },
    StageCost { stone: 880, leapstone: 13, fusion: 9, shard: 4700, gold: 1680, breath: 18, book: 0 },
    StageCost { stone: 920, leapstone: 13, fusion: 9, shard: 4900, gold: 1760, breath: 18, book: 0 },
    StageCost { stone: 960, leapstone: 14, fusion: 10, shard: 5200, gold: 1840, breath: 19, book: 0 },
];

pub fn stage_cost(equipment: Equipment, level: u32) -> Option<&'static StageCost> {
    if !(11..=25).contains(&level) {
        return None;
    }
    let idx = (level - 11) as usize;
    match equipment {
        Equipment::Weapon => Some(&WEAPON_COSTS[idx]),
        Equipment::Armor => Some(&ARMOR_COSTS[idx]),
    }
}

/// Advanced refinement band. Climbs always run from a band's start level to
/// its end level; material costs and blessing weights are band-wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Band {
    B1To10,
    B11To20,
    B21To30,
    B31To40,
}

pub const ALL_BANDS: [Band; 4] = [Band::B1To10, Band::B11To20, Band::B21To30, Band::B31To40];

impl Band {
    pub fn from_start_level(level: u32) -> Option<Band> {
        match level {
            0..=9 => Some(Band::B1To10),
            10..=19 => Some(Band::B11To20),
            20..=29 => Some(Band::B21To30),
            30..=39 => Some(Band::B31To40),
            _ => None,
        }
    }

    pub fn start_level(&self) -> u32 {
        match self {
            Band::B1To10 => 0,
            Band::B11To20 => 10,
            Band::B21To30 => 20,
            Band::B31To40 => 30,
        }
    }

    pub fn end_level(&self) -> u32 {
        self.start_level() + 10
    }

    fn index(&self) -> usize {
        match self {
            Band::B1To10 => 0,
            Band::B11To20 => 1,
            Band::B21To30 => 2,
            Band::B31To40 => 3,
        }
    }

    /// Scroll tier usable in this band; scrolls are not sold for bands
    /// starting at level 20 and above.
    pub fn scroll_stage(&self) -> Option<ScrollStage> {
        match self {
            Band::B1To10 => Some(ScrollStage::One),
            Band::B11To20 => Some(ScrollStage::Two),
            Band::B21To30 | Band::B31To40 => None,
        }
    }

    pub fn allows_scrolls(&self) -> bool {
        self.scroll_stage().is_some()
    }
}

/// Per-attempt material cost for one advanced refinement band.
/// `breath` is the optional consumable amount per attempt.
#[derive(Debug, Clone, Copy)]
pub struct BandCost {
    pub stone: u64,
    pub leapstone: u64,
    pub fusion: u64,
    pub shard: u64,
    pub gold: u64,
    pub breath: u64,
}

pub const WEAPON_BAND_COSTS: [BandCost; 4] = [
    BandCost { stone: 300, leapstone: 8, fusion: 12, shard: 4000, gold: 900, breath: 6 },
    BandCost { stone: 550, leapstone: 11, fusion: 13, shard: 8000, gold: 2000, breath: 9 },
    BandCost { stone: 1200, leapstone: 25, fusion: 28, shard: 11500, gold: 3000, breath: 20 },
    BandCost { stone: 1400, leapstone: 32, fusion: 30, shard: 13000, gold: 4000, breath: 24 },
];

pub const ARMOR_BAND_COSTS: [BandCost; 4] = [
    BandCost { stone: 250, leapstone: 6, fusion: 7, shard: 2400, gold: 760, breath: 6 },
    BandCost { stone: 450, leapstone: 8, fusion: 8, shard: 4800, gold: 1440, breath: 9 },
    BandCost { stone: 1000, leapstone: 18, fusion: 17, shard: 7000, gold: 2000, breath: 20 },
    BandCost { stone: 1200, leapstone: 23, fusion: 19, shard: 8000, gold: 2400, breath: 24 },
];

pub fn band_cost(equipment: Equipment, band: Band) -> &'static BandCost {
    match equipment {
        Equipment::Weapon => &WEAPON_BAND_COSTS[band.index()],
        Equipment::Armor => &ARMOR_BAND_COSTS[band.index()],
    }
}

// Success-tier probabilities [success, great, great x2] for advanced
// attempts, indexed by consumable combination (none / breaths / scrolls /
// both). Draws walk the cumulative thresholds, so the last entry is the
// remainder.
pub const ADVANCED_SUCCESS_TIERS: [[f64; 3]; 4] = [
    [0.8, 0.15, 0.05],
    [0.5, 0.3, 0.2],
    [0.3, 0.45, 0.25],
    [0.2, 0.6, 0.4],
];

// Blessing weights in fixed draw order: Galatur, Gelar, Kuhumbar, Temer,
// Naber, Eber. The low bands never roll the last two.
pub const BLESSING_WEIGHTS_1_20: [f64; 6] = [0.15, 0.35, 0.15, 0.35, 0.0, 0.0];
pub const BLESSING_WEIGHTS_21_40: [f64; 6] = [0.125, 0.25, 0.125, 0.25, 0.125, 0.125];

// Enhanced blessings drop Naber and draw uniformly.
pub const ENHANCED_BLESSING_WEIGHTS: [f64; 5] = [0.2, 0.2, 0.2, 0.2, 0.2];
