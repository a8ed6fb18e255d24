//! Material identities and accumulation.
//!
//! Simulation code works with tagged [`Material`] values; human-readable
//! names only appear at the serialization boundary, so the simulator never
//! branches on display strings.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Equipment {
    Weapon,
    Armor,
}

impl Equipment {
    /// Key fragment used in lookup-table keys.
    pub fn key(&self) -> &'static str {
        match self {
            Equipment::Weapon => "weapon",
            Equipment::Armor => "armor",
        }
    }

    /// The honing stone consumed by this equipment kind.
    pub fn stone(&self) -> Material {
        match self {
            Equipment::Weapon => Material::DestructionStone,
            Equipment::Armor => Material::GuardianStone,
        }
    }

    pub fn breath(&self) -> Material {
        Material::Breath(*self)
    }
}

/// Book price band, by target level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BookBand {
    Low,  // levels 11-14
    Mid,  // levels 15-18
    High, // levels 19-20
}

impl BookBand {
    pub fn for_level(level: u32) -> Option<BookBand> {
        match level {
            11..=14 => Some(BookBand::Low),
            15..=18 => Some(BookBand::Mid),
            19..=20 => Some(BookBand::High),
            _ => None,
        }
    }
}

/// Scroll tier for advanced refinement (stage 1 covers bands starting below
/// level 10, stage 2 the 10-19 band).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScrollStage {
    One,
    Two,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Material {
    GuardianStone,
    DestructionStone,
    Leapstone,
    FusionMaterial,
    Shard,
    Breath(Equipment),
    Book(Equipment, BookBand),
    Scroll(Equipment, ScrollStage),
}

impl Material {
    /// Display name used as the key in the serialized lookup table.
    pub fn display_name(&self) -> &'static str {
        match self {
            Material::GuardianStone => "Destiny Guardian Stone",
            Material::DestructionStone => "Destiny Destruction Stone",
            Material::Leapstone => "Destiny Leapstone",
            Material::FusionMaterial => "Abidos Fusion Material",
            Material::Shard => "Destiny Shard",
            Material::Breath(Equipment::Weapon) => "Lava's Breath",
            Material::Breath(Equipment::Armor) => "Glacier's Breath",
            Material::Book(Equipment::Weapon, BookBand::Low) => "Metallurgy: Karma [11-14]",
            Material::Book(Equipment::Weapon, BookBand::Mid) => "Metallurgy: Karma [15-18]",
            Material::Book(Equipment::Weapon, BookBand::High) => "Metallurgy: Karma [19-20]",
            Material::Book(Equipment::Armor, BookBand::Low) => "Tailoring: Karma [11-14]",
            Material::Book(Equipment::Armor, BookBand::Mid) => "Tailoring: Karma [15-18]",
            Material::Book(Equipment::Armor, BookBand::High) => "Tailoring: Karma [19-20]",
            Material::Scroll(Equipment::Weapon, ScrollStage::One) => "Artisan Metallurgy: Stage 1",
            Material::Scroll(Equipment::Weapon, ScrollStage::Two) => "Artisan Metallurgy: Stage 2",
            Material::Scroll(Equipment::Armor, ScrollStage::One) => "Artisan Tailoring: Stage 1",
            Material::Scroll(Equipment::Armor, ScrollStage::Two) => "Artisan Tailoring: Stage 2",
        }
    }
}

/// Materials and gold consumed by a single attempt.
///
/// Attempts produce deltas which are folded into a [`MaterialTally`], rather
/// than mutating a shared map in place.
#[derive(Debug, Clone, Default)]
pub struct CostDelta {
    pub materials: Vec<(Material, u64)>,
    pub gold: u64,
}

/// Accumulated material counts for one simulated run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterialTally(BTreeMap<Material, u64>);

impl MaterialTally {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn add(&mut self, material: Material, amount: u64) {
        if amount > 0 {
            *self.0.entry(material).or_insert(0) += amount;
        }
    }

    pub fn get(&self, material: Material) -> u64 {
        self.0.get(&material).copied().unwrap_or(0)
    }

    /// Fold one attempt's consumption into the tally.
    pub fn apply(&mut self, delta: &CostDelta) {
        for &(material, amount) in &delta.materials {
            self.add(material, amount);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Material, &u64)> {
        self.0.iter()
    }

    /// Resolve tags to display names. BTreeMap keys keep the serialized
    /// output byte-stable across runs.
    pub fn to_display_map(&self) -> BTreeMap<&'static str, u64> {
        self.0
            .iter()
            .map(|(material, &amount)| (material.display_name(), amount))
            .collect()
    }
}
