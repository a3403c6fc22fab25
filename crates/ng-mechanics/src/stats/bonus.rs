//! Race and class bonus tables.
//!
//! Both tables are fixed data: each race or class maps to an ordered list
//! of `(stat, delta)` pairs that are added onto a baseline [`StatBlock`].
//! Class entries also carry the hit-die size, added onto the zero baseline
//! of [`Stat::Hit`].
//!
//! [`StatBlock`]: super::StatBlock

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Stat;
use crate::error::MechError;

/// Playable races.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Race {
    /// Dragonborn.
    Dragonborn,
    /// Dwarf.
    Dwarf,
    /// Elf.
    Elf,
    /// Gnome.
    Gnome,
    /// Halfling.
    Halfling,
    /// Half-Elf.
    HalfElf,
    /// Half-Orc.
    HalfOrc,
    /// Human.
    Human,
    /// Tiefling.
    Tiefling,
}

impl Race {
    /// Every race in table order.
    pub const ALL: [Race; 9] = [
        Race::Dragonborn,
        Race::Dwarf,
        Race::Elf,
        Race::Gnome,
        Race::Halfling,
        Race::HalfElf,
        Race::HalfOrc,
        Race::Human,
        Race::Tiefling,
    ];

    /// Display name, as it appears in the race table.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dragonborn => "Dragonborn",
            Self::Dwarf => "Dwarf",
            Self::Elf => "Elf",
            Self::Gnome => "Gnome",
            Self::Halfling => "Halfling",
            Self::HalfElf => "Half-Elf",
            Self::HalfOrc => "Half-Orc",
            Self::Human => "Human",
            Self::Tiefling => "Tiefling",
        }
    }

    /// Racial stat bonuses.
    pub fn bonuses(self) -> &'static [(Stat, i32)] {
        match self {
            Self::Dragonborn => &[(Stat::Spd, 30), (Stat::Str, 2), (Stat::Cha, 1)],
            Self::Dwarf => &[(Stat::Spd, 25), (Stat::Con, 2)],
            Self::Elf => &[(Stat::Spd, 30), (Stat::Dex, 2)],
            Self::Gnome => &[(Stat::Spd, 25), (Stat::Int, 2)],
            Self::Halfling => &[(Stat::Spd, 25), (Stat::Dex, 2)],
            Self::HalfElf => &[(Stat::Spd, 30), (Stat::Cha, 2)],
            Self::HalfOrc => &[(Stat::Spd, 30), (Stat::Str, 2), (Stat::Con, 1)],
            Self::Human => &[(Stat::Spd, 30)],
            Self::Tiefling => &[(Stat::Spd, 30), (Stat::Int, 1), (Stat::Cha, 2)],
        }
    }
}

impl FromStr for Race {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.name() == s)
            .ok_or_else(|| MechError::UnknownCategory {
                table: "race",
                name: s.to_string(),
            })
    }
}

impl std::fmt::Display for Race {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Job {
    /// Barbarian.
    Barbarian,
    /// Bard.
    Bard,
    /// Cleric.
    Cleric,
    /// Druid.
    Druid,
    /// Fighter.
    Fighter,
    /// Monk.
    Monk,
    /// Paladin.
    Paladin,
    /// Ranger.
    Ranger,
    /// Rogue.
    Rogue,
    /// Sorcerer.
    Sorcerer,
    /// Warlock.
    Warlock,
    /// Wizard.
    Wizard,
}

impl Job {
    /// Every class in table order.
    pub const ALL: [Job; 12] = [
        Job::Barbarian,
        Job::Bard,
        Job::Cleric,
        Job::Druid,
        Job::Fighter,
        Job::Monk,
        Job::Paladin,
        Job::Ranger,
        Job::Rogue,
        Job::Sorcerer,
        Job::Warlock,
        Job::Wizard,
    ];

    /// Display name, as it appears in the jobs table.
    pub fn name(self) -> &'static str {
        match self {
            Self::Barbarian => "Barbarian",
            Self::Bard => "Bard",
            Self::Cleric => "Cleric",
            Self::Druid => "Druid",
            Self::Fighter => "Fighter",
            Self::Monk => "Monk",
            Self::Paladin => "Paladin",
            Self::Ranger => "Ranger",
            Self::Rogue => "Rogue",
            Self::Sorcerer => "Sorcerer",
            Self::Warlock => "Warlock",
            Self::Wizard => "Wizard",
        }
    }

    /// Class stat bonuses: a primary (+3) and secondary (+2) ability, plus
    /// the hit-die size.
    pub fn bonuses(self) -> &'static [(Stat, i32)] {
        match self {
            Self::Barbarian => &[(Stat::Con, 3), (Stat::Str, 2), (Stat::Hit, 12)],
            Self::Bard => &[(Stat::Cha, 3), (Stat::Int, 2), (Stat::Hit, 8)],
            Self::Cleric => &[(Stat::Wis, 3), (Stat::Cha, 2), (Stat::Hit, 8)],
            Self::Druid => &[(Stat::Wis, 3), (Stat::Dex, 2), (Stat::Hit, 8)],
            Self::Fighter => &[(Stat::Str, 3), (Stat::Con, 2), (Stat::Hit, 10)],
            Self::Monk => &[(Stat::Dex, 3), (Stat::Wis, 2), (Stat::Hit, 8)],
            Self::Paladin => &[(Stat::Cha, 3), (Stat::Str, 2), (Stat::Hit, 10)],
            Self::Ranger => &[(Stat::Str, 3), (Stat::Dex, 2), (Stat::Hit, 10)],
            Self::Rogue => &[(Stat::Dex, 3), (Stat::Cha, 2), (Stat::Hit, 8)],
            Self::Sorcerer => &[(Stat::Con, 3), (Stat::Int, 2), (Stat::Hit, 6)],
            Self::Warlock => &[(Stat::Int, 3), (Stat::Con, 2), (Stat::Hit, 8)],
            Self::Wizard => &[(Stat::Int, 3), (Stat::Wis, 2), (Stat::Hit, 6)],
        }
    }
}

impl FromStr for Job {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|j| j.name() == s)
            .ok_or_else(|| MechError::UnknownCategory {
                table: "job",
                name: s.to_string(),
            })
    }
}

impl std::fmt::Display for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
