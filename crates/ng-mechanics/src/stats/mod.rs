//! Stat keys and the fixed-size stat block.
//!
//! A [`StatBlock`] always holds all ten stats; it is indexed by [`Stat`]
//! rather than by string so a misspelt key cannot sneak in at runtime.

pub mod bonus;

pub use bonus::{Job, Race};

use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::MechError;

/// One of the ten stats tracked for a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    /// Hit points.
    Hp,
    /// Difficulty class.
    Dc,
    /// Movement speed.
    Spd,
    /// Strength.
    Str,
    /// Intelligence.
    Int,
    /// Dexterity.
    Dex,
    /// Wisdom.
    Wis,
    /// Constitution.
    Con,
    /// Charisma.
    Cha,
    /// Hit-die size (sides), not a scored ability.
    Hit,
}

impl Stat {
    /// All stats in display order.
    pub const ALL: [Stat; 10] = [
        Stat::Hp,
        Stat::Dc,
        Stat::Spd,
        Stat::Str,
        Stat::Int,
        Stat::Dex,
        Stat::Wis,
        Stat::Con,
        Stat::Cha,
        Stat::Hit,
    ];

    /// The six ability scores that receive pool points, in fixed order.
    pub const ABILITIES: [Stat; 6] = [
        Stat::Str,
        Stat::Int,
        Stat::Dex,
        Stat::Wis,
        Stat::Con,
        Stat::Cha,
    ];

    /// Short lowercase key used in rendered output.
    pub fn key(self) -> &'static str {
        match self {
            Self::Hp => "hp",
            Self::Dc => "dc",
            Self::Spd => "spd",
            Self::Str => "str",
            Self::Int => "int",
            Self::Dex => "dex",
            Self::Wis => "wis",
            Self::Con => "con",
            Self::Cha => "cha",
            Self::Hit => "hit",
        }
    }

    /// Returns true for the six ability scores.
    pub fn is_ability(self) -> bool {
        Self::ABILITIES.contains(&self)
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl FromStr for Stat {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|stat| stat.key() == lower)
            .ok_or_else(|| MechError::UnknownStat(s.to_string()))
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Complete numeric stat block for one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatBlock {
    values: [i32; 10],
}

impl StatBlock {
    /// Baseline values every character starts from, in [`Stat::ALL`] order.
    pub const BASELINE: [i32; 10] = [3, 11, 5, 8, 8, 8, 8, 8, 8, 0];

    /// A fresh block at the baseline values.
    pub fn baseline() -> Self {
        Self {
            values: Self::BASELINE,
        }
    }

    /// Value of a single stat.
    pub fn get(&self, stat: Stat) -> i32 {
        self.values[stat.slot()]
    }

    /// Add each `(stat, delta)` pair to the block.
    pub fn apply(&mut self, bonuses: &[(Stat, i32)]) {
        for &(stat, delta) in bonuses {
            self[stat] += delta;
        }
    }

    /// Sum of the six ability scores, widened so it cannot overflow.
    pub fn ability_total(&self) -> i64 {
        Stat::ABILITIES.iter().map(|&s| i64::from(self[s])).sum()
    }

    /// Iterate `(stat, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, i32)> + '_ {
        Stat::ALL.into_iter().map(|s| (s, self[s]))
    }
}

impl Default for StatBlock {
    fn default() -> Self {
        Self::baseline()
    }
}

impl Index<Stat> for StatBlock {
    type Output = i32;

    fn index(&self, stat: Stat) -> &i32 {
        &self.values[stat.slot()]
    }
}

impl IndexMut<Stat> for StatBlock {
    fn index_mut(&mut self, stat: Stat) -> &mut i32 {
        &mut self.values[stat.slot()]
    }
}

impl std::fmt::Display for StatBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.iter().map(|(s, v)| format!("{s} {v}")).collect();
        f.write_str(&parts.join(", "))
    }
}

impl Serialize for StatBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Stat::ALL.len()))?;
        for (stat, value) in self.iter() {
            map.serialize_entry(stat.key(), &value)?;
        }
        map.end()
    }
}
