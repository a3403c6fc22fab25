//! The generated NPC and its console rendering.

use rand::rngs::StdRng;
use serde::Serialize;

use ng_mechanics::{StatBlock, compute_stats, validate_level};
use ng_tables::TableSampler;

use crate::config::GeneratorConfig;
use crate::error::NpcResult;

/// A generated NPC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Character {
    /// Character level (at least 1).
    pub level: i32,
    /// Gender; also names the table first names are drawn from.
    pub gender: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Race, one of the race bonus table keys.
    pub race: String,
    /// Class, one of the class bonus table keys.
    pub job: String,
    /// Hair description.
    pub hair: String,
    /// Eye description.
    pub eyes: String,
    /// Skin tone.
    pub skin: String,
    /// Space-joined quirks.
    pub quirks: String,
    /// What drives this character.
    pub motivation: String,
    /// Computed stat block.
    pub stats: StatBlock,
}

impl Character {
    /// Roll a new character at `level`.
    ///
    /// The level is checked before any table is touched. Descriptive fields
    /// are drawn first, then the stat block is computed from the drawn race
    /// and job.
    pub fn roll<S>(
        sampler: &S,
        level: i32,
        config: &GeneratorConfig,
        rng: &mut StdRng,
    ) -> NpcResult<Self>
    where
        S: TableSampler + ?Sized,
    {
        validate_level(level)?;

        let gender = sampler.sample("genders", 1, rng)?;
        let first_name = sampler.sample(&gender, 1, rng)?;
        let last_name = sampler.sample("family", 1, rng)?;
        let hair = sampler.sample("hair", 1, rng)?;
        let eyes = sampler.sample("eyes", 1, rng)?;
        let skin = sampler.sample("skin-tones", 1, rng)?;
        let quirks = sampler.sample("quirks", config.quirk_count, rng)?;
        let motivation = sampler.sample("motivations", 1, rng)?;
        let race = sampler.sample("race", 1, rng)?;
        let job = sampler.sample("jobs", 1, rng)?;

        let stats = compute_stats(&race, &job, level, &config.stats, rng)?;

        Ok(Self {
            level,
            gender,
            first_name,
            last_name,
            race,
            job,
            hair,
            eyes,
            skin,
            quirks,
            motivation,
            stats,
        })
    }

    /// First and last name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{}, {}, {}/{}, Lv.{}.",
            self.full_name(),
            self.gender,
            self.race,
            self.job,
            self.level
        )?;
        writeln!(
            f,
            "{} hair, {} eyes, {} skin.",
            self.hair, self.eyes, self.skin
        )?;
        writeln!(f, "{}", self.stats)?;
        writeln!(f, "Quirks: {}", self.quirks)?;
        write!(f, "Motivation: {}", self.motivation)
    }
}
