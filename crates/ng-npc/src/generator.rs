//! Stateful NPC generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use ng_mechanics::validate_level;
use ng_tables::TableSampler;

use crate::character::Character;
use crate::config::GeneratorConfig;
use crate::error::NpcResult;

/// Generates NPCs from a table sampler, owning the random source.
pub struct NpcGenerator<S> {
    sampler: S,
    config: GeneratorConfig,
    rng: StdRng,
}

impl<S: TableSampler> NpcGenerator<S> {
    /// Create a generator. Seeded from `config.seed` when set, otherwise
    /// from the operating system.
    pub fn new(sampler: S, config: GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            sampler,
            config,
            rng,
        }
    }

    /// Generate one NPC.
    pub fn generate(&mut self, level: i32) -> NpcResult<Character> {
        Character::roll(&self.sampler, level, &self.config, &mut self.rng)
    }

    /// Generate `count` NPCs in parallel.
    ///
    /// Each NPC gets its own RNG seeded from the generator's, so a seeded
    /// generator produces the same batch no matter how the work is split
    /// across threads.
    pub fn generate_batch(&mut self, count: usize, level: i32) -> NpcResult<Vec<Character>>
    where
        S: Sync,
    {
        validate_level(level)?;

        let seeds: Vec<u64> = (0..count).map(|_| self.rng.random()).collect();
        let sampler = &self.sampler;
        let config = &self.config;
        log::debug!("generating {count} NPCs at level {level}");

        seeds
            .into_par_iter()
            .map(|seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                Character::roll(sampler, level, config, &mut rng)
            })
            .collect()
    }
}
