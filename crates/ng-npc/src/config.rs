//! Configuration for NPC generation.

use ng_mechanics::StatConfig;

/// Configuration for an [`NpcGenerator`](crate::NpcGenerator).
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// RNG seed for reproducible NPCs. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Number of distinct quirks drawn per NPC.
    pub quirk_count: usize,
    /// Stat engine parameters.
    pub stats: StatConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            quirk_count: 2,
            stats: StatConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set how many quirks each NPC gets.
    pub fn with_quirk_count(mut self, count: usize) -> Self {
        self.quirk_count = count;
        self
    }

    /// Set the stat engine parameters.
    pub fn with_stats(mut self, stats: StatConfig) -> Self {
        self.stats = stats;
        self
    }
}
