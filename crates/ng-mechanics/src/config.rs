//! Configuration for stat generation.

use serde::{Deserialize, Serialize};

use crate::allocation::{AllocationOrder, AllocationPolicy};

/// Skip budget used by [`StatConfig::capped`].
pub const DEFAULT_MAX_SKIPS: u32 = 1000;

/// Tunable parameters of the stat engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatConfig {
    /// Pool points a level 1 character spreads over the ability scores.
    /// Each level above 1 adds one more.
    pub base_pool: u32,
    /// Whether ability scores have a ceiling during allocation.
    pub policy: AllocationPolicy,
    /// Order in which ability scores receive pool points.
    pub order: AllocationOrder,
}

impl Default for StatConfig {
    fn default() -> Self {
        Self {
            base_pool: 22,
            policy: AllocationPolicy::Uncapped,
            order: AllocationOrder::Shuffled,
        }
    }
}

impl StatConfig {
    /// Capped allocation with a 21 point base pool.
    pub fn capped() -> Self {
        Self {
            base_pool: 21,
            policy: AllocationPolicy::Capped {
                max_skips: DEFAULT_MAX_SKIPS,
            },
            order: AllocationOrder::Shuffled,
        }
    }

    /// Set the base pool size.
    pub fn with_base_pool(mut self, base_pool: u32) -> Self {
        self.base_pool = base_pool;
        self
    }

    /// Set the allocation policy.
    pub fn with_policy(mut self, policy: AllocationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the allocation order.
    pub fn with_order(mut self, order: AllocationOrder) -> Self {
        self.order = order;
        self
    }

    /// Total pool points for a character of the given level, saturating at
    /// `i32::MAX`.
    pub fn pool_for_level(&self, level: i32) -> i32 {
        i32::try_from(self.base_pool)
            .unwrap_or(i32::MAX)
            .saturating_add(level.saturating_sub(1))
    }
}
