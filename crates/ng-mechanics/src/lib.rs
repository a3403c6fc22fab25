//! Stat engine for procedurally generated NPCs.
//!
//! Turns a race, a class ("job") and a level into a complete stat block:
//! a fixed baseline, additive race and class bonuses, a point pool spread
//! over the six ability scores, and the hit point and difficulty class
//! formulas. The only randomness is the allocation order and the hit-die
//! rolls, both drawn from a caller-supplied [`rand::rngs::StdRng`].

pub mod allocation;
pub mod config;
pub mod dice;
pub mod engine;
pub mod error;
pub mod stats;

pub use allocation::{Allocation, AllocationOrder, AllocationPolicy, ability_ceiling, allocate_points};
pub use config::StatConfig;
pub use dice::roll_die;
pub use engine::{
    compute_stats, compute_stats_for, difficulty_class, hp_formula, modifier, validate_level,
};
pub use error::{MechError, MechResult};
pub use stats::{Job, Race, Stat, StatBlock};
