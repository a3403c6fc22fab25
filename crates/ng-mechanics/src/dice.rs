//! Single-die rolls.
//!
//! Hit dice live in a [`StatBlock`](crate::StatBlock) as a plain side
//! count, so rolls take the side count directly.

use rand::Rng;
use rand::rngs::StdRng;

/// Roll a die with `sides` faces, returning a value in `1..=sides`.
///
/// Anything smaller than a two-sided die cannot be rolled: a warning is
/// logged and the roll counts as 0.
pub fn roll_die(sides: i32, rng: &mut StdRng) -> i32 {
    if sides < 2 {
        log::warn!("the smallest die you can roll is two-sided, but a d{sides} was requested");
        return 0;
    }
    rng.random_range(1..=sides)
}
