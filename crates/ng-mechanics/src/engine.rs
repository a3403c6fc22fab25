//! Stat block computation: bonuses, pool allocation, hit points and
//! difficulty class.

use rand::rngs::StdRng;

use crate::allocation::allocate_points;
use crate::config::StatConfig;
use crate::dice::roll_die;
use crate::error::{MechError, MechResult};
use crate::stats::{Job, Race, Stat, StatBlock};

/// Ability modifier: `floor((score - 10) / 2)`, rounding toward negative
/// infinity so that a score of 7 gives -2.
pub fn modifier(score: i32) -> i32 {
    // Halving the widened difference always fits back into an i32.
    ((i64::from(score) - 10).div_euclid(2)) as i32
}

/// Reject levels below 1.
pub fn validate_level(level: i32) -> MechResult<()> {
    if level < 1 {
        return Err(MechError::InvalidLevel(level));
    }
    Ok(())
}

/// Hit points earned from level, constitution and hit die.
///
/// Level 1 takes the full hit die plus the constitution modifier. Every
/// further level adds the modifier plus one roll of the hit die. The total
/// saturates instead of overflowing.
pub fn hp_formula(level: i32, con: i32, hit: i32, rng: &mut StdRng) -> i32 {
    let mod_con = modifier(con);
    let first = mod_con.saturating_add(hit);
    if level <= 1 {
        return first;
    }
    if hit < 2 {
        // Every roll would be 0; only the modifier accumulates.
        roll_die(hit, rng);
        return first.saturating_add(mod_con.saturating_mul(level - 1));
    }
    (1..level).fold(first, |hp, _| {
        hp.saturating_add(mod_con.saturating_add(roll_die(hit, rng)))
    })
}

/// Difficulty class adjustment: the dexterity modifier plus one per four
/// levels.
pub fn difficulty_class(level: i32, dex: i32) -> i32 {
    modifier(dex).saturating_add(level / 4)
}

/// Compute a full stat block from race and job names.
///
/// Fails with [`MechError::UnknownCategory`] when either name is missing
/// from its bonus table and with [`MechError::InvalidLevel`] below level 1.
/// Both checks run before any stat is touched.
pub fn compute_stats(
    race: &str,
    job: &str,
    level: i32,
    config: &StatConfig,
    rng: &mut StdRng,
) -> MechResult<StatBlock> {
    validate_level(level)?;
    let race: Race = race.parse()?;
    let job: Job = job.parse()?;
    compute_stats_for(race, job, level, config, rng)
}

/// Compute a full stat block for an already resolved race and job.
pub fn compute_stats_for(
    race: Race,
    job: Job,
    level: i32,
    config: &StatConfig,
    rng: &mut StdRng,
) -> MechResult<StatBlock> {
    validate_level(level)?;

    let mut stats = StatBlock::baseline();
    stats.apply(race.bonuses());
    stats.apply(job.bonuses());

    let allocation = allocate_points(&mut stats, level, config, rng);
    log::debug!(
        "{race}/{job} lv.{level}: spent {} of {} pool points",
        allocation.spent,
        allocation.pool
    );

    let hp = hp_formula(level, stats[Stat::Con], stats[Stat::Hit], rng);
    stats[Stat::Hp] = stats[Stat::Hp].saturating_add(hp);
    let dc = difficulty_class(level, stats[Stat::Dex]);
    stats[Stat::Dc] = stats[Stat::Dc].saturating_add(dc);

    Ok(stats)
}
