//! Point-pool allocation over the six ability scores.
//!
//! The pool is handed out one point per visit, cycling through the ability
//! scores in a fixed or per-character shuffled order. Under the capped
//! policy a score at its ceiling is skipped without spending a point; once
//! the skip budget runs out (or every score is capped) the remaining points
//! are forfeited.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::config::StatConfig;
use crate::stats::{Stat, StatBlock};

/// Whether ability scores have a ceiling during allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllocationPolicy {
    /// Every visit spends a point; scores can grow without limit.
    Uncapped,
    /// Scores stop at [`ability_ceiling`]; visits to a capped score are
    /// skipped, and allocation stops after more than `max_skips` skips.
    Capped {
        /// Skip budget before the rest of the pool is forfeited.
        max_skips: u32,
    },
}

/// Order in which ability scores are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllocationOrder {
    /// Always str, int, dex, wis, con, cha.
    Fixed,
    /// A fresh permutation per character, repeated for the whole pool.
    Shuffled,
}

impl AllocationOrder {
    /// The visiting order for one character.
    pub fn sequence(self, rng: &mut StdRng) -> [Stat; 6] {
        let mut order = Stat::ABILITIES;
        if self == Self::Shuffled {
            order.shuffle(rng);
        }
        order
    }
}

/// Outcome of spreading a point pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Allocation {
    /// Points available at the start.
    pub pool: i32,
    /// Points actually added to ability scores.
    pub spent: i32,
    /// Visits that landed on a capped score.
    pub skipped: u32,
    /// Points left over when allocation stopped early.
    pub forfeited: i32,
}

/// Highest score an ability may reach under the capped policy.
pub fn ability_ceiling(level: i32) -> i32 {
    18 + level.max(0) / 4
}

/// Spread the level's point pool over the ability scores in `stats`.
///
/// Cost does not grow with the pool: whole passes through the order are
/// applied in one step, and only passes that cap a score or hit a limit
/// are walked visit by visit.
pub fn allocate_points(
    stats: &mut StatBlock,
    level: i32,
    config: &StatConfig,
    rng: &mut StdRng,
) -> Allocation {
    let pool = config.pool_for_level(level).max(0);
    let order = config.order.sequence(rng);

    match config.policy {
        AllocationPolicy::Uncapped => {
            let (share, extra) = (pool / 6, pool % 6);
            for (i, &stat) in order.iter().enumerate() {
                let points = if (i as i32) < extra { share + 1 } else { share };
                stats[stat] = stats[stat].saturating_add(points);
            }
            Allocation {
                pool,
                spent: pool,
                skipped: 0,
                forfeited: 0,
            }
        }
        AllocationPolicy::Capped { max_skips } => {
            allocate_capped(stats, &order, pool, ability_ceiling(level), max_skips)
        }
    }
}

fn allocate_capped(
    stats: &mut StatBlock,
    order: &[Stat; 6],
    pool: i32,
    ceiling: i32,
    max_skips: u32,
) -> Allocation {
    let mut remaining = pool;
    let mut skipped = 0u64;

    // Every pass either spends a point or skips, and skips are bounded by
    // the budget, so this terminates.
    'passes: loop {
        apply_stable_passes(stats, ceiling, max_skips, &mut remaining, &mut skipped);
        for &stat in order {
            if remaining == 0 {
                break 'passes;
            }
            if stats[stat] >= ceiling {
                skipped += 1;
                if skipped > u64::from(max_skips)
                    || Stat::ABILITIES.iter().all(|&s| stats[s] >= ceiling)
                {
                    break 'passes;
                }
                continue;
            }
            stats[stat] += 1;
            remaining -= 1;
        }
    }

    if remaining > 0 {
        log::debug!(
            "allocation stopped with {remaining} of {pool} points unspent ({skipped} skips, ceiling {ceiling})"
        );
    }

    Allocation {
        pool,
        spent: pool - remaining,
        skipped: u32::try_from(skipped).unwrap_or(u32::MAX),
        forfeited: remaining,
    }
}

/// Apply, in one step, every full pass through the order in which no score
/// reaches the ceiling, the pool never runs dry and the skip budget holds.
/// Such a pass adds one point to each open score and one skip per capped
/// score, whatever the order.
fn apply_stable_passes(
    stats: &mut StatBlock,
    ceiling: i32,
    max_skips: u32,
    remaining: &mut i32,
    skipped: &mut u64,
) {
    let open: Vec<Stat> = Stat::ABILITIES
        .into_iter()
        .filter(|&s| stats[s] < ceiling)
        .collect();
    let Some(headroom) = open
        .iter()
        .map(|&s| i64::from(ceiling) - i64::from(stats[s]))
        .min()
    else {
        return;
    };
    let open_count = open.len() as i64;
    let closed_count = 6 - open_count;

    let mut passes = (headroom - 1).min((i64::from(*remaining) - 1) / open_count);
    if closed_count > 0 {
        let slack = u64::from(max_skips).saturating_sub(*skipped);
        passes = passes.min(i64::try_from(slack).unwrap_or(i64::MAX) / closed_count);
    }
    let Ok(step) = i32::try_from(passes) else {
        return;
    };
    if step <= 0 {
        return;
    }

    for &s in &open {
        stats[s] += step;
    }
    *remaining -= step * open.len() as i32;
    *skipped += passes as u64 * closed_count as u64;
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn fixed(policy: AllocationPolicy, base_pool: u32) -> StatConfig {
        StatConfig::default()
            .with_base_pool(base_pool)
            .with_policy(policy)
            .with_order(AllocationOrder::Fixed)
    }

    #[test]
    fn ceiling_grows_every_four_levels() {
        assert_eq!(ability_ceiling(1), 18);
        assert_eq!(ability_ceiling(3), 18);
        assert_eq!(ability_ceiling(4), 19);
        assert_eq!(ability_ceiling(20), 23);
    }

    #[test]
    fn fixed_order_is_stable() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(AllocationOrder::Fixed.sequence(&mut rng), Stat::ABILITIES);
    }

    #[test]
    fn shuffled_order_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let mut order = AllocationOrder::Shuffled.sequence(&mut rng);
            order.sort();
            assert_eq!(order, Stat::ABILITIES);
        }
    }

    #[test]
    fn uncapped_fixed_order_round_robin() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut stats = StatBlock::baseline();
        let result = allocate_points(
            &mut stats,
            1,
            &fixed(AllocationPolicy::Uncapped, 22),
            &mut rng,
        );

        // 22 points over six scores: the first four get 4, the last two get 3.
        assert_eq!(stats[Stat::Str], 12);
        assert_eq!(stats[Stat::Int], 12);
        assert_eq!(stats[Stat::Dex], 12);
        assert_eq!(stats[Stat::Wis], 12);
        assert_eq!(stats[Stat::Con], 11);
        assert_eq!(stats[Stat::Cha], 11);
        assert_eq!(result.spent, 22);
        assert_eq!(result.forfeited, 0);
        assert_eq!(stats[Stat::Hp], 3);
    }

    #[test]
    fn uncapped_ignores_ceiling() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut stats = StatBlock::baseline();
        for ability in Stat::ABILITIES {
            stats[ability] = 30;
        }
        let result = allocate_points(
            &mut stats,
            1,
            &fixed(AllocationPolicy::Uncapped, 12),
            &mut rng,
        );
        assert_eq!(result.spent, 12);
        assert_eq!(stats[Stat::Str], 32);
    }

    #[test]
    fn capped_stops_at_ceiling() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut stats = StatBlock::baseline();
        stats[Stat::Str] = 17;
        let result = allocate_points(
            &mut stats,
            1,
            &fixed(AllocationPolicy::Capped { max_skips: 1000 }, 21),
            &mut rng,
        );
        assert_eq!(stats[Stat::Str], 18);
        assert_eq!(result.spent, 21);
        assert!(result.skipped > 0);
        assert_eq!(stats.ability_total(), 8 * 5 + 17 + 21);
    }

    #[test]
    fn capped_terminates_when_everything_is_capped() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut stats = StatBlock::baseline();
        for ability in Stat::ABILITIES {
            stats[ability] = 25;
        }
        let result = allocate_points(
            &mut stats,
            1,
            &fixed(AllocationPolicy::Capped { max_skips: 1000 }, 21),
            &mut rng,
        );
        assert_eq!(result.spent, 0);
        assert_eq!(result.forfeited, 21);
        for ability in Stat::ABILITIES {
            assert_eq!(stats[ability], 25);
        }
    }

    #[test]
    fn capped_forfeits_once_skip_budget_is_spent() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut stats = StatBlock::baseline();
        for ability in &Stat::ABILITIES[..5] {
            stats[*ability] = 18;
        }
        let result = allocate_points(
            &mut stats,
            1,
            &fixed(AllocationPolicy::Capped { max_skips: 3 }, 21),
            &mut rng,
        );
        assert_eq!(result.skipped, 4);
        assert!(result.forfeited > 0);
        assert_eq!(result.spent + result.forfeited, 21);
    }

    #[test]
    fn zero_pool_changes_nothing() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut stats = StatBlock::baseline();
        let result = allocate_points(
            &mut stats,
            1,
            &fixed(AllocationPolicy::Capped { max_skips: 10 }, 0),
            &mut rng,
        );
        assert_eq!(result, Allocation::default());
        assert_eq!(stats, StatBlock::baseline());
    }

    #[test]
    fn uncapped_max_level_is_arithmetic() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut stats = StatBlock::baseline();
        let result = allocate_points(
            &mut stats,
            i32::MAX,
            &fixed(AllocationPolicy::Uncapped, 22),
            &mut rng,
        );

        // i32::MAX = 6 * 357_913_941 + 1, so only str gets the extra point.
        assert_eq!(result.pool, i32::MAX);
        assert_eq!(result.spent, i32::MAX);
        assert_eq!(stats[Stat::Str], 8 + 357_913_942);
        for ability in &Stat::ABILITIES[1..] {
            assert_eq!(stats[*ability], 8 + 357_913_941);
        }
        assert_eq!(stats.ability_total(), 48 + i64::from(i32::MAX));
    }

    #[test]
    fn uncapped_saturates_scores() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut stats = StatBlock::baseline();
        stats[Stat::Str] = i32::MAX - 3;
        allocate_points(
            &mut stats,
            i32::MAX,
            &fixed(AllocationPolicy::Uncapped, u32::MAX),
            &mut rng,
        );
        assert_eq!(stats[Stat::Str], i32::MAX);
    }

    #[test]
    fn capped_max_level_spends_whole_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut stats = StatBlock::baseline();
        let result = allocate_points(&mut stats, i32::MAX, &StatConfig::capped(), &mut rng);
        assert_eq!(result.pool, i32::MAX);
        assert_eq!(result.spent, i32::MAX);
        assert_eq!(result.skipped, 0);
        for ability in Stat::ABILITIES {
            assert!(stats[ability] <= ability_ceiling(i32::MAX));
        }
    }

    #[test]
    fn capped_huge_pool_forfeits_after_capping() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut stats = StatBlock::baseline();
        let result = allocate_points(
            &mut stats,
            1,
            &fixed(AllocationPolicy::Capped { max_skips: 1000 }, u32::MAX),
            &mut rng,
        );
        assert_eq!(result.spent, 60);
        assert_eq!(result.forfeited, i32::MAX - 60);
        assert_eq!(result.skipped, 1);
        for ability in Stat::ABILITIES {
            assert_eq!(stats[ability], 18);
        }
    }

    #[test]
    fn capped_unlimited_skips_with_one_open_score() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut stats = StatBlock::baseline();
        for ability in &Stat::ABILITIES[..5] {
            stats[*ability] = 18;
        }
        let result = allocate_points(
            &mut stats,
            1,
            &fixed(AllocationPolicy::Capped { max_skips: u32::MAX }, u32::MAX),
            &mut rng,
        );
        assert_eq!(stats[Stat::Cha], 18);
        assert_eq!(result.spent, 10);
        assert_eq!(result.skipped, 51);
        assert_eq!(result.forfeited, i32::MAX - 10);
    }

    /// One visit at a time, exactly as the allocation rules read.
    fn capped_by_visit(
        stats: &mut StatBlock,
        order: &[Stat; 6],
        pool: i32,
        ceiling: i32,
        max_skips: u32,
    ) -> Allocation {
        let mut remaining = pool;
        let mut skipped = 0u32;
        for &stat in order.iter().cycle() {
            if remaining == 0 {
                break;
            }
            if stats[stat] >= ceiling {
                skipped += 1;
                if skipped > max_skips || Stat::ABILITIES.iter().all(|&s| stats[s] >= ceiling) {
                    break;
                }
                continue;
            }
            stats[stat] += 1;
            remaining -= 1;
        }
        Allocation {
            pool,
            spent: pool - remaining,
            skipped,
            forfeited: remaining,
        }
    }

    proptest! {
        #[test]
        fn capped_matches_visit_by_visit(
            seed in any::<u64>(),
            level in 1i32..=12,
            base in 0u32..300,
            max_skips in 0u32..60,
            start in proptest::array::uniform6(8i32..=21),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let cfg = StatConfig::default()
                .with_base_pool(base)
                .with_policy(AllocationPolicy::Capped { max_skips });
            let mut fast = StatBlock::baseline();
            for (ability, value) in Stat::ABILITIES.into_iter().zip(start) {
                fast[ability] = value;
            }
            let mut slow = fast;

            let order = cfg.order.sequence(&mut rng.clone());
            let result = allocate_points(&mut fast, level, &cfg, &mut rng);
            let expected = capped_by_visit(
                &mut slow,
                &order,
                cfg.pool_for_level(level),
                ability_ceiling(level),
                max_skips,
            );
            prop_assert_eq!(result, expected);
            prop_assert_eq!(fast, slow);
        }

        #[test]
        fn uncapped_spends_exact_pool(seed in any::<u64>(), level in 1i32..=40, base in 0u32..60) {
            let mut rng = StdRng::seed_from_u64(seed);
            let cfg = StatConfig::default().with_base_pool(base);
            let mut stats = StatBlock::baseline();
            let before = stats.ability_total();
            let result = allocate_points(&mut stats, level, &cfg, &mut rng);
            prop_assert_eq!(stats.ability_total() - before, i64::from(cfg.pool_for_level(level)));
            prop_assert_eq!(result.forfeited, 0);
        }

        #[test]
        fn capped_never_exceeds_ceiling(
            seed in any::<u64>(),
            level in 1i32..=40,
            base in 0u32..200,
            start in proptest::array::uniform6(8i32..=18),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut stats = StatBlock::baseline();
            for (ability, value) in Stat::ABILITIES.into_iter().zip(start) {
                stats[ability] = value;
            }
            let cfg = StatConfig::capped().with_base_pool(base);
            let result = allocate_points(&mut stats, level, &cfg, &mut rng);
            for ability in Stat::ABILITIES {
                prop_assert!(stats[ability] <= ability_ceiling(level));
            }
            prop_assert_eq!(result.spent + result.forfeited, cfg.pool_for_level(level));
        }
    }
}
