use std::path::Path;

use ng_mechanics::{AllocationOrder, AllocationPolicy, StatConfig};
use ng_npc::{Character, GeneratorConfig, NpcGenerator};

/// Stat engine options collected from the command line.
pub struct StatFlags {
    pub capped: bool,
    pub pool: Option<u32>,
    pub max_skips: u32,
    pub fixed_order: bool,
}

impl StatFlags {
    fn to_config(&self) -> StatConfig {
        let mut config = if self.capped {
            StatConfig::capped().with_policy(AllocationPolicy::Capped {
                max_skips: self.max_skips,
            })
        } else {
            StatConfig::default()
        };
        if let Some(pool) = self.pool {
            config = config.with_base_pool(pool);
        }
        if self.fixed_order {
            config = config.with_order(AllocationOrder::Fixed);
        }
        config
    }
}

pub fn run(
    level: i32,
    count: usize,
    seed: Option<u64>,
    tables: Option<&Path>,
    flags: &StatFlags,
    json: bool,
) -> Result<(), String> {
    let tables = super::load_tables(tables)?;

    let mut config = GeneratorConfig::default().with_stats(flags.to_config());
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let mut generator = NpcGenerator::new(tables, config);
    let npcs = if count == 1 {
        vec![generator.generate(level).map_err(|e| e.to_string())?]
    } else {
        generator
            .generate_batch(count, level)
            .map_err(|e| e.to_string())?
    };

    if json {
        print_json(&npcs)
    } else {
        print_text(&npcs);
        Ok(())
    }
}

fn print_text(npcs: &[Character]) {
    let rendered: Vec<String> = npcs.iter().map(Character::to_string).collect();
    println!("{}", rendered.join("\n\n"));
}

fn print_json(npcs: &[Character]) -> Result<(), String> {
    let json = match npcs {
        [single] => serde_json::to_string_pretty(single),
        _ => serde_json::to_string_pretty(npcs),
    }
    .map_err(|e| format!("JSON serialization failed: {e}"))?;
    println!("{json}");
    Ok(())
}
