//! CLI frontend for the NPC generator.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use commands::generate::StatFlags;

#[derive(Parser)]
#[command(
    name = "npcgen",
    about = "Generate tabletop NPCs from random tables",
    version
)]
struct Cli {
    /// Character level (default 1; anything that is not a number also means 1)
    #[arg(allow_negative_numbers = true)]
    level: Option<String>,

    /// RNG seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of NPCs to generate
    #[arg(short = 'n', long, default_value = "1")]
    count: usize,

    /// Directory of .txt tables that override the builtin ones
    #[arg(short, long)]
    tables: Option<PathBuf>,

    /// Ability score allocation policy
    #[arg(long, value_enum, default_value_t = Policy::Uncapped)]
    policy: Policy,

    /// Base pool size (default: 22 uncapped, 21 capped)
    #[arg(long)]
    pool: Option<u32>,

    /// Skips allowed under the capped policy before leftover points are dropped
    #[arg(long, default_value = "1000")]
    max_skips: u32,

    /// Hand out pool points in str/int/dex/wis/con/cha order instead of shuffling
    #[arg(long)]
    fixed_order: bool,

    /// Print NPCs as JSON
    #[arg(long)]
    json: bool,

    /// List the available tables and exit
    #[arg(long)]
    list_tables: bool,
}

/// Allocation policy as exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Policy {
    /// No ceiling on ability scores
    Uncapped,
    /// Ability scores stop at 18 + level / 4
    Capped,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = if cli.list_tables {
        commands::tables::run(cli.tables.as_deref())
    } else {
        let level = commands::parse_level(cli.level.as_deref());
        let flags = StatFlags {
            capped: cli.policy == Policy::Capped,
            pool: cli.pool,
            max_skips: cli.max_skips,
            fixed_order: cli.fixed_order,
        };
        commands::generate::run(
            level,
            cli.count,
            cli.seed,
            cli.tables.as_deref(),
            &flags,
            cli.json,
        )
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
