use std::{io, process::exit};

use anyhow::{anyhow, Result};
use clap::Parser;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lotto649::{
    draw::{parse_count, run, Variant, DEFAULT_COUNT},
    random::{parse_hex_seed, Xorshift128Plus},
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of tickets to draw.
    #[arg(default_value_t = DEFAULT_COUNT.to_string(), allow_negative_numbers = true)]
    count: String,

    /// Never draw the same combination twice in a run and add a bonus number
    /// to each ticket.
    #[arg(long)]
    unique: bool,

    /// Seed the draws with 16 hex characters instead of fresh entropy.
    #[arg(long, value_parser = parse_hex_seed)]
    prng_seed: Option<u64>,
}

fn try_main(cli: Cli) -> Result<()> {
    let count = parse_count(&cli.count)?;
    let variant = if cli.unique {
        Variant::Unique
    } else {
        Variant::Basic
    };

    let rng = match cli.prng_seed {
        Some(seed) => {
            info!("seeding from `{:016x}`", seed);
            Xorshift128Plus::seed_from_u64(seed)
        }
        None => Xorshift128Plus::from_entropy_or_clock(),
    };

    run(count, variant, rng, &mut io::stdout().lock())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .map_err(|e| anyhow!("cannot init logger: {}", e))
        .and_then(|()| try_main(cli))
    {
        eprintln!("error: {:#}", e);
        exit(1);
    }
}
