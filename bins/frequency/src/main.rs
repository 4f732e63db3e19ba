use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;

use lotto649::{
    draw::{TicketGenerator, Variant},
    random::{parse_hex_seed, Xorshift128Plus},
    ticket::{MAX_NUMBER, NUMBERS_PER_TICKET},
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of tickets to draw.
    #[arg(short)]
    n: usize,

    /// Count bonus numbers of duplicate-free draws instead of main numbers.
    #[arg(long)]
    bonus: bool,

    #[arg(long, value_parser = parse_hex_seed)]
    prng_seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let rng = match cli.prng_seed {
        Some(seed) => Xorshift128Plus::seed_from_u64(seed),
        None => Xorshift128Plus::from_entropy_or_clock(),
    };
    let variant = if cli.bonus {
        Variant::Unique
    } else {
        Variant::Basic
    };
    let mut generator = TicketGenerator::new(rng, variant);

    let pb = ProgressBar::new(cli.n as u64);
    pb.set_style(
        ProgressStyle::with_template("{msg}: {bar:40.cyan/blue} {pos:>7}/{len:7}")?
            .progress_chars("##-"),
    );
    pb.set_message("draw");

    let mut counts = vec![0usize; MAX_NUMBER as usize + 1];
    for _ in 0..cli.n {
        let ticket = generator.next_ticket()?;
        match ticket.bonus() {
            Some(bonus) if cli.bonus => counts[bonus as usize] += 1,
            _ => {
                for &x in ticket.numbers() {
                    counts[x as usize] += 1;
                }
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("done");

    let per_ticket = if cli.bonus { 1 } else { NUMBERS_PER_TICKET };
    let expected = (cli.n * per_ticket) as f64 / MAX_NUMBER as f64;
    for (x, count) in counts.iter().enumerate().skip(1) {
        println!(
            "{:02} {} {:+.4}",
            x,
            count,
            (*count as f64 - expected) / expected.max(1.0)
        );
    }

    Ok(())
}
