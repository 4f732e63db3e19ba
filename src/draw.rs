//! Draw a whole run of tickets and print them.
//!
//! There are two ways to draw:
//! - [`Variant::Basic`]: independent draws without a bonus number
//! - [`Variant::Unique`]: draws with a bonus number, where a combination that
//!   has already been drawn in the same run is thrown away and drawn again
use std::{collections::HashSet, io::Write, num::NonZeroUsize};

use anyhow::Result;
use rand::RngCore;
use tracing::{debug, info};

use crate::{error::LottoError, sampler, ticket::Ticket};

/// Number of tickets drawn when none is asked for.
pub const DEFAULT_COUNT: usize = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Basic,
    Unique,
}

impl Variant {
    fn with_bonus(self) -> bool {
        matches!(self, Variant::Unique)
    }
}

/// Parses a ticket count, which has to be a strictly positive integer.
pub fn parse_count(arg: &str) -> Result<NonZeroUsize, LottoError> {
    arg.parse::<NonZeroUsize>()
        .map_err(|_| LottoError::InvalidArgument(arg.to_string()))
}

/// Draws tickets one after the other from its own source of randomness.
pub struct TicketGenerator<R: RngCore> {
    rng: R,
    variant: Variant,
    seen: HashSet<u64>,
    redraws: usize,
}

impl<R: RngCore> TicketGenerator<R> {
    pub fn new(rng: R, variant: Variant) -> Self {
        Self {
            rng,
            variant,
            seen: HashSet::new(),
            redraws: 0,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// How many draws have been thrown away because they had already come up.
    pub fn redraws(&self) -> usize {
        self.redraws
    }

    /// Draws the next ticket.
    ///
    /// With [`Variant::Unique`], this loops until a new combination comes up.
    /// There is no bound on the number of tries but a repeat is very unlikely
    /// with about 14 million combinations.
    pub fn next_ticket(&mut self) -> Result<Ticket, LottoError> {
        let with_bonus = self.variant.with_bonus();

        if self.variant == Variant::Basic {
            return Ok(sampler::draw(&mut self.rng, with_bonus));
        }

        loop {
            let ticket = sampler::draw(&mut self.rng, with_bonus);
            let fingerprint = ticket.fingerprint();

            if self.seen.contains(&fingerprint) {
                debug!("{} has already been drawn, drawing again", ticket);
                self.redraws += 1;
                continue;
            }

            self.seen
                .try_reserve(1)
                .map_err(|_| LottoError::ResourceExhaustion(self.seen.len()))?;
            self.seen.insert(fingerprint);

            return Ok(ticket);
        }
    }
}

impl<R: RngCore> Iterator for TicketGenerator<R> {
    type Item = Result<Ticket, LottoError>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_ticket())
    }
}

/// Formats the `index`-th ticket of a run, starting at `1`.
///
/// # Example
/// ```text
/// 06 09 14 25 32 45
/// Ticket  1: 06 09 14 25 32 45   Bonus 17
/// ```
pub fn format_ticket(index: usize, ticket: &Ticket, variant: Variant) -> String {
    match (variant, ticket.bonus()) {
        (Variant::Unique, Some(bonus)) => {
            format!("Ticket {:>2}: {}   Bonus {:02}", index, ticket, bonus)
        }
        (Variant::Unique, None) => format!("Ticket {:>2}: {}", index, ticket),
        (Variant::Basic, _) => ticket.to_string(),
    }
}

/// Draws `count` tickets and writes them to `out`, one per line.
pub fn run<R: RngCore>(
    count: NonZeroUsize,
    variant: Variant,
    rng: R,
    out: &mut impl Write,
) -> Result<()> {
    info!("drawing {} tickets ({:?})", count, variant);

    let mut generator = TicketGenerator::new(rng, variant);
    for index in 1..=count.get() {
        let ticket = generator.next_ticket()?;
        writeln!(out, "{}", format_ticket(index, &ticket, variant))?;
    }
    out.flush()?;

    info!("done, {} duplicate draws were thrown away", generator.redraws());

    Ok(())
}
