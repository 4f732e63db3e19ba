//! Draw tickets out of a shuffled pool of numbers.
//!
//! A draw is a Fisher-Yates shuffle of all the numbers from [`MIN_NUMBER`] to
//! [`MAX_NUMBER`], of which only a prefix is kept:
//! - the first [`NUMBERS_PER_TICKET`] elements are the main numbers
//! - the next element, when asked for, is the bonus number
//!
//! All the numbers in the pool are distinct, so the bonus can never be one of
//! the main numbers.
use rand::RngCore;
use tracing::trace;

use crate::ticket::{Ticket, MAX_NUMBER, MIN_NUMBER, NUMBERS_PER_TICKET};

const POOL_SIZE: usize = (MAX_NUMBER - MIN_NUMBER + 1) as usize;

/// Every number that can be drawn, exactly once and in ascending order.
pub fn pool() -> [u8; POOL_SIZE] {
    let mut pool = [0u8; POOL_SIZE];
    for (x, n) in pool.iter_mut().zip(MIN_NUMBER..=MAX_NUMBER) {
        *x = n;
    }
    pool
}

/// Shuffles `items` in place.
///
/// `i` goes from the last index down to `1` and is swapped with a random index
/// in `0..=i`, taken as a raw 64-bit value modulo `i + 1`.
pub fn shuffle<T>(items: &mut [T], rng: &mut impl RngCore) {
    for i in (1..items.len()).rev() {
        let j = (rng.next_u64() % (i as u64 + 1)) as usize;
        items.swap(i, j);
    }
}

/// Draws a single ticket, with a bonus number if `with_bonus` is set.
pub fn draw(rng: &mut impl RngCore, with_bonus: bool) -> Ticket {
    let mut pool = pool();
    shuffle(&mut pool, rng);

    let mut numbers = [0u8; NUMBERS_PER_TICKET];
    numbers.copy_from_slice(&pool[..NUMBERS_PER_TICKET]);
    numbers.sort_unstable();

    let bonus = if with_bonus {
        Some(pool[NUMBERS_PER_TICKET])
    } else {
        None
    };

    trace!("drew {:?} with bonus {:?}", numbers, bonus);

    Ticket { numbers, bonus }
}
