//! Lotto 6/49: draw random tickets of six numbers out of forty-nine.
//!
//! # Example
//! ```
//! use rand::SeedableRng;
//! use lotto649::{draw::{TicketGenerator, Variant}, random::Xorshift128Plus};
//!
//! let rng = Xorshift128Plus::seed_from_u64(649);
//! let mut generator = TicketGenerator::new(rng, Variant::Unique);
//!
//! let ticket = generator.next_ticket().unwrap();
//! assert!(ticket.numbers().windows(2).all(|w| w[0] < w[1]));
//! assert!(!ticket.numbers().contains(&ticket.bonus().unwrap()));
//! ```
pub mod draw;
pub mod error;
pub mod random;
pub mod sampler;
pub mod ticket;
