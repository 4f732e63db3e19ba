//! A small seedable source of 64-bit values and the way it gets seeded.
//!
//! [`Xorshift128Plus`] is not cryptographically secure, it only has to be fast,
//! uniform enough and reproducible from a single 64-bit word.
use std::time::{SystemTime, UNIX_EPOCH};

use rand::{rngs::OsRng, RngCore, SeedableRng};
use tracing::{debug, warn};

/// `floor(2^64 / phi)`, used to derive the second state word from the first.
const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// Xorshift128+ generator, period `2^128 - 1`.
///
/// The state must never be all zeros, which every constructor makes sure of.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Xorshift128Plus {
    state: [u64; 2],
}

impl Xorshift128Plus {
    /// Seeds the generator once for a whole run.
    ///
    /// Entropy comes from the OS when possible, otherwise from the wall clock
    /// mixed with a stack address.
    pub fn from_entropy_or_clock() -> Self {
        Self::seed_from_u64(entropy())
    }
}

impl RngCore for Xorshift128Plus {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state[0];
        let y = self.state[1];
        self.state[0] = y;
        x ^= x << 23;
        self.state[1] = x ^ y ^ (x >> 17) ^ (y >> 26);
        self.state[1].wrapping_add(y)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Xorshift128Plus {
    /// two little-endian state words
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut state = [0u64; 2];
        for (word, chunk) in state.iter_mut().zip(seed.chunks_exact(8)) {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            *word = u64::from_le_bytes(bytes);
        }
        if state == [0, 0] {
            state[1] = GOLDEN_GAMMA;
        }

        Self { state }
    }

    fn seed_from_u64(state: u64) -> Self {
        Self {
            state: [state, state ^ GOLDEN_GAMMA],
        }
    }
}

/// Gets a single word of entropy, falling back to [`clock_entropy`] when the OS
/// source is unavailable.
pub fn entropy() -> u64 {
    let mut bytes = [0u8; 8];
    match OsRng.try_fill_bytes(&mut bytes) {
        Ok(()) => {
            debug!("seeding from the OS entropy source");
            u64::from_le_bytes(bytes)
        }
        Err(e) => {
            warn!("OS entropy source unavailable ({}), seeding from the clock", e);
            clock_entropy()
        }
    }
}

/// Parses a seed given as 16 hex characters, i.e. 8 little-endian bytes.
pub fn parse_hex_seed(s: &str) -> Result<u64, String> {
    if s.len() != 16 {
        return Err("Input string must be exactly 16 characters long".to_string());
    }

    match hex::decode(s) {
        // 16 hex characters always decode to exactly 8 bytes
        Ok(bytes) => {
            let mut seed = [0u8; 8];
            seed.copy_from_slice(&bytes);
            Ok(u64::from_le_bytes(seed))
        }
        Err(e) => Err(format!("Failed to decode hex string: {}", e)),
    }
}

/// Current Unix time in seconds XOR the address of a stack variable.
///
/// With ASLR the address changes from one launch to the next, so two runs in
/// the same second still get different seeds.
pub fn clock_entropy() -> u64 {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let marker = 0u8;
    seconds ^ (&marker as *const u8 as usize as u64)
}
