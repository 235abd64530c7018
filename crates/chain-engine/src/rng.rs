//! Seeded pseudo-random stream for reproducible rounds.
//!
//! A seed string is folded into a 32-bit hash (`h = h * 31 + unit` over its
//! UTF-16 units), which then drives a Lehmer generator with multiplier
//! 16807 and modulus 2^31 - 1. Not suitable for anything security related.

use rand::Rng;

const MODULUS: u64 = 2_147_483_647;
const MULTIPLIER: u64 = 16_807;

/// Length of generated seeds.
const SEED_LEN: usize = 13;
const SEED_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Deterministic random stream derived from a seed string.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Creates a stream from a seed string. Equal seeds give equal streams.
    pub fn new(seed: &str) -> Self {
        let hash = seed
            .encode_utf16()
            .fold(0i32, |h, unit| h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit)));
        // The generator needs a state in [1, MODULUS - 1].
        let state = i64::from(hash).rem_euclid(MODULUS as i64 - 1) as u64 + 1;
        SeededRng { state }
    }

    /// Returns the next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER) % MODULUS;
        (self.state - 1) as f64 / (MODULUS - 1) as f64
    }

    /// Returns an integer in the inclusive range `[min, max]`.
    ///
    /// Swapped bounds are accepted.
    pub fn int_range(&mut self, min: i32, max: i32) -> i32 {
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        let span = f64::from(max - min + 1);
        let value = (self.next_f64() * span).floor() as i32 + min;
        value.clamp(min, max)
    }

    /// Returns an index in `[0, len)`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        let value = (self.next_f64() * len as f64).floor() as usize;
        value.min(len.saturating_sub(1))
    }
}

/// Draws a fresh seed string for an unseeded round.
pub fn random_seed() -> String {
    let mut rng = rand::thread_rng();
    (0..SEED_LEN)
        .map(|_| SEED_ALPHABET[rng.gen_range(0..SEED_ALPHABET.len())] as char)
        .collect()
}

/// Returns the given seed, or a fresh one when it is absent or empty.
pub fn seed_or_random(seed: Option<&str>) -> String {
    match seed {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => random_seed(),
    }
}
