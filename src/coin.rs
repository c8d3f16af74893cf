// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Random bit sources for level promotion.
//!
//! After every insertion the list flips a coin until it comes up tails,
//! promoting the new element one level per heads. Any type implementing
//! [`Coin`] can drive this:
//!
//! - [`FairCoin`]: the default, a xorshift64* generator seeded from the OS or
//!   from a fixed seed.
//! - [`RngCoin`]: adapts any `rand_core::RngCore`.
//! - [`Scripted`]: replays a fixed sequence, then always answers tails.

use rand_core::{OsRng, RngCore};

/// Fallback state for a zero seed; xorshift never leaves the all-zero state.
const ZERO_SEED_STATE: u64 = 0x9E37_79B9_7F4A_7C15;

/// A source of fair coin flips.
pub trait Coin {
    /// Returns `true` (heads) with probability one half.
    fn flip(&mut self) -> bool;
}

impl<C: Coin + ?Sized> Coin for &mut C {
    fn flip(&mut self) -> bool {
        (**self).flip()
    }
}

impl<C: Coin + ?Sized> Coin for Box<C> {
    fn flip(&mut self) -> bool {
        (**self).flip()
    }
}

/// Xorshift64* coin that hands out one bit of each 64-bit output at a time.
#[derive(Debug, Clone)]
pub struct FairCoin {
    state: u64,
    bits: u64,
    remaining: u32,
}

impl FairCoin {
    /// Seed from the operating system.
    pub fn new() -> Self {
        Self::seeded(OsRng.next_u64())
    }

    /// Deterministic coin. Equal seeds produce equal flip sequences.
    pub fn seeded(seed: u64) -> Self {
        let state = if seed == 0 { ZERO_SEED_STATE } else { seed };
        FairCoin {
            state,
            bits: 0,
            remaining: 0,
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }
}

impl Default for FairCoin {
    fn default() -> Self {
        Self::new()
    }
}

impl Coin for FairCoin {
    fn flip(&mut self) -> bool {
        if self.remaining == 0 {
            self.bits = self.next_u64();
            self.remaining = u64::BITS;
        }
        let heads = self.bits & 1 == 1;
        self.bits >>= 1;
        self.remaining -= 1;
        heads
    }
}

/// Adapter turning any `RngCore` into a coin.
#[derive(Debug, Clone)]
pub struct RngCoin<R> {
    rng: R,
}

impl<R: RngCore> RngCoin<R> {
    pub fn new(rng: R) -> Self {
        RngCoin { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> Coin for RngCoin<R> {
    fn flip(&mut self) -> bool {
        self.rng.next_u32() & 1 == 1
    }
}

/// Replays a fixed sequence of flips. Once the sequence runs out every flip
/// is tails, so promotion always terminates.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    flips: Vec<bool>,
    pos: usize,
}

impl Scripted {
    pub fn new(flips: impl IntoIterator<Item = bool>) -> Self {
        Scripted {
            flips: flips.into_iter().collect(),
            pos: 0,
        }
    }

    /// A coin that never promotes; the list stays a single level.
    pub fn tails() -> Self {
        Self::default()
    }

    /// Flips consumed so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }
}

impl Coin for Scripted {
    fn flip(&mut self) -> bool {
        let heads = self.flips.get(self.pos).copied().unwrap_or(false);
        self.pos += 1;
        heads
    }
}
