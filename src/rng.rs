//! Injectable random source.
//!
//! All randomness in the engine flows through [`RandomSource`] so that beat
//! and drum sequences are reproducible: seed a [`PcgSource`] in tests, seed
//! from entropy in production. The engine itself never touches a global RNG.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// A source of uniformly distributed integers below an exclusive bound.
///
/// This is the only randomness contract the synthesis core consumes. It maps
/// directly onto the "1 in N" probability branches of the sequencer.
pub trait RandomSource: Send {
    /// Draw a uniformly distributed integer in `0..bound`.
    ///
    /// `bound` must be nonzero.
    fn draw_below(&mut self, bound: u32) -> u32;

    /// A "1 in n" event: true when the draw lands on zero.
    fn one_in(&mut self, n: u32) -> bool {
        self.draw_below(n) == 0
    }
}

/// PCG32-backed source: small state, fast, deterministic per seed.
pub struct PcgSource(Pcg32);

impl PcgSource {
    /// Create a source with a fixed seed. Same seed, same track.
    pub fn seeded(seed: u64) -> Self {
        Self(Pcg32::seed_from_u64(seed))
    }

    /// Create a source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self(Pcg32::from_entropy())
    }
}

impl RandomSource for PcgSource {
    fn draw_below(&mut self, bound: u32) -> u32 {
        self.0.gen_range(0..bound)
    }
}

/// Source that always draws zero, so every probability branch fires.
///
/// Useful for exercising worst-case sequencer paths deterministically.
pub struct ZeroSource;

impl RandomSource for ZeroSource {
    fn draw_below(&mut self, _bound: u32) -> u32 {
        0
    }
}
