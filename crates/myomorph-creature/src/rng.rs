//! Random source abstraction for organism generation
//!
//! Every constructor takes the random source as an argument instead of
//! reaching for a process-wide generator, so that:
//! - tests and the CLI's `--seed` flag can use a seeded `Xoshiro256StarStar`
//! - any other `rand::Rng` (e.g. `thread_rng()`) works unchanged

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

/// Random number generator trait used by anchors, muscles and populations
pub trait CreatureRng {
    /// Generate random f32 in [0.0, 1.0)
    fn gen_f32(&mut self) -> f32;

    /// Generate random index in [0, len)
    ///
    /// `len` must be non-zero.
    fn gen_index(&mut self, len: usize) -> usize;

    /// Generate random integer in [low, high] (both inclusive)
    fn gen_inclusive(&mut self, low: usize, high: usize) -> usize {
        debug_assert!(low <= high, "empty range {}..={}", low, high);
        low + self.gen_index(high - low + 1)
    }
}

// Blanket implementation for any type implementing rand::Rng
impl<T: ?Sized + rand::Rng> CreatureRng for T {
    fn gen_f32(&mut self) -> f32 {
        rand::Rng::r#gen(self)
    }

    fn gen_index(&mut self, len: usize) -> usize {
        rand::Rng::gen_range(self, 0..len)
    }
}

/// Seeded generator for reproducible populations
pub fn seeded(seed: u64) -> Xoshiro256StarStar {
    Xoshiro256StarStar::seed_from_u64(seed)
}
