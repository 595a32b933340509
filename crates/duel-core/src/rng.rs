//! Seeded RNG for procedural track generation.
//!
//! The decision core never draws random numbers.  Randomness enters only
//! through the track generator, so one `RaceConfig::seed` reproduces the
//! whole race.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded generator handed to `OvalGenerator::generate`.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform sample from `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
