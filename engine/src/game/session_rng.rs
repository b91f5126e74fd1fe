use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of random cell coordinates for the opponent's fallback move.
pub trait CoordinateSource {
    /// Returns a value in `0..bound`. `bound` is always at least 1.
    fn next_coordinate(&mut self, bound: usize) -> usize;
}

pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}

impl CoordinateSource for SessionRng {
    fn next_coordinate(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}
