use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MULTIPLIER_A: i64 = 1103515245;
const INCREMENT_C: i64 = 12345;
const DEFAULT_SEED: i64 = 3819201;

/// A source of randomness owned by a single search, rollout or player.
///
/// Every consumer receives its own generator, so nothing random is shared between concurrent
/// games.
pub trait RandomGenerator {
    fn next(&mut self) -> i32;
    fn next_range(&mut self, from: i32, to: i32) -> i32;

    /// Returns a uniformly chosen index in `0..len`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize {
        self.next_range(0, len as i32) as usize
    }

    /// Picks a uniformly random element, or `None` for an empty slice.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_index(items.len()))
    }
}

impl<K: RandomGenerator + ?Sized> RandomGenerator for &mut K {
    fn next(&mut self) -> i32 {
        (**self).next()
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        (**self).next_range(from, to)
    }
}

/// Generator backed by `rand`'s `StdRng`.
pub struct StandardRandomGenerator {
    rng: StdRng,
}

impl StandardRandomGenerator {
    /// Creates a generator with a fixed seed, for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StandardRandomGenerator {
    /// Seeds from the operating system.
    fn default() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RandomGenerator for StandardRandomGenerator {
    fn next(&mut self) -> i32 {
        self.rng.random()
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        self.rng.random_range(from..to)
    }
}

/// Deterministic linear congruential generator, handy for tests that pin exact results.
pub struct CustomNumberGenerator {
    seed: i64,
}

impl Default for CustomNumberGenerator {
    fn default() -> Self {
        CustomNumberGenerator::new(DEFAULT_SEED)
    }
}

impl RandomGenerator for CustomNumberGenerator {
    fn next(&mut self) -> i32 {
        self.seed = (self.seed * MULTIPLIER_A + INCREMENT_C) % (i32::MAX as i64);
        self.seed as i32
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        (self.next() % (to - from)).abs() + from
    }
}

impl CustomNumberGenerator {
    /// The seed is reduced into the generator's modulus, so any `i64` is accepted.
    pub const fn new(seed: i64) -> Self {
        Self {
            seed: seed % (i32::MAX as i64),
        }
    }
}
