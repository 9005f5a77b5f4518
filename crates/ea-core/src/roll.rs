//! Percentile roll sources.
//!
//! Mission resolution draws from a [`RollSource`] instead of a global
//! generator, so a game can be seeded for reproducible runs and tests can
//! script exact draws.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies percentile draws in the range `0..100`.
pub trait RollSource {
    /// Draw the next value in `0..100`.
    fn roll_percentile(&mut self) -> u32;
}

/// Uniform percentile rolls backed by a standard RNG.
#[derive(Debug, Clone)]
pub struct SeededRolls {
    rng: StdRng,
}

impl SeededRolls {
    /// Create a reproducible roll source from a seed.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a roll source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RollSource for SeededRolls {
    fn roll_percentile(&mut self) -> u32 {
        self.rng.random_range(0..100)
    }
}

/// Replays a fixed sequence of rolls, cycling when it runs out.
///
/// Every value must be below 100; debug builds panic otherwise and release
/// builds clamp to 99. An empty sequence always rolls 99.
#[derive(Debug, Clone)]
pub struct ScriptedRolls {
    values: Vec<u32>,
    next: usize,
}

impl ScriptedRolls {
    /// Create a scripted source from the given values.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values
                .into_iter()
                .map(|v| {
                    debug_assert!(v < 100, "scripted roll {v} is outside 0..100");
                    v.min(99)
                })
                .collect(),
            next: 0,
        }
    }
}

impl RollSource for ScriptedRolls {
    fn roll_percentile(&mut self) -> u32 {
        if self.values.is_empty() {
            return 99;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}
