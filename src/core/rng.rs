//! Deterministic random number generation and target selection.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence of targets
//! - **Pluggable**: The engine draws targets through the `TargetPicker` trait,
//!   so tests and replays can inject exact targets with `FixedTargets`
//!
//! ```
//! use number_guess::core::{GameRng, GuessRange, TargetPicker};
//!
//! let range = GuessRange::new(1, 100);
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! // Same seed, same targets
//! assert_eq!(rng1.pick(range), rng2.pick(range));
//! ```

use std::collections::VecDeque;
use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::config::GuessRange;

/// Source of round targets.
///
/// Implementations must return a value inside `range`. The engine clamps
/// anything outside and logs a warning, but a well-behaved picker never
/// relies on that.
pub trait TargetPicker {
    /// Pick a target uniformly (or by any rule the picker defines) from `range`.
    fn pick(&mut self, range: GuessRange) -> i32;
}

/// Deterministic RNG for target selection.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    ///
    /// The chosen seed is kept so a session can be reproduced from logs.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().gen::<u64>();
        Self::new(seed)
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random integer in the given inclusive range.
    ///
    /// Every integer in the range is equally likely.
    pub fn gen_range_inclusive(&mut self, range: RangeInclusive<i32>) -> i32 {
        self.inner.gen_range(range)
    }
}

impl TargetPicker for GameRng {
    fn pick(&mut self, range: GuessRange) -> i32 {
        self.gen_range_inclusive(range.min()..=range.max())
    }
}

/// Predetermined targets, handed out in order.
///
/// Once the queue is down to its last value that value repeats forever,
/// so a single-element picker pins every round to the same target.
#[derive(Clone, Debug)]
pub struct FixedTargets {
    queue: VecDeque<i32>,
}

impl FixedTargets {
    /// Create a picker that yields `targets` in order.
    ///
    /// # Panics
    ///
    /// Panics if `targets` is empty.
    #[must_use]
    pub fn new(targets: impl IntoIterator<Item = i32>) -> Self {
        let queue: VecDeque<i32> = targets.into_iter().collect();
        assert!(!queue.is_empty(), "FixedTargets needs at least one target");
        Self { queue }
    }

    /// Create a picker that always yields `target`.
    #[must_use]
    pub fn always(target: i32) -> Self {
        Self::new([target])
    }

    /// Targets not yet handed out (the last one repeats).
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl TargetPicker for FixedTargets {
    fn pick(&mut self, _range: GuessRange) -> i32 {
        if self.queue.len() > 1 {
            // Non-empty by construction
            self.queue.pop_front().unwrap_or_default()
        } else {
            self.queue.front().copied().unwrap_or_default()
        }
    }
}
