//! Game configuration types.
//!
//! - `GuessRange`: The inclusive range targets are drawn from and guesses
//!   must fall into
//! - `GameConfig`: Range plus the per-round attempt budget
//!
//! Defaults match the classic game: numbers 1-100, ten attempts.

use serde::{Deserialize, Serialize};
use std::env;

use super::error::ConfigError;

/// Default lower bound of the guess range.
pub const DEFAULT_MIN_RANGE: i32 = 1;
/// Default upper bound of the guess range.
pub const DEFAULT_MAX_RANGE: i32 = 100;
/// Default attempt budget per round.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Inclusive integer range `[min, max]`.
///
/// Constructed unchecked; `GameConfig::validate` rejects `min > max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuessRange {
    min: i32,
    max: i32,
}

impl GuessRange {
    /// Create a new range.
    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Lower bound (inclusive).
    #[must_use]
    pub const fn min(self) -> i32 {
        self.min
    }

    /// Upper bound (inclusive).
    #[must_use]
    pub const fn max(self) -> i32 {
        self.max
    }

    /// Check whether `value` lies in the range.
    ///
    /// Takes `i64` so that guesses outside `i32` are simply out of range.
    #[must_use]
    pub fn contains(self, value: i64) -> bool {
        i64::from(self.min) <= value && value <= i64::from(self.max)
    }

    /// Clamp `value` into the range.
    #[must_use]
    pub fn clamp(self, value: i32) -> i32 {
        value.clamp(self.min, self.max.max(self.min))
    }

    /// Number of distinct values in the range (0 if empty).
    #[must_use]
    pub fn len(self) -> u64 {
        if self.is_empty() {
            0
        } else {
            (i64::from(self.max) - i64::from(self.min) + 1) as u64
        }
    }

    /// True if `min > max`.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.min > self.max
    }
}

impl std::fmt::Display for GuessRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}-{}]", self.min, self.max)
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Smallest valid guess and target (inclusive).
    pub min_range: i32,

    /// Largest valid guess and target (inclusive).
    pub max_range: i32,

    /// Valid guesses allowed per round. Must be at least 1.
    pub max_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_range: DEFAULT_MIN_RANGE,
            max_range: DEFAULT_MAX_RANGE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Create the default configuration (1-100, ten attempts).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inclusive guess range.
    #[must_use]
    pub fn with_range(mut self, min: i32, max: i32) -> Self {
        self.min_range = min;
        self.max_range = max;
        self
    }

    /// Set the attempt budget.
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// The configured range.
    #[must_use]
    pub fn range(&self) -> GuessRange {
        GuessRange::new(self.min_range, self.max_range)
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_range > self.max_range {
            return Err(ConfigError::EmptyRange {
                min: self.min_range,
                max: self.max_range,
            });
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        Ok(())
    }

    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `GUESS_MIN_RANGE` - Lower bound (default: 1)
    /// - `GUESS_MAX_RANGE` - Upper bound (default: 100)
    /// - `GUESS_MAX_ATTEMPTS` - Attempts per round (default: 10)
    ///
    /// Unset or unparseable values keep their defaults. The result is not
    /// validated; `RoundEngine::new` does that.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(min) = read_env::<i32>("GUESS_MIN_RANGE") {
            config.min_range = min;
        }
        if let Some(max) = read_env::<i32>("GUESS_MAX_RANGE") {
            config.max_range = max;
        }
        if let Some(attempts) = read_env::<u32>("GUESS_MAX_ATTEMPTS") {
            config.max_attempts = attempts;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
