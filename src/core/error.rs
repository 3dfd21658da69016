//! Configuration errors.
//!
//! User input never produces an error: malformed guesses are reported as
//! `GuessResult::InvalidInput`. The only failure in the crate is building an
//! engine from an unplayable configuration.

use thiserror::Error;

/// Rejected `GameConfig`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The guess range contains no integers.
    #[error("guess range is empty: min {min} is greater than max {max}")]
    EmptyRange { min: i32, max: i32 },

    /// A round with no attempts can never be played.
    #[error("max_attempts must be at least 1")]
    NoAttempts,
}
