//! Guess results reported by the round engine.
//!
//! Each variant carries exactly what a presentation layer needs to render
//! it. The engine never formats display text; see `presentation` for that.

use serde::{Deserialize, Serialize};

use crate::core::config::GuessRange;
use crate::core::state::{Direction, RoundOutcome};

/// Why a guess was rejected without consuming an attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvalidReason {
    /// Input did not parse as an integer.
    NotANumber,
    /// Input parsed but lies outside the allowed range.
    /// Values beyond `i64` saturate to `i64::MIN` / `i64::MAX`.
    OutOfRange(i64),
}

/// Result of submitting a guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessResult {
    /// Rejected input. No attempt consumed, round still active.
    InvalidInput {
        allowed: GuessRange,
        reason: InvalidReason,
    },

    /// No round is active. Nothing changed.
    RoundInactive,

    /// Target is higher. Round continues.
    TooLow,

    /// Target is lower. Round continues.
    TooHigh,

    /// Correct guess. Round concluded, `points` added to the session.
    Win { points: u64, target: i32 },

    /// Attempt budget exhausted. Round concluded.
    ///
    /// `direction` is the final guess's classification; the loss overrides it
    /// but it is kept for display.
    Loss { target: i32, direction: Direction },
}

impl GuessResult {
    /// True if this guess consumed an attempt.
    #[must_use]
    pub fn consumed_attempt(&self) -> bool {
        matches!(
            self,
            GuessResult::TooLow
                | GuessResult::TooHigh
                | GuessResult::Win { .. }
                | GuessResult::Loss { .. }
        )
    }

    /// The round outcome, if this guess ended the round.
    #[must_use]
    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self {
            GuessResult::Win { .. } => Some(RoundOutcome::Won),
            GuessResult::Loss { .. } => Some(RoundOutcome::Lost),
            _ => None,
        }
    }

    /// True if this guess ended the round.
    #[must_use]
    pub fn is_concluding(&self) -> bool {
        self.outcome().is_some()
    }

    /// Directional classification of the guess, for guesses that consumed
    /// an attempt.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GuessResult::TooLow => Some(Direction::TooLow),
            GuessResult::TooHigh => Some(Direction::TooHigh),
            GuessResult::Win { .. } => Some(Direction::Exact),
            GuessResult::Loss { direction, .. } => Some(*direction),
            _ => None,
        }
    }

    /// The target, when the result reveals it.
    #[must_use]
    pub fn revealed_target(&self) -> Option<i32> {
        match self {
            GuessResult::Win { target, .. } | GuessResult::Loss { target, .. } => Some(*target),
            _ => None,
        }
    }
}
