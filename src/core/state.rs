//! Round and session state.
//!
//! ## RoundState
//!
//! Recreated at every round start:
//! - Target number
//! - Attempts used and the attempt history
//! - Phase (idle, active, concluded)
//!
//! ## SessionState
//!
//! Lives for the whole engine lifetime:
//! - Total score
//! - Rounds won / lost
//!
//! Both are owned by `RoundEngine` and handed out as shared references, so
//! callers can read every field but only the engine mutates them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::cmp::Ordering;

/// How a valid guess compares with the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Guess is below the target.
    TooLow,
    /// Guess is above the target.
    TooHigh,
    /// Guess equals the target.
    Exact,
}

impl Direction {
    /// Classify `guess` against `target`.
    #[must_use]
    pub fn classify(guess: i32, target: i32) -> Self {
        match guess.cmp(&target) {
            Ordering::Less => Direction::TooLow,
            Ordering::Greater => Direction::TooHigh,
            Ordering::Equal => Direction::Exact,
        }
    }
}

/// One valid guess within a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// 1-based attempt number within the round.
    pub number: u32,
    /// The guessed value.
    pub value: i32,
    /// Classification against the target.
    pub direction: Direction,
}

/// How a concluded round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    Won,
    Lost,
}

/// Round lifecycle.
///
/// `Idle -> Active -> Concluded`, and back to `Active` on the next round start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No round has been started yet.
    #[default]
    Idle,
    /// Accepting guesses.
    Active,
    /// Won or lost; guesses are ignored until the next round.
    Concluded(RoundOutcome),
}

impl RoundPhase {
    /// True while the round accepts guesses.
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, RoundPhase::Active)
    }

    /// The outcome, if the round has concluded.
    #[must_use]
    pub fn outcome(self) -> Option<RoundOutcome> {
        match self {
            RoundPhase::Concluded(outcome) => Some(outcome),
            _ => None,
        }
    }
}

/// State of the current round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Number to guess. Always inside the configured range once a round starts.
    pub target: i32,

    /// Valid guesses made this round.
    pub attempts_used: u32,

    /// Lifecycle phase.
    pub phase: RoundPhase,

    /// Valid guesses in order.
    /// SmallVec keeps the default ten-attempt budget off the heap.
    pub history: SmallVec<[AttemptRecord; 10]>,
}

impl RoundState {
    /// A fresh active round for `target`.
    #[must_use]
    pub fn start(target: i32) -> Self {
        Self {
            target,
            attempts_used: 0,
            phase: RoundPhase::Active,
            history: SmallVec::new(),
        }
    }

    /// True while the round accepts guesses.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase.is_active()
    }

    /// The most recent valid guess, if any.
    #[must_use]
    pub fn last_attempt(&self) -> Option<&AttemptRecord> {
        self.history.last()
    }
}

/// Counters that persist across rounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Sum of points from every win.
    pub total_score: u64,

    /// Rounds won.
    pub rounds_won: u32,

    /// Rounds lost by exhausting the attempt budget.
    pub rounds_lost: u32,
}

impl SessionState {
    /// Rounds that reached a conclusion.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_won.saturating_add(self.rounds_lost)
    }
}

/// Heads-up display snapshot for a presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub attempts_left: u32,
    pub rounds_won: u32,
    pub total_score: u64,
    pub active: bool,
}
