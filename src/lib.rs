//! # number-guess
//!
//! A number-guessing round engine.
//!
//! The engine picks a target in a configured range, accepts guesses, answers
//! "too low" / "too high", and ends the round on a correct guess or when the
//! attempt budget runs out. Wins add points to a running session score:
//! the fewer attempts used, the more points.
//!
//! ## Design Principles
//!
//! 1. **Pure Logic**: `RoundEngine` does no I/O and never formats text.
//!    Every guess yields a tagged `GuessResult`.
//!
//! 2. **Input Is Never an Error**: Malformed or out-of-range guesses are
//!    reported as `GuessResult::InvalidInput` and cost no attempt.
//!
//! 3. **Deterministic When Asked**: Targets come from a `TargetPicker`;
//!    a seeded `GameRng` or `FixedTargets` makes sessions reproducible.
//!
//! ## Modules
//!
//! - `core`: Configuration, RNG/target pickers, round and session state
//! - `rules`: `RoundEngine` and `GuessResult`
//! - `presentation`: Display text and tones for results
//! - `terminal`: Line-oriented front-end used by the `guess` binary

pub mod core;
pub mod presentation;
pub mod rules;
pub mod terminal;

// Re-export commonly used types
pub use crate::core::{
    AttemptRecord, ConfigError, Direction, FixedTargets, GameConfig, GameRng, GuessRange, Hud,
    RoundOutcome, RoundPhase, RoundState, SessionState, TargetPicker,
};

pub use crate::rules::{GuessResult, InvalidReason, RoundEngine};

pub use crate::presentation::{Message, Tone};
