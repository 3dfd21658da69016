//! Core types: configuration, RNG and target selection, round/session state.
//!
//! Nothing here knows how guesses are evaluated; `rules::RoundEngine`
//! drives these types.

pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use config::{GameConfig, GuessRange, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_RANGE, DEFAULT_MIN_RANGE};
pub use error::ConfigError;
pub use rng::{FixedTargets, GameRng, TargetPicker};
pub use state::{AttemptRecord, Direction, Hud, RoundOutcome, RoundPhase, RoundState, SessionState};
