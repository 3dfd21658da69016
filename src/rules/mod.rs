//! Round rules: guess validation, classification, scoring.
//!
//! `RoundEngine` is the only place game state changes. It reports every
//! guess as a `GuessResult` and never formats text for display.

pub mod engine;
pub mod outcome;

pub use engine::RoundEngine;
pub use outcome::{GuessResult, InvalidReason};
