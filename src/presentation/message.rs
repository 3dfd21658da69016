//! Display text and tones for guess results.

use serde::{Deserialize, Serialize};

use crate::core::state::{Hud, RoundOutcome, RoundPhase};
use crate::rules::GuessResult;

/// Color role of a message or HUD border.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    /// Idle/active glow, also used for "too low".
    Primary,
    /// Rejected input.
    Warning,
    /// "Too high".
    High,
    /// Round won.
    Success,
    /// Round lost.
    Failure,
}

impl Tone {
    /// Hex color for this tone.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Tone::Primary => "#00e5ff",
            Tone::Warning => "#ff9800",
            Tone::High => "#ff4d4d",
            Tone::Success => "#00ff7f",
            Tone::Failure => "#ff00c1",
        }
    }
}

/// A line of feedback for the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub tone: Tone,
}

impl Message {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Message shown when a round starts.
#[must_use]
pub fn awaiting_input() -> Message {
    Message::new("AWAITING INPUT...", Tone::Primary)
}

/// Feedback for a guess result.
///
/// `RoundInactive` has no message: the guess is silently ignored.
#[must_use]
pub fn message_for(result: &GuessResult) -> Option<Message> {
    let message = match result {
        GuessResult::InvalidInput { allowed, .. } => Message::new(
            format!(
                "INVALID INPUT: ENTER NUMBER [{}-{}]",
                allowed.min(),
                allowed.max()
            ),
            Tone::Warning,
        ),
        GuessResult::RoundInactive => return None,
        GuessResult::TooLow => {
            Message::new("// ANALYSIS: TOO LOW. TARGET IS HIGHER.", Tone::Primary)
        }
        GuessResult::TooHigh => {
            Message::new("// ANALYSIS: TOO HIGH. TARGET IS LOWER.", Tone::High)
        }
        GuessResult::Win { target, .. } => Message::new(
            format!("// PASSCODE ACCEPTED: {}. SYSTEM UNLOCKED.", target),
            Tone::Success,
        ),
        GuessResult::Loss { target, .. } => Message::new(
            format!(
                "// ATTEMPTS EXCEEDED. LOCKDOWN INITIATED. CORRECT CODE: {}",
                target
            ),
            Tone::Failure,
        ),
    };
    Some(message)
}

/// HUD border tone for a round phase.
#[must_use]
pub fn border_tone(phase: RoundPhase) -> Tone {
    match phase {
        RoundPhase::Idle | RoundPhase::Active => Tone::Primary,
        RoundPhase::Concluded(RoundOutcome::Won) => Tone::Success,
        RoundPhase::Concluded(RoundOutcome::Lost) => Tone::Failure,
    }
}

impl std::fmt::Display for Hud {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ATTEMPTS LEFT: {} | ROUNDS WON: {} | TOTAL SCORE: {}",
            self.attempts_left, self.rounds_won, self.total_score
        )
    }
}
