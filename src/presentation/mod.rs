//! Presentation adapter.
//!
//! Maps `GuessResult` variants and round phases to display text and tones.
//! Front-ends (terminal, web, anything else) render these; the engine never
//! sees them.

mod message;

pub use message::{awaiting_input, border_tone, message_for, Message, Tone};
