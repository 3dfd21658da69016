//! Line commands for the terminal front-end.

/// A parsed input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Start (or restart) a round.
    NewRound,
    /// Zero the session score.
    ResetSession,
    /// Show the command list.
    Help,
    /// Leave the game.
    Quit,
    /// Anything else is handed to the engine as a guess.
    Guess(String),
}

impl Command {
    /// Parse one line of input. Keywords are case-insensitive.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "new" | "again" | "n" => Command::NewRound,
            "reset" => Command::ResetSession,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Guess(trimmed.to_string()),
        }
    }
}
