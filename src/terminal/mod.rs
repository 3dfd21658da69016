//! Terminal front-end: turns input lines into engine calls and engine
//! results into printable lines.
//!
//! I/O stays in the `guess` binary; `Terminal` only produces text, so the
//! whole conversation can be driven from tests.

mod command;

pub use command::Command;

use crate::core::rng::TargetPicker;
use crate::presentation::{awaiting_input, message_for};
use crate::rules::RoundEngine;

/// Lines to print in response to a command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    /// The player asked to leave.
    pub quit: bool,
}

impl Reply {
    fn lines(lines: Vec<String>) -> Self {
        Self { lines, quit: false }
    }
}

/// Terminal session over a `RoundEngine`.
pub struct Terminal<P: TargetPicker> {
    engine: RoundEngine<P>,
}

impl<P: TargetPicker> Terminal<P> {
    /// Wrap an engine. No round is started until `NewRound` is dispatched.
    pub fn new(engine: RoundEngine<P>) -> Self {
        Self { engine }
    }

    /// The wrapped engine.
    #[must_use]
    pub fn engine(&self) -> &RoundEngine<P> {
        &self.engine
    }

    /// Banner printed once at startup.
    #[must_use]
    pub fn banner(&self) -> Vec<String> {
        let range = self.engine.config().range();
        vec![
            format!(
                "GUESS THE CODE {} IN {} ATTEMPTS.",
                range,
                self.engine.config().max_attempts
            ),
            "Type 'help' for commands.".to_string(),
        ]
    }

    /// Run one command.
    pub fn dispatch(&mut self, command: Command) -> Reply {
        match command {
            Command::NewRound => {
                self.engine.start_round();
                Reply::lines(vec![awaiting_input().text, self.engine.hud().to_string()])
            }
            Command::ResetSession => {
                self.engine.reset_session();
                Reply::lines(vec![
                    "SESSION RESET.".to_string(),
                    self.engine.hud().to_string(),
                ])
            }
            Command::Help => Reply::lines(help_lines()),
            Command::Quit => Reply {
                lines: vec![format!(
                    "FINAL SCORE: {} ({} ROUNDS WON)",
                    self.engine.total_score(),
                    self.engine.rounds_won()
                )],
                quit: true,
            },
            Command::Guess(raw) => {
                let result = self.engine.submit_guess(&raw);
                let Some(message) = message_for(&result) else {
                    return Reply::lines(vec![
                        "NO ACTIVE ROUND. Type 'new' to play.".to_string()
                    ]);
                };

                let mut lines = vec![message.text, self.engine.hud().to_string()];
                if result.is_concluding() {
                    lines.push("Type 'new' to play again.".to_string());
                }
                Reply::lines(lines)
            }
        }
    }

    /// Parse and run one input line.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        self.dispatch(Command::parse(line))
    }
}

fn help_lines() -> Vec<String> {
    vec![
        "<number>  submit a guess".to_string(),
        "new       start a new round".to_string(),
        "reset     zero the session score".to_string(),
        "quit      leave".to_string(),
    ]
}
