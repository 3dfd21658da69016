//! Terminal entry point.
//!
//! Environment variables:
//! - `GUESS_MIN_RANGE`, `GUESS_MAX_RANGE`, `GUESS_MAX_ATTEMPTS` - game config
//! - `GUESS_SEED` - fixed RNG seed for reproducible sessions
//! - `RUST_LOG` - log filter, `info` when unset (logs go to stderr)

use std::env;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use number_guess::core::{GameConfig, GameRng};
use number_guess::rules::RoundEngine;
use number_guess::terminal::{Command, Terminal};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(env::var("RUST_LOG").ok().as_deref()))
        .with_writer(io::stderr)
        .init();

    let config = GameConfig::from_env();
    let rng = match env::var("GUESS_SEED") {
        Ok(raw) => GameRng::new(
            raw.trim()
                .parse()
                .with_context(|| format!("GUESS_SEED is not a u64: {raw:?}"))?,
        ),
        Err(_) => GameRng::from_entropy(),
    };
    tracing::info!(seed = rng.seed(), ?config, "starting session");

    let engine = RoundEngine::with_picker(config, rng).context("invalid game configuration")?;
    let mut terminal = Terminal::new(engine);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_lines(&mut out, &terminal.banner())?;
    print_lines(&mut out, &terminal.dispatch(Command::NewRound).lines)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read from stdin")?;
        let reply = terminal.handle_line(&line);
        print_lines(&mut out, &reply.lines)?;
        if reply.quit {
            return Ok(());
        }
    }

    print_lines(&mut out, &terminal.dispatch(Command::Quit).lines)
}

/// `RUST_LOG` directives as given, or `info` when unset or unparseable.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn print_lines(out: &mut impl Write, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}
