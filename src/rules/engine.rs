//! Round engine: round lifecycle, guess evaluation, session scoring.
//!
//! ## Lifecycle
//!
//! ```text
//! Idle --start_round--> Active --Win/Loss--> Concluded
//!                         ^  |                   |
//!                         +--+ TooLow/TooHigh/   |
//!                              InvalidInput      |
//!                         ^----start_round-------+
//! ```
//!
//! ## Scoring
//!
//! A win on attempt `k` of `max_attempts` is worth `max_attempts - k + 1`
//! points: ten for a first-try win with the default budget, one for a win on
//! the last allowed attempt.
//!
//! ## Example
//!
//! ```
//! use number_guess::core::{FixedTargets, GameConfig};
//! use number_guess::rules::{GuessResult, RoundEngine};
//!
//! let mut engine = RoundEngine::with_picker(GameConfig::default(), FixedTargets::always(50)).unwrap();
//! engine.start_round();
//!
//! assert_eq!(engine.submit_guess("25"), GuessResult::TooLow);
//! assert_eq!(engine.submit_guess("50"), GuessResult::Win { points: 9, target: 50 });
//! assert_eq!(engine.total_score(), 9);
//! ```

use std::num::IntErrorKind;

use tracing::{debug, info, trace, warn};

use crate::core::config::GameConfig;
use crate::core::error::ConfigError;
use crate::core::rng::{GameRng, TargetPicker};
use crate::core::state::{
    AttemptRecord, Direction, Hud, RoundOutcome, RoundPhase, RoundState, SessionState,
};

use super::outcome::{GuessResult, InvalidReason};

/// Owns one round at a time plus the running session score.
///
/// Single-threaded: `start_round` and `submit_guess` are expected to be
/// called sequentially by one caller.
#[derive(Clone, Debug)]
pub struct RoundEngine<P: TargetPicker = GameRng> {
    config: GameConfig,
    picker: P,
    round: RoundState,
    session: SessionState,
}

impl RoundEngine<GameRng> {
    /// Create an engine drawing targets from a seeded RNG.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_picker(config, GameRng::new(seed))
    }

    /// Create an engine drawing targets from an entropy-seeded RNG.
    pub fn from_entropy(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_picker(config, GameRng::from_entropy())
    }
}

impl<P: TargetPicker> RoundEngine<P> {
    /// Create an engine with a custom target picker.
    ///
    /// The engine starts `Idle`; call `start_round` before guessing.
    pub fn with_picker(config: GameConfig, picker: P) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            picker,
            round: RoundState::default(),
            session: SessionState::default(),
        })
    }

    // === Commands ===

    /// Start a new round.
    ///
    /// Draws a target, resets the attempt count and history, and activates
    /// the round. An unfinished round is abandoned without scoring.
    pub fn start_round(&mut self) -> &RoundState {
        let range = self.config.range();
        let picked = self.picker.pick(range);
        let target = range.clamp(picked);
        if target != picked {
            warn!(picked, %range, "target picker returned a value outside the range; clamped");
        }

        if self.round.is_active() {
            debug!(attempts_used = self.round.attempts_used, "abandoning unfinished round");
        }

        self.round = RoundState::start(target);
        debug!(%range, max_attempts = self.config.max_attempts, "round started");
        trace!(target, "target drawn");

        &self.round
    }

    /// Submit a raw textual guess.
    ///
    /// Surrounding whitespace is ignored and the leading integer is read, so
    /// `"4.5"` guesses 4. Input without leading digits, or whose integer lies
    /// outside the configured range, is reported as `InvalidInput` and does
    /// not consume an attempt.
    pub fn submit_guess(&mut self, raw: &str) -> GuessResult {
        if !self.round.is_active() {
            debug!("guess ignored: no active round");
            return GuessResult::RoundInactive;
        }

        match parse_guess(raw) {
            Ok(value) => self.submit_value(value),
            Err(reason) => self.reject(reason),
        }
    }

    /// Submit an already-parsed guess. The range check still applies.
    pub fn submit_value(&mut self, value: i64) -> GuessResult {
        if !self.round.is_active() {
            debug!("guess ignored: no active round");
            return GuessResult::RoundInactive;
        }

        let range = self.config.range();
        if !range.contains(value) {
            return self.reject(InvalidReason::OutOfRange(value));
        }
        // In range, so it fits the range's integer type
        let Ok(value) = i32::try_from(value) else {
            return self.reject(InvalidReason::OutOfRange(value));
        };

        self.evaluate(value)
    }

    /// Zero the session counters. The current round is untouched.
    pub fn reset_session(&mut self) {
        info!(
            total_score = self.session.total_score,
            rounds_won = self.session.rounds_won,
            "session reset"
        );
        self.session = SessionState::default();
    }

    // === Queries ===

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current (or most recent) round.
    #[must_use]
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// Session counters.
    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Round lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.round.phase
    }

    /// True while the round accepts guesses.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.round.is_active()
    }

    /// Valid guesses made this round.
    #[must_use]
    pub fn attempts_used(&self) -> u32 {
        self.round.attempts_used
    }

    /// Valid guesses remaining this round.
    #[must_use]
    pub fn attempts_left(&self) -> u32 {
        self.config.max_attempts.saturating_sub(self.round.attempts_used)
    }

    /// Cumulative score.
    #[must_use]
    pub fn total_score(&self) -> u64 {
        self.session.total_score
    }

    /// Rounds won this session.
    #[must_use]
    pub fn rounds_won(&self) -> u32 {
        self.session.rounds_won
    }

    /// Snapshot for a heads-up display.
    #[must_use]
    pub fn hud(&self) -> Hud {
        Hud {
            attempts_left: self.attempts_left(),
            rounds_won: self.session.rounds_won,
            total_score: self.session.total_score,
            active: self.is_active(),
        }
    }

    // === Internals ===

    /// Points for a win on attempt `attempt`, counted from 1.
    fn points_for_attempt(&self, attempt: u32) -> u64 {
        u64::from(self.config.max_attempts.saturating_sub(attempt)) + 1
    }

    fn reject(&self, reason: InvalidReason) -> GuessResult {
        debug!(?reason, "guess rejected");
        GuessResult::InvalidInput {
            allowed: self.config.range(),
            reason,
        }
    }

    fn evaluate(&mut self, value: i32) -> GuessResult {
        self.round.attempts_used += 1;
        let attempt = self.round.attempts_used;
        let target = self.round.target;
        let direction = Direction::classify(value, target);

        self.round.history.push(AttemptRecord {
            number: attempt,
            value,
            direction,
        });
        debug!(attempt, value, ?direction, "guess evaluated");

        if direction == Direction::Exact {
            let points = self.points_for_attempt(attempt);
            self.round.phase = RoundPhase::Concluded(RoundOutcome::Won);
            self.session.rounds_won += 1;
            self.session.total_score += points;
            info!(
                attempt,
                points,
                total_score = self.session.total_score,
                rounds_won = self.session.rounds_won,
                "round won"
            );
            return GuessResult::Win { points, target };
        }

        if attempt >= self.config.max_attempts {
            self.round.phase = RoundPhase::Concluded(RoundOutcome::Lost);
            self.session.rounds_lost += 1;
            info!(target, ?direction, "round lost: attempts exhausted");
            return GuessResult::Loss { target, direction };
        }

        match direction {
            Direction::TooLow => GuessResult::TooLow,
            _ => GuessResult::TooHigh,
        }
    }
}

/// Read the leading base-10 integer of a raw guess.
///
/// An optional sign and a run of digits are taken; anything after them is
/// ignored, so `"4.5"` reads as 4 and `"12abc"` as 12. Input without leading
/// digits is not a number. Numbers too large for `i64` are out of range.
fn parse_guess(raw: &str) -> Result<i64, InvalidReason> {
    let trimmed = raw.trim();
    let unsigned = trimmed
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(trimmed);
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Err(InvalidReason::NotANumber);
    }

    let sign_len = trimmed.len() - unsigned.len();
    trimmed[..sign_len + digits].parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => InvalidReason::OutOfRange(i64::MAX),
        IntErrorKind::NegOverflow => InvalidReason::OutOfRange(i64::MIN),
        _ => InvalidReason::NotANumber,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GuessRange;
    use crate::core::rng::FixedTargets;

    fn engine_with_target(target: i32) -> RoundEngine<FixedTargets> {
        RoundEngine::with_picker(GameConfig::default(), FixedTargets::always(target)).unwrap()
    }

    #[test]
    fn test_new_engine_is_idle() {
        let engine = RoundEngine::new(GameConfig::default(), 42).unwrap();
        assert_eq!(engine.phase(), RoundPhase::Idle);
        assert!(!engine.is_active());
        assert_eq!(engine.total_score(), 0);
        assert_eq!(engine.rounds_won(), 0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = RoundEngine::new(GameConfig::new().with_range(5, 4), 42);
        assert_eq!(
            result.err(),
            Some(ConfigError::EmptyRange { min: 5, max: 4 })
        );

        let result = RoundEngine::new(GameConfig::new().with_max_attempts(0), 42);
        assert_eq!(result.err(), Some(ConfigError::NoAttempts));
    }

    #[test]
    fn test_guess_before_first_round() {
        let mut engine = engine_with_target(50);
        assert_eq!(engine.submit_guess("50"), GuessResult::RoundInactive);
        assert_eq!(engine.attempts_used(), 0);
    }

    #[test]
    fn test_start_round() {
        let mut engine = RoundEngine::new(GameConfig::default(), 42).unwrap();
        let round = engine.start_round();

        assert!(round.is_active());
        assert_eq!(round.attempts_used, 0);
        assert!((1..=100).contains(&round.target));
        assert_eq!(engine.attempts_left(), 10);
    }

    #[test]
    fn test_directional_feedback() {
        let mut engine = engine_with_target(40);
        engine.start_round();

        assert_eq!(engine.submit_guess("10"), GuessResult::TooLow);
        assert_eq!(engine.submit_guess("90"), GuessResult::TooHigh);
        assert_eq!(engine.attempts_used(), 2);
        assert!(engine.is_active());

        let history: Vec<_> = engine.round().history.iter().map(|a| a.direction).collect();
        assert_eq!(history, vec![Direction::TooLow, Direction::TooHigh]);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let mut engine = engine_with_target(40);
        engine.start_round();
        assert_eq!(engine.submit_guess("  40\n"), GuessResult::Win { points: 10, target: 40 });
    }

    #[test]
    fn test_invalid_inputs() {
        let mut engine = engine_with_target(40);
        engine.start_round();
        let allowed = GuessRange::new(1, 100);

        for (raw, reason) in [
            ("abc", InvalidReason::NotANumber),
            ("", InvalidReason::NotANumber),
            (".5", InvalidReason::NotANumber),
            ("-", InvalidReason::NotANumber),
            ("abc12", InvalidReason::NotANumber),
            ("- 5", InvalidReason::NotANumber),
            ("0x10", InvalidReason::OutOfRange(0)),
            ("101st", InvalidReason::OutOfRange(101)),
            ("0", InvalidReason::OutOfRange(0)),
            ("101", InvalidReason::OutOfRange(101)),
            ("-3", InvalidReason::OutOfRange(-3)),
            ("99999999999999999999999", InvalidReason::OutOfRange(i64::MAX)),
            ("-99999999999999999999999", InvalidReason::OutOfRange(i64::MIN)),
        ] {
            assert_eq!(
                engine.submit_guess(raw),
                GuessResult::InvalidInput { allowed, reason },
                "input {:?}",
                raw
            );
        }

        assert_eq!(engine.attempts_used(), 0);
        assert!(engine.is_active());
    }

    #[test]
    fn test_leading_integer_is_read() {
        let mut engine = engine_with_target(12);
        engine.start_round();

        assert_eq!(engine.submit_guess("4.5"), GuessResult::TooLow);
        assert_eq!(engine.submit_guess("1e3"), GuessResult::TooLow);
        assert_eq!(engine.submit_guess("12abc"), GuessResult::Win { points: 8, target: 12 });
        assert_eq!(engine.attempts_used(), 3);

        engine.start_round();
        assert_eq!(engine.submit_guess("12.0"), GuessResult::Win { points: 10, target: 12 });

        engine.start_round();
        assert_eq!(engine.submit_guess(" +12 apples"), GuessResult::Win { points: 10, target: 12 });
    }

    #[test]
    fn test_submit_value() {
        let mut engine = engine_with_target(40);
        engine.start_round();

        assert_eq!(engine.submit_value(30), GuessResult::TooLow);
        assert!(matches!(
            engine.submit_value(i64::from(i32::MAX) + 1),
            GuessResult::InvalidInput { .. }
        ));
        assert_eq!(engine.submit_value(40), GuessResult::Win { points: 9, target: 40 });
    }

    #[test]
    fn test_win_scoring() {
        let mut engine = engine_with_target(40);
        engine.start_round();

        engine.submit_guess("1");
        engine.submit_guess("2");
        let result = engine.submit_guess("40");

        assert_eq!(result, GuessResult::Win { points: 8, target: 40 });
        assert_eq!(engine.phase(), RoundPhase::Concluded(RoundOutcome::Won));
        assert_eq!(engine.total_score(), 8);
        assert_eq!(engine.rounds_won(), 1);
    }

    #[test]
    fn test_win_on_last_attempt_scores_one() {
        let mut engine = engine_with_target(40);
        engine.start_round();

        for _ in 0..9 {
            assert_eq!(engine.submit_guess("1"), GuessResult::TooLow);
        }
        assert_eq!(engine.submit_guess("40"), GuessResult::Win { points: 1, target: 40 });
        assert_eq!(engine.session().rounds_lost, 0);
    }

    #[test]
    fn test_loss_overrides_direction() {
        let config = GameConfig::new().with_max_attempts(2);
        let mut engine = RoundEngine::with_picker(config, FixedTargets::always(40)).unwrap();
        engine.start_round();

        assert_eq!(engine.submit_guess("1"), GuessResult::TooLow);
        assert_eq!(
            engine.submit_guess("99"),
            GuessResult::Loss {
                target: 40,
                direction: Direction::TooHigh
            }
        );
        assert_eq!(engine.phase(), RoundPhase::Concluded(RoundOutcome::Lost));
        assert_eq!(engine.attempts_left(), 0);
        assert_eq!(engine.total_score(), 0);
        assert_eq!(engine.session().rounds_lost, 1);
    }

    #[test]
    fn test_single_attempt_budget() {
        let config = GameConfig::new().with_max_attempts(1);
        let mut engine = RoundEngine::with_picker(config, FixedTargets::new([40, 60])).unwrap();

        engine.start_round();
        assert_eq!(engine.submit_guess("40"), GuessResult::Win { points: 1, target: 40 });

        engine.start_round();
        assert_eq!(
            engine.submit_guess("40"),
            GuessResult::Loss {
                target: 60,
                direction: Direction::TooLow
            }
        );
    }

    #[test]
    fn test_restart_mid_round_abandons_without_scoring() {
        let mut engine = engine_with_target(40);
        engine.start_round();
        engine.submit_guess("10");

        engine.start_round();
        assert_eq!(engine.attempts_used(), 0);
        assert!(engine.round().history.is_empty());
        assert_eq!(engine.session().rounds_played(), 0);
    }

    #[test]
    fn test_out_of_range_picker_is_clamped() {
        let mut engine = engine_with_target(500);
        assert_eq!(engine.start_round().target, 100);
    }

    #[test]
    fn test_reset_session() {
        let mut engine = engine_with_target(40);
        engine.start_round();
        engine.submit_guess("40");
        engine.start_round();
        engine.submit_guess("30");

        engine.reset_session();

        assert_eq!(engine.total_score(), 0);
        assert_eq!(engine.rounds_won(), 0);
        assert_eq!(engine.attempts_used(), 1);
        assert!(engine.is_active());
    }

    #[test]
    fn test_hud() {
        let mut engine = engine_with_target(40);
        engine.start_round();
        engine.submit_guess("39");

        assert_eq!(
            engine.hud(),
            Hud {
                attempts_left: 9,
                rounds_won: 0,
                total_score: 0,
                active: true,
            }
        );
    }

    #[test]
    fn test_points_for_attempt() {
        let engine = engine_with_target(40);
        assert_eq!(engine.points_for_attempt(1), 10);
        assert_eq!(engine.points_for_attempt(10), 1);
    }

    #[test]
    fn test_parse_guess() {
        assert_eq!(parse_guess("42"), Ok(42));
        assert_eq!(parse_guess("+42"), Ok(42));
        assert_eq!(parse_guess(" -7 "), Ok(-7));
        assert_eq!(parse_guess("x"), Err(InvalidReason::NotANumber));
        assert_eq!(parse_guess("4.5"), Ok(4));
        assert_eq!(parse_guess("-12abc"), Ok(-12));
        assert_eq!(parse_guess("007"), Ok(7));
        assert_eq!(parse_guess("+"), Err(InvalidReason::NotANumber));
        assert_eq!(
            parse_guess("123456789012345678901234xyz"),
            Err(InvalidReason::OutOfRange(i64::MAX))
        );
    }
}
