//! Session state machine: one player's run at the daily fighter.
//!
//! The split mirrors the rest of the crate: [`DailyGame`] is the immutable
//! context for a calendar day (roster, target, tuned engine) and
//! [`GameSession`] is the mutable per-player state it drives. `submit` is
//! the only transition; rejected guesses never consume an attempt.

use im::{HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{FighterId, FighterRecord};
use crate::error::{GameError, Result};
use crate::feedback::{FeedbackEngine, FeedbackRows};
use crate::roster::{DailyFeed, Roster};

/// Guesses allowed per day.
pub const MAX_ATTEMPTS: u32 = 10;

/// Session outcome states. `Won` and `Lost` are terminal: no further guesses
/// are accepted in either.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Guessing is open.
    InProgress,
    /// The target was identified.
    Won,
    /// All attempts spent without identifying the target.
    Lost,
}

impl GameStatus {
    /// Has the session ended?
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        GameStatus::InProgress
    }
}

/// One submitted guess and what came back for it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuessAttempt {
    /// 1-based attempt number.
    pub index: u32,

    /// Who was guessed.
    pub fighter: FighterId,

    /// Display name at guess time.
    pub name: String,

    /// Per-attribute feedback, in fixed order.
    pub feedback: FeedbackRows,

    /// Identity match with the target. This, not all-rows-exact, is the win
    /// condition.
    pub hit: bool,
}

/// What `submit` hands back to the UI.
#[derive(Clone, Debug)]
pub struct GuessOutcome {
    /// The recorded attempt.
    pub attempt: GuessAttempt,

    /// Session status after this guess.
    pub status: GameStatus,

    /// Attempts left after this guess.
    pub attempts_remaining: u32,
}

/// Immutable context for one calendar day.
#[derive(Clone, Debug)]
pub struct DailyGame {
    roster: Roster,
    target: FighterId,
    engine: FeedbackEngine,
    max_attempts: u32,
}

impl DailyGame {
    /// Create a game from a roster and a target that must be in it.
    pub fn new(roster: Roster, target: FighterId) -> Result<Self> {
        if roster.is_empty() {
            return Err(GameError::EmptyRoster);
        }
        if !roster.contains(target) {
            return Err(GameError::TargetMissing(target.to_string()));
        }
        Ok(Self {
            roster,
            target,
            engine: FeedbackEngine::default(),
            max_attempts: MAX_ATTEMPTS,
        })
    }

    /// Create a game from a validated daily feed.
    ///
    /// Infallible: the feed already guarantees a non-empty roster containing
    /// the target.
    #[must_use]
    pub fn from_feed(feed: DailyFeed) -> Self {
        let (roster, target) = feed.into_parts();
        Self {
            roster,
            target,
            engine: FeedbackEngine::default(),
            max_attempts: MAX_ATTEMPTS,
        }
    }

    /// Swap in a differently tuned engine (builder pattern).
    #[must_use]
    pub fn with_engine(mut self, engine: FeedbackEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Override the attempt budget.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        assert!(max_attempts > 0, "Must allow at least 1 attempt");
        self.max_attempts = max_attempts;
        self
    }

    /// The day's roster.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The day's target record.
    #[must_use]
    pub fn target(&self) -> &FighterRecord {
        self.roster.get(self.target).expect("target is registered")
    }

    /// The attempt budget.
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Start a fresh session against this day's target.
    #[must_use]
    pub fn new_session(&self) -> GameSession {
        GameSession::new()
    }

    /// Submit a guess by fighter name.
    ///
    /// Rejections leave the session untouched and consume no attempt:
    /// - terminal session: `GameOver`
    /// - name not in the roster: `UnknownFighter`
    /// - identity already guessed: `DuplicateGuess`
    ///
    /// An accepted guess records feedback, then wins on identity match or
    /// loses when the budget runs out.
    pub fn submit(&self, session: &mut GameSession, name: &str) -> Result<GuessOutcome> {
        if session.status.is_terminal() {
            return Err(GameError::GameOver(session.status));
        }

        let guess = self
            .roster
            .find_by_name(name)
            .ok_or_else(|| GameError::UnknownFighter(name.trim().to_string()))?;

        if session.guessed.contains(&guess.id) {
            return Err(GameError::DuplicateGuess(guess.name.clone()));
        }

        let feedback = self.engine.evaluate(guess, self.target())?;
        let hit = guess.id == self.target;

        let attempt = GuessAttempt {
            index: session.attempt_count() + 1,
            fighter: guess.id,
            name: guess.name.clone(),
            feedback,
            hit,
        };

        session.guessed.insert(guess.id);
        session.attempts.push_back(attempt.clone());
        session.status = if hit {
            GameStatus::Won
        } else if attempt.index >= self.max_attempts {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        debug!(guess = %attempt.name, index = attempt.index, hit, "guess evaluated");
        if session.status.is_terminal() {
            info!(status = ?session.status, attempts = attempt.index, "session over");
        }

        Ok(GuessOutcome {
            attempt,
            status: session.status,
            attempts_remaining: self.max_attempts - session.attempt_count(),
        })
    }
}

/// Mutable per-player state.
///
/// Persistent collections make cloning O(1), so a UI can keep a snapshot per
/// guess for replay without copying history.
#[derive(Clone, Debug, Default)]
pub struct GameSession {
    attempts: Vector<GuessAttempt>,
    guessed: ImHashSet<FighterId>,
    status: GameStatus,
}

impl GameSession {
    /// Start an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Guesses submitted so far.
    #[must_use]
    pub fn attempt_count(&self) -> u32 {
        self.attempts.len() as u32
    }

    /// The ordered guess history.
    pub fn attempts(&self) -> impl Iterator<Item = &GuessAttempt> {
        self.attempts.iter()
    }

    /// The most recent attempt.
    #[must_use]
    pub fn last_attempt(&self) -> Option<&GuessAttempt> {
        self.attempts.last()
    }

    /// Has this fighter already been guessed?
    #[must_use]
    pub fn has_guessed(&self, fighter: FighterId) -> bool {
        self.guessed.contains(&fighter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Division, Rank};

    fn roster_of(names: &[&str]) -> Roster {
        let mut roster = Roster::new();
        for (i, name) in names.iter().enumerate() {
            let record = FighterRecord::new(
                FighterId::new(0),
                *name,
                Division::Lightweight,
                Rank::new((i + 1) as u8),
            )
            .with_wins(10 + i as u32)
            .with_striking(3.0 + i as f64, 2.0)
            .with_grappling(1.0, 0.5)
            .with_fight_time(600);
            roster.register(record).unwrap();
        }
        roster
    }

    #[test]
    fn test_new_rejects_missing_target() {
        let roster = roster_of(&["A", "B"]);
        let result = DailyGame::new(roster, FighterId::new(99));
        assert!(matches!(result, Err(GameError::TargetMissing(_))));
    }

    #[test]
    fn test_winning_guess() {
        let roster = roster_of(&["A", "B"]);
        let game = DailyGame::new(roster, FighterId::new(0)).unwrap();
        let mut session = game.new_session();

        let outcome = game.submit(&mut session, "A").unwrap();
        assert!(outcome.attempt.hit);
        assert_eq!(outcome.status, GameStatus::Won);
        assert!(session.status().is_terminal());
    }

    #[test]
    fn test_miss_keeps_session_open() {
        let roster = roster_of(&["A", "B"]);
        let game = DailyGame::new(roster, FighterId::new(0)).unwrap();
        let mut session = game.new_session();

        let outcome = game.submit(&mut session, "B").unwrap();
        assert!(!outcome.attempt.hit);
        assert_eq!(outcome.status, GameStatus::InProgress);
        assert_eq!(outcome.attempts_remaining, MAX_ATTEMPTS - 1);
    }

    #[test]
    fn test_duplicate_guess_consumes_nothing() {
        let roster = roster_of(&["A", "B"]);
        let game = DailyGame::new(roster, FighterId::new(0)).unwrap();
        let mut session = game.new_session();

        game.submit(&mut session, "B").unwrap();
        let result = game.submit(&mut session, "  b "); // same identity
        assert!(matches!(result, Err(GameError::DuplicateGuess(_))));
        assert_eq!(session.attempt_count(), 1);
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_unknown_fighter_consumes_nothing() {
        let roster = roster_of(&["A", "B"]);
        let game = DailyGame::new(roster, FighterId::new(0)).unwrap();
        let mut session = game.new_session();

        let result = game.submit(&mut session, "Nobody");
        assert!(matches!(result, Err(GameError::UnknownFighter(_))));
        assert_eq!(session.attempt_count(), 0);
    }

    #[test]
    fn test_session_clone_is_a_snapshot() {
        let roster = roster_of(&["A", "B", "C"]);
        let game = DailyGame::new(roster, FighterId::new(0)).unwrap();
        let mut session = game.new_session();

        game.submit(&mut session, "B").unwrap();
        let snapshot = session.clone();
        game.submit(&mut session, "C").unwrap();

        assert_eq!(snapshot.attempt_count(), 1);
        assert_eq!(session.attempt_count(), 2);
    }
}
