//! The game-outcome state machine that consumes engine feedback.

pub mod game;

pub use game::{DailyGame, GameSession, GameStatus, GuessAttempt, GuessOutcome, MAX_ATTEMPTS};
