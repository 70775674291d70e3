//! # tale-of-the-tape
//!
//! Core engine for a daily UFC-fighter guessing game. Players pick a fighter
//! from the day's ranked roster; each guess is compared to the hidden target
//! attribute by attribute, and the colored per-attribute feedback narrows the
//! next guess. Ten misses and the day is lost.
//!
//! ## Design Principles
//!
//! 1. **Pure Feedback**: `evaluate` is a function of (guess, target, tuning)
//!    and nothing else. Identical inputs always yield identical rows.
//!
//! 2. **Validate at the Boundary**: the daily feed is scraped text; it is
//!    parsed and checked once, in `roster::ingest`. The engine only ever
//!    sees fully-populated records and still refuses malformed ones rather
//!    than defaulting a value.
//!
//! 3. **Explicit Session State**: no ambient "current game". A `DailyGame`
//!    is the immutable day context; each player's `GameSession` is passed
//!    into `submit` and mutated there, nowhere else.
//!
//! ## Modules
//!
//! - `core`: divisions, ranks, fighter records
//! - `feedback`: match tiers, directions, tolerances, the feedback engine
//! - `roster`: the day's registry and feed ingestion
//! - `session`: the win/loss state machine consuming engine output
//! - `error`: crate error type

pub mod core;
pub mod error;
pub mod feedback;
pub mod roster;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Division, FighterId, FighterRecord, Rank};

pub use crate::error::{GameError, Result};

pub use crate::feedback::{
    Attribute, AttributeFeedback, Direction, FeedbackConfig, FeedbackEngine, FeedbackRows,
    MatchTier, NumericTolerance,
};

pub use crate::roster::{DailyFeed, RawFeed, RawFighter, Roster};

pub use crate::session::{
    DailyGame, GameSession, GameStatus, GuessAttempt, GuessOutcome, MAX_ATTEMPTS,
};
