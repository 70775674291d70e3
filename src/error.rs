//! Crate error type.
//!
//! Every recoverable failure funnels into [`GameError`]. Malformed feed data
//! fails loudly at the ingestion boundary; the engine never defaults a
//! missing value into a plausible-looking comparison.

use thiserror::Error;

use crate::session::GameStatus;

/// All errors the game core can surface.
#[derive(Debug, Error)]
pub enum GameError {
    /// A required attribute is missing or malformed on a fighter record.
    #[error("invalid record for {fighter}: {field} {reason}")]
    InvalidRecord {
        /// Fighter the record belongs to.
        fighter: String,
        /// Feed field that failed validation.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// The same fighter was guessed twice in one session. No attempt is
    /// consumed; the caller should prompt for a different guess.
    #[error("{0:?} has already been guessed this session")]
    DuplicateGuess(String),

    /// Guessed identity is not in the day's roster. No attempt is consumed.
    #[error("{0:?} is not in today's roster")]
    UnknownFighter(String),

    /// The session already ended; no further guesses are accepted.
    #[error("session is already over ({0:?})")]
    GameOver(GameStatus),

    /// Two roster entries share a name. Names are the player-facing identity.
    #[error("duplicate fighter name {0:?} in roster")]
    DuplicateName(String),

    /// The feed's daily fighter did not survive roster validation.
    #[error("daily fighter {0:?} is missing from the validated roster")]
    TargetMissing(String),

    /// The feed yielded no eligible fighters.
    #[error("feed produced an empty roster")]
    EmptyRoster,

    /// The feed document itself failed to parse.
    #[error("feed parse error: {0}")]
    Feed(#[from] serde_json::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GameError>;
