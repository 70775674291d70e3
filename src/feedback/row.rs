//! Feedback rows: what the player sees after a guess.
//!
//! Every guess produces one [`AttributeFeedback`] per compared attribute, in
//! a fixed order the UI binds to positionally. `SmallVec` keeps the eight
//! rows inline without a heap allocation per guess.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The compared attributes, in presentation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    /// Weight class (ordinal-adjacent categorical).
    Division,
    /// Divisional ranking slot.
    Rank,
    /// Career win count.
    Wins,
    /// Significant strikes landed per minute.
    StrikesLandedPerMin,
    /// Significant strikes absorbed per minute.
    StrikesAbsorbedPerMin,
    /// Takedowns per 15 minutes.
    TakedownAvg,
    /// Submission attempts per 15 minutes.
    SubmissionAvg,
    /// Average fight time.
    FightTime,
}

impl Attribute {
    /// Fixed comparison order. Stable across calls so the UI can bind by
    /// position.
    pub const ORDER: [Attribute; 8] = [
        Attribute::Division,
        Attribute::Rank,
        Attribute::Wins,
        Attribute::StrikesLandedPerMin,
        Attribute::StrikesAbsorbedPerMin,
        Attribute::TakedownAvg,
        Attribute::SubmissionAvg,
        Attribute::FightTime,
    ];
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Attribute::Division => "Division",
            Attribute::Rank => "Rank",
            Attribute::Wins => "Wins",
            Attribute::StrikesLandedPerMin => "SLpM",
            Attribute::StrikesAbsorbedPerMin => "SApM",
            Attribute::TakedownAvg => "TD Avg",
            Attribute::SubmissionAvg => "Sub Avg",
            Attribute::FightTime => "Fight Time",
        };
        write!(f, "{}", label)
    }
}

/// How close one attribute of the guess is to the target's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchTier {
    /// Values are equal.
    Exact,
    /// Within the attribute's tolerance (boundary inclusive).
    Close,
    /// Outside the tolerance.
    Wrong,
}

/// Which way the target's value lies from the guessed one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Target value is greater; guess higher next time.
    Higher,
    /// Target value is smaller; guess lower next time.
    Lower,
}

/// Feedback for a single attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeFeedback {
    /// Which attribute was compared.
    pub attribute: Attribute,

    /// Exact, close, or wrong.
    pub tier: MatchTier,

    /// Hint toward the target. Present on every non-exact ordinal
    /// comparison; absent for exact matches and non-adjacent divisions.
    pub direction: Option<Direction>,
}

impl AttributeFeedback {
    /// An exact match. Never carries a direction.
    #[must_use]
    pub const fn exact(attribute: Attribute) -> Self {
        Self {
            attribute,
            tier: MatchTier::Exact,
            direction: None,
        }
    }

    /// A near miss with a hint toward the target.
    #[must_use]
    pub const fn close(attribute: Attribute, direction: Direction) -> Self {
        Self {
            attribute,
            tier: MatchTier::Close,
            direction: Some(direction),
        }
    }

    /// A miss. Ordinal attributes still hint; categorical ones don't.
    #[must_use]
    pub const fn wrong(attribute: Attribute, direction: Option<Direction>) -> Self {
        Self {
            attribute,
            tier: MatchTier::Wrong,
            direction,
        }
    }

    /// Is this row an exact match?
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.tier == MatchTier::Exact
    }
}

/// One guess's worth of feedback: eight rows in [`Attribute::ORDER`].
pub type FeedbackRows = SmallVec<[AttributeFeedback; 8]>;
