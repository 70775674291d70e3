//! Fighter records - the static tape data for one fighter.
//!
//! `FighterRecord` is the validated, immutable form the engine compares.
//! Raw feed entries are parsed into records at the ingestion boundary
//! (`roster::ingest`); inside the core there is no such thing as a missing
//! stat, only an invalid one, and `validate` catches those.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

use super::division::Division;

/// Unique identifier for a fighter within a day's roster.
///
/// Assigned at registration; stable for the rest of the day. Identity
/// comparisons (win condition, duplicate-guess detection) use this, never
/// attribute coincidence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FighterId(pub u32);

impl FighterId {
    /// Create a new fighter ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for FighterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Fighter({})", self.0)
    }
}

/// Divisional ranking slot.
///
/// `Rank::CHAMPION` (0) sits above #1, so raw integer distance works across
/// the belt: champion vs #2 is a distance of 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(pub u8);

impl Rank {
    /// The champion slot, above #1.
    pub const CHAMPION: Rank = Rank(0);

    /// The last published slot (rankings list #1..=#15).
    pub const LOWEST: Rank = Rank(15);

    /// Create a rank from a slot number.
    #[must_use]
    pub const fn new(slot: u8) -> Self {
        Self(slot)
    }

    /// Get the raw slot value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Is this the champion slot?
    #[must_use]
    pub const fn is_champion(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_champion() {
            write!(f, "C")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}

/// Validated tape record for one fighter.
///
/// Read-only once built; the engine only ever reads it.
///
/// ## Example
///
/// ```
/// use tale_of_the_tape::core::{Division, FighterId, FighterRecord, Rank};
///
/// let fighter = FighterRecord::new(FighterId::new(1), "Islam Makhachev", Division::Lightweight, Rank::CHAMPION)
///     .with_wins(26)
///     .with_striking(3.13, 1.61)
///     .with_grappling(3.26, 1.1)
///     .with_fight_time(11 * 60 + 32);
///
/// assert!(fighter.validate().is_ok());
/// assert_eq!(fighter.weight_lb, 155);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FighterRecord {
    /// Roster identity.
    pub id: FighterId,

    /// Display name; unique within the day's roster.
    pub name: String,

    /// Weight class.
    pub division: Division,

    /// Weight in pounds. Defaults to the division limit; the feed carries no
    /// per-fighter weigh-in figure.
    pub weight_lb: u32,

    /// Divisional ranking slot.
    pub rank: Rank,

    /// Career win count.
    pub career_wins: u32,

    /// Significant strikes landed per minute.
    pub slpm: f64,

    /// Significant strikes absorbed per minute.
    pub sapm: f64,

    /// Takedowns per 15 minutes.
    pub takedown_avg: f64,

    /// Submission attempts per 15 minutes.
    pub submission_avg: f64,

    /// Average fight time in seconds.
    pub total_fight_time_secs: u32,
}

impl FighterRecord {
    /// Create a record with zeroed stats. Fill in via the builder methods.
    #[must_use]
    pub fn new(id: FighterId, name: impl Into<String>, division: Division, rank: Rank) -> Self {
        Self {
            id,
            name: name.into(),
            division,
            weight_lb: division.weight_limit_lb(),
            rank,
            career_wins: 0,
            slpm: 0.0,
            sapm: 0.0,
            takedown_avg: 0.0,
            submission_avg: 0.0,
            total_fight_time_secs: 0,
        }
    }

    /// Set career wins (builder pattern).
    #[must_use]
    pub fn with_wins(mut self, wins: u32) -> Self {
        self.career_wins = wins;
        self
    }

    /// Set striking rates: landed and absorbed per minute.
    #[must_use]
    pub fn with_striking(mut self, slpm: f64, sapm: f64) -> Self {
        self.slpm = slpm;
        self.sapm = sapm;
        self
    }

    /// Set grappling rates: takedowns and submission attempts per 15 minutes.
    #[must_use]
    pub fn with_grappling(mut self, takedown_avg: f64, submission_avg: f64) -> Self {
        self.takedown_avg = takedown_avg;
        self.submission_avg = submission_avg;
        self
    }

    /// Set average fight time in seconds.
    #[must_use]
    pub fn with_fight_time(mut self, secs: u32) -> Self {
        self.total_fight_time_secs = secs;
        self
    }

    /// Set an explicit weight, overriding the division limit.
    #[must_use]
    pub fn with_weight_lb(mut self, weight_lb: u32) -> Self {
        self.weight_lb = weight_lb;
        self
    }

    /// Check the record against the schema invariants.
    ///
    /// The engine calls this on both inputs before comparing; ingestion calls
    /// it before registration. Violations name the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(self.invalid("Name", "empty"));
        }
        if self.rank > Rank::LOWEST {
            return Err(self.invalid("Rank", format!("slot {} is outside C..#15", self.rank.raw())));
        }
        self.check_rate("SLpM", self.slpm)?;
        self.check_rate("SApM", self.sapm)?;
        self.check_rate("TD_Avg", self.takedown_avg)?;
        self.check_rate("Sub_Avg", self.submission_avg)?;
        Ok(())
    }

    fn check_rate(&self, field: &'static str, value: f64) -> Result<()> {
        if !value.is_finite() || value < 0.0 {
            return Err(self.invalid(field, format!("{} is not a non-negative rate", value)));
        }
        Ok(())
    }

    fn invalid(&self, field: &'static str, reason: impl Into<String>) -> GameError {
        GameError::InvalidRecord {
            fighter: self.name.clone(),
            field,
            reason: reason.into(),
        }
    }
}
