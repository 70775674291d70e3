//! Feedback tuning: per-attribute tolerances.
//!
//! Each numeric attribute carries its own `(scale, close_threshold)` pair;
//! thresholds are tuned per field, never shared, because the fields live on
//! very different scales (ranking slots vs. strike rates vs. seconds).

use serde::{Deserialize, Serialize};

use super::row::Attribute;

/// Tolerance for one numeric attribute.
///
/// A non-exact comparison is `Close` iff
/// `|guess - target| / scale <= close_threshold`. The boundary is inclusive:
/// a distance landing exactly on the threshold is still `Close`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NumericTolerance {
    /// Reference scale the distance is normalized by.
    pub scale: f64,

    /// Maximum normalized distance still shown as `Close`.
    pub close_threshold: f64,
}

impl NumericTolerance {
    /// Create a tolerance.
    #[must_use]
    pub const fn new(scale: f64, close_threshold: f64) -> Self {
        Self {
            scale,
            close_threshold,
        }
    }

    /// Classify an absolute distance. Exactness is the caller's call; this
    /// only separates `Close` from `Wrong`.
    #[must_use]
    pub fn is_close(&self, distance: f64) -> bool {
        distance / self.scale <= self.close_threshold
    }
}

/// Per-attribute feedback tuning.
///
/// The defaults are the product's color-coding rules: within two ranking
/// slots, three wins, three-quarters of a strike per minute, half a takedown
/// or submission attempt per 15 minutes, and a minute and a half of fight
/// time. One division class of adjacency still reads as `Close`.
///
/// ## Example
///
/// ```
/// use tale_of_the_tape::feedback::{Attribute, FeedbackConfig, NumericTolerance};
///
/// let config = FeedbackConfig::default()
///     .with_tolerance(Attribute::Wins, NumericTolerance::new(1.0, 5.0));
///
/// assert!(config.tolerance(Attribute::Wins).unwrap().is_close(5.0));
/// assert_eq!(config.tolerance(Attribute::Division), None);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedbackConfig {
    /// Ranking slots (raw integer distance; scale 1).
    pub rank: NumericTolerance,

    /// Career wins.
    pub wins: NumericTolerance,

    /// Strikes landed per minute.
    pub slpm: NumericTolerance,

    /// Strikes absorbed per minute.
    pub sapm: NumericTolerance,

    /// Takedowns per 15 minutes.
    pub takedown_avg: NumericTolerance,

    /// Submission attempts per 15 minutes.
    pub submission_avg: NumericTolerance,

    /// Fight time, normalized to minutes.
    pub fight_time: NumericTolerance,

    /// Classes apart still shown as `Close` (1 = neighbors only).
    pub division_adjacency: u8,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            rank: NumericTolerance::new(1.0, 2.0),
            wins: NumericTolerance::new(1.0, 3.0),
            slpm: NumericTolerance::new(1.0, 0.75),
            sapm: NumericTolerance::new(1.0, 0.75),
            takedown_avg: NumericTolerance::new(1.0, 0.5),
            submission_avg: NumericTolerance::new(1.0, 0.5),
            fight_time: NumericTolerance::new(60.0, 1.5),
            division_adjacency: 1,
        }
    }
}

impl FeedbackConfig {
    /// Override one numeric attribute's tolerance (builder pattern).
    ///
    /// Panics if called with `Attribute::Division` - division closeness is
    /// adjacency, not a numeric tolerance; use `with_division_adjacency`.
    #[must_use]
    pub fn with_tolerance(mut self, attribute: Attribute, tolerance: NumericTolerance) -> Self {
        match attribute {
            Attribute::Division => panic!("Division has no numeric tolerance"),
            Attribute::Rank => self.rank = tolerance,
            Attribute::Wins => self.wins = tolerance,
            Attribute::StrikesLandedPerMin => self.slpm = tolerance,
            Attribute::StrikesAbsorbedPerMin => self.sapm = tolerance,
            Attribute::TakedownAvg => self.takedown_avg = tolerance,
            Attribute::SubmissionAvg => self.submission_avg = tolerance,
            Attribute::FightTime => self.fight_time = tolerance,
        }
        self
    }

    /// Override how many classes apart still counts as `Close`.
    #[must_use]
    pub fn with_division_adjacency(mut self, classes: u8) -> Self {
        self.division_adjacency = classes;
        self
    }

    /// Get the tolerance for a numeric attribute; `None` for `Division`.
    #[must_use]
    pub fn tolerance(&self, attribute: Attribute) -> Option<NumericTolerance> {
        match attribute {
            Attribute::Division => None,
            Attribute::Rank => Some(self.rank),
            Attribute::Wins => Some(self.wins),
            Attribute::StrikesLandedPerMin => Some(self.slpm),
            Attribute::StrikesAbsorbedPerMin => Some(self.sapm),
            Attribute::TakedownAvg => Some(self.takedown_avg),
            Attribute::SubmissionAvg => Some(self.submission_avg),
            Attribute::FightTime => Some(self.fight_time),
        }
    }
}
