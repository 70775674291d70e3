//! The feedback engine: compares a guessed tape against the target's.
//!
//! `evaluate` is a pure function of its two records and the engine's
//! tolerances. No ambient state, no randomness: identical inputs always
//! produce identical rows, which is what makes replay and testing cheap.

use crate::core::{Division, FighterRecord};
use crate::error::Result;

use super::config::FeedbackConfig;
use super::row::{Attribute, AttributeFeedback, Direction, FeedbackRows};

/// Compares fighter tapes under a fixed set of tolerances.
#[derive(Clone, Debug, Default)]
pub struct FeedbackEngine {
    config: FeedbackConfig,
}

impl FeedbackEngine {
    /// Create an engine with the given tuning.
    #[must_use]
    pub fn new(config: FeedbackConfig) -> Self {
        Self { config }
    }

    /// Get the engine's tuning.
    #[must_use]
    pub fn config(&self) -> &FeedbackConfig {
        &self.config
    }

    /// Compare a guessed fighter's tape against the target's.
    ///
    /// Returns eight rows in [`Attribute::ORDER`]. Both records must pass
    /// [`FighterRecord::validate`]; a malformed record is an error, never a
    /// defaulted comparison.
    pub fn evaluate(&self, guess: &FighterRecord, target: &FighterRecord) -> Result<FeedbackRows> {
        guess.validate()?;
        target.validate()?;

        let mut rows = FeedbackRows::new();
        rows.push(self.division_row(guess.division, target.division));
        rows.push(self.numeric_row(
            Attribute::Rank,
            f64::from(guess.rank.raw()),
            f64::from(target.rank.raw()),
        ));
        rows.push(self.numeric_row(
            Attribute::Wins,
            f64::from(guess.career_wins),
            f64::from(target.career_wins),
        ));
        rows.push(self.numeric_row(Attribute::StrikesLandedPerMin, guess.slpm, target.slpm));
        rows.push(self.numeric_row(Attribute::StrikesAbsorbedPerMin, guess.sapm, target.sapm));
        rows.push(self.numeric_row(
            Attribute::TakedownAvg,
            guess.takedown_avg,
            target.takedown_avg,
        ));
        rows.push(self.numeric_row(
            Attribute::SubmissionAvg,
            guess.submission_avg,
            target.submission_avg,
        ));
        rows.push(self.numeric_row(
            Attribute::FightTime,
            f64::from(guess.total_fight_time_secs),
            f64::from(target.total_fight_time_secs),
        ));

        Ok(rows)
    }

    /// Division is ordinal-adjacent: one class away still hints a direction,
    /// anything further is a plain miss.
    fn division_row(&self, guess: Division, target: Division) -> AttributeFeedback {
        if guess == target {
            return AttributeFeedback::exact(Attribute::Division);
        }

        let direction = if target > guess {
            Direction::Higher
        } else {
            Direction::Lower
        };

        if guess.class_distance(target) <= self.config.division_adjacency {
            AttributeFeedback::close(Attribute::Division, direction)
        } else {
            AttributeFeedback::wrong(Attribute::Division, None)
        }
    }

    fn numeric_row(&self, attribute: Attribute, guess: f64, target: f64) -> AttributeFeedback {
        if guess == target {
            return AttributeFeedback::exact(attribute);
        }

        let direction = if target > guess {
            Direction::Higher
        } else {
            Direction::Lower
        };

        let tolerance = self
            .config
            .tolerance(attribute)
            .expect("numeric attribute has a tolerance");

        if tolerance.is_close((guess - target).abs()) {
            AttributeFeedback::close(attribute, direction)
        } else {
            AttributeFeedback::wrong(attribute, Some(direction))
        }
    }
}
