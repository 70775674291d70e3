//! Guess feedback: tiers, directions, tolerances, and the engine.
//!
//! The engine is a pure function of (guess, target, tuning). Everything the
//! UI renders after a guess comes out of here.

pub mod config;
pub mod engine;
pub mod row;

pub use config::{FeedbackConfig, NumericTolerance};
pub use engine::FeedbackEngine;
pub use row::{Attribute, AttributeFeedback, Direction, FeedbackRows, MatchTier};
