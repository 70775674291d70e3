//! Core domain types: divisions, ranks, fighter records.
//!
//! These are the read-only inputs everything else consumes. Validation lives
//! here; ingestion enforces it at the boundary and the engine re-checks its
//! preconditions.

pub mod division;
pub mod fighter;

pub use division::Division;
pub use fighter::{FighterId, FighterRecord, Rank};
