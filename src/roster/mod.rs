//! The day's roster: registry plus the feed ingestion boundary.

pub mod ingest;
pub mod registry;

pub use ingest::{DailyFeed, RawFeed, RawFighter};
pub use registry::Roster;
