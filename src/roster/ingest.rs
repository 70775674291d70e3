//! Daily feed ingestion.
//!
//! The scrape job publishes `game_data.json` once a day. Its values are
//! scraped page text: ranks come as `"C"` or `"3"`, records as
//! `"22-3-0 (W-L-D)"`, rates as `"4.32"`, fight times as `"MM:SS"` plus a
//! precomputed seconds field. Everything is parsed and validated here, at
//! the boundary; past this module only `FighterRecord`s exist.
//!
//! Skip vs. fail policy:
//! - Entries in divisions outside the game (women's classes, pound-for-pound
//!   lists) are skipped. The scrape job drops most of these itself; this is
//!   the backstop.
//! - Entries with no `Record` yet are skipped as not-yet-scraped. The scrape
//!   job uses the same field as its own availability marker.
//! - Entries whose present values don't parse are corruption and fail the
//!   whole feed with `InvalidRecord` naming the fighter and field. A
//!   malformed value is never coerced to zero.

use rustc_hash::FxHashMap;
use serde::Deserialize;
use tracing::{info, warn};

use crate::core::{Division, FighterId, FighterRecord, Rank};
use crate::error::{GameError, Result};

use super::registry::Roster;

/// One fighter entry exactly as the feed spells it. All stats are optional
/// at this layer; validation decides what that means.
#[derive(Clone, Debug, Deserialize)]
pub struct RawFighter {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Division")]
    pub division: Option<String>,
    #[serde(rename = "Rank")]
    pub rank: Option<String>,
    #[serde(rename = "Record")]
    pub record: Option<String>,
    #[serde(rename = "SLpM")]
    pub slpm: Option<String>,
    #[serde(rename = "SApM")]
    pub sapm: Option<String>,
    #[serde(rename = "TD_Avg")]
    pub td_avg: Option<String>,
    #[serde(rename = "Sub_Avg")]
    pub sub_avg: Option<String>,
    #[serde(rename = "Fight_Time")]
    pub fight_time: Option<String>,
    #[serde(rename = "Fight_Time_Seconds")]
    pub fight_time_seconds: Option<u32>,
    #[serde(rename = "Profile_URL")]
    pub profile_url: Option<String>,
    #[serde(rename = "Picture_URL")]
    pub picture_url: Option<String>,
    #[serde(rename = "Selected_Date")]
    pub selected_date: Option<String>,
}

/// Top-level feed document.
#[derive(Clone, Debug, Deserialize)]
pub struct RawFeed {
    /// The day's designated target (a copy of its `fighter_data` entry).
    pub daily_fighter: RawFighter,

    /// Recent targets, most recent last. The publisher keeps a short window
    /// to avoid repeats.
    #[serde(default)]
    pub past_fighters: Vec<String>,

    /// Every scraped fighter, keyed by name.
    pub fighter_data: FxHashMap<String, RawFighter>,
}

/// A validated day of game data: the roster plus the designated target.
#[derive(Clone, Debug)]
pub struct DailyFeed {
    roster: Roster,
    target: FighterId,
    past_fighters: Vec<String>,
    selected_date: Option<String>,
}

impl DailyFeed {
    /// Parse and validate a feed document.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_raw(serde_json::from_str(json)?)
    }

    /// Validate an already-parsed feed document.
    pub fn from_raw(raw: RawFeed) -> Result<Self> {
        let mut roster = Roster::new();
        let mut out_of_scope = 0usize;
        let mut incomplete = 0usize;

        // Hash-map iteration order is arbitrary; register by sorted name so
        // ids are reproducible for a given feed.
        let mut names: Vec<&String> = raw.fighter_data.keys().collect();
        names.sort();

        for name in names {
            match validate_entry(&raw.fighter_data[name])? {
                EntryOutcome::Eligible(record) => {
                    roster.register(record)?;
                }
                EntryOutcome::OutOfScope { division } => {
                    out_of_scope += 1;
                    warn!(fighter = %name, %division, "skipping out-of-scope division");
                }
                EntryOutcome::Incomplete { field } => {
                    incomplete += 1;
                    warn!(fighter = %name, field, "skipping not-yet-scraped entry");
                }
            }
        }

        if roster.is_empty() {
            return Err(GameError::EmptyRoster);
        }

        let target = roster
            .id_of(&raw.daily_fighter.name)
            .ok_or_else(|| GameError::TargetMissing(raw.daily_fighter.name.clone()))?;

        info!(
            fighters = roster.len(),
            out_of_scope,
            incomplete,
            target = %raw.daily_fighter.name,
            "daily feed ingested"
        );

        Ok(Self {
            roster,
            target,
            past_fighters: raw.past_fighters,
            selected_date: raw.daily_fighter.selected_date,
        })
    }

    /// The day's roster.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Identity of the day's target.
    #[must_use]
    pub fn target_id(&self) -> FighterId {
        self.target
    }

    /// The day's target record.
    #[must_use]
    pub fn target(&self) -> &FighterRecord {
        self.roster.get(self.target).expect("target is registered")
    }

    /// Recent targets, most recent last.
    #[must_use]
    pub fn past_fighters(&self) -> &[String] {
        &self.past_fighters
    }

    /// When the publisher selected the target (ISO-8601, as published).
    #[must_use]
    pub fn selected_date(&self) -> Option<&str> {
        self.selected_date.as_deref()
    }

    /// Split into parts, for callers building a game directly.
    #[must_use]
    pub fn into_parts(self) -> (Roster, FighterId) {
        (self.roster, self.target)
    }
}

enum EntryOutcome {
    Eligible(FighterRecord),
    OutOfScope { division: String },
    Incomplete { field: &'static str },
}

fn validate_entry(raw: &RawFighter) -> Result<EntryOutcome> {
    let Some(division_name) = raw.division.as_deref() else {
        return Ok(EntryOutcome::Incomplete { field: "Division" });
    };
    let Some(division) = Division::from_feed_name(division_name) else {
        return Ok(EntryOutcome::OutOfScope {
            division: division_name.trim().to_string(),
        });
    };

    let Some(rank_text) = raw.rank.as_deref() else {
        return Ok(EntryOutcome::Incomplete { field: "Rank" });
    };
    let rank = parse_rank(rank_text).ok_or_else(|| invalid(raw, "Rank", rank_text))?;

    // The scrape job only counts a fighter as fully scraped once Record is
    // present; without it the stats block was never fetched.
    let Some(record_text) = raw.record.as_deref() else {
        return Ok(EntryOutcome::Incomplete { field: "Record" });
    };
    let wins = parse_wins(record_text).ok_or_else(|| invalid(raw, "Record", record_text))?;

    let slpm = parse_rate(raw, "SLpM", raw.slpm.as_deref())?;
    let sapm = parse_rate(raw, "SApM", raw.sapm.as_deref())?;
    let td_avg = parse_rate(raw, "TD_Avg", raw.td_avg.as_deref())?;
    let sub_avg = parse_rate(raw, "Sub_Avg", raw.sub_avg.as_deref())?;

    let fight_time_secs = match raw.fight_time_seconds {
        Some(secs) => secs,
        None => {
            let Some(time_text) = raw.fight_time.as_deref() else {
                return Ok(EntryOutcome::Incomplete { field: "Fight_Time" });
            };
            parse_fight_time(time_text).ok_or_else(|| invalid(raw, "Fight_Time", time_text))?
        }
    };

    let record = FighterRecord::new(FighterId::new(0), raw.name.trim(), division, rank)
        .with_wins(wins)
        .with_striking(slpm, sapm)
        .with_grappling(td_avg, sub_avg)
        .with_fight_time(fight_time_secs);

    Ok(EntryOutcome::Eligible(record))
}

fn parse_rate(raw: &RawFighter, field: &'static str, value: Option<&str>) -> Result<f64> {
    let Some(text) = value else {
        // Rates are scraped alongside Record; a hole here with Record present
        // means the page layout changed, not a partial scrape.
        return Err(invalid(raw, field, "missing"));
    };
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or_else(|| invalid(raw, field, text))
}

fn invalid(raw: &RawFighter, field: &'static str, value: &str) -> GameError {
    GameError::InvalidRecord {
        fighter: raw.name.clone(),
        field,
        reason: format!("unusable value {:?}", value),
    }
}

/// Parse a rank cell: `"C"` for champion, otherwise a `1..=15` slot,
/// optionally `#`-prefixed.
fn parse_rank(text: &str) -> Option<Rank> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("c") {
        return Some(Rank::CHAMPION);
    }
    text.trim_start_matches('#')
        .parse::<u8>()
        .ok()
        .filter(|slot| (1..=Rank::LOWEST.raw()).contains(slot))
        .map(Rank::new)
}

/// Wins from a `"W-L-D"` record string; trailing annotations like
/// `"(W-L-D)"` or `"(1 NC)"` are ignored.
fn parse_wins(text: &str) -> Option<u32> {
    text.trim().split('-').next()?.trim().parse().ok()
}

/// Convert an `"MM:SS"` fight-time string to total seconds.
fn parse_fight_time(text: &str) -> Option<u32> {
    let (minutes, seconds) = text.trim().split_once(':')?;
    let minutes: u32 = minutes.trim().parse().ok()?;
    let seconds: u32 = seconds.trim().parse().ok()?;
    if seconds >= 60 {
        return None;
    }
    Some(minutes * 60 + seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rank() {
        assert_eq!(parse_rank("C"), Some(Rank::CHAMPION));
        assert_eq!(parse_rank(" c "), Some(Rank::CHAMPION));
        assert_eq!(parse_rank("3"), Some(Rank::new(3)));
        assert_eq!(parse_rank("#15"), Some(Rank::new(15)));
        assert_eq!(parse_rank("16"), None);
        assert_eq!(parse_rank("0"), None);
        assert_eq!(parse_rank("P4P"), None);
    }

    #[test]
    fn test_parse_wins() {
        assert_eq!(parse_wins("22-3-0 (W-L-D)"), Some(22));
        assert_eq!(parse_wins("28-1-0"), Some(28));
        assert_eq!(parse_wins("N/A"), None);
        assert_eq!(parse_wins(""), None);
    }

    #[test]
    fn test_parse_fight_time() {
        assert_eq!(parse_fight_time("11:32"), Some(692));
        assert_eq!(parse_fight_time("0:45"), Some(45));
        assert_eq!(parse_fight_time("11:75"), None);
        assert_eq!(parse_fight_time("eleven"), None);
    }
}
