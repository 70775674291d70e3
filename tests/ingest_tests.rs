//! Feed ingestion integration tests.
//!
//! Fixtures mirror the shape the scrape job publishes: string stats,
//! champion ranks, W-L-D record strings, MM:SS fight times, and the odd
//! half-scraped entry.

use tale_of_the_tape::{
    DailyFeed, DailyGame, Division, GameError, GameStatus, MatchTier, Rank,
};

fn feed_json() -> String {
    r#"{
        "daily_fighter": {
            "Name": "Islam Makhachev",
            "Division": "Lightweight",
            "Rank": "C",
            "Record": "26-1-0 (W-L-D)",
            "SLpM": "3.13",
            "SApM": "1.61",
            "TD_Avg": "3.26",
            "Sub_Avg": "1.10",
            "Fight_Time": "11:32",
            "Fight_Time_Seconds": 692,
            "Profile_URL": "https://www.ufc.com/athlete/islam-makhachev",
            "Selected_Date": "2026-08-06T05:00:00Z"
        },
        "past_fighters": ["Charles Oliveira", "Arman Tsarukyan"],
        "fighter_data": {
            "Islam Makhachev": {
                "Name": "Islam Makhachev",
                "Division": "Lightweight",
                "Rank": "C",
                "Record": "26-1-0 (W-L-D)",
                "SLpM": "3.13",
                "SApM": "1.61",
                "TD_Avg": "3.26",
                "Sub_Avg": "1.10",
                "Fight_Time": "11:32",
                "Fight_Time_Seconds": 692
            },
            "Charles Oliveira": {
                "Name": "Charles Oliveira",
                "Division": "Lightweight",
                "Rank": "1",
                "Record": "34-10-0 (W-L-D)",
                "SLpM": "3.54",
                "SApM": "3.16",
                "TD_Avg": "2.29",
                "Sub_Avg": "2.60",
                "Fight_Time": "9:14"
            },
            "Zhang Weili": {
                "Name": "Zhang Weili",
                "Division": "Women's Strawweight",
                "Rank": "C",
                "Record": "25-3-0 (W-L-D)",
                "SLpM": "5.95",
                "SApM": "3.50",
                "TD_Avg": "2.10",
                "Sub_Avg": "0.60",
                "Fight_Time_Seconds": 780
            },
            "Fresh Signing": {
                "Name": "Fresh Signing",
                "Division": "Lightweight",
                "Rank": "15"
            }
        }
    }"#
    .to_string()
}

// =============================================================================
// Happy path
// =============================================================================

/// A realistic feed parses into a roster with the daily fighter resolved.
#[test]
fn test_feed_parses_and_resolves_target() {
    let feed = DailyFeed::from_json(&feed_json()).unwrap();

    // Women's division and the half-scraped entry are skipped.
    assert_eq!(feed.roster().len(), 2);
    assert_eq!(feed.target().name, "Islam Makhachev");
    assert_eq!(feed.past_fighters(), ["Charles Oliveira", "Arman Tsarukyan"]);
    assert_eq!(feed.selected_date(), Some("2026-08-06T05:00:00Z"));
}

/// Scraped text becomes typed values: champion rank, W-L-D wins, MM:SS
/// fallback when the seconds field is absent.
#[test]
fn test_scraped_text_is_parsed() {
    let feed = DailyFeed::from_json(&feed_json()).unwrap();

    let champ = feed.target();
    assert_eq!(champ.rank, Rank::CHAMPION);
    assert_eq!(champ.career_wins, 26);
    assert_eq!(champ.division, Division::Lightweight);
    assert_eq!(champ.weight_lb, 155);
    assert_eq!(champ.total_fight_time_secs, 692);

    let oliveira = feed.roster().find_by_name("Charles Oliveira").unwrap();
    assert_eq!(oliveira.rank, Rank::new(1));
    // No Fight_Time_Seconds in the fixture; parsed from "9:14".
    assert_eq!(oliveira.total_fight_time_secs, 554);
}

/// The feed feeds straight into a playable game.
#[test]
fn test_feed_to_game_roundtrip() {
    let feed = DailyFeed::from_json(&feed_json()).unwrap();
    let game = DailyGame::from_feed(feed);
    let mut session = game.new_session();

    let outcome = game.submit(&mut session, "charles oliveira").unwrap();
    assert_eq!(outcome.status, GameStatus::InProgress);
    // Same division as the target: the first row is Exact.
    assert_eq!(outcome.attempt.feedback[0].tier, MatchTier::Exact);

    let outcome = game.submit(&mut session, "Islam Makhachev").unwrap();
    assert_eq!(outcome.status, GameStatus::Won);
}

// =============================================================================
// Failure modes
// =============================================================================

/// A present-but-garbage stat fails the feed, naming fighter and field.
#[test]
fn test_malformed_stat_fails_loudly() {
    let json = feed_json().replace("\"3.54\"", "\"3.5.4\"");
    let result = DailyFeed::from_json(&json);

    match result {
        Err(GameError::InvalidRecord { fighter, field, .. }) => {
            assert_eq!(fighter, "Charles Oliveira");
            assert_eq!(field, "SLpM");
        }
        other => panic!("expected InvalidRecord, got {:?}", other.err()),
    }
}

/// A negative rate is rejected, never coerced.
#[test]
fn test_negative_rate_fails_loudly() {
    let json = feed_json().replace("\"2.29\"", "\"-2.29\"");
    assert!(matches!(
        DailyFeed::from_json(&json),
        Err(GameError::InvalidRecord { field: "TD_Avg", .. })
    ));
}

/// An out-of-range rank is corruption, not a skip.
#[test]
fn test_out_of_range_rank_fails() {
    let json = feed_json().replace("\"Rank\": \"1\",", "\"Rank\": \"19\",");
    assert!(matches!(
        DailyFeed::from_json(&json),
        Err(GameError::InvalidRecord { field: "Rank", .. })
    ));
}

/// A daily fighter that didn't survive validation is an explicit error.
#[test]
fn test_target_missing_from_roster() {
    let mut doc: serde_json::Value = serde_json::from_str(&feed_json()).unwrap();
    doc["daily_fighter"]["Name"] = serde_json::Value::from("Nobody Home");

    assert!(matches!(
        DailyFeed::from_json(&doc.to_string()),
        Err(GameError::TargetMissing(name)) if name == "Nobody Home"
    ));
}

/// A syntactically broken document surfaces the parse error.
#[test]
fn test_broken_json_fails() {
    assert!(matches!(
        DailyFeed::from_json("{ not json"),
        Err(GameError::Feed(_))
    ));
}

/// A feed with nothing eligible is an empty roster, not a playable game.
#[test]
fn test_all_skipped_is_empty_roster() {
    let json = r#"{
        "daily_fighter": { "Name": "Zhang Weili" },
        "fighter_data": {
            "Zhang Weili": {
                "Name": "Zhang Weili",
                "Division": "Women's Strawweight",
                "Rank": "C",
                "Record": "25-3-0 (W-L-D)",
                "SLpM": "5.95",
                "SApM": "3.50",
                "TD_Avg": "2.10",
                "Sub_Avg": "0.60",
                "Fight_Time_Seconds": 780
            }
        }
    }"#;
    assert!(matches!(
        DailyFeed::from_json(json),
        Err(GameError::EmptyRoster)
    ));
}
