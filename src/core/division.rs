//! Weight divisions: the ordered categorical axis of the tape.
//!
//! Divisions are a fixed total order, lightest to heaviest. Feedback treats
//! them as ordinal-adjacent: an exact match is `Exact`, a neighboring class
//! is `Close` with a direction, anything further is `Wrong`.

use serde::{Deserialize, Serialize};

/// Men's UFC weight divisions, lightest to heaviest.
///
/// The declaration order is a contract: adjacency feedback and the
/// "one class above/below" hint are computed from positions in this list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Division {
    Flyweight,
    Bantamweight,
    Featherweight,
    Lightweight,
    Welterweight,
    Middleweight,
    LightHeavyweight,
    Heavyweight,
}

impl Division {
    /// All divisions in ordering position.
    pub const ALL: [Division; 8] = [
        Division::Flyweight,
        Division::Bantamweight,
        Division::Featherweight,
        Division::Lightweight,
        Division::Welterweight,
        Division::Middleweight,
        Division::LightHeavyweight,
        Division::Heavyweight,
    ];

    /// Upper weight limit in pounds.
    #[must_use]
    pub const fn weight_limit_lb(self) -> u32 {
        match self {
            Division::Flyweight => 125,
            Division::Bantamweight => 135,
            Division::Featherweight => 145,
            Division::Lightweight => 155,
            Division::Welterweight => 170,
            Division::Middleweight => 185,
            Division::LightHeavyweight => 205,
            Division::Heavyweight => 265,
        }
    }

    /// Position in the lightest-to-heaviest ordering.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Number of classes between two divisions (0 = same).
    #[must_use]
    pub fn class_distance(self, other: Division) -> u8 {
        self.ordinal().abs_diff(other.ordinal())
    }

    /// Parse a division name as the rankings feed spells it.
    ///
    /// Returns `None` for divisions outside the game (women's classes,
    /// pound-for-pound lists) so the caller can skip them.
    #[must_use]
    pub fn from_feed_name(name: &str) -> Option<Division> {
        match name.trim() {
            "Flyweight" => Some(Division::Flyweight),
            "Bantamweight" => Some(Division::Bantamweight),
            "Featherweight" => Some(Division::Featherweight),
            "Lightweight" => Some(Division::Lightweight),
            "Welterweight" => Some(Division::Welterweight),
            "Middleweight" => Some(Division::Middleweight),
            "Light Heavyweight" => Some(Division::LightHeavyweight),
            "Heavyweight" => Some(Division::Heavyweight),
            _ => None,
        }
    }
}

impl std::fmt::Display for Division {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Division::Flyweight => "Flyweight",
            Division::Bantamweight => "Bantamweight",
            Division::Featherweight => "Featherweight",
            Division::Lightweight => "Lightweight",
            Division::Welterweight => "Welterweight",
            Division::Middleweight => "Middleweight",
            Division::LightHeavyweight => "Light Heavyweight",
            Division::Heavyweight => "Heavyweight",
        };
        write!(f, "{}", name)
    }
}
