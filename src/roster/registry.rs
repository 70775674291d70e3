//! Day-roster registry: fighter lookup by id or name.
//!
//! The roster is built once per day at ingestion and is read-only afterward.
//! Name lookup is case-insensitive and trims whitespace, since names arrive
//! from player input; ids are registry-assigned and used for identity checks.

use rustc_hash::FxHashMap;

use crate::core::{Division, FighterId, FighterRecord};
use crate::error::{GameError, Result};

fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// The day's eligible fighters.
///
/// ## Example
///
/// ```
/// use tale_of_the_tape::core::{Division, FighterId, FighterRecord, Rank};
/// use tale_of_the_tape::roster::Roster;
///
/// let mut roster = Roster::new();
/// let record = FighterRecord::new(FighterId::new(0), "Max Holloway", Division::Lightweight, Rank::new(5))
///     .with_wins(26)
///     .with_striking(7.22, 4.97)
///     .with_grappling(0.4, 0.2)
///     .with_fight_time(930);
///
/// let id = roster.register(record).unwrap();
/// assert_eq!(roster.find_by_name("max holloway").unwrap().id, id);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Roster {
    fighters: FxHashMap<FighterId, FighterRecord>,
    by_name: FxHashMap<String, FighterId>,
    next_id: u32,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and register a record, assigning its id.
    ///
    /// The record's incoming `id` field is overwritten with the next free
    /// slot; the assigned id is returned. Fails on an invalid record or a
    /// name that is already taken.
    pub fn register(&mut self, record: FighterRecord) -> Result<FighterId> {
        record.validate()?;

        let key = name_key(&record.name);
        if self.by_name.contains_key(&key) {
            return Err(GameError::DuplicateName(record.name));
        }

        let id = FighterId::new(self.next_id);
        self.next_id += 1;

        let mut record = record;
        record.id = id;
        self.by_name.insert(key, id);
        self.fighters.insert(id, record);
        Ok(id)
    }

    /// Get a fighter by id.
    #[must_use]
    pub fn get(&self, id: FighterId) -> Option<&FighterRecord> {
        self.fighters.get(&id)
    }

    /// Look up a fighter by name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&FighterRecord> {
        self.by_name
            .get(&name_key(name))
            .and_then(|id| self.fighters.get(id))
    }

    /// Look up just the id for a name.
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<FighterId> {
        self.by_name.get(&name_key(name)).copied()
    }

    /// Check whether an id is registered.
    #[must_use]
    pub fn contains(&self, id: FighterId) -> bool {
        self.fighters.contains_key(&id)
    }

    /// Number of registered fighters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fighters.len()
    }

    /// Is the roster empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fighters.is_empty()
    }

    /// Iterate over all fighters.
    pub fn iter(&self) -> impl Iterator<Item = &FighterRecord> {
        self.fighters.values()
    }

    /// Fighters in one division.
    pub fn find_by_division(&self, division: Division) -> impl Iterator<Item = &FighterRecord> {
        self.fighters
            .values()
            .filter(move |f| f.division == division)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rank;

    fn record(name: &str, division: Division) -> FighterRecord {
        FighterRecord::new(FighterId::new(0), name, division, Rank::new(3))
            .with_wins(15)
            .with_striking(3.5, 2.5)
            .with_grappling(1.0, 0.5)
            .with_fight_time(540)
    }

    #[test]
    fn test_register_assigns_sequential_ids() {
        let mut roster = Roster::new();

        let a = roster.register(record("Fighter A", Division::Lightweight)).unwrap();
        let b = roster.register(record("Fighter B", Division::Lightweight)).unwrap();

        assert_eq!(a, FighterId::new(0));
        assert_eq!(b, FighterId::new(1));
        assert_eq!(roster.get(a).unwrap().id, a);
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_name_lookup_is_case_insensitive() {
        let mut roster = Roster::new();
        let id = roster.register(record("Alex Pereira", Division::LightHeavyweight)).unwrap();

        assert_eq!(roster.id_of("alex pereira"), Some(id));
        assert_eq!(roster.id_of("  ALEX PEREIRA  "), Some(id));
        assert_eq!(roster.id_of("Alex Volkanovski"), None);
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let mut roster = Roster::new();
        roster.register(record("Same Name", Division::Lightweight)).unwrap();

        let result = roster.register(record("same name", Division::Welterweight));
        assert!(matches!(result, Err(GameError::DuplicateName(_))));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_invalid_record_is_rejected() {
        let mut roster = Roster::new();
        let broken = record("Broken", Division::Lightweight).with_striking(-1.0, 2.0);

        assert!(matches!(
            roster.register(broken),
            Err(GameError::InvalidRecord { .. })
        ));
        assert!(roster.is_empty());
    }

    #[test]
    fn test_find_by_division() {
        let mut roster = Roster::new();
        roster.register(record("LW One", Division::Lightweight)).unwrap();
        roster.register(record("LW Two", Division::Lightweight)).unwrap();
        roster.register(record("HW One", Division::Heavyweight)).unwrap();

        assert_eq!(roster.find_by_division(Division::Lightweight).count(), 2);
        assert_eq!(roster.find_by_division(Division::Heavyweight).count(), 1);
        assert_eq!(roster.find_by_division(Division::Flyweight).count(), 0);
    }
}
