//! Conflict pairing - mirrors the two sides of a war or election onto each
//! faction's conflict state.
//!
//! Live data reports conflicts as two-sided records, separately from the
//! per-faction state lists. Pairing runs in two passes:
//! 1. **Reduce**: records are keyed by the unordered pair of faction names, so
//!    duplicates collapse and orientation does not matter.
//! 2. **Assign**: each pair whose two factions are both present with a
//!    conflict state writes the opponent, stake and day counts into both sides.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::entities::{ConflictDetail, System};

/// One side of a conflict record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictSide {
    pub name: String,
    #[serde(default)]
    pub stake: String,
    #[serde(default)]
    pub days_won: u32,
}

impl ConflictSide {
    /// Create one side of a conflict.
    pub fn new(name: impl Into<String>, stake: impl Into<String>, days_won: u32) -> Self {
        Self {
            name: name.into(),
            stake: stake.into(),
            days_won,
        }
    }
}

/// A two-sided conflict as reported by a data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictRecord {
    pub faction1: ConflictSide,
    pub faction2: ConflictSide,
}

impl ConflictRecord {
    /// Create a record from its two sides.
    pub fn new(faction1: ConflictSide, faction2: ConflictSide) -> Self {
        Self { faction1, faction2 }
    }

    /// The record seen from `faction`'s side, if it takes part.
    fn sides_for(&self, faction: &str) -> Option<(&ConflictSide, &ConflictSide)> {
        if self.faction1.name == faction {
            Some((&self.faction1, &self.faction2))
        } else if self.faction2.name == faction {
            Some((&self.faction2, &self.faction1))
        } else {
            None
        }
    }
}

/// Unordered pair of faction names.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FactionPair(String, String);

impl FactionPair {
    /// The same pair regardless of argument order.
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            Self(a.to_string(), b.to_string())
        } else {
            Self(b.to_string(), a.to_string())
        }
    }
}

/// Mirror conflict records onto the matching states of `system`.
///
/// Returns the number of pairs that were applied.
pub fn pair_conflicts(system: &mut System, records: &[ConflictRecord]) -> usize {
    let mut pairs: BTreeMap<FactionPair, &ConflictRecord> = BTreeMap::new();
    for record in records {
        if record.faction1.name == record.faction2.name {
            continue;
        }
        pairs.insert(
            FactionPair::new(&record.faction1.name, &record.faction2.name),
            record,
        );
    }

    // Keep only pairs where both sides are present and hold a conflict state.
    let in_conflict = |name: &str| {
        system
            .presence(name)
            .is_some_and(|p| p.states.iter().any(|s| s.is_conflict()))
    };
    pairs.retain(|pair, _| in_conflict(&pair.0) && in_conflict(&pair.1));

    let mut per_faction: HashMap<String, Vec<ConflictDetail>> = HashMap::new();
    for record in pairs.values() {
        for side in [&record.faction1, &record.faction2] {
            if let Some((own, other)) = record.sides_for(&side.name) {
                per_faction
                    .entry(own.name.clone())
                    .or_default()
                    .push(ConflictDetail {
                        opponent: other.name.clone(),
                        at_stake: own.stake.clone(),
                        days_won: own.days_won,
                        days_lost: other.days_won,
                        gain: other.stake.clone(),
                    });
            }
        }
    }

    for presence in system.factions_mut() {
        let Some(details) = per_faction.remove(&presence.name) else {
            continue;
        };
        let mut details = details.into_iter();
        for state in presence.states.iter_mut().filter(|s| s.is_conflict()) {
            match details.next() {
                Some(detail) => state.conflict = Some(detail),
                None => break,
            }
        }
    }

    pairs.len()
}
