//! Star systems and their political make-up.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{ExpansionTarget, Presence};
use crate::conflicts::{pair_conflicts, ConflictRecord};

/// A station orbiting in a system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub controlling_faction: String,
}

/// A populated system and the factions competing in it.
///
/// `factions` holds at most one [`Presence`] per faction name and is kept in
/// influence-descending order, so `factions[0]` is the local leader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct System {
    pub name: String,
    /// 64-bit game address, when the source provides one.
    #[serde(default)]
    pub id64: Option<u64>,
    /// Light years.
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(default)]
    pub controlling_faction: String,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub allegiance: String,
    #[serde(default)]
    pub government: String,
    #[serde(default)]
    pub economy: String,
    #[serde(default)]
    pub security: String,
    /// When the faction data was last observed.
    pub updated: DateTime<Utc>,
    #[serde(default)]
    factions: Vec<Presence>,
    /// Most likely next move out of this system.
    #[serde(default)]
    pub next_expansion: Option<ExpansionTarget>,
    /// Ranked candidate moves, index 0 most likely.
    #[serde(default)]
    pub expansion_targets: Vec<ExpansionTarget>,
    #[serde(default)]
    pub stations: Vec<Station>,
}

impl System {
    /// Create an unpopulated system at the given coordinates.
    pub fn new(name: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            name: name.into(),
            id64: None,
            x,
            y,
            z,
            controlling_faction: String::new(),
            population: 0,
            allegiance: String::new(),
            government: String::new(),
            economy: String::new(),
            security: String::new(),
            updated: DateTime::<Utc>::default(),
            factions: Vec::new(),
            next_expansion: None,
            expansion_targets: Vec::new(),
            stations: Vec::new(),
        }
    }

    /// Add a faction presence.
    pub fn with_presence(mut self, presence: Presence) -> Self {
        self.add_presence(presence);
        self
    }

    /// Set the owning faction.
    pub fn with_controlling_faction(mut self, faction: impl Into<String>) -> Self {
        self.controlling_faction = faction.into();
        self
    }

    /// Set when the faction data was observed.
    pub fn with_updated(mut self, updated: DateTime<Utc>) -> Self {
        self.updated = updated;
        self
    }

    /// Set the population.
    pub fn with_population(mut self, population: u64) -> Self {
        self.population = population;
        self
    }

    /// Set the ranked expansion targets; the first becomes `next_expansion`.
    pub fn with_expansion_targets(mut self, targets: Vec<ExpansionTarget>) -> Self {
        self.next_expansion = targets.first().cloned();
        self.expansion_targets = targets;
        self
    }

    /// Factions present, highest influence first.
    pub fn factions(&self) -> &[Presence] {
        &self.factions
    }

    /// Add or replace a faction's presence.
    pub fn add_presence(&mut self, mut presence: Presence) {
        presence.is_native = self.is_home_of(&presence);

        match self.factions.iter_mut().find(|p| p.name == presence.name) {
            Some(existing) => *existing = presence,
            None => self.factions.push(presence),
        }
        self.sort_factions();
    }

    fn is_home_of(&self, presence: &Presence) -> bool {
        presence.name.contains(&self.name)
            || presence
                .home_system
                .as_deref()
                .is_some_and(|home| home.to_lowercase() == self.name.to_lowercase())
    }

    /// Restore the faction invariants after deserialization: one presence
    /// per name, influence-descending.
    pub fn normalize(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.factions.retain(|p| seen.insert(p.name.clone()));
        self.sort_factions();
    }

    pub(crate) fn factions_mut(&mut self) -> &mut [Presence] {
        &mut self.factions
    }

    fn sort_factions(&mut self) {
        self.factions.sort_by(|a, b| b.influence.total_cmp(&a.influence));
    }

    /// Presence of `faction`, matched by exact name.
    pub fn presence(&self, faction: &str) -> Option<&Presence> {
        self.factions.iter().find(|p| p.name == faction)
    }

    /// Whether `faction` has any influence here.
    pub fn is_faction_present(&self, faction: &str) -> bool {
        self.presence(faction).is_some()
    }

    /// Presence of the faction that owns the system.
    pub fn controlling_presence(&self) -> Option<&Presence> {
        self.presence(&self.controlling_faction)
    }

    /// Whether `faction` owns the system.
    pub fn is_controlled_by(&self, faction: &str) -> bool {
        self.controlling_faction == faction
    }

    /// Influence of the local leader, 0 when nobody is present.
    pub fn influence(&self) -> f64 {
        self.factions.first().map(|p| p.influence).unwrap_or(0.0)
    }

    /// The second-ranked faction.
    pub fn runner_up(&self) -> Option<&Presence> {
        self.factions.get(1)
    }

    /// Lead of the top faction over the second.
    pub fn gap(&self) -> f64 {
        self.influence() - self.runner_up().map(|p| p.influence).unwrap_or(0.0)
    }

    /// The strongest faction other than `faction`.
    pub fn nearest_rival(&self, faction: &str) -> Option<&Presence> {
        self.factions.iter().find(|p| p.name != faction)
    }

    /// Lead of `faction` over its nearest rival, negative when it trails.
    ///
    /// `None` unless both the faction and a rival are present.
    pub fn lead_over_rival(&self, faction: &str) -> Option<(&Presence, f64)> {
        let mine = self.presence(faction)?;
        let rival = self.nearest_rival(faction)?;
        Some((rival, mine.influence - rival.influence))
    }

    /// Straight-line distance, rounded to 2 decimals.
    pub fn distance_to(&self, other: &System) -> f64 {
        let d = ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt();
        (d * 100.0).round() / 100.0
    }

    /// Largest single-axis difference; the metric for reachability.
    pub fn cube_distance_to(&self, other: &System) -> f64 {
        (self.x - other.x)
            .abs()
            .max((self.y - other.y).abs())
            .max((self.z - other.z).abs())
    }

    /// Merge fresher faction data into this system.
    ///
    /// Ignored unless the update is newer than what is held or `forced` is
    /// set. Returns whether the system changed.
    pub fn apply_update(&mut self, update: SystemUpdate, forced: bool) -> bool {
        if update.updated <= self.updated && !forced {
            trace!(system = %self.name, "update is not newer, ignored");
            return false;
        }

        self.updated = update.updated;
        self.controlling_faction = update.controlling_faction;

        // Factions that have left since the previous data are dropped.
        self.factions.clear();
        for presence in update.factions.into_iter().filter(|p| p.influence > 0.0) {
            self.add_presence(presence);
        }

        let paired = pair_conflicts(self, &update.conflicts);
        debug!(system = %self.name, factions = self.factions.len(), paired, "system updated");
        true
    }
}

/// Fresh faction data for one system, as returned by a live data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemUpdate {
    pub updated: DateTime<Utc>,
    pub controlling_faction: String,
    pub factions: Vec<Presence>,
    #[serde(default)]
    pub conflicts: Vec<ConflictRecord>,
}
