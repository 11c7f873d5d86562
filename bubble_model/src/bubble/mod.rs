//! The bubble - every known system for one run, and the spatial queries over
//! them.
//!
//! Two metrics are in play. Reachability ("is it in range?") uses cube
//! distance, because jump ranges form a cube rather than a sphere; ordering
//! of candidates inside that cube uses straight-line distance.

use serde::{Deserialize, Serialize};

use crate::entities::System;

/// Cube range for a simple expansion.
pub const SIMPLE_RANGE: f64 = 20.0;

/// All systems known for the duration of one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bubble {
    systems: Vec<System>,
}

impl Bubble {
    /// Build a bubble, restoring per-system faction ordering.
    pub fn new(mut systems: Vec<System>) -> Self {
        for system in &mut systems {
            system.normalize();
        }
        Self { systems }
    }

    /// Build a bubble of the systems within cube `range` of any system where
    /// `faction` is present.
    pub fn around_faction(systems: Vec<System>, faction: &str, range: f64) -> Self {
        let empire: Vec<(f64, f64, f64)> = systems
            .iter()
            .filter(|s| s.is_faction_present(faction))
            .map(|s| (s.x, s.y, s.z))
            .collect();

        let kept = systems
            .into_iter()
            .filter(|s| {
                empire.iter().any(|&(x, y, z)| {
                    (s.x - x).abs().max((s.y - y).abs()).max((s.z - z).abs()) <= range
                })
            })
            .collect();

        Self::new(kept)
    }

    /// All systems, in bubble order.
    pub fn systems(&self) -> &[System] {
        &self.systems
    }

    /// Number of systems.
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// Whether the bubble holds no systems.
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// Case-insensitive lookup by name. A miss is an ordinary outcome.
    pub fn get(&self, name: &str) -> Option<&System> {
        let wanted = name.to_lowercase();
        self.systems.iter().find(|s| s.name.to_lowercase() == wanted)
    }

    /// Mutable case-insensitive lookup by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut System> {
        let wanted = name.to_lowercase();
        self.systems
            .iter_mut()
            .find(|s| s.name.to_lowercase() == wanted)
    }

    /// Straight-line distance between two named systems, `None` if either is
    /// unknown.
    pub fn distance(&self, a: &str, b: &str) -> Option<f64> {
        Some(self.get(a)?.distance_to(self.get(b)?))
    }

    /// Cube distance between two named systems, `None` if either is unknown.
    pub fn cube_distance(&self, a: &str, b: &str) -> Option<f64> {
        Some(self.get(a)?.cube_distance_to(self.get(b)?))
    }

    /// Systems within cube `range` of `origin`, nearest first.
    ///
    /// With `exclude_faction` set, systems where that faction already has a
    /// presence are left out. The origin itself is included when it
    /// qualifies. Equal distances keep bubble order.
    pub fn cube_systems(&self, origin: &System, range: f64, exclude_faction: Option<&str>) -> Vec<&System> {
        let mut found: Vec<(f64, &System)> = self
            .systems
            .iter()
            .filter(|s| origin.cube_distance_to(s) <= range)
            .filter(|s| exclude_faction.map_or(true, |f| !s.is_faction_present(f)))
            .map(|s| (origin.distance_to(s), s))
            .collect();

        found.sort_by(|a, b| a.0.total_cmp(&b.0));
        found.into_iter().map(|(_, s)| s).collect()
    }

    /// Every system where `faction` has a presence, in bubble order.
    pub fn faction_presence(&self, faction: &str) -> Vec<&System> {
        self.systems
            .iter()
            .filter(|s| s.is_faction_present(faction))
            .collect()
    }
}
