//! Shared fixtures for the engine's unit tests.

use bubble_model::{Presence, System};
use chrono::{DateTime, TimeZone, Utc};

use crate::config::EngineConfig;

pub(crate) const FACTION: &str = "Canonn";

pub(crate) fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap()
}

pub(crate) fn config() -> EngineConfig {
    EngineConfig::for_faction(FACTION)
}

/// A system updated at [`now`], controlled by the top faction listed.
pub(crate) fn system(name: &str, x: f64, factions: &[(&str, f64)]) -> System {
    let mut system = System::new(name, x, 0.0, 0.0).with_updated(now());
    for (faction, influence) in factions {
        system.add_presence(Presence::new(*faction, *influence));
    }
    let controller = system.factions().first().map(|p| p.name.clone()).unwrap_or_default();
    system.with_controlling_faction(controller)
}
