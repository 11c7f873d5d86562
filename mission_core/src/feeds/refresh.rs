//! Live refresh of the faction's systems before evaluation.

use bubble_model::Bubble;
use tracing::{debug, info, warn};

use super::{CollaboratorError, LiveDataSource};

/// What a refresh pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshSummary {
    pub checked: usize,
    pub refreshed: usize,
    pub failed: usize,
}

/// Bring the faction's systems up to date from `source`.
///
/// A system is re-fetched when the bubble copy is older than the source's, or
/// when it is in conflict (conflict data is always applied). Unknown systems
/// and per-system fetch failures are skipped; only failure to list the
/// faction's systems is returned as an error.
pub fn refresh_faction(
    bubble: &mut Bubble,
    faction: &str,
    source: &dyn LiveDataSource,
) -> Result<RefreshSummary, CollaboratorError> {
    let statuses = source.faction_systems(faction)?;
    let mut summary = RefreshSummary::default();

    for status in statuses {
        let Some(system) = bubble.get_mut(&status.system_name) else {
            debug!(system = %status.system_name, "refresh skipped, system not in bubble");
            continue;
        };
        summary.checked += 1;

        if system.updated >= status.updated && !status.in_conflict {
            continue;
        }

        match source.system_details(&system.name) {
            Ok(update) => {
                if system.apply_update(update, status.in_conflict) {
                    summary.refreshed += 1;
                }
            }
            Err(e) => {
                warn!(system = %system.name, error = %e, "live refresh failed");
                summary.failed += 1;
            }
        }
    }

    info!(
        faction,
        checked = summary.checked,
        refreshed = summary.refreshed,
        failed = summary.failed,
        "live refresh complete"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feeds::FactionSystemStatus;
    use bubble_model::{Presence, System, SystemUpdate};
    use chrono::{DateTime, Duration, Utc};
    use std::collections::HashMap;

    struct FakeLive {
        statuses: Vec<FactionSystemStatus>,
        details: HashMap<String, SystemUpdate>,
    }

    impl LiveDataSource for FakeLive {
        fn faction_systems(&self, _faction: &str) -> Result<Vec<FactionSystemStatus>, CollaboratorError> {
            Ok(self.statuses.clone())
        }

        fn system_details(&self, system: &str) -> Result<SystemUpdate, CollaboratorError> {
            self.details
                .get(system)
                .cloned()
                .ok_or_else(|| CollaboratorError::not_found("system", system))
        }
    }

    fn update(at: DateTime<Utc>, influence: f64) -> SystemUpdate {
        SystemUpdate {
            updated: at,
            controlling_faction: "Canonn".to_string(),
            factions: vec![Presence::new("Canonn", influence)],
            conflicts: vec![],
        }
    }

    #[test]
    fn test_refresh_only_outdated_or_conflicted() {
        let now = Utc::now();
        let old = now - Duration::days(3);
        let mut bubble = Bubble::new(vec![
            System::new("Outdated", 0.0, 0.0, 0.0)
                .with_updated(old)
                .with_presence(Presence::new("Canonn", 40.0)),
            System::new("Current", 1.0, 0.0, 0.0)
                .with_updated(now)
                .with_presence(Presence::new("Canonn", 40.0)),
            System::new("AtWar", 2.0, 0.0, 0.0)
                .with_updated(now)
                .with_presence(Presence::new("Canonn", 40.0)),
            System::new("Broken", 3.0, 0.0, 0.0)
                .with_updated(old)
                .with_presence(Presence::new("Canonn", 40.0)),
        ]);

        let status = |name: &str, in_conflict| FactionSystemStatus {
            system_name: name.to_string(),
            updated: now,
            in_conflict,
        };
        let source = FakeLive {
            statuses: vec![
                status("Outdated", false),
                status("Current", false),
                status("AtWar", true),
                status("Broken", false),
                status("Elsewhere", false),
            ],
            details: HashMap::from([
                ("Outdated".to_string(), update(now, 55.0)),
                ("Current".to_string(), update(now, 99.0)),
                ("AtWar".to_string(), update(now, 45.0)),
            ]),
        };

        let summary = refresh_faction(&mut bubble, "Canonn", &source).expect("listing works");

        assert_eq!(
            summary,
            RefreshSummary {
                checked: 4,
                refreshed: 2,
                failed: 1,
            }
        );
        assert_eq!(bubble.get("Outdated").map(|s| s.influence()), Some(55.0));
        assert_eq!(bubble.get("Current").map(|s| s.influence()), Some(40.0));
        assert_eq!(bubble.get("AtWar").map(|s| s.influence()), Some(45.0));
        assert_eq!(bubble.get("Broken").map(|s| s.influence()), Some(40.0));
    }

    struct DownLive;

    impl LiveDataSource for DownLive {
        fn faction_systems(&self, _faction: &str) -> Result<Vec<FactionSystemStatus>, CollaboratorError> {
            Err(CollaboratorError::unavailable("live", "offline"))
        }

        fn system_details(&self, system: &str) -> Result<SystemUpdate, CollaboratorError> {
            Err(CollaboratorError::not_found("system", system))
        }
    }

    #[test]
    fn test_listing_failure_is_reported() {
        let mut bubble = Bubble::default();
        assert!(refresh_faction(&mut bubble, "Canonn", &DownLive).is_err());
    }
}
