//! Collaborator interfaces - where the engine's inputs come from.
//!
//! Every external service (population dumps, live faction data, the manual
//! override sheet, carrier tracking, the threat summary) sits behind one of
//! the traits here. Payloads are converted to these fixed record types at the
//! boundary, so nothing past this module sees raw collaborator shapes.

mod refresh;

pub use refresh::*;

use bubble_model::{System, SystemUpdate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CollaboratorError {
    #[error("{source_name} unavailable: {reason}")]
    Unavailable { source_name: String, reason: String },
    #[error("{what} not found: {key}")]
    NotFound { what: String, key: String },
}

impl CollaboratorError {
    pub fn unavailable(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    pub fn not_found(what: impl Into<String>, key: impl Into<String>) -> Self {
        Self::NotFound {
            what: what.into(),
            key: key.into(),
        }
    }
}

/// A manually authored message, as entered by a human.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawOverride {
    pub system_name: String,
    pub priority: i32,
    pub text: String,
    pub icon: String,
    /// Free text; only the first letter matters (`O`verride / `P`eacetime).
    #[serde(default)]
    pub kind: String,
}

/// A mobile asset whose location is reported each run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedAsset {
    /// Ids starting with `!` are disabled.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: String,
}

impl TrackedAsset {
    pub fn is_disabled(&self) -> bool {
        self.id.starts_with('!')
    }
}

/// Progress against an external threat in one system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatRecord {
    pub system_name: String,
    pub threat: String,
    /// 0-100.
    pub progress: f64,
}

/// Last known update of one of the faction's systems, per the live source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactionSystemStatus {
    pub system_name: String,
    pub updated: DateTime<Utc>,
    pub in_conflict: bool,
}

/// Supplies the initial snapshot, already trimmed to the cube range around
/// the faction.
pub trait SystemSource {
    fn fetch_systems(&self, faction: &str, range: f64) -> Result<Vec<System>, CollaboratorError>;
}

/// Supplies fresher per-system faction data than the snapshot.
pub trait LiveDataSource {
    fn faction_systems(&self, faction: &str) -> Result<Vec<FactionSystemStatus>, CollaboratorError>;

    fn system_details(&self, system: &str) -> Result<SystemUpdate, CollaboratorError>;
}

pub trait OverrideSource {
    fn read_overrides(&self) -> Result<Vec<RawOverride>, CollaboratorError>;
}

pub trait AssetRoster {
    fn read_tracked_assets(&self) -> Result<Vec<TrackedAsset>, CollaboratorError>;
}

pub trait AssetLocator {
    /// Name of the system the asset was last seen in.
    fn resolve_location(&self, id: &str) -> Result<String, CollaboratorError>;
}

pub trait ThreatFeed {
    fn read_threat_summary(&self) -> Result<Vec<ThreatRecord>, CollaboratorError>;
}

/// Collaborator data gathered before evaluation starts.
#[derive(Debug, Clone, Default)]
pub struct FeedData {
    pub overrides: Vec<RawOverride>,
    pub threats: Vec<ThreatRecord>,
    pub assets: Vec<TrackedAsset>,
}
