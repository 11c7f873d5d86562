//! Faction states and their phases.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle phase of a faction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Pending,
    Active,
    /// Resolved or cooling down; never actionable.
    Recovering,
}

impl Phase {
    /// Human-readable phase name.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Pending => "Pending",
            Phase::Active => "Active",
            Phase::Recovering => "Recovering",
        }
    }
}

/// The two-sided record attached to a conflict state once it has been paired.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConflictDetail {
    pub opponent: String,
    /// Asset this side loses if it loses the conflict.
    pub at_stake: String,
    pub days_won: u32,
    pub days_lost: u32,
    /// Asset this side gains if it wins the conflict.
    pub gain: String,
}

/// A named state held by a faction in one system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub name: String,
    pub phase: Phase,
    /// Filled in by conflict pairing; `None` for non-conflict states.
    #[serde(default)]
    pub conflict: Option<ConflictDetail>,
}

impl State {
    /// Create a new state in the given phase.
    pub fn new(name: impl Into<String>, phase: Phase) -> Self {
        Self {
            name: name.into(),
            phase,
            conflict: None,
        }
    }

    /// Attach the paired conflict detail.
    pub fn with_conflict(mut self, detail: ConflictDetail) -> Self {
        self.conflict = Some(detail);
        self
    }

    /// Lowercase name with spaces removed (`"Civil War"` -> `"civilwar"`).
    ///
    /// Doubles as the icon key for conflict messages.
    pub fn key(&self) -> String {
        self.name
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect()
    }

    /// War- and election-family states are conflicts.
    pub fn is_conflict(&self) -> bool {
        matches!(self.key().as_str(), "war" | "civilwar" | "election")
    }

    /// A conflict that still needs attention.
    pub fn is_actionable_conflict(&self) -> bool {
        self.is_conflict() && self.phase != Phase::Recovering
    }

    /// Whether this is a retreat state.
    pub fn is_retreat(&self) -> bool {
        self.key() == "retreat"
    }

    /// Whether the state is winding down.
    pub fn is_recovering(&self) -> bool {
        self.phase == Phase::Recovering
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(detail) = &self.conflict {
            write!(
                f,
                " vs {} ({} v {})",
                detail.opponent, detail.days_won, detail.days_lost
            )?;
            if !detail.at_stake.is_empty() {
                write!(f, " stake: {}", detail.at_stake)?;
            }
            if !detail.gain.is_empty() {
                write!(f, " / gain: {}", detail.gain)?;
            }
        }
        match self.phase {
            Phase::Active => Ok(()),
            other => write!(f, " ({})", other.label()),
        }
    }
}
