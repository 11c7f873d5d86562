//! Projected territorial moves, computed by an external projector.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a faction would arrive in the destination system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpansionKind {
    Expansion,
    Invasion,
    Retreat,
}

impl fmt::Display for ExpansionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExpansionKind::Expansion => "Expansion",
            ExpansionKind::Invasion => "Invasion",
            ExpansionKind::Retreat => "Retreat",
        };
        f.write_str(label)
    }
}

/// One candidate move out of a system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpansionTarget {
    /// Faction already present in the destination that would be affected.
    pub faction: String,
    pub system_name: String,
    pub kind: ExpansionKind,
}

impl ExpansionTarget {
    /// Create a target for `faction` in `system_name`.
    pub fn new(faction: impl Into<String>, system_name: impl Into<String>, kind: ExpansionKind) -> Self {
        Self {
            faction: faction.into(),
            system_name: system_name.into(),
            kind,
        }
    }
}

impl fmt::Display for ExpansionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.kind, self.system_name)
    }
}
