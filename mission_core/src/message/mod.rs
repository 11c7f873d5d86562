//! Messages - the engine's output.

mod batch;
pub mod icons;
mod patrol;

pub use batch::*;
pub use patrol::*;

use serde::{Deserialize, Serialize};

/// Priorities of the generated messages. Lower is more urgent.
pub mod priority {
    pub const CONFLICT: i32 = 2;
    pub const GAIN_CONTROL: i32 = 3;
    pub const GAP_WARNING: i32 = 4;
    pub const FILL_IN: i32 = 5;
    pub const RETREAT: i32 = 7;
    pub const THREAT_PROGRESS: i32 = 9;
    pub const CARRIER: i32 = 9;
    pub const INVASION: i32 = 10;
    pub const STALE_DATA: i32 = 11;
    pub const CONFLICT_RECOVERING: i32 = 21;
    pub const RETREAT_SUMMARY: i32 = 25;
}

/// Human control over a system's messaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Override {
    #[default]
    None,
    /// A human has taken over; no generated per-system advice.
    Override,
    /// Peacetime: only conflicts are reported.
    Peacetime,
}

impl Override {
    /// Parse the kind column of a manual record by its first letter.
    pub fn from_flag(flag: &str) -> Self {
        match flag.trim().chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('O') => Override::Override,
            Some('P') => Override::Peacetime,
            _ => Override::None,
        }
    }
}

/// One piece of advice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// System the advice is about.
    pub system_name: String,
    pub priority: i32,
    pub text: String,
    /// Key into the configured icon set.
    pub icon: String,
    #[serde(rename = "override", default)]
    pub override_kind: Override,
    /// Shown on the map overlay.
    #[serde(default = "default_patrol")]
    pub is_patrol: bool,
}

fn default_patrol() -> bool {
    true
}

impl Message {
    pub fn new(
        system_name: impl Into<String>,
        priority: i32,
        text: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            system_name: system_name.into(),
            priority,
            text: text.into(),
            icon: icon.into(),
            override_kind: Override::None,
            is_patrol: true,
        }
    }

    pub fn with_override(mut self, kind: Override) -> Self {
        self.override_kind = kind;
        self
    }

    pub fn with_patrol(mut self, is_patrol: bool) -> Self {
        self.is_patrol = is_patrol;
        self
    }

    pub fn is_for(&self, system: &str) -> bool {
        self.system_name.eq_ignore_ascii_case(system)
    }
}
