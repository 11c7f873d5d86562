//! A faction's presence in a single system.

use serde::{Deserialize, Serialize};

use super::State;

/// Influence and states of one faction in one system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presence {
    pub name: String,
    /// Percentage of the system's total influence (0-100).
    pub influence: f64,
    #[serde(default)]
    pub allegiance: String,
    #[serde(default)]
    pub government: String,
    #[serde(default)]
    pub happiness: String,
    /// Run by a player group rather than the simulation.
    #[serde(default)]
    pub is_player: bool,
    /// Set by [`System::add_presence`](super::System::add_presence).
    #[serde(default)]
    pub is_native: bool,
    /// Declared home system, when the data source knows it.
    #[serde(default)]
    pub home_system: Option<String>,
    #[serde(default)]
    pub states: Vec<State>,
}

impl Presence {
    /// Create a presence with no states.
    pub fn new(name: impl Into<String>, influence: f64) -> Self {
        Self {
            name: name.into(),
            influence,
            allegiance: String::new(),
            government: String::new(),
            happiness: String::new(),
            is_player: false,
            is_native: false,
            home_system: None,
            states: Vec::new(),
        }
    }

    /// Add a state.
    pub fn with_state(mut self, state: State) -> Self {
        self.states.push(state);
        self
    }

    /// Mark as run by a player group.
    pub fn with_player(mut self, is_player: bool) -> Self {
        self.is_player = is_player;
        self
    }

    /// Set the declared home system.
    pub fn with_home_system(mut self, home: impl Into<String>) -> Self {
        self.home_system = Some(home.into());
        self
    }

    /// Set the allegiance.
    pub fn with_allegiance(mut self, allegiance: impl Into<String>) -> Self {
        self.allegiance = allegiance.into();
        self
    }

    /// Set the government type.
    pub fn with_government(mut self, government: impl Into<String>) -> Self {
        self.government = government.into();
        self
    }

    /// First conflict state that still needs attention.
    pub fn actionable_conflict(&self) -> Option<&State> {
        self.states.iter().find(|s| s.is_actionable_conflict())
    }

    /// First conflict state in any phase.
    pub fn any_conflict(&self) -> Option<&State> {
        self.states.iter().find(|s| s.is_conflict())
    }

    /// Whether this faction is about to withdraw from the system.
    pub fn is_retreating(&self) -> bool {
        self.states
            .iter()
            .any(|s| s.is_retreat() && !s.is_recovering())
    }
}
