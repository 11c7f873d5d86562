//! The per-run context handed to every rule evaluator.

use bubble_model::{Bubble, Presence, System};
use chrono::{DateTime, Utc};

use crate::config::EngineConfig;
use crate::feeds::{AssetLocator, FeedData};

/// Everything one run evaluates against. Read-only for its whole lifetime.
pub struct RunContext<'a> {
    pub bubble: &'a Bubble,
    pub config: &'a EngineConfig,
    /// Reference time for data ages.
    pub now: DateTime<Utc>,
    /// Systems where the faction has a presence, in bubble order.
    pub my_systems: Vec<&'a System>,
    pub feeds: &'a FeedData,
    pub locator: Option<&'a dyn AssetLocator>,
}

impl<'a> RunContext<'a> {
    /// Build the context for `config.faction` over `bubble`.
    pub fn new(
        bubble: &'a Bubble,
        config: &'a EngineConfig,
        feeds: &'a FeedData,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            bubble,
            config,
            now,
            my_systems: bubble.faction_presence(&config.faction),
            feeds,
            locator: None,
        }
    }

    /// Resolve tracked assets through `locator`.
    pub fn with_locator(mut self, locator: &'a dyn AssetLocator) -> Self {
        self.locator = Some(locator);
        self
    }

    /// Name of the faction advice is for.
    pub fn faction(&self) -> &str {
        &self.config.faction
    }

    /// The faction's presence in `system`, if any.
    pub fn my_presence<'s>(&self, system: &'s System) -> Option<&'s Presence> {
        system.presence(&self.config.faction)
    }

    /// Whether the faction is present in `system`.
    pub fn is_mine(&self, system: &System) -> bool {
        system.is_faction_present(&self.config.faction)
    }

    /// Whether the faction owns `system`.
    pub fn controls(&self, system: &System) -> bool {
        system.is_controlled_by(&self.config.faction)
    }

    /// Systems where the faction is present and in control.
    pub fn my_controlled_systems(&self) -> impl Iterator<Item = &'a System> + '_ {
        self.my_systems.iter().copied().filter(|s| self.controls(s))
    }
}

/// Round to one decimal, as shown in advice.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimals.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
