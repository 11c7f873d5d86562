//! Engine configuration, loaded from TOML over compiled defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::message::icons;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// When a system's data counts as stale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StalePolicy {
    /// Data is stale once its age in days exceeds `influence / influence_divisor`.
    pub influence_divisor: f64,
}

impl Default for StalePolicy {
    fn default() -> Self {
        Self {
            influence_divisor: 10.0,
        }
    }
}

impl StalePolicy {
    /// Allowed age in days for a system with this top influence.
    pub fn max_age_days(&self, influence: f64) -> f64 {
        influence / self.influence_divisor
    }
}

/// Thresholds for the retreat-prevention rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetreatPolicy {
    /// A system is saturated with more factions than this.
    pub max_factions: usize,
    /// Cube range in which an uncontrolled neighbour makes retreat wasteful.
    pub simple_range: f64,
    /// Influence below which a faction starts to retreat. Quoted in advice.
    pub min_influence: f64,
}

impl Default for RetreatPolicy {
    fn default() -> Self {
        Self {
            max_factions: 6,
            simple_range: bubble_model::SIMPLE_RANGE,
            min_influence: 5.0,
        }
    }
}

/// Everything the engine needs to know besides the bubble itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// The faction advice is generated for.
    pub faction: String,

    /// Cube range around the faction's systems to fetch.
    pub bubble_range: f64,

    /// A lead at or below this is urgent.
    pub safe_gap: f64,

    /// A lead at or above this is not worth suggesting.
    pub ignore_gap: f64,

    /// Maximum number of fill-in suggestions.
    pub fill_in_count: usize,

    /// How many ranked expansion targets to scan per rival system.
    pub invasion_cycles: usize,

    /// Rival systems below this controlling influence are not reported.
    pub invasion_paranoia_level: f64,

    pub stale: StalePolicy,

    pub retreat: RetreatPolicy,

    /// Player factions treated as simulated ones.
    pub ignored_factions: Vec<String>,

    /// Systems left to their owner: no control or gap advice.
    pub surrendered_systems: Vec<String>,

    /// Icon key -> glyph for renderers.
    pub icons: BTreeMap<String, String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            faction: String::new(),
            bubble_range: 40.0,
            safe_gap: 15.0,
            ignore_gap: 29.0,
            fill_in_count: 3,
            invasion_cycles: 5,
            invasion_paranoia_level: 50.0,
            stale: StalePolicy::default(),
            retreat: RetreatPolicy::default(),
            ignored_factions: Vec::new(),
            surrendered_systems: Vec::new(),
            icons: icons::default_glyphs(),
        }
    }
}

impl EngineConfig {
    /// Defaults for the given faction.
    pub fn for_faction(faction: impl Into<String>) -> Self {
        Self {
            faction: faction.into(),
            ..Self::default()
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let mut config: EngineConfig = toml::from_str(text)?;
        // Keys from the file extend the built-in icon set.
        for (key, glyph) in icons::default_glyphs() {
            config.icons.entry(key).or_insert(glyph);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.faction.trim().is_empty() {
            return Err(ConfigError::Invalid("faction must be set".to_string()));
        }
        if self.safe_gap > self.ignore_gap {
            return Err(ConfigError::Invalid(format!(
                "safe_gap ({}) exceeds ignore_gap ({})",
                self.safe_gap, self.ignore_gap
            )));
        }
        if self.stale.influence_divisor <= 0.0 {
            return Err(ConfigError::Invalid(
                "stale.influence_divisor must be positive".to_string(),
            ));
        }
        if self.bubble_range <= 0.0 || self.retreat.simple_range <= 0.0 {
            return Err(ConfigError::Invalid("ranges must be positive".to_string()));
        }
        Ok(())
    }

    pub fn is_ignored(&self, faction: &str) -> bool {
        self.ignored_factions.iter().any(|f| f == faction)
    }

    pub fn is_surrendered(&self, system: &str) -> bool {
        self.surrendered_systems
            .iter()
            .any(|s| s.eq_ignore_ascii_case(system))
    }

    pub fn has_icon(&self, key: &str) -> bool {
        self.icons.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::for_faction("Canonn");
        assert_eq!(config.safe_gap, 15.0);
        assert_eq!(config.ignore_gap, 29.0);
        assert_eq!(config.fill_in_count, 3);
        assert_eq!(config.invasion_cycles, 5);
        assert_eq!(config.retreat.max_factions, 6);
        assert_eq!(config.retreat.simple_range, 20.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = EngineConfig::from_toml_str(
            r#"
            faction = "Canonn"
            safe_gap = 10.0
            ignored_factions = ["Wings Of Justice"]

            [retreat]
            max_factions = 5

            [icons]
            custom = "*"
            "#,
        )
        .expect("config parses");

        assert_eq!(config.faction, "Canonn");
        assert_eq!(config.safe_gap, 10.0);
        assert_eq!(config.ignore_gap, 29.0);
        assert_eq!(config.retreat.max_factions, 5);
        assert_eq!(config.retreat.simple_range, 20.0);
        assert!(config.is_ignored("Wings Of Justice"));
        assert!(config.has_icon("custom"));
        assert!(config.has_icon(icons::DATA));
    }

    #[test]
    fn test_missing_faction_is_invalid() {
        let err = EngineConfig::from_toml_str("safe_gap = 10.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_inverted_gaps_are_invalid() {
        let err = EngineConfig::from_toml_str(
            r#"
            faction = "Canonn"
            safe_gap = 30.0
            ignore_gap = 20.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_bad_toml() {
        let err = EngineConfig::from_toml_str("faction = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::from_file(Path::new("/nonexistent/csn.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_stale_policy() {
        let policy = StalePolicy::default();
        assert_eq!(policy.max_age_days(50.0), 5.0);
    }

    #[test]
    fn test_surrendered_is_case_insensitive() {
        let mut config = EngineConfig::for_faction("Canonn");
        config.surrendered_systems.push("Varati".to_string());
        assert!(config.is_surrendered("VARATI"));
        assert!(!config.is_surrendered("Khun"));
    }
}
