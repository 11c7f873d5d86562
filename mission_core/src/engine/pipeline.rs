//! One end-to-end run: snapshot in, ordered batch and overlay rows out.

use bubble_model::Bubble;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::{ConfigError, EngineConfig};
use crate::context::RunContext;
use crate::feeds::{
    refresh_faction, AssetLocator, AssetRoster, CollaboratorError, FeedData, LiveDataSource,
    OverrideSource, RefreshSummary, SystemSource, ThreatFeed,
};
use crate::message::{patrol_entries, MessageBatch, PatrolEntry};

use super::MissionEngine;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to fetch system snapshot: {0}")]
    Snapshot(#[source] CollaboratorError),
}

/// The collaborators a run draws on.
pub struct Sources<'a> {
    pub systems: &'a dyn SystemSource,
    /// Skipped when `None`; the snapshot is used as is.
    pub live: Option<&'a dyn LiveDataSource>,
    pub overrides: &'a dyn OverrideSource,
    pub roster: &'a dyn AssetRoster,
    pub locator: &'a dyn AssetLocator,
    pub threats: &'a dyn ThreatFeed,
}

/// Everything a run hands back to its caller.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub batch: MessageBatch,
    pub patrol: Vec<PatrolEntry>,
    pub refresh: Option<RefreshSummary>,
}

fn best_effort<T>(what: &str, result: Result<Vec<T>, CollaboratorError>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        warn!(feed = what, error = %e, "feed unavailable, continuing without it");
        Vec::new()
    })
}

/// Run the engine once for `config.faction`.
///
/// Only an invalid config or a failed snapshot fetch abort the run; every
/// other collaborator failure is logged and degrades the batch.
pub fn run_pipeline(
    config: &EngineConfig,
    sources: &Sources<'_>,
    now: DateTime<Utc>,
) -> Result<RunReport, PipelineError> {
    config.validate()?;

    let systems = sources
        .systems
        .fetch_systems(&config.faction, config.bubble_range)
        .map_err(PipelineError::Snapshot)?;
    let mut bubble = Bubble::around_faction(systems, &config.faction, config.bubble_range);
    info!(faction = %config.faction, systems = bubble.len(), "bubble built");

    let refresh = match sources.live {
        Some(live) => match refresh_faction(&mut bubble, &config.faction, live) {
            Ok(summary) => Some(summary),
            Err(e) => {
                warn!(error = %e, "live refresh unavailable, using snapshot");
                None
            }
        },
        None => None,
    };

    let feeds = FeedData {
        overrides: best_effort("overrides", sources.overrides.read_overrides()),
        threats: best_effort("threats", sources.threats.read_threat_summary()),
        assets: best_effort("tracked assets", sources.roster.read_tracked_assets()),
    };

    let ctx = RunContext::new(&bubble, config, &feeds, now).with_locator(sources.locator);
    let messages = MissionEngine::new().generate(&ctx);

    let patrol = patrol_entries(&messages, &bubble, &config.faction);
    let batch = MessageBatch::new(config.faction.clone(), now, messages);
    info!(run_id = %batch.run_id, messages = batch.messages.len(), patrol = patrol.len(), "run complete");

    Ok(RunReport {
        batch,
        patrol,
        refresh,
    })
}
