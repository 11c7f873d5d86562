//! Serialized message batches, for comparing one run against the last.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::Message;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to (de)serialize message batch: {0}")]
    Json(#[from] serde_json::Error),
}

/// Unique identifier for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(pub Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The ordered messages of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageBatch {
    pub run_id: RunId,
    pub faction: String,
    pub generated_at: DateTime<Utc>,
    pub messages: Vec<Message>,
}

impl MessageBatch {
    pub fn new(faction: impl Into<String>, generated_at: DateTime<Utc>, messages: Vec<Message>) -> Self {
        Self {
            run_id: RunId::new(),
            faction: faction.into(),
            generated_at,
            messages,
        }
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// What changed since `previous`.
    ///
    /// A message whose text or priority moved counts as one removal and one
    /// addition.
    pub fn diff(&self, previous: &MessageBatch) -> BatchDiff {
        let added = self
            .messages
            .iter()
            .filter(|m| !previous.messages.contains(m))
            .cloned()
            .collect();
        let removed = previous
            .messages
            .iter()
            .filter(|m| !self.messages.contains(m))
            .cloned()
            .collect();
        BatchDiff { added, removed }
    }
}

/// Messages gained and lost between two runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchDiff {
    /// In current-batch order.
    pub added: Vec<Message>,
    /// In previous-batch order.
    pub removed: Vec<Message>,
}

impl BatchDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}
