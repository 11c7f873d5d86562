//! # Mission Core
//!
//! The decision engine of CSN. It inspects a [`bubble_model::Bubble`] from the
//! point of view of one faction and produces a prioritized list of
//! [`Message`]s: what to fight for, where influence is thin, which data is
//! stale, and what rivals are likely to do next.
//!
//! ## Core Components
//!
//! - **rules**: independent evaluators, each reading the bubble and returning messages
//! - **engine**: runs the evaluators, applies the per-system precedence rules, sorts
//! - **feeds**: narrow interfaces to the collaborators that supply data
//! - **message**: the output model, patrol projection and run-over-run snapshots
//!
//! ## Design Philosophy
//!
//! - **Snapshot-Driven**: evaluation starts only once a complete bubble is in hand
//! - **Best-Effort**: missing data degrades individual messages, never the run
//! - **Read-Only Rules**: evaluators never mutate the bubble or each other's output

pub mod config;
pub mod context;
pub mod engine;
pub mod feeds;
pub mod logging;
pub mod message;
pub mod rules;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::*;
pub use context::*;
pub use engine::*;
pub use feeds::*;
pub use message::*;
pub use rules::*;
