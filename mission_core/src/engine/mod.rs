//! Mission Engine - assembles the final, ordered message list.
//!
//! A run works as follows:
//! 1. **Battery**: every rule evaluator reads the context and returns messages
//! 2. **Per-system pass**: each of the faction's systems goes through the
//!    precedence rules in [`evaluate_system`], which may append advice
//! 3. **Ordering**: the list is stably sorted by ascending priority, so equal
//!    priorities keep generation order

mod pipeline;
mod suppression;

pub use pipeline::*;
pub use suppression::*;

use tracing::{debug, info};

use crate::context::RunContext;
use crate::message::Message;
use crate::rules::{default_rules, RuleEvaluator};

/// Runs a rule battery and the per-system pass.
pub struct MissionEngine {
    rules: Vec<Box<dyn RuleEvaluator>>,
}

impl MissionEngine {
    /// Create an engine with the standard battery.
    pub fn new() -> Self {
        Self::with_rules(default_rules())
    }

    /// Create an engine with a custom battery, run in the given order.
    pub fn with_rules(rules: Vec<Box<dyn RuleEvaluator>>) -> Self {
        Self { rules }
    }

    /// Names of the rules, in run order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Produce the ordered message list for one run.
    pub fn generate(&self, ctx: &RunContext<'_>) -> Vec<Message> {
        let mut messages = Vec::new();

        for rule in &self.rules {
            let produced = rule.evaluate(ctx);
            debug!(rule = rule.name(), count = produced.len(), "rule evaluated");
            messages.extend(produced);
        }

        let mut advice = Vec::new();
        for system in &ctx.my_systems {
            let outcome = evaluate_system(ctx, system, &messages);
            debug!(system = %system.name, verdict = ?outcome.verdict, "system evaluated");
            advice.extend(outcome.messages);
        }
        messages.extend(advice);

        messages.sort_by_key(|m| m.priority);

        info!(
            faction = %ctx.config.faction,
            systems = ctx.my_systems.len(),
            messages = messages.len(),
            "message batch generated"
        );
        messages
    }
}

impl Default for MissionEngine {
    fn default() -> Self {
        Self::new()
    }
}
