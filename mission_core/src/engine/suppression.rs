//! The per-system state machine.

use bubble_model::System;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::context::{round1, RunContext};
use crate::message::{icons, priority, Message, Override};

/// How the per-system pass ended for one system.
///
/// Every variant except `Quiet` is terminal and at most one is reached per
/// system per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemVerdict {
    /// A human override owns messaging for the system.
    Overridden,
    /// An active or pending conflict dominates all other advice.
    Conflict,
    /// Explicitly silenced.
    Peacetime,
    /// Left to its owner; no control or gap advice.
    Surrendered,
    GainControl,
    GapWarning,
    Quiet,
}

/// Outcome of [`evaluate_system`].
#[derive(Debug, Clone, PartialEq)]
pub struct SystemAdvice {
    pub verdict: SystemVerdict,
    pub messages: Vec<Message>,
}

impl SystemAdvice {
    fn new(verdict: SystemVerdict, messages: Vec<Message>) -> Self {
        Self { verdict, messages }
    }
}

fn has_override(generated: &[Message], system: &System, kind: Override) -> bool {
    generated
        .iter()
        .any(|m| m.override_kind == kind && m.is_for(&system.name))
}

/// Run the precedence rules for one of the faction's systems.
///
/// `generated` is everything the rule battery produced this run; only its
/// override flags are consulted.
///
/// 1. An `Override` message for the system ends evaluation silently.
/// 2. An actionable conflict emits the conflict and ends evaluation. A
///    recovering conflict emits an informational note and evaluation goes on.
/// 3. A `Peacetime` message ends evaluation silently.
/// 4. Surrendered systems end silently.
/// 5. Not in control: urge gaining control.
/// 6. In control with a lead over the nearest rival at or below `safe_gap`:
///    warn about that rival. A controller trailing on influence has a
///    negative lead.
pub fn evaluate_system(ctx: &RunContext<'_>, system: &System, generated: &[Message]) -> SystemAdvice {
    let config = ctx.config;

    if has_override(generated, system, Override::Override) {
        return SystemAdvice::new(SystemVerdict::Overridden, Vec::new());
    }

    let Some(mine) = ctx.my_presence(system) else {
        return SystemAdvice::new(SystemVerdict::Quiet, Vec::new());
    };

    let mut messages = Vec::new();

    if let Some(state) = mine.actionable_conflict() {
        messages.push(Message::new(
            &system.name,
            priority::CONFLICT,
            state.to_string(),
            state.key(),
        ));
        return SystemAdvice::new(SystemVerdict::Conflict, messages);
    }
    if let Some(state) = mine.any_conflict() {
        messages.push(Message::new(
            &system.name,
            priority::CONFLICT_RECOVERING,
            state.to_string(),
            icons::INFO,
        ));
    }

    if has_override(generated, system, Override::Peacetime) {
        return SystemAdvice::new(SystemVerdict::Peacetime, messages);
    }

    if config.is_surrendered(&system.name) {
        trace!(system = %system.name, "surrendered, no control advice");
        return SystemAdvice::new(SystemVerdict::Surrendered, messages);
    }

    if !ctx.controls(system) {
        messages.push(Message::new(
            &system.name,
            priority::GAIN_CONTROL,
            format!(
                "Urgent: {} Missions etc to gain system control (gap {:.1}%)",
                config.faction,
                system.influence() - mine.influence
            ),
            icons::PUSH,
        ));
        return SystemAdvice::new(SystemVerdict::GainControl, messages);
    }

    if let Some((rival, lead)) = system.lead_over_rival(&config.faction) {
        let gap = round1(lead);
        if gap <= config.safe_gap {
            messages.push(Message::new(
                &system.name,
                priority::GAP_WARNING,
                format!(
                    "Required: {} Missions etc : {} is threatening, gap is only {:.1}%",
                    config.faction, rival.name, gap
                ),
                icons::INF_GAP,
            ));
            return SystemAdvice::new(SystemVerdict::GapWarning, messages);
        }
    }

    SystemAdvice::new(SystemVerdict::Quiet, messages)
}
