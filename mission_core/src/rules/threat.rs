use crate::context::RunContext;
use crate::message::{icons, priority, Message};

use super::RuleEvaluator;

/// Reports unfinished threat campaigns in the faction's systems.
pub struct ThreatProgress;

impl RuleEvaluator for ThreatProgress {
    fn name(&self) -> &'static str {
        "threat_progress"
    }

    fn evaluate(&self, ctx: &RunContext<'_>) -> Vec<Message> {
        let threats = &ctx.feeds.threats;

        ctx.my_systems
            .iter()
            .filter_map(|system| {
                threats
                    .iter()
                    .find(|t| t.system_name.eq_ignore_ascii_case(&system.name))
                    .filter(|t| t.progress < 100.0)
                    .map(|t| {
                        Message::new(
                            &system.name,
                            priority::THREAT_PROGRESS,
                            format!("Thargoid {} : Progress {}%", t.threat, t.progress as i64),
                            icons::THARGOID,
                        )
                    })
            })
            .collect()
    }
}
