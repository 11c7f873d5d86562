use crate::context::RunContext;
use crate::message::{icons, priority, Message};

use super::RuleEvaluator;

/// Asks for a rescan of systems whose data is older than their influence
/// allows: `age_days > influence / divisor`.
pub struct StaleData;

impl RuleEvaluator for StaleData {
    fn name(&self) -> &'static str {
        "stale_data"
    }

    fn evaluate(&self, ctx: &RunContext<'_>) -> Vec<Message> {
        let policy = &ctx.config.stale;

        ctx.my_systems
            .iter()
            .filter_map(|system| {
                let age = (ctx.now - system.updated).num_days();
                (age as f64 > policy.max_age_days(system.influence())).then(|| {
                    Message::new(
                        &system.name,
                        priority::STALE_DATA,
                        format!("Scan System to update data {age} days old"),
                        icons::DATA,
                    )
                })
            })
            .collect()
    }
}
