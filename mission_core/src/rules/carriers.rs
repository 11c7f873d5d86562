use tracing::{debug, warn};

use crate::context::RunContext;
use crate::message::{icons, priority, Message};

use super::RuleEvaluator;

/// Reports where tracked fleet carriers were last seen.
///
/// Each asset is resolved on its own; a failed lookup is logged and the rest
/// of the roster is still reported.
pub struct CarrierLocations;

impl RuleEvaluator for CarrierLocations {
    fn name(&self) -> &'static str {
        "carrier_locations"
    }

    fn evaluate(&self, ctx: &RunContext<'_>) -> Vec<Message> {
        let Some(locator) = ctx.locator else {
            if !ctx.feeds.assets.is_empty() {
                warn!(count = ctx.feeds.assets.len(), "no asset locator, carriers not reported");
            }
            return Vec::new();
        };

        let mut messages = Vec::new();
        for asset in &ctx.feeds.assets {
            if asset.is_disabled() {
                debug!(id = %asset.id, "tracked asset disabled");
                continue;
            }
            match locator.resolve_location(&asset.id) {
                Ok(system) => messages.push(Message::new(
                    system,
                    priority::CARRIER,
                    format!("{} ({})", asset.name, asset.role),
                    icons::FLEET_CARRIER,
                )),
                Err(e) => warn!(id = %asset.id, error = %e, "fleet carrier lookup failed"),
            }
        }
        messages
    }
}
