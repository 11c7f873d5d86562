//! Rule evaluators - independent checks over the bubble.
//!
//! Each evaluator reads the [`RunContext`] and returns zero or more messages.
//! Evaluators never see each other's output; final ordering is decided by
//! priority, with battery order breaking ties.

mod carriers;
mod fill_in;
mod invasion;
mod overrides;
mod retreat;
mod stale;
mod threat;

pub use carriers::*;
pub use fill_in::*;
pub use invasion::*;
pub use overrides::*;
pub use retreat::*;
pub use stale::*;
pub use threat::*;

use crate::context::RunContext;
use crate::message::Message;

/// A side-effect-free check producing messages.
pub trait RuleEvaluator {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    fn evaluate(&self, ctx: &RunContext<'_>) -> Vec<Message>;
}

/// The standard battery, in generation order.
///
/// Manual overrides come first so they win priority ties.
pub fn default_rules() -> Vec<Box<dyn RuleEvaluator>> {
    vec![
        Box::new(ManualOverrides),
        Box::new(StaleData),
        Box::new(ThreatProgress),
        Box::new(RetreatPrevention),
        Box::new(InvasionThreat),
        Box::new(CarrierLocations),
        Box::new(FillInSuggestions),
    ]
}
