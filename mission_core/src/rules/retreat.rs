use bubble_model::System;

use crate::context::RunContext;
use crate::message::{icons, priority, Message};

use super::RuleEvaluator;

/// Target name of the aggregated retreat message.
pub const RETREAT_SUMMARY_TARGET: &str = "Retreats Detected in";

/// Keeps full systems full.
///
/// A controlled system holding more than `max_factions` factions cannot take
/// in an expanding faction. If an uncontrolled neighbour sits within simple
/// range and one of the factions is about to retreat, that retreat frees a
/// slot that rivals can expand into, so it is called out per system and in a
/// single summary.
pub struct RetreatPrevention;

impl RetreatPrevention {
    fn has_uncontrolled_neighbour(ctx: &RunContext<'_>, system: &System) -> bool {
        ctx.bubble
            .cube_systems(system, ctx.config.retreat.simple_range, None)
            .iter()
            .any(|s| !ctx.controls(s))
    }
}

impl RuleEvaluator for RetreatPrevention {
    fn name(&self) -> &'static str {
        "retreat_prevention"
    }

    fn evaluate(&self, ctx: &RunContext<'_>) -> Vec<Message> {
        let policy = &ctx.config.retreat;
        let mut messages = Vec::new();
        let mut summary: Vec<&str> = Vec::new();

        for system in ctx.my_controlled_systems() {
            if system.factions().len() <= policy.max_factions
                || !Self::has_uncontrolled_neighbour(ctx, system)
            {
                continue;
            }

            for presence in system.factions().iter().filter(|p| p.is_retreating()) {
                messages.push(Message::new(
                    &system.name,
                    priority::RETREAT,
                    format!(
                        "Support {} to be above {}% to prevent Retreat ({:.1}%)",
                        presence.name, policy.min_influence, presence.influence
                    ),
                    icons::OVERRIDE,
                ));
                if !summary.contains(&system.name.as_str()) {
                    summary.push(&system.name);
                }
            }
        }

        if !summary.is_empty() {
            messages.push(
                Message::new(
                    RETREAT_SUMMARY_TARGET,
                    priority::RETREAT_SUMMARY,
                    summary.join(","),
                    icons::DATA,
                )
                .with_patrol(false),
            );
        }

        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feeds::FeedData;
    use crate::test_support::{config, now, system, FACTION};
    use bubble_model::{Bubble, Phase, Presence, State};

    fn full_system(name: &str, x: f64, retreat_phase: Option<Phase>) -> System {
        let mut system = system(
            name,
            x,
            &[
                (FACTION, 40.0),
                ("B", 15.0),
                ("C", 12.0),
                ("D", 11.0),
                ("E", 10.0),
                ("F", 8.0),
            ],
        );
        let mut weak = Presence::new("Weak", 4.0);
        if let Some(phase) = retreat_phase {
            weak = weak.with_state(State::new("Retreat", phase));
        }
        system.add_presence(weak);
        system
    }

    fn evaluate(systems: Vec<System>) -> Vec<Message> {
        let bubble = Bubble::new(systems);
        let config = config();
        let feeds = FeedData::default();
        let ctx = RunContext::new(&bubble, &config, &feeds, now());
        RetreatPrevention.evaluate(&ctx)
    }

    #[test]
    fn test_single_retreat_produces_message_and_summary() {
        let messages = evaluate(vec![
            full_system("Full", 0.0, Some(Phase::Active)),
            system("Neighbour", 10.0, &[("Rival", 60.0)]),
        ]);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].system_name, "Full");
        assert_eq!(messages[0].priority, priority::RETREAT);
        assert_eq!(
            messages[0].text,
            "Support Weak to be above 5% to prevent Retreat (4.0%)"
        );
        assert_eq!(messages[1].system_name, RETREAT_SUMMARY_TARGET);
        assert_eq!(messages[1].text, "Full");
        assert!(!messages[1].is_patrol);
    }

    #[test]
    fn test_recovering_retreat_is_ignored() {
        let messages = evaluate(vec![
            full_system("Full", 0.0, Some(Phase::Recovering)),
            system("Neighbour", 10.0, &[("Rival", 60.0)]),
        ]);
        assert!(messages.is_empty());
    }

    #[test]
    fn test_needs_uncontrolled_neighbour_in_simple_range() {
        let messages = evaluate(vec![
            full_system("Full", 0.0, Some(Phase::Pending)),
            system("Friendly", 10.0, &[(FACTION, 60.0)]),
            system("Distant", 25.0, &[("Rival", 60.0)]),
        ]);
        assert!(messages.is_empty());
    }

    #[test]
    fn test_needs_saturation() {
        let mut not_full = system("Sparse", 0.0, &[(FACTION, 60.0), ("B", 30.0)]);
        not_full.add_presence(Presence::new("Weak", 4.0).with_state(State::new("Retreat", Phase::Active)));

        let messages = evaluate(vec![not_full, system("Neighbour", 10.0, &[("Rival", 60.0)])]);
        assert!(messages.is_empty());
    }

    #[test]
    fn test_summary_lists_each_system_once() {
        let mut double = full_system("Double", 0.0, Some(Phase::Active));
        double.add_presence(Presence::new("F", 8.0).with_state(State::new("Retreat", Phase::Active)));

        let messages = evaluate(vec![
            double,
            full_system("Single", 5.0, Some(Phase::Active)),
            system("Neighbour", 10.0, &[("Rival", 60.0)]),
        ]);

        let summary = messages.last().expect("summary");
        assert_eq!(messages.len(), 4);
        assert_eq!(summary.text, "Double,Single");
    }
}
