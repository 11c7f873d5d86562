use crate::context::RunContext;
use crate::message::{icons, priority, Message};

use super::RuleEvaluator;

/// Warns when an active player faction next door is likely to move into one
/// of the faction's systems.
///
/// Considers rival systems run by a non-ignored player faction whose top
/// influence is above the paranoia level. The first `invasion_cycles` ranked
/// targets are scanned and only the highest-ranked hit is reported.
pub struct InvasionThreat;

impl RuleEvaluator for InvasionThreat {
    fn name(&self) -> &'static str {
        "invasion_threat"
    }

    fn evaluate(&self, ctx: &RunContext<'_>) -> Vec<Message> {
        let config = ctx.config;
        let mut messages = Vec::new();

        for system in ctx.bubble.systems() {
            if ctx.is_mine(system)
                || system.next_expansion.is_none()
                || system.influence() <= config.invasion_paranoia_level
                || config.is_ignored(&system.controlling_faction)
                || !system.controlling_presence().is_some_and(|p| p.is_player)
            {
                continue;
            }

            let hit = system
                .expansion_targets
                .iter()
                .take(config.invasion_cycles)
                .enumerate()
                .find(|(_, target)| target.faction == config.faction);

            if let Some((rank, target)) = hit {
                messages.push(Message::new(
                    &system.name,
                    priority::INVASION,
                    format!(
                        "{} Possible {} to {} ({:.2}%) Priority {}",
                        system.controlling_faction,
                        target.kind,
                        target.system_name,
                        system.influence(),
                        rank + 1
                    ),
                    icons::DATA,
                ));
            }
        }

        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feeds::FeedData;
    use crate::test_support::{config, now, system, FACTION};
    use bubble_model::{Bubble, ExpansionKind, ExpansionTarget, Presence, System};

    fn pf_system(name: &str, x: f64, influence: f64, targets: Vec<ExpansionTarget>) -> System {
        system(name, x, &[("Other", 100.0 - influence)])
            .with_presence(Presence::new("Player Group", influence).with_player(true))
            .with_controlling_faction("Player Group")
            .with_expansion_targets(targets)
    }

    fn target(faction: &str, system: &str) -> ExpansionTarget {
        ExpansionTarget::new(faction, system, ExpansionKind::Invasion)
    }

    #[test]
    fn test_reports_highest_ranked_hit_only() {
        let bubble = Bubble::new(vec![
            system("Home", 0.0, &[(FACTION, 50.0)]),
            pf_system(
                "Launchpad",
                5.0,
                72.5,
                vec![
                    target("Someone", "Elsewhere"),
                    target(FACTION, "Home"),
                    target(FACTION, "Home Two"),
                ],
            ),
        ]);
        let config = config();
        let feeds = FeedData::default();
        let ctx = RunContext::new(&bubble, &config, &feeds, now());

        let messages = InvasionThreat.evaluate(&ctx);

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].system_name, "Launchpad");
        assert_eq!(
            messages[0].text,
            "Player Group Possible Invasion to Home (72.50%) Priority 2"
        );
    }

    #[test]
    fn test_scan_limited_to_cycles() {
        let mut targets: Vec<_> = (0..5).map(|i| target("Someone", &format!("S{i}"))).collect();
        targets.push(target(FACTION, "Home"));
        let bubble = Bubble::new(vec![pf_system("Launchpad", 5.0, 80.0, targets)]);
        let config = config();
        let feeds = FeedData::default();
        let ctx = RunContext::new(&bubble, &config, &feeds, now());

        assert!(InvasionThreat.evaluate(&ctx).is_empty());
    }

    #[test]
    fn test_filters() {
        let targets = vec![target(FACTION, "Home")];
        let weak = system("Weak", 1.0, &[("Other", 35.0)])
            .with_presence(Presence::new("Player Group", 45.0).with_player(true))
            .with_controlling_faction("Player Group")
            .with_expansion_targets(targets.clone());
        let npc = system("Npc", 2.0, &[("Sim Faction", 80.0)]).with_expansion_targets(targets.clone());
        let mine = pf_system("Shared", 3.0, 80.0, targets.clone())
            .with_presence(Presence::new(FACTION, 5.0));
        let ignored = system("Ignored", 4.0, &[("Old Players", 80.0)])
            .with_presence(Presence::new("Old Players", 80.0).with_player(true))
            .with_expansion_targets(targets);

        let bubble = Bubble::new(vec![weak, npc, mine, ignored]);
        let mut config = config();
        config.ignored_factions.push("Old Players".to_string());
        let feeds = FeedData::default();
        let ctx = RunContext::new(&bubble, &config, &feeds, now());

        assert!(InvasionThreat.evaluate(&ctx).is_empty());
    }
}
