use crate::context::RunContext;
use crate::message::{icons, priority, Message};

use super::RuleEvaluator;

/// Suggests the controlled systems whose lead is safe but worth reinforcing.
///
/// The gap is the faction's lead over its nearest rival. A system qualifies
/// when `safe_gap <= gap < ignore_gap`; the
/// `fill_in_count` smallest gaps are suggested, smallest first.
pub struct FillInSuggestions;

impl RuleEvaluator for FillInSuggestions {
    fn name(&self) -> &'static str {
        "fill_in"
    }

    fn evaluate(&self, ctx: &RunContext<'_>) -> Vec<Message> {
        let config = ctx.config;

        let mut candidates: Vec<_> = ctx
            .my_controlled_systems()
            .filter_map(|s| {
                s.lead_over_rival(&config.faction)
                    .map(|(rival, gap)| (s, rival, gap))
            })
            .filter(|(_, _, gap)| config.safe_gap <= *gap && *gap < config.ignore_gap)
            .collect();
        candidates.sort_by(|a, b| a.2.total_cmp(&b.2));

        candidates
            .into_iter()
            .take(config.fill_in_count)
            .map(|(system, rival, gap)| {
                Message::new(
                    &system.name,
                    priority::FILL_IN,
                    format!(
                        "Suggestion: {} Missions etc (gap to {} is {:.1}%)",
                        config.faction, rival.name, gap
                    ),
                    icons::MIN_INF,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feeds::FeedData;
    use crate::test_support::{config, now, system, FACTION};
    use bubble_model::{Bubble, System};

    fn with_gap(name: &str, x: f64, gap: f64) -> System {
        system(name, x, &[(FACTION, 50.0), ("Rival", 50.0 - gap)])
    }

    fn evaluate(systems: Vec<System>, count: usize) -> Vec<Message> {
        let bubble = Bubble::new(systems);
        let mut config = config();
        config.fill_in_count = count;
        let feeds = FeedData::default();
        let ctx = RunContext::new(&bubble, &config, &feeds, now());
        FillInSuggestions.evaluate(&ctx)
    }

    #[test]
    fn test_boundaries() {
        let messages = evaluate(
            vec![
                with_gap("Ten", 0.0, 10.0),
                with_gap("Sixteen", 1.0, 16.0),
                with_gap("TwentyNine", 2.0, 29.0),
                with_gap("Forty", 3.0, 40.0),
            ],
            3,
        );

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].system_name, "Sixteen");
        assert_eq!(
            messages[0].text,
            "Suggestion: Canonn Missions etc (gap to Rival is 16.0%)"
        );
    }

    #[test]
    fn test_lower_bound_inclusive() {
        let messages = evaluate(vec![with_gap("Fifteen", 0.0, 15.0)], 3);
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn test_smallest_gaps_first_and_capped() {
        let messages = evaluate(
            vec![
                with_gap("G25", 0.0, 25.0),
                with_gap("G17", 1.0, 17.0),
                with_gap("G21", 2.0, 21.0),
                with_gap("G19", 3.0, 19.0),
            ],
            3,
        );

        let names: Vec<_> = messages.iter().map(|m| m.system_name.as_str()).collect();
        assert_eq!(names, vec!["G17", "G19", "G21"]);
    }

    #[test]
    fn test_controller_trailing_on_influence_is_not_suggested() {
        let trailing = system("Trailing", 0.0, &[("Rival", 60.0), (FACTION, 40.0)])
            .with_controlling_faction(FACTION);
        let leading = system("Leading", 1.0, &[(FACTION, 50.0), ("Rival", 30.0), ("Minor", 20.0)]);

        let messages = evaluate(vec![trailing, leading], 3);

        assert_eq!(messages.len(), 1);
        assert_eq!(
            messages[0].text,
            "Suggestion: Canonn Missions etc (gap to Rival is 20.0%)"
        );
    }

    #[test]
    fn test_skips_uncontrolled_and_lonely_systems() {
        let messages = evaluate(
            vec![
                system("Alone", 0.0, &[(FACTION, 100.0)]),
                system("Behind", 1.0, &[("Rival", 50.0), (FACTION, 30.0)]),
            ],
            3,
        );
        assert!(messages.is_empty());
    }
}
