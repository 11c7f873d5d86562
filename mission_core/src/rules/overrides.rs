//! Manual overrides - human-authored messages merged into the batch.
//!
//! Override text may embed placeholders that are filled from the bubble:
//!
//! | placeholder    | generic meaning                   | when a rival is named       |
//! |----------------|-----------------------------------|-----------------------------|
//! | `{inf}`        | top influence in the system       | the rival's influence       |
//! | `{gap}`        | lead of the top faction           | distance between us and it  |
//! | `{gapfromtop}` | how far we are behind the top     | how far it is behind the top|
//! | `{expandto}`   | projected next expansion          | same                        |
//! | `{happy}`      | `<?>`                             | same                        |
//!
//! Unknown placeholders are left as written.

use bubble_model::System;
use tracing::warn;

use crate::context::{round2, RunContext};
use crate::feeds::RawOverride;
use crate::message::{icons, Message, Override};

use super::RuleEvaluator;

/// Shown for `{expandto}` when no expansion is projected.
pub const NO_EXPANSION: &str = "None Detected";

/// Values substituted into override text.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateValues {
    pub expandto: String,
    pub inf: f64,
    pub gap: f64,
    pub happy: String,
    pub gapfromtop: f64,
}

impl TemplateValues {
    /// Values for `text` in `system`, from `faction`'s point of view.
    pub fn for_system(system: &System, faction: &str, text: &str) -> Self {
        let top = system.influence();
        let mine = system.presence(faction).map(|p| p.influence);
        let expandto = system
            .next_expansion
            .as_ref()
            .map(|e| e.to_string())
            .unwrap_or_else(|| NO_EXPANSION.to_string());

        let rival = system
            .factions()
            .iter()
            .find(|p| p.name != faction && text.contains(&p.name));

        let (inf, gap, gapfromtop) = match rival {
            Some(rival) => (
                rival.influence,
                (rival.influence - mine.unwrap_or(0.0)).abs(),
                top - rival.influence,
            ),
            None => (top, system.gap(), mine.map(|m| top - m).unwrap_or(0.0)),
        };

        Self {
            expandto,
            inf: round2(inf),
            gap: round2(gap),
            happy: "<?>".to_string(),
            gapfromtop: round2(gapfromtop),
        }
    }

    fn lookup(&self, key: &str) -> Option<String> {
        match key {
            "expandto" => Some(self.expandto.clone()),
            "inf" => Some(format_number(self.inf)),
            "gap" => Some(format_number(self.gap)),
            "happy" => Some(self.happy.clone()),
            "gapfromtop" => Some(format_number(self.gapfromtop)),
            _ => None,
        }
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Replace `{name}` placeholders with known values.
pub fn expand_template(text: &str, values: &TemplateValues) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let key = &after[..close];
                match values.lookup(key) {
                    Some(value) => out.push_str(&value),
                    None => {
                        out.push('{');
                        out.push_str(key);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Turns manual records into messages, filling in placeholders.
pub struct ManualOverrides;

impl ManualOverrides {
    pub fn to_message(ctx: &RunContext<'_>, record: &RawOverride) -> Message {
        let icon = if ctx.config.has_icon(&record.icon) {
            record.icon.as_str()
        } else {
            warn!(system = %record.system_name, icon = %record.icon, "unknown icon key in override");
            icons::INFO
        };

        let text = if record.text.contains('{') {
            match ctx.bubble.get(&record.system_name) {
                Some(system) => {
                    let values = TemplateValues::for_system(system, ctx.faction(), &record.text);
                    expand_template(&record.text, &values)
                }
                None => {
                    warn!(system = %record.system_name, "override names a system outside the bubble");
                    record.text.clone()
                }
            }
        } else {
            record.text.clone()
        };

        Message::new(&record.system_name, record.priority, text, icon)
            .with_override(Override::from_flag(&record.kind))
    }
}

impl RuleEvaluator for ManualOverrides {
    fn name(&self) -> &'static str {
        "manual_overrides"
    }

    fn evaluate(&self, ctx: &RunContext<'_>) -> Vec<Message> {
        ctx.feeds
            .overrides
            .iter()
            .map(|record| Self::to_message(ctx, record))
            .collect()
    }
}
