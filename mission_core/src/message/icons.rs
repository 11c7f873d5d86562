//! Icon keys attached to messages.

use std::collections::BTreeMap;

pub const DATA: &str = "data";
pub const INFO: &str = "info";
pub const OVERRIDE: &str = "override";
pub const PUSH: &str = "push";
pub const INF_GAP: &str = "infgap";
pub const MIN_INF: &str = "mininf";
pub const THARGOID: &str = "thargoid1";
pub const FLEET_CARRIER: &str = "FC";
pub const WAR: &str = "war";
pub const CIVIL_WAR: &str = "civilwar";
pub const ELECTION: &str = "election";

/// Built-in glyphs, as Discord emoji shortcodes.
pub fn default_glyphs() -> BTreeMap<String, String> {
    [
        (DATA, ":bar_chart:"),
        (INFO, ":information_source:"),
        (OVERRIDE, ":bangbang:"),
        (PUSH, ":arrow_double_up:"),
        (INF_GAP, ":warning:"),
        (MIN_INF, ":arrow_up:"),
        (THARGOID, ":alien:"),
        (FLEET_CARRIER, ":anchor:"),
        (WAR, ":crossed_swords:"),
        (CIVIL_WAR, ":crossed_swords:"),
        (ELECTION, ":ballot_box:"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}
