//! Projection of patrol messages for the map overlay.

use bubble_model::Bubble;
use serde::{Deserialize, Serialize};

use super::Message;

/// One row of the overlay feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatrolEntry {
    pub system_name: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Reserved by the overlay format; always 0.
    pub strength: i32,
    pub faction: String,
    pub text: String,
    pub icon: String,
}

/// Patrol messages as overlay rows, in message order.
///
/// Systems missing from the bubble are placed at the origin.
pub fn patrol_entries(messages: &[Message], bubble: &Bubble, faction: &str) -> Vec<PatrolEntry> {
    messages
        .iter()
        .filter(|m| m.is_patrol)
        .map(|m| {
            let (x, y, z) = bubble
                .get(&m.system_name)
                .map(|s| (s.x, s.y, s.z))
                .unwrap_or((0.0, 0.0, 0.0));
            PatrolEntry {
                system_name: m.system_name.clone(),
                x,
                y,
                z,
                strength: 0,
                faction: faction.to_string(),
                text: m.text.clone(),
                icon: m.icon.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bubble_model::System;

    #[test]
    fn test_patrol_projection() {
        let bubble = Bubble::new(vec![System::new("Varati", 1.5, -2.0, 3.25)]);
        let messages = vec![
            Message::new("Varati", 3, "Push", "push"),
            Message::new("Retreats Detected in", 25, "Varati", "data").with_patrol(false),
            Message::new("Unknown", 9, "Carrier", "FC"),
        ];

        let entries = patrol_entries(&messages, &bubble, "Canonn");

        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[0],
            PatrolEntry {
                system_name: "Varati".to_string(),
                x: 1.5,
                y: -2.0,
                z: 3.25,
                strength: 0,
                faction: "Canonn".to_string(),
                text: "Push".to_string(),
                icon: "push".to_string(),
            }
        );
        assert_eq!((entries[1].x, entries[1].y, entries[1].z), (0.0, 0.0, 0.0));
    }
}
