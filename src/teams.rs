//! Cosmetic style tokens keyed by team identifier.

use crate::config::TEAM_CLASSES;

/// Style token for `team_id`, or `""` for identifiers not in the table.
///
/// Matching is exact; `"rcb"` is not `"RCB"`.
pub fn team_class_name(team_id: &str) -> &'static str {
    TEAM_CLASSES
        .iter()
        .find(|(id, _)| *id == team_id)
        .map(|(_, class)| *class)
        .unwrap_or("")
}

/// Full class string for the page container.
pub fn container_class(team_id: &str) -> String {
    format!("team-matches-container {}", team_class_name(team_id))
}
