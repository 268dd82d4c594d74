use serde::{Deserialize, Serialize};

use super::team_match::Match;

// ---------------------------------------------------------------------------
// TeamSnapshot — Everything one successful fetch produced
// ---------------------------------------------------------------------------

/// Normalized data for one team as of the last successful fetch.
///
/// `recent_matches` keeps the order the server sent (most recent first);
/// it is never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSnapshot {
    pub team_banner_url: String,
    pub latest_match: Option<Match>,
    #[serde(default)]
    pub recent_matches: Vec<Match>,
}
