use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Match — Normalized match record handed to the renderer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: Option<String>,
    pub date: Option<String>,
    pub venue: Option<String>,
    pub umpires: Option<String>,
    pub result: Option<String>,
    pub man_of_the_match: Option<String>,
    pub competing_team: Option<String>,
    pub competing_team_logo: Option<String>,
    pub first_innings: Option<String>,
    pub second_innings: Option<String>,
    /// Free-form; compared case-insensitively against "won" and "lost".
    pub match_status: Option<String>,
}
