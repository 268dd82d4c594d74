use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// RawMatch — One match record exactly as the server sends it
// ---------------------------------------------------------------------------

/// Server-shaped match record.
///
/// Every field is kept as untyped JSON so that a record with an unexpected
/// type in one field still deserializes; coercion to strings happens in
/// [`crate::normalize`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RawMatch {
    #[serde(default)]
    pub umpires: Option<Value>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub man_of_the_match: Option<Value>,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub date: Option<Value>,
    #[serde(default)]
    pub venue: Option<Value>,
    #[serde(default)]
    pub competing_team: Option<Value>,
    #[serde(default)]
    pub competing_team_logo: Option<Value>,
    #[serde(default)]
    pub first_innings: Option<Value>,
    #[serde(default)]
    pub second_innings: Option<Value>,
    #[serde(default)]
    pub match_status: Option<Value>,
}

impl RawMatch {
    /// Read a record out of an arbitrary JSON value.
    ///
    /// Anything that is not an object yields a record with every field absent.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(_) => Self::deserialize(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }
}
