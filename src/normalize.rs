//! Raw server record to [`Match`] conversion.
//!
//! This is the single coercion boundary between the untyped response body
//! and the typed model. It never fails: fields that are missing or have no
//! sensible string form come out as `None`.

use serde_json::Value;

use crate::models::{Match, RawMatch};

/// Map one server-shaped record onto the internal [`Match`] shape.
pub fn normalize(raw: &RawMatch) -> Match {
    Match {
        id: text(&raw.id),
        date: text(&raw.date),
        venue: text(&raw.venue),
        umpires: text(&raw.umpires),
        result: text(&raw.result),
        man_of_the_match: text(&raw.man_of_the_match),
        competing_team: text(&raw.competing_team),
        competing_team_logo: text(&raw.competing_team_logo),
        first_innings: text(&raw.first_innings),
        second_innings: text(&raw.second_innings),
        match_status: text(&raw.match_status),
    }
}

/// Normalize straight from a JSON value; non-objects give an all-absent match.
pub fn normalize_value(value: &Value) -> Match {
    normalize(&RawMatch::from_value(value))
}

impl From<&RawMatch> for Match {
    fn from(raw: &RawMatch) -> Self {
        normalize(raw)
    }
}

fn text(value: &Option<Value>) -> Option<String> {
    match value.as_ref()? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        // Null, arrays, and objects have no string form.
        _ => None,
    }
}
