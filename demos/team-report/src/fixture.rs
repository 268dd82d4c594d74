use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::{json, Value};

/// Canned `/ipl/{id}` handler. Only a few teams have data; the rest 404.
pub async fn team(Path(id): Path<String>) -> Response {
    match body_for(&id) {
        Some(body) => Json(body).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({ "error": "unknown team" }))).into_response(),
    }
}

fn body_for(id: &str) -> Option<Value> {
    let (banner, opponent, statuses): (&str, &str, &[&str]) = match id {
        "RCB" => ("https://assets.ccbp.in/frontend/react-js/rcb-team-banner.png", "Kolkata Knight Riders", &["Won", "Lost", "Won", "No Result"]),
        "CSK" => ("https://assets.ccbp.in/frontend/react-js/csk-team-banner.png", "Mumbai Indians", &["Lost", "Lost", "Won"]),
        "MI" => ("https://assets.ccbp.in/frontend/react-js/mi-team-banner.png", "Delhi Capitals", &[]),
        _ => return None,
    };
    let recent: Vec<Value> = statuses
        .iter()
        .enumerate()
        .map(|(i, status)| record(&format!("{}", 1200 + i), opponent, status))
        .collect();
    Some(json!({
        "team_banner_url": banner,
        "latest_match_details": record("1199", opponent, "Won"),
        "recent_matches": recent,
    }))
}

fn record(id: &str, opponent: &str, status: &str) -> Value {
    json!({
        "id": id,
        "date": "2020-10-21",
        "venue": "At Sheikh Zayed Stadium, Abu Dhabi",
        "umpires": "Anil Chaudhary, Nitin Menon",
        "result": format!("Match against {opponent}: {status}"),
        "man_of_the_match": "Mohammed Siraj",
        "competing_team": opponent,
        "competing_team_logo": "https://assets.ccbp.in/frontend/react-js/kkr-logo-img.png",
        "first_innings": opponent,
        "second_innings": "Royal Challengers Bangalore",
        "match_status": status,
    })
}
