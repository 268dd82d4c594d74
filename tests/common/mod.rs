//! Shared fixtures for the integration tests.
//!
//! Provides `serve()`, which starts an in-process axum server standing in
//! for the match API, and JSON builders for typical response bodies.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use ipl_team_matches::MatchFetcher;
use serde_json::{json, Value};

/// Canned response for one team identifier.
#[derive(Clone)]
pub struct Route {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl Route {
    pub fn json(body: Value) -> Self {
        Self::raw(200, body.to_string())
    }

    pub fn raw(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

struct MockState {
    routes: HashMap<String, Route>,
    hits: Mutex<Vec<String>>,
}

pub struct MockApi {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockApi {
    /// Identifiers requested so far, in arrival order.
    pub fn hits(&self) -> Vec<String> {
        self.state.hits.lock().unwrap().clone()
    }

    pub fn fetcher(&self) -> MatchFetcher {
        MatchFetcher::builder()
            .base_url(self.base_url.clone())
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap()
    }
}

/// Start a mock API on an ephemeral port. Unknown identifiers get a 404.
pub async fn serve(routes: Vec<(&str, Route)>) -> MockApi {
    let state = Arc::new(MockState {
        routes: routes
            .into_iter()
            .map(|(id, route)| (id.to_string(), route))
            .collect(),
        hits: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route("/ipl/{id}", get(team_handler))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockApi {
        base_url: format!("http://{addr}/ipl/"),
        state,
    }
}

async fn team_handler(State(state): State<Arc<MockState>>, Path(id): Path<String>) -> Response {
    state.hits.lock().unwrap().push(id.clone());
    let Some(route) = state.routes.get(&id).cloned() else {
        return (StatusCode::NOT_FOUND, "not found").into_response();
    };
    if !route.delay.is_zero() {
        tokio::time::sleep(route.delay).await;
    }
    let status = StatusCode::from_u16(route.status).unwrap();
    (status, [(header::CONTENT_TYPE, "application/json")], route.body).into_response()
}

// ---------------------------------------------------------------------------
// Body builders
// ---------------------------------------------------------------------------

pub fn raw_match(id: &str, status: &str) -> Value {
    json!({
        "umpires": "CB Gaffaney, VK Sharma",
        "result": "Royal Challengers Bangalore Won by 7 wickets",
        "man_of_the_match": "AB de Villiers",
        "id": id,
        "date": "2020-04-20",
        "venue": "At Dubai International Cricket Stadium, Dubai",
        "competing_team": "Kolkata Knight Riders",
        "competing_team_logo": "https://assets.ccbp.in/frontend/react-js/kkr-logo-img.png",
        "first_innings": "Kolkata Knight Riders",
        "second_innings": "Royal Challengers Bangalore",
        "match_status": status
    })
}

pub fn team_body(banner: &str, statuses: &[&str]) -> Value {
    let recent: Vec<Value> = statuses
        .iter()
        .enumerate()
        .map(|(i, s)| raw_match(&format!("{}", 1000 + i), s))
        .collect();
    json!({
        "team_banner_url": banner,
        "latest_match_details": raw_match("999", "Won"),
        "recent_matches": recent
    })
}
