//! HTTP fetch of a team's match history and assembly of a [`TeamSnapshot`].
//!
//! A fetch is a single attempt: one GET, one parse, one shape check. The
//! caller gets exactly one snapshot or one [`FetchError`] per call.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::config;
use crate::error::{FetchError, Result};
use crate::models::TeamSnapshot;
use crate::normalize::normalize_value;

// ---------------------------------------------------------------------------
// MatchFetcherBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`MatchFetcher`].
///
/// Use [`MatchFetcher::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](MatchFetcherBuilder::build).
pub struct MatchFetcherBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for MatchFetcherBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl MatchFetcherBuilder {
    /// Set the endpoint prefix the team identifier is appended to.
    ///
    /// The identifier is concatenated verbatim, so the prefix normally ends
    /// in `/`. Defaults to [`config::DEFAULT_BASE_URL`].
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<MatchFetcher> {
        let client = Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(config::MAX_REDIRECTS))
            .user_agent(config::USER_AGENT)
            .build()
            .map_err(|e| FetchError::Client(format!("failed to build HTTP client: {e}")))?;
        Ok(MatchFetcher {
            client,
            base_url: self.base_url,
        })
    }
}

// ---------------------------------------------------------------------------
// MatchFetcher
// ---------------------------------------------------------------------------

/// Fetches and normalizes match history for a team identifier.
///
/// Cloning is cheap and shares the connection pool only; every call to
/// [`fetch()`](Self::fetch) is an independent request.
#[derive(Debug, Clone)]
pub struct MatchFetcher {
    client: Client,
    base_url: String,
}

impl MatchFetcher {
    pub fn builder() -> MatchFetcherBuilder {
        MatchFetcherBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL requested for `team_id`. The identifier is not validated.
    pub fn team_url(&self, team_id: &str) -> String {
        format!("{}{}", self.base_url, team_id)
    }

    /// Fetch the match history for `team_id`.
    ///
    /// # Errors
    ///
    /// * [`FetchError::Network`] if the request fails or the status is not 2xx.
    /// * [`FetchError::Parse`] if the body is not JSON.
    /// * [`FetchError::InvalidShape`] if the body has no banner URL.
    pub async fn fetch(&self, team_id: &str) -> Result<TeamSnapshot> {
        let url = self.team_url(team_id);
        tracing::debug!(team_id, url = %url, "fetching team matches");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network {
                url: url.clone(),
                status: e.status().map(|s| s.as_u16()),
                source: Some(e),
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Network {
                url,
                status: Some(status.as_u16()),
                source: None,
            });
        }

        // The status was fine; a failed body read is a transport failure.
        let body = resp.text().await.map_err(|e| FetchError::Network {
            url: url.clone(),
            status: None,
            source: Some(e),
        })?;

        let snapshot = parse_team_response(&body)?;
        tracing::debug!(
            team_id,
            banner = %snapshot.team_banner_url,
            has_latest = snapshot.latest_match.is_some(),
            recent = snapshot.recent_matches.len(),
            "team matches fetched"
        );
        Ok(snapshot)
    }
}

/// Parse a response body into a [`TeamSnapshot`].
///
/// Separated from [`MatchFetcher::fetch`] so the parse and shape rules can
/// be exercised without a server.
pub fn parse_team_response(body: &str) -> Result<TeamSnapshot> {
    let data: Value = serde_json::from_str(body)?;
    snapshot_from_value(&data)
}

/// Build a [`TeamSnapshot`] from an already parsed body.
pub fn snapshot_from_value(data: &Value) -> Result<TeamSnapshot> {
    let obj = match data {
        Value::Object(map) => map,
        Value::Null => return Err(FetchError::InvalidShape("response body is null".into())),
        _ => {
            return Err(FetchError::InvalidShape(
                "response body is not an object".into(),
            ))
        }
    };

    let team_banner_url = match obj.get("team_banner_url") {
        Some(Value::String(url)) if !url.is_empty() => url.clone(),
        _ => {
            return Err(FetchError::InvalidShape(
                "missing team_banner_url".into(),
            ))
        }
    };

    let latest_match = match obj.get("latest_match_details") {
        Some(v @ Value::Object(_)) => Some(normalize_value(v)),
        _ => None,
    };

    let recent_matches = match obj.get("recent_matches") {
        Some(Value::Array(items)) => items.iter().map(normalize_value).collect(),
        _ => Vec::new(),
    };

    Ok(TeamSnapshot {
        team_banner_url,
        latest_match,
        recent_matches,
    })
}
