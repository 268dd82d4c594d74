use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error for {url}: {}", describe_status(.status))]
    Network {
        url: String,
        status: Option<u16>,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid API response: {0}")]
    InvalidShape(String),

    #[error("Client error: {0}")]
    Client(String),
}

fn describe_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!("HTTP {code}"),
        None => "transport failure".to_string(),
    }
}

/// Coarse failure category, recorded in logs before the controller
/// collapses an error into its user-visible message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Network,
    Parse,
    InvalidShape,
    Client,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Network { .. } => FetchErrorKind::Network,
            FetchError::Parse(_) => FetchErrorKind::Parse,
            FetchError::InvalidShape(_) => FetchErrorKind::InvalidShape,
            FetchError::Client(_) => FetchErrorKind::Client,
        }
    }
}

impl fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FetchErrorKind::Network => "network",
            FetchErrorKind::Parse => "parse",
            FetchErrorKind::InvalidShape => "invalid_shape",
            FetchErrorKind::Client => "client",
        };
        f.write_str(name)
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
