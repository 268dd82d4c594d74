use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://apis.ccbp.in/ipl/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const MAX_REDIRECTS: usize = 10;
pub const USER_AGENT: &str = concat!("ipl-team-matches/", env!("CARGO_PKG_VERSION"));

/// Route the navigation collaborator is sent back to.
pub const HOME_ROUTE: &str = "/";

/// The only failure text ever shown to the user.
pub const FAILURE_MESSAGE: &str = "Failed to load team matches";

/// Team identifier to container style token.
pub const TEAM_CLASSES: &[(&str, &str)] = &[
    ("RCB", "rcb"),
    ("KKR", "kkr"),
    ("KXP", "kxp"),
    ("CSK", "csk"),
    ("RR", "rr"),
    ("MI", "mi"),
    ("SH", "srh"),
    ("DC", "dc"),
];
