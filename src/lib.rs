//! Match history client for a single IPL team.
//!
//! Fetches a team's banner, latest match and recent matches from the match
//! API, normalizes the server's snake_case records into [`Match`], tallies
//! win/loss/draw [`Statistics`], and publishes the result as a [`ViewState`]
//! for an external renderer.
//!
//! # Quick start
//!
//! ```no_run
//! use ipl_team_matches::{ControllerOptions, MatchFetcher, TeamMatchesController};
//!
//! # async fn example() -> ipl_team_matches::Result<()> {
//! let fetcher = MatchFetcher::builder()
//!     .base_url("https://apis.ccbp.in/ipl/")
//!     .build()?;
//!
//! let controller = TeamMatchesController::new(fetcher, ControllerOptions::default());
//! controller.load("CSK").await;
//!
//! if let Some(stats) = controller.state().statistics() {
//!     println!("{} won, {} lost, {} other", stats.win, stats.loss, stats.draw);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod normalize;
pub mod stats;
pub mod teams;

pub use controller::{ControllerOptions, Navigator, TeamMatchesController, ViewState};
pub use error::{FetchError, FetchErrorKind, Result};
pub use fetcher::{parse_team_response, MatchFetcher, MatchFetcherBuilder};
pub use models::{Match, RawMatch, TeamSnapshot};
pub use normalize::normalize;
pub use stats::{aggregate, MatchOutcome, StatSlice, Statistics};
pub use teams::{container_class, team_class_name};
