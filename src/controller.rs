//! Lifecycle state for a team's match page.
//!
//! The controller moves through `Idle -> Loading -> Ready | Failed` and
//! publishes each state through a [`tokio::sync::watch`] channel that the
//! rendering layer reads from.
//!
//! Superseding triggers do not cancel earlier requests. Each trigger takes a
//! new generation number, and a completion only publishes if its generation
//! is still the current one, so the last trigger wins even when an older
//! request resolves later.
//!
//! Every trigger publishes `Loading` first, including a re-trigger from
//! `Ready` or `Failed`: the previous snapshot is cleared rather than kept on
//! screen while the new one loads.
//!
//! # Example
//!
//! ```no_run
//! use ipl_team_matches::{ControllerOptions, MatchFetcher, TeamMatchesController};
//!
//! # async fn example() -> ipl_team_matches::Result<()> {
//! let fetcher = MatchFetcher::builder().build()?;
//! let controller = TeamMatchesController::new(fetcher, ControllerOptions::default());
//! controller.load("RCB").await;
//! println!("{:?}", controller.state());
//! # Ok(())
//! # }
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config;
use crate::error::Result;
use crate::fetcher::MatchFetcher;
use crate::models::TeamSnapshot;
use crate::stats::{aggregate, Statistics};
use crate::teams;

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// What the rendering layer should show. Exactly one variant holds at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ViewState {
    Idle,
    Loading,
    Ready {
        snapshot: TeamSnapshot,
        /// `None` when the controller was built without statistics.
        statistics: Option<Statistics>,
    },
    Failed {
        message: String,
    },
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ViewState::Ready { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ViewState::Failed { .. })
    }

    pub fn snapshot(&self) -> Option<&TeamSnapshot> {
        match self {
            ViewState::Ready { snapshot, .. } => Some(snapshot),
            _ => None,
        }
    }

    pub fn statistics(&self) -> Option<&Statistics> {
        match self {
            ViewState::Ready { statistics, .. } => statistics.as_ref(),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewState::Failed { message } => Some(message),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Options and collaborators
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Compute win/loss/draw counts alongside each snapshot.
    pub statistics: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self { statistics: true }
    }
}

impl ControllerOptions {
    pub fn without_statistics() -> Self {
        Self { statistics: false }
    }
}

/// Navigation collaborator owned by the host application.
pub trait Navigator {
    /// Replace the current history entry with `route` (no push).
    fn replace(&self, route: &str);
}

// ---------------------------------------------------------------------------
// TeamMatchesController
// ---------------------------------------------------------------------------

struct Tracker {
    generation: u64,
    team_id: Option<String>,
}

struct Shared {
    fetcher: MatchFetcher,
    options: ControllerOptions,
    tracker: Mutex<Tracker>,
    state: watch::Sender<ViewState>,
}

/// Owns the view state for one team page.
///
/// Clones share the same state; separate controllers share nothing except
/// whatever their fetchers share (the HTTP connection pool).
#[derive(Clone)]
pub struct TeamMatchesController {
    shared: Arc<Shared>,
}

impl TeamMatchesController {
    /// Create an idle controller. Nothing is fetched until
    /// [`load()`](Self::load) or [`trigger()`](Self::trigger) is called.
    pub fn new(fetcher: MatchFetcher, options: ControllerOptions) -> Self {
        let (state, _) = watch::channel(ViewState::Idle);
        Self {
            shared: Arc::new(Shared {
                fetcher,
                options,
                tracker: Mutex::new(Tracker {
                    generation: 0,
                    team_id: None,
                }),
                state,
            }),
        }
    }

    /// Create a controller and immediately start loading `team_id`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(fetcher: MatchFetcher, options: ControllerOptions, team_id: &str) -> Self {
        let controller = Self::new(fetcher, options);
        controller.trigger(team_id);
        controller
    }

    pub fn options(&self) -> ControllerOptions {
        self.shared.options
    }

    /// Current state, cloned out of the channel.
    pub fn state(&self) -> ViewState {
        self.shared.state.borrow().clone()
    }

    /// Receiver that observes every published state.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.shared.state.subscribe()
    }

    /// Identifier of the most recent trigger, if any.
    pub fn team_id(&self) -> Option<String> {
        self.tracker().team_id.clone()
    }

    pub fn generation(&self) -> u64 {
        self.tracker().generation
    }

    /// Container class for the current team; unknown teams get an empty token.
    pub fn container_class(&self) -> String {
        teams::container_class(self.team_id().as_deref().unwrap_or(""))
    }

    /// Send the navigation collaborator back to the home route.
    ///
    /// Does not touch the view state.
    pub fn navigate_back(&self, navigator: &dyn Navigator) {
        navigator.replace(config::HOME_ROUTE);
    }

    /// Load `team_id` and wait for the result to be published.
    ///
    /// The fetch runs in a spawned task, so dropping this future does not
    /// leave the controller stuck in `Loading`; the result is still
    /// published when it arrives.
    ///
    /// Returns `false` if a newer trigger superseded this one while it was
    /// in flight, in which case its result was discarded.
    pub async fn load(&self, team_id: &str) -> bool {
        match self.trigger(team_id).await {
            Ok(published) => published,
            Err(e) => {
                tracing::error!(team_id, error = %e, "team matches task failed");
                false
            }
        }
    }

    /// Start loading `team_id` in the background.
    ///
    /// The `Loading` state is published before this returns. The spawned
    /// task is never cancelled; a later trigger simply makes its result
    /// stale. Must be called from within a Tokio runtime.
    pub fn trigger(&self, team_id: impl Into<String>) -> JoinHandle<bool> {
        let team_id = team_id.into();
        let generation = self.begin(&team_id);
        let this = self.clone();
        tokio::spawn(async move {
            let result = this.shared.fetcher.fetch(&team_id).await;
            this.finish(generation, &team_id, result)
        })
    }

    fn tracker(&self) -> MutexGuard<'_, Tracker> {
        self.shared
            .tracker
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self, team_id: &str) -> u64 {
        let mut tracker = self.tracker();
        tracker.generation += 1;
        tracker.team_id = Some(team_id.to_string());
        self.shared.state.send_replace(ViewState::Loading);
        tracing::info!(team_id, generation = tracker.generation, "loading team matches");
        tracker.generation
    }

    fn finish(&self, generation: u64, team_id: &str, result: Result<TeamSnapshot>) -> bool {
        let next = match result {
            Ok(snapshot) => {
                let statistics = self
                    .shared
                    .options
                    .statistics
                    .then(|| aggregate(&snapshot.recent_matches));
                ViewState::Ready {
                    snapshot,
                    statistics,
                }
            }
            Err(e) => {
                tracing::error!(
                    team_id,
                    generation,
                    error.kind = %e.kind(),
                    error = %e,
                    "error fetching team matches"
                );
                ViewState::Failed {
                    message: config::FAILURE_MESSAGE.to_string(),
                }
            }
        };

        let tracker = self.tracker();
        if tracker.generation != generation {
            tracing::debug!(
                team_id,
                generation,
                current = tracker.generation,
                "discarding stale team matches result"
            );
            return false;
        }
        if next.is_ready() {
            tracing::info!(
                team_id,
                generation,
                statistics = ?next.statistics(),
                "team matches ready"
            );
        }
        self.shared.state.send_replace(next);
        true
    }
}
