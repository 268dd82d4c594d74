mod fixture;

use axum::routing::get;
use axum::Router;
use ipl_team_matches::{ControllerOptions, MatchFetcher, Navigator, TeamMatchesController, ViewState};
use tracing_subscriber::EnvFilter;

struct LogNavigator;

impl Navigator for LogNavigator {
    fn replace(&self, route: &str) {
        tracing::info!(route, "navigate (replace)");
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let team_id = args.next().unwrap_or_else(|| "RCB".to_string());

    // Pass a base URL as the second argument to hit a real API instead.
    let base_url = match args.next() {
        Some(url) => url,
        None => {
            let app = Router::new().route("/ipl/{id}", get(fixture::team));
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });
            tracing::info!(%addr, "serving canned match data");
            format!("http://{addr}/ipl/")
        }
    };

    let fetcher = MatchFetcher::builder()
        .base_url(base_url)
        .build()
        .expect("Failed to build match fetcher");
    let controller = TeamMatchesController::new(fetcher, ControllerOptions::default());

    controller.load(&team_id).await;
    let state = controller.state();

    eprintln!("class: {}", controller.container_class());
    match &state {
        ViewState::Ready { snapshot, statistics } => {
            eprintln!("banner: {}", snapshot.team_banner_url);
            if let Some(latest) = &snapshot.latest_match {
                eprintln!(
                    "latest: vs {} ({})",
                    latest.competing_team.as_deref().unwrap_or("?"),
                    latest.match_status.as_deref().unwrap_or("?")
                );
            }
            if let Some(stats) = statistics {
                for slice in stats.slices() {
                    eprintln!("{:>7}: {} {}", slice.name, slice.value, slice.color);
                }
            }
        }
        ViewState::Failed { message } => eprintln!("{message}"),
        ViewState::Idle | ViewState::Loading => {}
    }
    println!("{}", serde_json::to_string_pretty(&state).unwrap());

    controller.navigate_back(&LogNavigator);
}
