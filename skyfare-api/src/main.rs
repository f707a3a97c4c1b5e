use std::net::SocketAddr;
use std::sync::Arc;

use skyfare_api::{app, AppState};
use skyfare_offer::{DisplayEnricher, FareService};
use skyfare_store::{Dataset, LinearFareModel};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skyfare_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = skyfare_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Skyfare API on port {}", config.server.port);

    // Dataset and models are load-or-die: the process cannot serve without them.
    let dataset =
        Arc::new(Dataset::load(&config.dataset.path).expect("Failed to load flight dataset"));
    let base_model = Arc::new(
        LinearFareModel::load(&config.models.base_path).expect("Failed to load base fare model"),
    );
    let holiday_model = Arc::new(
        LinearFareModel::load(&config.models.holiday_path)
            .expect("Failed to load holiday fare model"),
    );

    // Best-effort: an unreachable feed means an empty calendar, not a crash.
    let holidays = skyfare_store::holiday::fetch_holidays(&config.holidays).await;

    let fares = FareService::new(
        dataset,
        base_model,
        holiday_model,
        holidays,
        DisplayEnricher::new(config.display.seed),
    );
    let app_state = AppState {
        fares: Arc::new(fares),
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
