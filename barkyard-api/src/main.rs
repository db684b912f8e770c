use std::net::SocketAddr;
use std::sync::Arc;

use barkyard_api::{app, config::Config, AppState};
use barkyard_booking::{RandomIds, SystemClock};
use barkyard_catalog::fixtures;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "barkyard_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().expect("Failed to load config");
    tracing::info!("Starting Barkyard API on port {}", config.server.port);

    let catalog = Arc::new(fixtures::seed_catalog(
        config.catalog.first_date,
        config.catalog.availability_days,
    ));
    tracing::info!(yards = catalog.len(), "Seeded demo catalog");

    let app_state = AppState::new(catalog, Arc::new(SystemClock), Arc::new(RandomIds));
    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
