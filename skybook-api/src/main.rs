use skybook_api::{app, AppState};
use skybook_catalog::FlightCatalog;
use skybook_store::{MemorySessionStore, TokioClock};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skybook_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = skybook_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Skybook API on port {}", config.server.port);

    // One session store per application run; everything shares it.
    let store = Arc::new(MemorySessionStore::new());
    let clock = Arc::new(TokioClock);

    let app_state = AppState::new(FlightCatalog::sample(), store, clock);
    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
