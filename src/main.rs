//! Relay server binary.
//!
//! Loads configuration, installs logging and serves the forwarding endpoint.

use std::error::Error;

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use event_planner::adapters::relay::{cors_layer, relay_router, RelayState};
use event_planner::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let state = RelayState::from_config(&config.relay)?;
    let app = relay_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.server.cors_origins_list()));

    let address = config.server.bind_address();
    let listener = TcpListener::bind(&address).await?;
    tracing::info!(
        address = %address,
        upstream = %config.relay.upstream_url,
        environment = ?config.server.environment,
        "Relay listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}
