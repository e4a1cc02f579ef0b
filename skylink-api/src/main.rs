use std::net::SocketAddr;

use anyhow::Context;
use skylink_api::{app, AppState};
use skylink_upstream::{Config, UpstreamClients};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load config")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting SkyLink BFF on port {}", config.server.port);
    tracing::info!(
        flights = %config.upstream.flights_url,
        customers = %config.upstream.customers_url,
        bookings = %config.upstream.bookings_url,
        tasks = %config.upstream.tasks_url,
        timeout_ms = config.upstream.timeout_ms,
        "Upstream services"
    );

    let clients = UpstreamClients::from_config(&config.upstream).context("Failed to build upstream clients")?;
    let app = app(AppState::from_clients(&clients));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}
