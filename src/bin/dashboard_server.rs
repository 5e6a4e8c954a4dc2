// Dashboard Server Binary Entry Point
//
// Purpose: Serve the pricing-vs-sentiment dashboard over HTTP
// Usage: cargo run --bin dashboard_server

use airbnb_sentiment_dashboard::{create_router, AppState, DashboardConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "airbnb_sentiment_dashboard=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting dashboard server...");

    // Configuration from environment variables
    let config = DashboardConfig::from_env()?;

    tracing::info!("Configuration:");
    tracing::info!("  DASHBOARD_LAYOUT: {}", config.layout);
    tracing::info!("  ASSET_DIR: {}", config.asset_dir.display());
    tracing::info!("  BIND_ADDR: {}", config.bind_addr);
    tracing::info!("  PORT: {}", config.port);

    if !config.asset_dir.is_dir() {
        tracing::warn!(
            "Asset directory {} does not exist; images will render as warnings",
            config.asset_dir.display()
        );
    }

    let state = AppState::new(&config);
    let app = create_router(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
