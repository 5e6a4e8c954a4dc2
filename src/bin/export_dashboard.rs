// Static export of the dashboard
//
// Purpose: Render every navigation state to markdown + standalone HTML
// Usage: EXPORT_DIR=out cargo run --bin export_dashboard

use airbnb_sentiment_dashboard::export::export_dashboard;
use airbnb_sentiment_dashboard::{AssetResolver, DashboardConfig, DashboardGenerator};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "airbnb_sentiment_dashboard=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DashboardConfig::from_env()?;
    let out_dir = PathBuf::from(
        std::env::var("EXPORT_DIR").unwrap_or_else(|_| "dashboard_export".to_string()),
    );

    tracing::info!(
        "Exporting {} layout (assets: {}) to {}",
        config.layout,
        config.asset_dir.display(),
        out_dir.display()
    );

    let generator = DashboardGenerator::new(config.layout, AssetResolver::new(config.asset_dir.clone()));
    let summary = export_dashboard(&generator, &out_dir)?;

    tracing::info!(
        "Export complete: {} files, {} images copied, {} missing-image warnings",
        summary.pages.len(),
        summary.copied_assets.len(),
        summary.warnings
    );

    Ok(())
}
