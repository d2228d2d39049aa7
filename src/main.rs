use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use gigmap::api::{self, ApiState};
use gigmap::refresh;
use gigmap_core::config::Config;
use gigmap_core::gazetteer::Gazetteer;
use gigmap_core::{Snapshot, SnapshotStore};
use gigmap_feeds::HttpFeedClient;

#[derive(Parser)]
#[command(name = "gigmap", about = "Regional event-listing aggregator")]
struct Cli {
    /// TOML config file layered over the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the read API bind address from the config.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::load(cli.config.as_deref())?;
    let bind = cli.bind.unwrap_or_else(|| config.server.bind.clone());

    let gazetteer = Arc::new(Gazetteer::load(&config.data.gazetteer_path)?);
    tracing::info!(entries = gazetteer.len(), "gazetteer loaded");

    // Serve the last persisted snapshot until the first cycle completes.
    let initial = match SnapshotStore::restore(&config.data.snapshot_path) {
        Ok(Some(snapshot)) => {
            tracing::info!(generated_at = %snapshot.generated_at, "restored persisted snapshot");
            snapshot
        }
        Ok(None) => Snapshot::empty(),
        Err(err) => {
            tracing::warn!(%err, "persisted snapshot unreadable; starting empty");
            Snapshot::empty()
        }
    };
    let store = Arc::new(SnapshotStore::new(initial));

    let feeds = HttpFeedClient::new(
        config.feed.base_url.clone(),
        Duration::from_secs(config.feed.timeout_secs),
    )?;
    let regions = Arc::new(config.regions.clone());
    tokio::spawn(refresh::run(
        config.clone(),
        feeds,
        gazetteer.clone(),
        store.clone(),
    ));

    let app = api::router(ApiState { store, regions });
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!(%bind, "serving read API");
    axum::serve(listener, app).await?;
    Ok(())
}
