use anyhow::{Context, Result};
use storefront_config::AppConfig;
use storefront_web::{start_server, AppState};
use tracing::info;

use super::open_store;

/// Open the database and serve the API until interrupted
pub async fn execute(config: AppConfig) -> Result<()> {
    let store = open_store(&config.database)?;
    info!(path = %config.database.path.display(), "Catalog database ready");

    start_server(AppState::new(store), &config.server)
        .await
        .context("HTTP server failed")
}
