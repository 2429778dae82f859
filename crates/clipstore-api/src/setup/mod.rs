//! Application setup and initialization.

pub mod database;
pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::Result;
use clipstore_core::Config;
use clipstore_db::VideoRepository;
use std::sync::Arc;

/// Initialize the application: database, storage, state, routes.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    let pool = database::setup_database(&config).await?;
    let videos = Arc::new(VideoRepository::new(pool));

    let storage = clipstore_storage::create_storage(&config)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize object storage: {}", e))?;

    let state = Arc::new(AppState::new(config.clone(), videos, storage));
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
