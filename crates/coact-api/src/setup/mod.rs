//! Application setup and initialization
//!
//! All startup logic lives here rather than in main.rs: config validation,
//! telemetry, database pool and migrations, state construction, routes.

pub mod database;
pub mod routes;
pub mod server;
pub mod validation;

use std::sync::Arc;

use anyhow::{Context, Result};
use coact_core::Config;

use crate::state::AppState;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    validation::validate_config(&config).context("Configuration validation failed")?;

    crate::telemetry::init_telemetry()
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!("Configuration loaded and validated successfully");

    let pool = database::setup_database(&config).await?;

    let state = Arc::new(AppState::new(config.clone(), pool));

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
