//! Application setup and initialization

pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::{Context, Result};
use detachd_core::Config;
use std::sync::Arc;

/// Initialize the entire application
pub fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    config
        .validate()
        .context("Configuration validation failed")?;

    crate::telemetry::init_telemetry(config.is_production())
        .context("Failed to initialize telemetry")?;

    tracing::info!(
        environment = %config.base.environment,
        "Configuration loaded and validated successfully"
    );

    let state = Arc::new(AppState::from_config(config));

    tracing::info!(
        signal_provider = state.evaluator.provider_name(),
        base_score = state.config.risk.base_score,
        high_severity_penalty = state.config.risk.high_severity_penalty,
        "Document risk evaluator ready"
    );

    let router = routes::setup_routes(state.clone())?;

    Ok((state, router))
}
