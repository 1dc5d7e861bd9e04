// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! ToGeDoo API Server
//!
//! Finds children's activities by Norwegian municipality through the
//! Ungfritid search service.

use std::sync::Arc;
use togedoo::{config::Config, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(
        port = config.port,
        ungfritid = %config.ungfritid_base_url,
        city_data = %config.city_data_path.display(),
        "Starting ToGeDoo API"
    );

    let state = Arc::new(AppState::new(config.clone()));
    let app = togedoo::routes::create_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = EnvFilter::from_default_env()
        .add_directive("togedoo=debug".parse()?)
        .add_directive("info".parse()?);

    tracing_subscriber::registry().with(filter).with(format).init();
    Ok(())
}
