//! Place Intelligence Service (placeintel-is) - Main entry point
//!
//! Serves the place enrichment API: POST /api/v1/intelligence/enhance plus a
//! health probe. All intelligence is computed in-process from the input, the
//! system clock and pseudo-random draws; there is no database and no
//! outbound I/O.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use placeintel_is::{build_router, AppState};

/// Command-line arguments for placeintel-is
#[derive(Parser, Debug)]
#[command(name = "placeintel-is")]
#[command(about = "Place intelligence enrichment microservice")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "5000", env = "PORT")]
    port: u16,

    /// Enable debug-level logging
    #[arg(long, env = "DEBUG")]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing subscriber
    let default_level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting PlaceIntel Intelligence Service (placeintel-is) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let state = AppState::new();
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("placeintel-is listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
