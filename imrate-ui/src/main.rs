//! imrate-ui - Image rating survey service
//!
//! Presents a directory of images to a named participant, collects four
//! 1-7 aspect ratings per image, and exports the accumulated rating log
//! as a CSV download.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::{info, warn};

use imrate_common::catalog::ImageCatalog;
use imrate_common::config;
use imrate_ui::{build_router, AppState};

/// Command-line arguments for imrate-ui
#[derive(Parser, Debug)]
#[command(name = "imrate-ui")]
#[command(about = "Image rating survey service")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory containing the images to rate
    #[arg(short, long)]
    images_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting imrate survey UI (imrate-ui) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let images_dir = config::resolve_images_dir(args.images_dir.as_deref());
    let port = config::resolve_port(args.port);
    info!("Image directory: {}", images_dir.display());

    // Probe the catalog once at startup so a misconfigured directory is
    // visible in the log right away; sessions scan again when they begin.
    match ImageCatalog::scan(&images_dir) {
        Ok(catalog) if catalog.is_empty() => {
            warn!("no images found in {}", images_dir.display())
        }
        Ok(catalog) => info!("✓ Found {} images", catalog.len()),
        Err(err) => warn!("image directory check failed: {}", err),
    }

    let state = AppState::new(images_dir);
    let app = build_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("imrate-ui listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
