//! # Tax engine server
//!
//! Serves the old-vs-new regime comparison over HTTP.
//!
//! Settings come from the environment:
//! - `TAX_ENGINE_BIND`: listen address (default `0.0.0.0:5000`)
//! - `TAX_ENGINE_CONFIG_DIR`: directory holding `old.yaml` and `new.yaml`;
//!   the built-in rules are used when unset
//! - `RUST_LOG`: log filter (default `info`)

use nigeria_tax_engine::api::{AppState, create_router};
use nigeria_tax_engine::config::{ConfigLoader, ServerSettings};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let settings = ServerSettings::from_env()?;

    let config = match &settings.config_dir {
        Some(dir) => {
            let loader = ConfigLoader::load(dir)?;
            info!(config_dir = %dir.display(), "Loaded regime rules");
            loader
        }
        None => {
            info!("Using built-in regime rules");
            ConfigLoader::builtin()
        }
    };

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(settings.bind).await?;
    info!(address = %settings.bind, "Tax engine listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
