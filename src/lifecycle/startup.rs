//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Build the node client and check the node once before serving
//! - Bind the listener and begin accepting traffic
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener starts last (traffic only when the node is reachable)

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{self, Cli, ConfigError, HubConfig};
use crate::http::{run_redirect, HttpServer};
use crate::hub::{fetch_snapshot, Snapshot};
use crate::lifecycle::{signals, Shutdown};
use crate::lnd::{Deadline, LightningRpc, LndClient, LndError};
use crate::net::tls::load_tls_config;
use crate::observability::{logging, metrics};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("unable to create hub: {0}")]
    Node(#[from] LndError),

    #[error("invalid bind address '{0}'")]
    BindAddress(String),

    #[error("listener error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the node client described by `config`.
pub async fn build_client(config: &HubConfig) -> Result<Arc<dyn LightningRpc>, LndError> {
    let client = LndClient::from_config(&config.lnd).await?;
    Ok(Arc::new(client))
}

/// Query the node once; fails if it is unreachable or on another network.
pub async fn verify_node(rpc: &dyn LightningRpc, config: &HubConfig) -> Result<Snapshot, LndError> {
    let deadline = config
        .lnd
        .rpc_timeout_secs
        .map(|secs| Deadline::after(Duration::from_secs(secs)));
    let snapshot = fetch_snapshot(rpc, &config.network, deadline).await?;

    tracing::info!(
        network = %snapshot.identity().network,
        node = %snapshot.identity().address,
        channels = snapshot.channels().len(),
        "Node verified"
    );
    Ok(snapshot)
}

/// Serve the dashboard until `shutdown` fires.
pub async fn serve(
    config: HubConfig,
    rpc: Arc<dyn LightningRpc>,
    shutdown: &Shutdown,
) -> Result<(), StartupError> {
    let addr: SocketAddr = config
        .listener
        .bind_address
        .parse()
        .map_err(|_| StartupError::BindAddress(config.listener.bind_address.clone()))?;
    let tls = config.listener.tls.clone();
    let redirect = config.listener.redirect_address.clone();
    let server = HttpServer::new(config, rpc);

    match tls {
        Some(tls) => {
            let rustls = load_tls_config(&tls).await?;
            if let Some(redirect) = redirect {
                let redirect_addr: SocketAddr = redirect
                    .parse()
                    .map_err(|_| StartupError::BindAddress(redirect.clone()))?;
                let listener = TcpListener::bind(redirect_addr).await?;
                let redirect_shutdown = shutdown.subscribe();
                tokio::spawn(async move {
                    if let Err(e) = run_redirect(listener, addr.port(), redirect_shutdown).await {
                        tracing::error!(error = %e, "Redirect listener failed");
                    }
                });
            }
            server.run_tls(addr, rustls, shutdown.subscribe()).await?;
        }
        None => {
            let listener = TcpListener::bind(addr).await?;
            tracing::info!(address = %listener.local_addr()?, "Listening for connections");
            server.run(listener, shutdown.subscribe()).await?;
        }
    }
    Ok(())
}

/// Full process startup: config, logging, node client, verification, serve.
pub async fn run(cli: Cli) -> Result<(), StartupError> {
    let loaded = config::load(&cli)?;
    let config = loaded.config;

    logging::init_logging(&config.observability.log_level);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "lnhub starting");
    for warning in &loaded.warnings {
        tracing::warn!("{}", warning);
    }

    tracing::info!(
        config_file = ?loaded.config_file,
        network = %config.network,
        rpc_host = %config.lnd.rpc_host,
        bind_address = %config.listener.bind_address,
        "Configuration loaded"
    );

    let rpc = build_client(&config).await?;
    if config.verify_on_startup {
        verify_node(rpc.as_ref(), &config).await?;
    }

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let shutdown = Shutdown::new();
    tokio::spawn(signals::wait_for_shutdown(shutdown.clone()));

    serve(config, rpc, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
