//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the page handler and static files
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to a plain or TLS listener
//! - Turn aggregation failures into opaque 500 responses

use axum::{
    extract::State,
    http::{HeaderMap, Method, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::any,
    Router,
};
use axum_server::tls_rustls::RustlsConfig;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::HubConfig;
use crate::http::page::render_home;
use crate::http::request::{request_id, MakeRequestUuidV4};
use crate::hub::fetch_snapshot;
use crate::lnd::{Deadline, LightningRpc};
use crate::observability::metrics;

/// Body of every failed page request; details only go to the log.
pub const INTERNAL_ERROR_BODY: &str = "500 Internal Server Error.";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared handle to the node, built once at startup.
    pub rpc: Arc<dyn LightningRpc>,
    /// Network the node must report.
    pub network: Arc<str>,
    /// Deadline applied to the node queries of one request.
    pub rpc_timeout: Option<Duration>,
}

/// HTTP server for the dashboard.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server around an already built node client.
    pub fn new(config: HubConfig, rpc: Arc<dyn LightningRpc>) -> Self {
        let state = AppState {
            rpc,
            network: Arc::from(config.network.as_str()),
            rpc_timeout: config.lnd.rpc_timeout_secs.map(Duration::from_secs),
        };

        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &HubConfig, state: AppState) -> Router {
        Router::new()
            .route("/", any(home_handler))
            .nest_service("/static", ServeDir::new(&config.static_dir))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
    }

    /// The router, for serving through another acceptor or in tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server on a plain TCP listener until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Run the server over TLS until `shutdown` fires.
    pub async fn run_tls(
        self,
        addr: SocketAddr,
        tls: RustlsConfig,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        tracing::info!(address = %addr, "HTTPS server starting");

        let handle = axum_server::Handle::new();
        let shutdown_handle = handle.clone();
        tokio::spawn(async move {
            let _ = shutdown.recv().await;
            tracing::info!("Shutdown signal received");
            shutdown_handle.graceful_shutdown(Some(Duration::from_secs(10)));
        });

        axum_server::bind_rustls(addr, tls)
            .handle(handle)
            .serve(self.router.into_make_service())
            .await?;

        tracing::info!("HTTPS server stopped");
        Ok(())
    }
}

/// Home page handler.
///
/// Only `GET` queries the node; any other verb is rejected first.
async fn home_handler(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
) -> Response {
    let start = Instant::now();
    let request_id = request_id(&headers).to_string();

    if method != Method::GET {
        tracing::debug!(request_id = %request_id, method = %method, "Method not allowed");
        metrics::record_request(method.as_str(), 405, start);
        return (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed!").into_response();
    }

    let deadline = state.rpc_timeout.map(Deadline::after);
    match fetch_snapshot(state.rpc.as_ref(), &state.network, deadline).await {
        Ok(snapshot) => {
            metrics::record_request(method.as_str(), 200, start);
            Html(render_home(&snapshot)).into_response()
        }
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                error = %e,
                deadline_exceeded = e.is_deadline_exceeded(),
                "Unable to fetch home state"
            );
            metrics::record_request(method.as_str(), 500, start);
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
        }
    }
}
