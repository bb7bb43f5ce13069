//! Plain HTTP listener that sends every request to the HTTPS listener.

use axum::{
    http::{header, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;

/// Router answering every path with a permanent redirect to `https_port`.
pub fn redirect_router(https_port: u16) -> Router {
    Router::new().fallback(move |headers: HeaderMap, uri: Uri| async move {
        redirect_to_https(&headers, &uri, https_port)
    })
}

fn redirect_to_https(headers: &HeaderMap, uri: &Uri, https_port: u16) -> Response {
    let host = headers.get(header::HOST).and_then(|v| v.to_str().ok());
    match https_location(host, uri, https_port) {
        Some(location) => Redirect::permanent(&location).into_response(),
        None => (StatusCode::BAD_REQUEST, "Missing Host header").into_response(),
    }
}

/// Build the HTTPS URL for a request that arrived with `host` and `uri`.
pub fn https_location(host: Option<&str>, uri: &Uri, https_port: u16) -> Option<String> {
    let host = host?.trim();
    if host.is_empty() {
        return None;
    }

    // Keep IPv6 brackets, drop any port.
    let name = match host.strip_prefix('[') {
        Some(rest) => &host[..rest.find(']')? + 2],
        None => host.split(':').next().unwrap_or(host),
    };

    let path = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    if https_port == 443 {
        Some(format!("https://{}{}", name, path))
    } else {
        Some(format!("https://{}:{}{}", name, https_port, path))
    }
}

/// Serve redirects on `listener` until `shutdown` fires.
pub async fn run_redirect(
    listener: TcpListener,
    https_port: u16,
    mut shutdown: broadcast::Receiver<()>,
) -> Result<(), std::io::Error> {
    tracing::info!(
        address = %listener.local_addr()?,
        https_port,
        "Redirecting plain HTTP to HTTPS"
    );

    axum::serve(listener, redirect_router(https_port).into_make_service())
        .with_graceful_shutdown(async move {
            let _ = shutdown.recv().await;
        })
        .await
}
