//! Page handler tests: in-process through the router and end to end over TCP.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use tokio::net::TcpListener;
use tower::ServiceExt;

use lnhub::config::HubConfig;
use lnhub::http::{run_redirect, HttpServer, INTERNAL_ERROR_BODY};
use lnhub::lifecycle::Shutdown;
use lnhub::lnd::RpcCall;

mod common;
use common::MockNode;

fn server(node: Arc<MockNode>) -> HttpServer {
    let config = HubConfig::default();
    HttpServer::new(config, node)
}

async fn send(server: &HttpServer, method: Method) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let response = server.router().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_get_renders_page() {
    let node = Arc::new(
        MockNode::new("testnet")
            .with_channels(&[500_000, 1_500_000])
            .with_balance(750_000),
    );
    let (status, body) = send(&server(node.clone()), Method::GET).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("0.00750000 DCR"), "balance missing: {}", body);
    assert!(body.contains("0.02000000 DCR"), "capacity missing: {}", body);
    assert!(body.contains("02abc@10.0.0.1:9735"));
    assert_eq!(node.calls(), (1, 1, 1));
}

#[tokio::test]
async fn test_non_get_is_rejected_without_querying() {
    let node = Arc::new(MockNode::new("testnet"));
    let server = server(node.clone());

    for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
        let (status, body) = send(&server, method).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, "Method not allowed!");
    }
    assert_eq!(node.total_calls(), 0);
}

#[tokio::test]
async fn test_failure_is_opaque_500() {
    for call in [RpcCall::Info, RpcCall::Channels, RpcCall::Balance] {
        let node = Arc::new(MockNode::new("testnet").failing(call));
        let (status, body) = send(&server(node), Method::GET).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, INTERNAL_ERROR_BODY);
        assert!(!body.contains("injected"));
    }
}

#[tokio::test]
async fn test_network_mismatch_is_opaque_500() {
    let node = Arc::new(MockNode::new("mainnet"));
    let (status, body) = send(&server(node), Method::GET).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, INTERNAL_ERROR_BODY);
    assert!(!body.contains("mainnet"));
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let node = Arc::new(MockNode::new("testnet"));
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = server(node).router().oneshot(request).await.unwrap();

    let id = response.headers().get("x-request-id").unwrap();
    assert!(!id.to_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_each_request_reads_the_node_again() {
    let node = Arc::new(MockNode::new("testnet").with_channels(&[1]));
    let server = server(node.clone());

    for _ in 0..3 {
        let (status, _) = send(&server, Method::GET).await;
        assert_eq!(status, StatusCode::OK);
    }
    assert_eq!(node.calls(), (3, 3, 3));
}

#[tokio::test]
async fn test_end_to_end_with_shutdown() {
    let node = Arc::new(MockNode::new("testnet").with_balance(123));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = server(node);
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

    let client = reqwest::Client::new();
    let url = format!("http://{}/", addr);

    let response = client.get(&url).send().await.unwrap();
    assert_eq!(response.status(), 200);
    assert!(response.text().await.unwrap().contains("0.00000123 DCR"));

    let response = client.post(&url).send().await.unwrap();
    assert_eq!(response.status(), 405);

    shutdown.trigger();
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .unwrap()
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn test_redirect_listener_points_at_https() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let handle = tokio::spawn(run_redirect(listener, 8443, shutdown.subscribe()));

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();
    let response = client
        .get(format!("http://{}/static/style.css?v=1", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 308);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "https://127.0.0.1:8443/static/style.css?v=1"
    );

    shutdown.trigger();
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .unwrap()
        .unwrap()
        .unwrap();
}
