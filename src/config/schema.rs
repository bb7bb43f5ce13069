//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the hub.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Networks a node can report in its chain list.
pub const KNOWN_NETWORKS: &[&str] = &["mainnet", "testnet", "testnet4", "signet", "simnet", "regtest"];

/// Root configuration for the hub.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HubConfig {
    /// Listener configuration (bind address, TLS).
    pub listener: ListenerConfig,

    /// Connection settings for the node's RPC service.
    pub lnd: LndConfig,

    /// Network the node must report (e.g. "mainnet", "testnet", "simnet").
    pub network: String,

    /// Directory served under `/static/`.
    pub static_dir: String,

    /// Query the node once before serving and refuse to start on failure.
    pub verify_on_startup: bool,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            lnd: LndConfig::default(),
            network: "testnet".to_string(),
            static_dir: "static".to_string(),
            verify_on_startup: true,
            timeouts: TimeoutConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl HubConfig {
    /// Fill paths that depend on the selected network.
    pub fn resolve_paths(&mut self) {
        if self.lnd.macaroon_path.is_empty() {
            self.lnd.macaroon_path = default_macaroon_path(&self.network);
        }
        if self.lnd.tls_cert_path.is_empty() {
            self.lnd.tls_cert_path = default_tls_cert_path();
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:80").
    pub bind_address: String,

    /// Optional TLS configuration.
    pub tls: Option<TlsConfig>,

    /// Plain HTTP address that answers every request with a redirect to the
    /// HTTPS listener. Only valid together with `tls`.
    pub redirect_address: Option<String>,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:80".to_string(),
            tls: None,
            redirect_address: None,
        }
    }
}

/// TLS configuration for the listener.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TlsConfig {
    /// Path to certificate file (PEM).
    pub cert_path: String,

    /// Path to private key file (PEM).
    pub key_path: String,
}

/// Node RPC connection settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LndConfig {
    /// RPC listening address of the node (`host:port`).
    pub rpc_host: String,

    /// TLS certificate of the node's RPC service.
    pub tls_cert_path: String,

    /// Macaroon used to authenticate every call. Empty means the default
    /// admin macaroon for the configured network.
    pub macaroon_path: String,

    /// Server name to verify instead of the host part of `rpc_host`.
    pub tls_domain: Option<String>,

    /// Deadline for the three queries of one page request, in seconds.
    pub rpc_timeout_secs: Option<u64>,

    /// If set, dial eagerly at startup and give up after this many seconds.
    pub connect_timeout_secs: Option<u64>,
}

impl Default for LndConfig {
    fn default() -> Self {
        Self {
            rpc_host: "127.0.0.1:10009".to_string(),
            tls_cert_path: default_tls_cert_path(),
            macaroon_path: String::new(),
            tls_domain: None,
            rpc_timeout_secs: None,
            connect_timeout_secs: None,
        }
    }
}

/// Default location of the node's TLS certificate.
pub fn default_tls_cert_path() -> String {
    "~/.dcrlnd/tls.cert".to_string()
}

/// Default location of the node's admin macaroon for `network`.
pub fn default_macaroon_path(network: &str) -> String {
    format!("~/.dcrlnd/data/chain/decred/{}/admin.macaroon", network)
}

/// Timeout configuration for the HTTP surface.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
