//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, bind address parses)
//! - Check the network label and that listener TLS is complete
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: HubConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::{HubConfig, KNOWN_NETWORKS};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("mainnet, testnet and simnet params can't be used together -- choose one of the three")]
    ConflictingNetworks,

    #[error("unknown network '{0}'")]
    UnknownNetwork(String),

    #[error("lnd.rpc_host must not be empty")]
    EmptyRpcHost,

    #[error("{0} must not be empty")]
    EmptyPath(&'static str),

    #[error("invalid bind address '{0}'")]
    InvalidBindAddress(String),

    #[error("listener TLS needs both cert_path and key_path")]
    IncompleteListenerTls,

    #[error("listener.redirect_address needs listener TLS")]
    RedirectWithoutTls,

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),
}

/// Validate a fully resolved configuration.
pub fn validate_config(config: &HubConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !KNOWN_NETWORKS.contains(&config.network.as_str()) {
        errors.push(ValidationError::UnknownNetwork(config.network.clone()));
    }

    if config.lnd.rpc_host.trim().is_empty() {
        errors.push(ValidationError::EmptyRpcHost);
    }
    if config.lnd.tls_cert_path.trim().is_empty() {
        errors.push(ValidationError::EmptyPath("lnd.tls_cert_path"));
    }
    if config.lnd.macaroon_path.trim().is_empty() {
        errors.push(ValidationError::EmptyPath("lnd.macaroon_path"));
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }
    if let Some(tls) = &config.listener.tls {
        if tls.cert_path.trim().is_empty() || tls.key_path.trim().is_empty() {
            errors.push(ValidationError::IncompleteListenerTls);
        }
    }
    if let Some(redirect) = &config.listener.redirect_address {
        if redirect.parse::<SocketAddr>().is_err() {
            errors.push(ValidationError::InvalidBindAddress(redirect.clone()));
        }
        if config.listener.tls.is_none() {
            errors.push(ValidationError::RedirectWithoutTls);
        }
    }

    if config.lnd.rpc_timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout("lnd.rpc_timeout_secs"));
    }
    if config.lnd.connect_timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout("lnd.connect_timeout_secs"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("timeouts.request_secs"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
