//! Node-specific types and error definitions.

use std::fmt;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;

/// Boxed transport-level cause carried by [`LndError::Connection`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The three read calls issued against the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RpcCall {
    Info,
    Channels,
    Balance,
}

impl RpcCall {
    pub fn as_str(&self) -> &'static str {
        match self {
            RpcCall::Info => "info",
            RpcCall::Channels => "channels",
            RpcCall::Balance => "balance",
        }
    }
}

impl fmt::Display for RpcCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while talking to the node.
#[derive(Debug, Error)]
pub enum LndError {
    /// Bad or missing local file or path.
    #[error("config error: {0}")]
    Config(String),

    /// Credential file unreadable or not a valid macaroon.
    #[error("credential error: {0}")]
    Credential(String),

    /// Transport, TLS or dial failure.
    #[error("connection error: {reason}")]
    Connection {
        reason: String,
        deadline_exceeded: bool,
        #[source]
        source: Option<BoxError>,
    },

    /// A specific remote call failed or returned a malformed response.
    #[error("rpc {call} failed: {reason}")]
    Rpc {
        call: RpcCall,
        reason: String,
        deadline_exceeded: bool,
    },

    /// The node runs on a different network than the hub is configured for.
    #[error("network mismatch: node reports {reported}, hub expects {expected}")]
    NetworkMismatch { reported: String, expected: String },
}

impl LndError {
    /// Build an RPC error for a malformed or failed response.
    pub fn rpc(call: RpcCall, reason: impl Into<String>) -> Self {
        LndError::Rpc {
            call,
            reason: reason.into(),
            deadline_exceeded: false,
        }
    }

    /// Map a gRPC status returned by `call` onto the error kinds above.
    ///
    /// `Unavailable` means the channel itself is down, which is reported as a
    /// connection failure no matter which call observed it.
    pub fn from_status(call: RpcCall, status: tonic::Status) -> Self {
        match status.code() {
            tonic::Code::Unavailable => LndError::Connection {
                reason: format!("node unavailable during {} call: {}", call, status.message()),
                deadline_exceeded: false,
                source: Some(Box::new(status)),
            },
            tonic::Code::DeadlineExceeded => LndError::Rpc {
                call,
                reason: status.message().to_string(),
                deadline_exceeded: true,
            },
            code => LndError::Rpc {
                call,
                reason: format!("{:?}: {}", code, status.message()),
                deadline_exceeded: false,
            },
        }
    }

    /// True when the failure was caused by an expired [`Deadline`].
    pub fn is_deadline_exceeded(&self) -> bool {
        match self {
            LndError::Connection { deadline_exceeded, .. } => *deadline_exceeded,
            LndError::Rpc { deadline_exceeded, .. } => *deadline_exceeded,
            _ => false,
        }
    }

    /// The call that failed, if this is an RPC error.
    pub fn call(&self) -> Option<RpcCall> {
        match self {
            LndError::Rpc { call, .. } => Some(*call),
            _ => None,
        }
    }
}

/// Result type for node operations.
pub type LndResult<T> = Result<T, LndError>;

/// Caller-supplied point in time after which a pending call is abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline(Instant);

impl Deadline {
    pub fn after(duration: Duration) -> Self {
        Self(Instant::now() + duration)
    }

    pub fn instant(&self) -> Instant {
        self.0
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.0
    }
}

/// Run `fut` under an optional deadline.
///
/// Returns `None` if the deadline fired first; the future is dropped, which
/// cancels the in-flight request.
pub async fn with_deadline<F: Future>(deadline: Option<Deadline>, fut: F) -> Option<F::Output> {
    match deadline {
        Some(deadline) => tokio::time::timeout_at(deadline.instant(), fut).await.ok(),
        None => Some(fut.await),
    }
}
