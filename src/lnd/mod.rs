//! Lightning node RPC subsystem.
//!
//! # Data Flow
//! ```text
//! Config (rpc host, cert path, macaroon path)
//!     → tls.rs (load and check the node's PEM certificate)
//!     → credential.rs (read + decode macaroon, build interceptor)
//!     → client.rs (TLS channel with the interceptor baked in)
//!     → LightningRpc calls (GetInfo, ListChannels, WalletBalance)
//! ```
//!
//! # Security Constraints
//! - Macaroon bytes are never logged
//! - Every call carries the macaroon; there is no unauthenticated client type
//! - Only read calls are exposed; nothing here mutates node state

pub mod client;
pub mod credential;
pub mod lnrpc;
pub mod tls;
pub mod types;

pub use client::{LightningRpc, LndClient, LndConnectOptions};
pub use credential::{Credential, MacaroonInterceptor};
pub use types::{Deadline, LndError, LndResult, RpcCall};
