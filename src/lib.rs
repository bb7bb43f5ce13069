//! Lightning Hub library: authenticated node client, state aggregation and
//! the HTTP dashboard around them.

pub mod config;
pub mod http;
pub mod hub;
pub mod lifecycle;
pub mod lnd;
pub mod net;
pub mod observability;

pub use config::HubConfig;
pub use http::HttpServer;
pub use hub::{fetch_snapshot, Snapshot};
pub use lifecycle::Shutdown;
pub use lnd::{LightningRpc, LndClient, LndError};
