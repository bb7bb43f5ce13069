//! State aggregation subsystem.
//!
//! # Data Flow
//! ```text
//! Page request
//!     → aggregator.rs (GetInfo, validate network)
//!     → aggregator.rs (ListChannels + WalletBalance, joined)
//!     → model.rs (Snapshot, immutable)
//!     → handed to the page renderer, then dropped
//! ```
//!
//! # Design Decisions
//! - No cache: every call is a fresh read of the node
//! - All-or-nothing: any failed query fails the whole snapshot
//! - No internal state, so concurrent calls never interfere

pub mod aggregator;
pub mod model;

pub use aggregator::fetch_snapshot;
pub use model::{Amount, ChannelRecord, NodeIdentity, Snapshot, WalletBalance};
