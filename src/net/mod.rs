//! Network layer subsystem.
//!
//! # Design Decisions
//! - TLS on the public listener is optional; plain HTTP is the default
//! - Certificate paths are expanded the same way as the node's paths

pub mod tls;
