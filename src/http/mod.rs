//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → page handler → hub::fetch_snapshot
//!     → page.rs (render snapshot)
//!     → Send to client
//! ```

pub mod page;
pub mod redirect;
pub mod request;
pub mod server;

pub use redirect::run_redirect;
pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use server::{AppState, HttpServer, INTERNAL_ERROR_BODY};
