//! Lightning Hub
//!
//! Serves a single page showing the live state of one lightning node.
//!
//! # Architecture Overview
//!
//! ```text
//!     Browser            ┌──────────────────────────────────────────────┐
//!     ───────────────────┼─▶ http (axum) ──▶ hub::fetch_snapshot ──┐    │
//!                        │                                         │    │
//!     ◀──────────────────┼── page renderer ◀── Snapshot ◀──────────┤    │
//!                        │                                         ▼    │
//!                        │                    lnd::LndClient (TLS + macaroon)
//!                        └─────────────────────────────────────────┼────┘
//!                                                                  ▼
//!                                                          node gRPC service
//! ```

use std::process::ExitCode;

use clap::Parser;

use lnhub::config::Cli;
use lnhub::lifecycle::startup;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match startup::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "lnhub exiting");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
