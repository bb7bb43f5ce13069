//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! command line (args.rs)
//!     → optional config file (TOML, loader.rs)
//!     → command line overrides applied on top
//!     → default paths resolved for the selected network
//!     → validation.rs (semantic checks)
//!     → HubConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Paths are stored as given; `paths.rs` expands `~` and `$VAR` right
//!   before the files are opened

pub mod args;
pub mod loader;
pub mod paths;
pub mod schema;
pub mod validation;

pub use args::Cli;
pub use loader::{load, ConfigError, LoadedConfig};
pub use schema::HubConfig;
pub use schema::ListenerConfig;
pub use schema::LndConfig;
pub use schema::ObservabilityConfig;
