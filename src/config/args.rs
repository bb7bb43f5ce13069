//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::schema::HubConfig;
use crate::config::validation::ValidationError;

#[derive(Parser, Debug, Default, Clone)]
#[command(name = "lnhub")]
#[command(about = "Dashboard for the live state of a lightning node", long_about = None)]
pub struct Cli {
    /// Path to config file (default: ~/.lnhub/lnhub.toml)
    #[arg(short = 'C', long = "configfile")]
    pub config_file: Option<PathBuf>,

    /// Address to listen for HTTP on
    #[arg(long = "bind-addr")]
    pub bind_addr: Option<String>,

    /// The node's RPC listening address
    #[arg(long)]
    pub rpchost: Option<String>,

    /// TLS certificate path of the node's RPC service
    #[arg(long)]
    pub certpath: Option<String>,

    /// Path to the macaroon used to authenticate calls
    #[arg(long)]
    pub macpath: Option<String>,

    /// Use the main network
    #[arg(long)]
    pub mainnet: bool,

    /// Use the test network
    #[arg(long)]
    pub testnet: bool,

    /// Use the simulation network
    #[arg(long)]
    pub simnet: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long = "log-level")]
    pub log_level: Option<String>,
}

impl Cli {
    /// The network selected by flag, if any.
    pub fn network(&self) -> Result<Option<&'static str>, ValidationError> {
        let selected: Vec<&'static str> = [
            (self.mainnet, "mainnet"),
            (self.testnet, "testnet"),
            (self.simnet, "simnet"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect();

        match selected.as_slice() {
            [] => Ok(None),
            [one] => Ok(Some(*one)),
            _ => Err(ValidationError::ConflictingNetworks),
        }
    }

    /// Apply command line values on top of `config`.
    pub fn apply(&self, config: &mut HubConfig) -> Result<(), ValidationError> {
        if let Some(network) = self.network()? {
            config.network = network.to_string();
        }
        if let Some(addr) = &self.bind_addr {
            config.listener.bind_address = addr.clone();
        }
        if let Some(host) = &self.rpchost {
            config.lnd.rpc_host = host.clone();
        }
        if let Some(path) = &self.certpath {
            config.lnd.tls_cert_path = path.clone();
        }
        if let Some(path) = &self.macpath {
            config.lnd.macaroon_path = path.clone();
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }
        Ok(())
    }
}
