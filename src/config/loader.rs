//! Configuration loading from disk and the command line.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::args::Cli;
use crate::config::paths::clean_and_expand_path;
use crate::config::schema::HubConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Default location of the hub's own config file.
pub const DEFAULT_CONFIG_FILE: &str = "~/.lnhub/lnhub.toml";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// A validated configuration plus anything worth logging once logging is up.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: HubConfig,
    pub config_file: PathBuf,
    pub warnings: Vec<String>,
}

/// Build the configuration from defaults, the config file and `cli`, in
/// increasing order of precedence.
///
/// A missing config file is only an error when it was named explicitly.
pub fn load(cli: &Cli) -> Result<LoadedConfig, ConfigError> {
    let explicit = cli.config_file.is_some();
    let config_file = match &cli.config_file {
        Some(path) => clean_and_expand_path(&path.to_string_lossy()),
        None => clean_and_expand_path(DEFAULT_CONFIG_FILE),
    };

    let mut warnings = Vec::new();
    let mut config = match read_config_file(&config_file) {
        Ok(config) => config,
        Err(ConfigError::Io(e)) if !explicit && e.kind() == ErrorKind::NotFound => {
            warnings.push(format!("config file {:?} not found, using defaults", config_file));
            HubConfig::default()
        }
        Err(e) => return Err(e),
    };

    cli.apply(&mut config)
        .map_err(|e| ConfigError::Validation(vec![e]))?;
    config.resolve_paths();

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(LoadedConfig {
        config,
        config_file,
        warnings,
    })
}

fn read_config_file(path: &Path) -> Result<HubConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}
