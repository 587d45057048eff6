//! core::config
//!
//! Configuration schema and loading.
//!
//! # Locations
//!
//! Searched in order, first existing file wins:
//! 1. `$VCSLINK_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/vcslink/config.toml`
//! 3. `~/.vcslink/config.toml`
//!
//! Missing files are not an error; defaults are used.
//!
//! # Example
//!
//! ```no_run
//! use vcslink::core::config::Config;
//! use vcslink::host::HostRegistry;
//!
//! let config = Config::load().unwrap();
//! let registry = HostRegistry::from_config(&config);
//! println!("{:?}", registry.resolve("https://gitlab.example.org/team/app"));
//! ```

pub mod schema;

pub use schema::{GlobalConfig, HostsConfig, OutputFormat};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::host::VcsHost;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Path the configuration was read from (if any)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read,
    /// parsed or validated.
    pub fn load() -> Result<Self, ConfigError> {
        let candidates = candidate_paths(
            std::env::var("VCSLINK_CONFIG").ok(),
            std::env::var("XDG_CONFIG_HOME").ok(),
            dirs::home_dir(),
        );

        match candidates.into_iter().find(|path| path.exists()) {
            Some(path) => Self::load_from(&path),
            None => {
                log::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let global: GlobalConfig = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        global.validate()?;

        log::debug!("loaded config from {}", path.display());
        Ok(Self {
            global,
            path: Some(path.to_path_buf()),
        })
    }

    /// The file this configuration came from.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Default output format.
    pub fn output(&self) -> OutputFormat {
        self.global
            .output
            .as_deref()
            .and_then(OutputFormat::parse)
            .unwrap_or_default()
    }

    /// Configured `(host, hostname)` aliases.
    pub fn host_aliases(&self) -> impl Iterator<Item = (VcsHost, &str)> {
        self.global.hosts.iter().flat_map(|hosts| hosts.aliases())
    }
}

/// Config file locations in search order.
fn candidate_paths(
    env_path: Option<String>,
    xdg_config_home: Option<String>,
    home: Option<PathBuf>,
) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(path) = env_path.filter(|p| !p.is_empty()) {
        paths.push(PathBuf::from(path));
    }
    if let Some(xdg) = xdg_config_home.filter(|p| !p.is_empty()) {
        paths.push(PathBuf::from(xdg).join("vcslink/config.toml"));
    }
    if let Some(home) = home {
        paths.push(home.join(".vcslink/config.toml"));
    }
    paths
}
