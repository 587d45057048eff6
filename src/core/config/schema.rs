//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Config values are validated after parsing: the output format must be
//! known and host aliases must be bare hostnames.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::host::VcsHost;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// output = "json"
///
/// [hosts]
/// github = ["github.example.com"]
/// gitlab = ["gitlab.example.org"]
/// sourcehut = ["git.sr.example.net", "hg.sr.example.net"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Default output format ("text" or "json")
    pub output: Option<String>,

    /// Extra hostnames of self-hosted instances
    pub hosts: Option<HostsConfig>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(output) = &self.output {
            if OutputFormat::parse(output).is_none() {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid output format '{}', must be one of: text, json",
                    output
                )));
            }
        }

        if let Some(hosts) = &self.hosts {
            hosts.validate()?;
        }

        Ok(())
    }
}

/// Extra hostnames per host, for self-hosted instances.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct HostsConfig {
    pub bitbucket: Vec<String>,
    pub github: Vec<String>,
    pub gitlab: Vec<String>,
    pub sourcehut: Vec<String>,
}

impl HostsConfig {
    /// Every configured `(host, hostname)` pair, in host priority order.
    pub fn aliases(&self) -> impl Iterator<Item = (VcsHost, &str)> {
        VcsHost::all().iter().flat_map(move |host| {
            self.for_host(*host)
                .iter()
                .map(move |hostname| (*host, hostname.as_str()))
        })
    }

    /// Configured hostnames of one host.
    pub fn for_host(&self, host: VcsHost) -> &[String] {
        match host {
            VcsHost::Bitbucket => &self.bitbucket,
            VcsHost::GitHub => &self.github,
            VcsHost::GitLab => &self.gitlab,
            VcsHost::SourceHut => &self.sourcehut,
        }
    }

    /// Validate that every alias is a bare hostname.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first bad alias.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (host, hostname) in self.aliases() {
            let bare = !hostname.is_empty()
                && !hostname
                    .chars()
                    .any(|c| c == '/' || c == ':' || c.is_whitespace());
            if !bare {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid {} hostname '{}', expected a bare hostname such as 'git.example.com'",
                    host, hostname
                )));
            }
        }
        Ok(())
    }
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Parse a format name, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}
