//! host::registry
//!
//! Host selection and dispatch.
//!
//! # Design
//!
//! [`VcsHost`] is the closed set of supported hosts; each tag maps to a
//! stateless [`HostDialect`]. Adding a host means adding a variant, a
//! dialect and an entry in [`VcsHost::all`]; dispatch code does not change.
//!
//! # Priority order
//!
//! Hosts are tried in the order of [`VcsHost::all`]:
//! Bitbucket, GitHub, GitLab, SourceHut. Identity is decided on the
//! hostname alone (the host's base name or a subdomain of it, or a
//! configured alias), so the built-in hosts never overlap; the order only
//! matters when configured aliases collide, and then the earlier host
//! wins.
//!
//! URLs no host claims go to the [generic resolver](super::generic).
//!
//! # Example
//!
//! ```
//! use vcslink::host::{HostRegistry, VcsHost};
//!
//! let registry = HostRegistry::default().with_alias(VcsHost::GitLab, "gitlab.example.org");
//!
//! assert_eq!(
//!     registry.detect("https://gitlab.example.org/team/app/-/tree/main/src"),
//!     Some(VcsHost::GitLab)
//! );
//! let info = registry.resolve("https://gitlab.example.org/team/app/-/tree/main/src");
//! assert_eq!(info.url(), "https://gitlab.example.org/team/app.git");
//! assert_eq!(info.revision(), "main");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::bitbucket::Bitbucket;
use super::generic;
use super::github::GitHub;
use super::gitlab::GitLab;
use super::sourcehut::SourceHut;
use super::traits::{HostDialect, HostError};
use crate::core::config::Config;
use crate::core::types::{VcsInfo, VcsType};
use crate::core::url::{host_matches, RemoteUrl};

/// Supported hosting services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VcsHost {
    Bitbucket,
    GitHub,
    GitLab,
    SourceHut,
}

impl VcsHost {
    /// All hosts, in dispatch priority order.
    ///
    /// # Example
    ///
    /// ```
    /// use vcslink::host::VcsHost;
    ///
    /// assert_eq!(VcsHost::all().first(), Some(&VcsHost::Bitbucket));
    /// ```
    pub fn all() -> &'static [VcsHost] {
        &[
            VcsHost::Bitbucket,
            VcsHost::GitHub,
            VcsHost::GitLab,
            VcsHost::SourceHut,
        ]
    }

    /// The host name as used in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            VcsHost::Bitbucket => "bitbucket",
            VcsHost::GitHub => "github",
            VcsHost::GitLab => "gitlab",
            VcsHost::SourceHut => "sourcehut",
        }
    }

    /// Parse a host from its configuration name, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.to_lowercase();
        Self::all().iter().copied().find(|host| host.name() == s)
    }

    /// The URL dialect of this host.
    pub fn dialect(&self) -> &'static dyn HostDialect {
        match self {
            VcsHost::Bitbucket => &Bitbucket,
            VcsHost::GitHub => &GitHub,
            VcsHost::GitLab => &GitLab,
            VcsHost::SourceHut => &SourceHut,
        }
    }

    /// Base hostname of the public instance.
    pub fn hostname(&self) -> &'static str {
        self.dialect().hostname()
    }

    /// VCS types served by this host.
    pub fn supported_types(&self) -> &'static [VcsType] {
        self.dialect().supported_types()
    }

    /// The built-in host owning `url`, if any.
    pub fn from_url(url: &str) -> Option<Self> {
        HostRegistry::default().detect(url)
    }

    /// Whether `url` lives on this host.
    pub fn is_applicable(&self, url: &str) -> bool {
        RemoteUrl::parse(url).is_some_and(|remote| host_matches(remote.host(), self.hostname()))
    }

    /// Whether this host can render permalinks for `info`.
    pub fn is_applicable_to(&self, info: &VcsInfo) -> bool {
        self.supported_types().contains(&info.vcs_type()) && self.is_applicable(info.url())
    }

    /// User or organization named by a URL on this host.
    ///
    /// # Errors
    ///
    /// `HostError::NotApplicable` if the URL is not on this host or names
    /// no owner and project.
    pub fn user_or_organization(&self, url: &str) -> Result<String, HostError> {
        let remote = self.remote(url)?;
        self.dialect()
            .user_or_organization(&remote)
            .ok_or_else(|| self.not_applicable(url))
    }

    /// Project named by a URL on this host.
    ///
    /// # Errors
    ///
    /// `HostError::NotApplicable` if the URL is not on this host or names
    /// no owner and project.
    pub fn project(&self, url: &str) -> Result<String, HostError> {
        let remote = self.remote(url)?;
        self.dialect()
            .project(&remote)
            .ok_or_else(|| self.not_applicable(url))
    }

    /// Split a URL on this host into a [`VcsInfo`].
    ///
    /// # Errors
    ///
    /// `HostError::NotApplicable` if the URL is not on this host or names
    /// no repository.
    pub fn to_vcs_info(&self, url: &str) -> Result<VcsInfo, HostError> {
        let remote = self.remote(url)?;
        self.dialect()
            .to_vcs_info(&remote)
            .ok_or_else(|| self.not_applicable(url))
    }

    /// Render a permalink to line `start` (through `end`, if given) of `info`.
    ///
    /// # Errors
    ///
    /// - `HostError::InvalidLineRange` for line 0 or `end < start`
    /// - `HostError::MissingRevision` if `info` has no revision
    /// - `HostError::NotApplicable` if `info.url()` is not on this host or
    ///   the host does not serve `info`'s VCS type
    pub fn to_permalink(
        &self,
        info: &VcsInfo,
        start: u32,
        end: Option<u32>,
    ) -> Result<String, HostError> {
        let end = validate_lines(info, start, end)?;
        let remote = self.remote(info.url())?;
        if !self.supported_types().contains(&info.vcs_type()) {
            return Err(self.not_applicable(info.url()));
        }
        self.dialect()
            .to_permalink(info, &remote, start, end)
            .ok_or_else(|| self.not_applicable(info.url()))
    }

    fn remote(&self, url: &str) -> Result<RemoteUrl, HostError> {
        RemoteUrl::parse(url)
            .filter(|remote| host_matches(remote.host(), self.hostname()))
            .ok_or_else(|| self.not_applicable(url))
    }

    fn not_applicable(&self, url: &str) -> HostError {
        HostError::NotApplicable {
            host: *self,
            url: url.to_string(),
        }
    }
}

impl fmt::Display for VcsHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Valid host names for configuration.
pub fn valid_host_names() -> Vec<&'static str> {
    VcsHost::all().iter().map(|host| host.name()).collect()
}

/// Dispatches URLs to host dialects, honoring extra hostnames.
///
/// The default registry knows only the public instances and holds no
/// state; [`HostRegistry::from_config`] adds self-hosted instances.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostRegistry {
    aliases: Vec<(VcsHost, String)>,
}

impl HostRegistry {
    /// Build a registry from the `[hosts]` table of a configuration.
    pub fn from_config(config: &Config) -> Self {
        config
            .host_aliases()
            .fold(Self::default(), |registry, (host, hostname)| {
                registry.with_alias(host, hostname)
            })
    }

    /// Treat `hostname` as an instance of `host`.
    pub fn with_alias(mut self, host: VcsHost, hostname: impl Into<String>) -> Self {
        let hostname = hostname.into().to_ascii_lowercase();
        if !self.aliases.iter().any(|(h, name)| *h == host && *name == hostname) {
            self.aliases.push((host, hostname));
        }
        self
    }

    /// Configured extra hostnames of `host`.
    pub fn aliases(&self, host: VcsHost) -> impl Iterator<Item = &str> {
        self.aliases
            .iter()
            .filter(move |(h, _)| *h == host)
            .map(|(_, name)| name.as_str())
    }

    /// The host owning `url`, if any.
    pub fn detect(&self, url: &str) -> Option<VcsHost> {
        RemoteUrl::parse(url).and_then(|remote| self.detect_remote(&remote))
    }

    fn detect_remote(&self, remote: &RemoteUrl) -> Option<VcsHost> {
        VcsHost::all().iter().copied().find(|host| {
            host_matches(remote.host(), host.hostname())
                || self
                    .aliases(*host)
                    .any(|alias| remote.host().eq_ignore_ascii_case(alias))
        })
    }

    /// Resolve a URL into a [`VcsInfo`].
    ///
    /// Never fails: URLs no host claims, or that a host cannot split, are
    /// handled by the generic resolver.
    pub fn resolve(&self, url: &str) -> VcsInfo {
        let info = RemoteUrl::parse(url).and_then(|remote| {
            let host = self.detect_remote(&remote)?;
            let info = host.dialect().to_vcs_info(&remote);
            match &info {
                Some(info) => log::debug!("{}: resolved {} to {}", host, url, info),
                None => log::debug!("{}: {} names no repository", host, url),
            }
            info
        });

        info.unwrap_or_else(|| generic::resolve(url))
    }

    /// User or organization named by a URL on any known host.
    ///
    /// # Errors
    ///
    /// `HostError::NoMatchingHost` if no host claims the URL, or
    /// `HostError::NotApplicable` if it names no owner and project.
    pub fn user_or_organization(&self, url: &str) -> Result<String, HostError> {
        let (host, remote) = self.claim(url)?;
        host.dialect()
            .user_or_organization(&remote)
            .ok_or_else(|| host.not_applicable(url))
    }

    /// Project named by a URL on any known host.
    ///
    /// # Errors
    ///
    /// See [`HostRegistry::user_or_organization`].
    pub fn project(&self, url: &str) -> Result<String, HostError> {
        let (host, remote) = self.claim(url)?;
        host.dialect()
            .project(&remote)
            .ok_or_else(|| host.not_applicable(url))
    }

    /// Render a permalink with the host that `info.url()` belongs to.
    ///
    /// # Errors
    ///
    /// - `HostError::InvalidLineRange` for line 0 or `end < start`
    /// - `HostError::MissingRevision` if `info` has no revision
    /// - `HostError::NoMatchingHost` if no host serves `info`'s URL and type
    pub fn to_permalink(
        &self,
        info: &VcsInfo,
        start: u32,
        end: Option<u32>,
    ) -> Result<String, HostError> {
        let end = validate_lines(info, start, end)?;
        let no_host = || HostError::NoMatchingHost(info.url().to_string());

        let remote = RemoteUrl::parse(info.url()).ok_or_else(no_host)?;
        let host = self
            .detect_remote(&remote)
            .filter(|host| host.supported_types().contains(&info.vcs_type()))
            .ok_or_else(no_host)?;

        log::debug!("{}: rendering permalink for {} lines {}-{}", host, info, start, end);
        host.dialect()
            .to_permalink(info, &remote, start, end)
            .ok_or_else(|| host.not_applicable(info.url()))
    }

    fn claim(&self, url: &str) -> Result<(VcsHost, RemoteUrl), HostError> {
        let no_host = || HostError::NoMatchingHost(url.to_string());
        let remote = RemoteUrl::parse(url).ok_or_else(no_host)?;
        let host = self.detect_remote(&remote).ok_or_else(no_host)?;
        Ok((host, remote))
    }
}

/// Check a line range and revision, returning the effective end line.
fn validate_lines(info: &VcsInfo, start: u32, end: Option<u32>) -> Result<u32, HostError> {
    let end = end.unwrap_or(start);
    if start == 0 || end < start {
        return Err(HostError::InvalidLineRange { start, end });
    }
    if info.revision().trim().is_empty() {
        return Err(HostError::MissingRevision);
    }
    Ok(end)
}
