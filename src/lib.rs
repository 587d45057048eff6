//! vcslink - VCS host resolution and permalinks
//!
//! Given a project or source URL as found in package metadata (README
//! badges, npm `repository` fields, forge web links), vcslink derives
//! where the versioned source lives: repository URL, revision and
//! in-repository path. Given such a location and a line range, it renders
//! a host-specific permanent link back to those lines.
//!
//! # Architecture
//!
//! - [`core`] - Domain types, URL utilities, SPDX rendering, configuration
//! - [`host`] - Host dialects (GitHub, GitLab, Bitbucket, SourceHut), the
//!   generic resolver and the registry dispatching between them
//! - [`cli`] - Command-line interface layer
//! - [`ui`] - Output helpers
//!
//! # Example
//!
//! ```
//! use vcslink::core::types::VcsType;
//!
//! let info = vcslink::resolve_vcs_info(
//!     "https://bitbucket.org/yevster/spdxtraxample/src/287aebca5e7ff4167af1fb648640dcdbdf4ec666/LICENSE.txt",
//! );
//! assert_eq!(info.vcs_type(), VcsType::Git);
//! assert_eq!(info.url(), "https://bitbucket.org/yevster/spdxtraxample.git");
//!
//! let link = vcslink::to_permalink(&info, 4, Some(8)).unwrap();
//! assert!(link.ends_with("/src/287aebca5e7ff4167af1fb648640dcdbdf4ec666/LICENSE.txt#lines-4:8"));
//! ```
//!
//! # Guarantees
//!
//! 1. Resolution never fails; unknown URLs come back verbatim
//! 2. All operations are pure and safe to call from any thread
//! 3. Resolved URLs never carry credentials, revisions or paths

pub mod cli;
pub mod core;
pub mod host;
pub mod ui;

use crate::core::types::VcsInfo;
use crate::host::{HostError, HostRegistry};

/// Resolve a URL into a [`VcsInfo`] using the built-in hosts.
pub fn resolve_vcs_info(url: &str) -> VcsInfo {
    HostRegistry::default().resolve(url)
}

/// Render a permalink to line `start` (through `end`, if given) of `info`.
///
/// # Errors
///
/// See [`HostRegistry::to_permalink`].
pub fn to_permalink(info: &VcsInfo, start: u32, end: Option<u32>) -> Result<String, HostError> {
    HostRegistry::default().to_permalink(info, start, end)
}

/// User or organization named by a URL on a built-in host.
///
/// # Errors
///
/// See [`HostRegistry::user_or_organization`].
pub fn user_or_organization(url: &str) -> Result<String, HostError> {
    HostRegistry::default().user_or_organization(url)
}

/// Project named by a URL on a built-in host.
///
/// # Errors
///
/// See [`HostRegistry::project`].
pub fn project(url: &str) -> Result<String, HostError> {
    HostRegistry::default().project(url)
}
