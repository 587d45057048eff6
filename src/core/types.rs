//! core::types
//!
//! Strong types for version-control locations.
//!
//! # Types
//!
//! - [`VcsType`] - The kind of version control system behind a URL
//! - [`VcsInfo`] - Where versioned source lives: type, repository URL,
//!   revision and in-repository path
//!
//! # Examples
//!
//! ```
//! use vcslink::core::types::{VcsInfo, VcsType};
//!
//! let info = VcsInfo::new(
//!     VcsType::Git,
//!     "https://github.com/oss-review-toolkit/ort.git",
//!     "da7e3a814fc0e6301bf3ed394eba1a661e4d88d7",
//!     "README.md",
//! );
//!
//! assert_eq!(info.vcs_type(), VcsType::Git);
//! assert_eq!(info.without_path().path(), "");
//! assert_eq!(VcsType::from_alias("hg"), VcsType::Mercurial);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown VCS type: {0}")]
    UnknownVcsType(String),
}

/// The kind of version control system.
///
/// Each type carries an ordered list of aliases. The first alias is the
/// display name; all aliases are accepted (case-insensitively) when
/// parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VcsType {
    Git,
    /// Google's `repo` tool driving a set of Git repositories via a manifest.
    GitRepo,
    Mercurial,
    Subversion,
    Cvs,
    #[default]
    Unknown,
}

impl VcsType {
    /// All types, in declaration order.
    pub fn all() -> &'static [VcsType] {
        &[
            VcsType::Git,
            VcsType::GitRepo,
            VcsType::Mercurial,
            VcsType::Subversion,
            VcsType::Cvs,
            VcsType::Unknown,
        ]
    }

    /// Recognized names for this type. The first one is the display name.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            VcsType::Git => &["Git", "GitHub", "GitLab"],
            VcsType::GitRepo => &["GitRepo", "git-repo", "repo"],
            VcsType::Mercurial => &["Mercurial", "hg"],
            VcsType::Subversion => &["Subversion", "svn"],
            VcsType::Cvs => &["CVS", "pserver"],
            VcsType::Unknown => &[""],
        }
    }

    /// Look up a type by any of its aliases, ignoring case.
    ///
    /// Unrecognized names map to [`VcsType::Unknown`].
    pub fn from_alias(name: &str) -> Self {
        Self::parse_strict(name).unwrap_or(VcsType::Unknown)
    }

    /// Look up a type by alias, failing on unrecognized names.
    ///
    /// The empty string is the alias of [`VcsType::Unknown`] and is accepted.
    pub fn parse_strict(name: &str) -> Result<Self, TypeError> {
        let name = name.trim();
        Self::all()
            .iter()
            .copied()
            .find(|t| t.aliases().iter().any(|a| a.eq_ignore_ascii_case(name)))
            .ok_or_else(|| TypeError::UnknownVcsType(name.to_string()))
    }

    /// The display name (first alias).
    pub fn name(&self) -> &'static str {
        self.aliases()[0]
    }
}

impl fmt::Display for VcsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for VcsType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s)
    }
}

impl From<String> for VcsType {
    /// Lenient: unrecognized names become [`VcsType::Unknown`].
    fn from(s: String) -> Self {
        VcsType::from_alias(&s)
    }
}

impl From<VcsType> for String {
    fn from(vcs_type: VcsType) -> Self {
        vcs_type.name().to_string()
    }
}

/// A structured description of where versioned source lives.
///
/// Invariants upheld by the resolvers in [`crate::host`]:
/// - `url` is a fetchable remote without embedded credentials, revision
///   fragment or in-repository path
/// - `revision` is empty when unknown
/// - `path` is empty for the repository root, otherwise relative with
///   forward slashes and no leading slash
///
/// Values are immutable; derive related values with the `with_*` methods.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct VcsInfo {
    #[serde(rename = "type")]
    vcs_type: VcsType,
    url: String,
    revision: String,
    path: String,
}

impl VcsInfo {
    /// Create a new `VcsInfo`.
    ///
    /// The path is normalized to have no leading or trailing slash.
    pub fn new(
        vcs_type: VcsType,
        url: impl Into<String>,
        revision: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            vcs_type,
            url: url.into(),
            revision: revision.into(),
            path: normalize_path(&path.into()),
        }
    }

    /// A `VcsInfo` with every field empty and an unknown type.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn vcs_type(&self) -> VcsType {
        self.vcs_type
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn revision(&self) -> &str {
        &self.revision
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Copy with a different type.
    pub fn with_type(&self, vcs_type: VcsType) -> Self {
        Self {
            vcs_type,
            ..self.clone()
        }
    }

    /// Copy with a different revision.
    pub fn with_revision(&self, revision: impl Into<String>) -> Self {
        Self {
            revision: revision.into(),
            ..self.clone()
        }
    }

    /// Copy with a different in-repository path.
    pub fn with_path(&self, path: impl Into<String>) -> Self {
        Self {
            path: normalize_path(&path.into()),
            ..self.clone()
        }
    }

    /// The bare repository location (same type, URL and revision, no path).
    pub fn without_path(&self) -> Self {
        self.with_path("")
    }

    /// Whether every field is empty.
    pub fn is_empty(&self) -> bool {
        self == &Self::empty()
    }
}

impl fmt::Display for VcsInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)?;
        if !self.revision.is_empty() {
            write!(f, "@{}", self.revision)?;
        }
        if !self.path.is_empty() {
            write!(f, "#{}", self.path)?;
        }
        Ok(())
    }
}

fn normalize_path(path: &str) -> String {
    path.trim_matches('/').to_string()
}
