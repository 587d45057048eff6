//! host::traits
//!
//! The [`HostDialect`] trait: one implementation per hosting service,
//! describing its URL grammar in both directions.
//!
//! # Design
//!
//! Dialects are stateless unit structs. A dialect does not check host
//! identity itself; the caller ([`super::VcsHost`] or
//! [`super::HostRegistry`]) has already decided the URL belongs to it.
//!
//! Every forge in this crate shares the same skeleton:
//!
//! ```text
//! <origin>/<owner...>/<project>[/-]/<marker>/<revision>/<path...>
//! ```
//!
//! so parsing and rendering are provided methods driven by a handful of
//! per-host hooks (`revision_markers`, `permalink_marker`, `line_anchor`).

use thiserror::Error;

use super::generic;
use super::VcsHost;
use crate::core::types::{VcsInfo, VcsType};
use crate::core::url::{encode_path, strip_credentials, strip_git_suffix, RemoteUrl};

/// Errors from host operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The URL does not belong to this host or lacks an owner/project pair.
    #[error("not a {host} URL: {url}")]
    NotApplicable {
        /// The host that was asked
        host: VcsHost,
        /// The offending URL
        url: String,
    },

    /// Line numbers are 1-based and the end must not precede the start.
    #[error("invalid line range: {start}-{end}")]
    InvalidLineRange { start: u32, end: u32 },

    /// Permalinks need an immutable revision to point at.
    #[error("cannot build a permalink without a revision")]
    MissingRevision,

    /// No host variant can render a permalink for this location.
    #[error("no known host for {0}")]
    NoMatchingHost(String),
}

/// URL grammar of one hosting service.
pub trait HostDialect: Send + Sync {
    /// Base hostname; subdomains match too.
    fn hostname(&self) -> &'static str;

    /// VCS types this host serves.
    fn supported_types(&self) -> &'static [VcsType];

    /// The VCS type of a repository on this host.
    fn vcs_type_for(&self, _url: &RemoteUrl) -> VcsType {
        VcsType::Git
    }

    /// Path segments that introduce `<revision>/<path>` in web URLs.
    fn revision_markers(&self, vcs_type: VcsType) -> &'static [&'static str];

    /// Number of leading path segments naming the repository.
    ///
    /// `None` if the URL does not name an owner and a project.
    fn repository_len(&self, url: &RemoteUrl) -> Option<usize> {
        let segments = url.segments();
        let named = segments.len() >= 2
            && !segments[0].is_empty()
            && !strip_git_suffix(&segments[1]).is_empty();
        named.then_some(2)
    }

    /// The owner as exposed to callers, from the raw owner segment(s).
    fn display_owner(&self, raw: &str) -> String {
        raw.to_string()
    }

    /// Whether clone URLs on this host end in `.git`.
    fn appends_git_suffix(&self) -> bool {
        true
    }

    /// First path segment after the repository in a permalink.
    fn permalink_marker(&self, info: &VcsInfo) -> &'static str;

    /// Fragment selecting the line(s). `end == start` means a single line.
    fn line_anchor(&self, info: &VcsInfo, start: u32, end: u32) -> String;

    /// Raw owner path and project segment (with any `.git` suffix).
    fn raw_owner_and_project<'a>(&self, url: &'a RemoteUrl) -> Option<(String, &'a str)> {
        let len = self.repository_len(url)?;
        let segments = url.segments();
        let owner = segments[..len - 1].join("/");
        Some((owner, segments[len - 1].as_str()))
    }

    /// User or organization named by the URL.
    fn user_or_organization(&self, url: &RemoteUrl) -> Option<String> {
        self.raw_owner_and_project(url)
            .map(|(owner, _)| self.display_owner(&owner))
    }

    /// Project named by the URL, without a `.git` suffix.
    fn project(&self, url: &RemoteUrl) -> Option<String> {
        self.raw_owner_and_project(url)
            .map(|(_, project)| strip_git_suffix(project).to_string())
    }

    /// Revision and path from the segments following the repository.
    fn revision_and_path(&self, rest: &[String], vcs_type: VcsType) -> Option<(String, String)> {
        split_revision_and_path(rest, self.revision_markers(vcs_type))
    }

    /// Split a URL on this host into a [`VcsInfo`].
    ///
    /// `None` if the URL does not name a repository.
    fn to_vcs_info(&self, url: &RemoteUrl) -> Option<VcsInfo> {
        let len = self.repository_len(url)?;
        let vcs_type = self.vcs_type_for(url);

        let mut repository = format!(
            "{}/{}",
            url.repository_origin(),
            encode_path(&url.segments()[..len].join("/"))
        );
        if self.appends_git_suffix() && vcs_type == VcsType::Git && !repository.ends_with(".git") {
            repository.push_str(".git");
        }

        let (revision, path) = self
            .revision_and_path(&url.segments()[len..], vcs_type)
            .unwrap_or_else(|| {
                let revision = generic::forge_fragment_revision(url).unwrap_or_default();
                (revision.to_string(), String::new())
            });

        Some(VcsInfo::new(
            vcs_type,
            strip_credentials(&repository),
            revision,
            path,
        ))
    }

    /// Render a permalink to `start..=end` of `info`.
    ///
    /// Callers validate the line range and revision beforehand. Decoded
    /// names, revision and path are percent-encoded again; the port of an
    /// `http(s)` repository URL is kept.
    fn to_permalink(&self, info: &VcsInfo, url: &RemoteUrl, start: u32, end: u32) -> Option<String> {
        let (owner, project) = self.raw_owner_and_project(url)?;

        let mut link = format!(
            "https://{}/{}/{}/{}/{}",
            url.web_authority(),
            encode_path(&owner),
            encode_path(strip_git_suffix(project)),
            self.permalink_marker(info),
            encode_path(info.revision())
        );
        if !info.path().is_empty() {
            link.push('/');
            link.push_str(&encode_path(info.path()));
        }
        link.push('#');
        link.push_str(&self.line_anchor(info, start, end));

        Some(link)
    }
}

/// Split `[-/]<marker>/<revision>/<path...>` segments.
///
/// Returns `None` unless a marker and a revision are present.
pub fn split_revision_and_path(rest: &[String], markers: &[&str]) -> Option<(String, String)> {
    let rest = match rest.first() {
        Some(first) if first == "-" => &rest[1..],
        _ => rest,
    };

    match rest {
        [marker, revision, path @ ..] if markers.contains(&marker.as_str()) => {
            Some((revision.clone(), path.join("/")))
        }
        _ => None,
    }
}
