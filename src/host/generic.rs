//! host::generic
//!
//! Host-independent resolution of repository URLs.
//!
//! # Heuristics
//!
//! Applied in order by [`resolve`]:
//!
//! 1. Detect the VCS type from URL markers ([`detect_type`])
//! 2. Take an npm-style `#<revision>` fragment off Git URLs and drop the
//!    `git+` scheme prefix
//! 3. For Subversion, move a `branches/<name>` or `tags/<name>` pair into
//!    the revision and the remainder into the path
//! 4. Split `<repo>.git/<path>` into repository and path
//! 5. Otherwise return the URL unchanged with empty revision and path
//!
//! Resolution never fails: unrecognized input comes back verbatim.

use super::VcsHost;
use crate::core::types::{VcsInfo, VcsType};
use crate::core::url::{host_matches, strip_credentials, RemoteUrl};

/// Resolve a URL without host-specific knowledge.
///
/// # Example
///
/// ```
/// use vcslink::core::types::VcsType;
/// use vcslink::host::generic;
///
/// let info = generic::resolve("http://svn.osdn.net/svnroot/tortoisesvn/branches/1.13.x/src/gpl.txt");
/// assert_eq!(info.vcs_type(), VcsType::Subversion);
/// assert_eq!(info.url(), "http://svn.osdn.net/svnroot/tortoisesvn");
/// assert_eq!(info.revision(), "branches/1.13.x");
/// assert_eq!(info.path(), "src/gpl.txt");
/// ```
pub fn resolve(input: &str) -> VcsInfo {
    let input = input.trim();
    let vcs_type = detect_type(input);
    let (url, revision) = split_npm_revision(input, vcs_type);
    let url = strip_credentials(&url);

    if vcs_type == VcsType::Subversion {
        if let Some((repository, branch_or_tag, path)) = split_svn_branch_or_tag(&url) {
            log::debug!("generic: split Subversion {} from {}", branch_or_tag, repository);
            return VcsInfo::new(vcs_type, repository, branch_or_tag, path);
        }
    }

    if let Some((repository, path)) = split_git_path(&url) {
        log::debug!("generic: split path '{}' from Git repository {}", path, repository);
        return VcsInfo::new(VcsType::Git, repository, revision, path);
    }

    log::debug!("generic: no split applied to {} ({:?})", url, vcs_type);
    VcsInfo::new(vcs_type, url, revision, "")
}

/// Detect the VCS type from markers in a URL.
///
/// Checked in order: the scheme (`git://`, `git+…`, `svn…`, `hg…`,
/// `:pserver:`), known forge hostnames, a `.git` path segment, then
/// `svn`, `hg` and `cvs` tokens in the hostname or path.
pub fn detect_type(url: &str) -> VcsType {
    let lower = url.trim().to_ascii_lowercase();

    if lower.starts_with(":pserver:") || lower.starts_with(":ext:") {
        return VcsType::Cvs;
    }

    if let Some((scheme, _)) = lower.split_once("://") {
        if scheme == "git" || scheme.starts_with("git+") {
            return VcsType::Git;
        }
        if scheme.starts_with("svn") {
            return VcsType::Subversion;
        }
        if scheme == "hg" || scheme.starts_with("hg+") {
            return VcsType::Mercurial;
        }
        if scheme == "cvs" {
            return VcsType::Cvs;
        }
    }

    let Some(remote) = RemoteUrl::parse(url) else {
        log::trace!("generic: {} has no recognizable host", url);
        return VcsType::Unknown;
    };

    if let Some(host) = VcsHost::all()
        .iter()
        .find(|host| host_matches(remote.host(), host.dialect().hostname()))
    {
        return host.dialect().vcs_type_for(&remote);
    }

    let labels: Vec<String> = remote
        .host()
        .split('.')
        .map(|label| label.to_ascii_lowercase())
        .collect();
    let segments: Vec<String> = remote
        .segments()
        .iter()
        .map(|segment| segment.to_ascii_lowercase())
        .collect();

    let has_git_segment = segments
        .iter()
        .any(|s| s.len() > ".git".len() && s.ends_with(".git"));
    if has_git_segment || remote.is_scp_like() || labels.first().is_some_and(|l| l == "git") {
        return VcsType::Git;
    }

    if labels.iter().any(|l| l == "svn") || segments.iter().any(|s| s.starts_with("svn")) {
        return VcsType::Subversion;
    }

    if labels.iter().any(|l| l == "hg") || segments.iter().any(|s| s == "hg") {
        return VcsType::Mercurial;
    }

    if labels.iter().any(|l| l == "cvs") || segments.iter().any(|s| s == "cvsroot") {
        return VcsType::Cvs;
    }

    VcsType::Unknown
}

/// Split an npm-style `#<revision>` off a Git URL and drop a `git+` prefix.
///
/// A line-anchor fragment (`#L10`, `#lines-3:5`) is dropped from any URL.
/// Other fragments are only taken as a revision for Git URLs; non-Git URLs
/// keep them. Returns the URL and the (possibly empty) revision.
pub fn split_npm_revision(url: &str, vcs_type: VcsType) -> (String, String) {
    let url = url.strip_prefix("git+").unwrap_or(url);

    match url.split_once('#') {
        Some((base, fragment)) if is_line_anchor(fragment) => (base.to_string(), String::new()),
        Some((base, fragment)) if vcs_type == VcsType::Git => {
            (base.to_string(), fragment.to_string())
        }
        _ => (url.to_string(), String::new()),
    }
}

/// Split `<repository>.git/<path>` into repository and path.
///
/// `None` unless a `.git/` boundary is present. A trailing slash yields an
/// empty path.
pub fn split_git_path(url: &str) -> Option<(String, String)> {
    let boundary = url.find(".git/")?;
    let (repository, rest) = url.split_at(boundary + ".git".len());
    Some((repository.to_string(), rest.trim_matches('/').to_string()))
}

/// Split a Subversion URL at its `branches/<name>` or `tags/<name>` pair.
///
/// Returns repository URL, branch or tag (e.g. `tags/1.0`), and path.
pub fn split_svn_branch_or_tag(url: &str) -> Option<(String, String, String)> {
    let parts: Vec<&str> = url.split('/').collect();

    // Skip over `scheme:`, the empty segment and the host.
    let first_path_index = if url.contains("://") { 3 } else { 1 };

    let index = (first_path_index..parts.len().saturating_sub(1)).find(|&i| {
        matches!(parts[i], "branches" | "tags") && !parts[i + 1].is_empty()
    })?;

    let repository = parts[..index].join("/");
    let branch_or_tag = parts[index..=index + 1].join("/");
    let path = parts[index + 2..]
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("/");

    Some((repository, branch_or_tag, path))
}

/// The revision carried by a forge URL's fragment, if any.
///
/// Line anchors such as `#L12` or `#lines-3:5` are not revisions.
pub(crate) fn forge_fragment_revision(url: &RemoteUrl) -> Option<&str> {
    url.fragment().filter(|fragment| !is_line_anchor(fragment))
}

fn is_line_anchor(fragment: &str) -> bool {
    let github_style = fragment
        .strip_prefix('L')
        .is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_digit()));
    github_style || fragment.starts_with("lines-")
}
