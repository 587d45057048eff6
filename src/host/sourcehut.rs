//! host::sourcehut
//!
//! SourceHut URL dialect.
//!
//! SourceHut serves Git and Mercurial from separate hosts with separate
//! web grammars:
//!
//! | Host | Web URL | Line anchor |
//! |---|---|---|
//! | `git.sr.ht` | `~<user>/<repo>/tree/<rev>[/item]/<path>` | `#L<a>` or `#L<a>-<b>` |
//! | `hg.sr.ht` | `~<user>/<repo>/browse/<rev>/<path>` | `#L<a>` only |
//!
//! The Mercurial viewer has no line-range anchor, so an end line is
//! dropped for Mercurial permalinks.

use super::traits::{split_revision_and_path, HostDialect};
use crate::core::types::{VcsInfo, VcsType};
use crate::core::url::RemoteUrl;

/// The SourceHut dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceHut;

impl HostDialect for SourceHut {
    fn hostname(&self) -> &'static str {
        "sr.ht"
    }

    fn supported_types(&self) -> &'static [VcsType] {
        &[VcsType::Git, VcsType::Mercurial]
    }

    fn vcs_type_for(&self, url: &RemoteUrl) -> VcsType {
        match url.host().split('.').next() {
            Some(label) if label.eq_ignore_ascii_case("hg") => VcsType::Mercurial,
            _ => VcsType::Git,
        }
    }

    fn revision_markers(&self, vcs_type: VcsType) -> &'static [&'static str] {
        match vcs_type {
            VcsType::Mercurial => &["browse"],
            _ => &["tree"],
        }
    }

    fn revision_and_path(&self, rest: &[String], vcs_type: VcsType) -> Option<(String, String)> {
        let (revision, path) = split_revision_and_path(rest, self.revision_markers(vcs_type))?;

        // Current git.sr.ht inserts an `item` segment between revision and path.
        let path = match path.strip_prefix("item/") {
            Some(stripped) if vcs_type == VcsType::Git => stripped.to_string(),
            _ => path,
        };

        Some((revision, path))
    }

    fn display_owner(&self, raw: &str) -> String {
        raw.trim_start_matches('~').to_string()
    }

    fn appends_git_suffix(&self) -> bool {
        false
    }

    fn permalink_marker(&self, info: &VcsInfo) -> &'static str {
        match info.vcs_type() {
            VcsType::Mercurial => "browse",
            _ => "tree",
        }
    }

    fn line_anchor(&self, info: &VcsInfo, start: u32, end: u32) -> String {
        match info.vcs_type() {
            VcsType::Mercurial => format!("L{}", start),
            _ if end == start => format!("L{}", start),
            _ => format!("L{}-{}", start, end),
        }
    }
}
