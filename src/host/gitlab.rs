//! host::gitlab
//!
//! GitLab URL dialect.
//!
//! # URL shapes
//!
//! - Clone: `https://gitlab.com/<group>[/<subgroup>...]/<project>.git`
//! - Web: `https://gitlab.com/<group>/<project>[/-]/{tree,blob,blame}/<rev>/<path>`
//!
//! Nested groups are supported: everything before the project segment is
//! the owner. The project segment is the one preceding the `-` separator
//! or the revision marker; without either, it is the last segment.
//!
//! # Permalinks
//!
//! `tree/<rev>/<path>#L<a>` or `#L<a>-<b>` (no repeated `L`). Markdown
//! files are linked through `blame`.

use super::traits::HostDialect;
use crate::core::types::{VcsInfo, VcsType};
use crate::core::url::{is_markdown, strip_git_suffix, RemoteUrl};

const MARKERS: &[&str] = &["tree", "blob", "blame"];

/// The GitLab dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitLab;

impl HostDialect for GitLab {
    fn hostname(&self) -> &'static str {
        "gitlab.com"
    }

    fn supported_types(&self) -> &'static [VcsType] {
        &[VcsType::Git]
    }

    fn revision_markers(&self, _vcs_type: VcsType) -> &'static [&'static str] {
        MARKERS
    }

    fn repository_len(&self, url: &RemoteUrl) -> Option<usize> {
        let segments = url.segments();

        // Owner and project come first, so the earliest a marker can sit is index 2.
        let len = segments
            .iter()
            .enumerate()
            .skip(2)
            .find(|(i, segment)| {
                segment.as_str() == "-"
                    || (MARKERS.contains(&segment.as_str()) && *i + 1 < segments.len())
            })
            .map(|(i, _)| i)
            .unwrap_or(segments.len());

        let named = len >= 2 && !strip_git_suffix(&segments[len - 1]).is_empty();
        named.then_some(len)
    }

    fn permalink_marker(&self, info: &VcsInfo) -> &'static str {
        if is_markdown(info.path()) {
            "blame"
        } else {
            "tree"
        }
    }

    fn line_anchor(&self, _info: &VcsInfo, start: u32, end: u32) -> String {
        if end == start {
            format!("L{}", start)
        } else {
            format!("L{}-{}", start, end)
        }
    }
}
