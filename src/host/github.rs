//! host::github
//!
//! GitHub URL dialect.
//!
//! # URL shapes
//!
//! - Clone: `https://github.com/<owner>/<repo>.git`, `git@github.com:<owner>/<repo>.git`
//! - Web: `https://github.com/<owner>/<repo>/{blob,tree,blame}/<rev>/<path>`
//! - npm: `https://github.com/<owner>/<repo>.git#<rev>`
//!
//! # Permalinks
//!
//! `tree/<rev>/<path>#L<a>` or `#L<a>-L<b>`. Markdown files are linked
//! through `blame`, since `tree` renders them as formatted pages where
//! line anchors do not resolve.

use super::traits::HostDialect;
use crate::core::types::{VcsInfo, VcsType};
use crate::core::url::is_markdown;

/// The GitHub dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitHub;

impl HostDialect for GitHub {
    fn hostname(&self) -> &'static str {
        "github.com"
    }

    fn supported_types(&self) -> &'static [VcsType] {
        &[VcsType::Git]
    }

    fn revision_markers(&self, _vcs_type: VcsType) -> &'static [&'static str] {
        &["blob", "tree", "blame"]
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
            format!("L{}-L{}", start, end)
        }
    }
}
