//! host::bitbucket
//!
//! Bitbucket Cloud URL dialect.
//!
//! Web URLs have the form `https://bitbucket.org/<owner>/<repo>/src/<rev>/<path>`;
//! permalinks select lines with `#lines-<a>` or `#lines-<a>:<b>`.

use super::traits::HostDialect;
use crate::core::types::{VcsInfo, VcsType};

/// The Bitbucket dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bitbucket;

impl HostDialect for Bitbucket {
    fn hostname(&self) -> &'static str {
        "bitbucket.org"
    }

    fn supported_types(&self) -> &'static [VcsType] {
        &[VcsType::Git, VcsType::Mercurial]
    }

    fn revision_markers(&self, _vcs_type: VcsType) -> &'static [&'static str] {
        &["src"]
    }

    fn permalink_marker(&self, _info: &VcsInfo) -> &'static str {
        "src"
    }

    fn line_anchor(&self, _info: &VcsInfo, start: u32, end: u32) -> String {
        if end == start {
            format!("lines-{}", start)
        } else {
            format!("lines-{}:{}", start, end)
        }
    }
}
