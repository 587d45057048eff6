//! permalink command - Render a permalink to a line or line range

use anyhow::{bail, Result};
use serde::Serialize;

use super::Context;
use crate::core::types::{VcsInfo, VcsType};
use crate::ui::output;

/// Values replacing parts of the resolved location.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub revision: Option<String>,
    pub path: Option<String>,
    pub vcs_type: Option<String>,
}

impl Overrides {
    /// Apply the overrides to a resolved location.
    ///
    /// # Errors
    ///
    /// Fails on an unrecognized VCS type name.
    pub fn apply(&self, info: VcsInfo) -> Result<VcsInfo> {
        let mut info = info;
        if let Some(name) = &self.vcs_type {
            let vcs_type: VcsType = name.parse()?;
            if vcs_type == VcsType::Unknown {
                bail!("--type must name a VCS, e.g. git or hg");
            }
            info = info.with_type(vcs_type);
        }
        if let Some(revision) = &self.revision {
            info = info.with_revision(revision.as_str());
        }
        if let Some(path) = &self.path {
            info = info.with_path(path.as_str());
        }
        Ok(info)
    }
}

#[derive(Serialize)]
struct Permalink {
    #[serde(flatten)]
    info: VcsInfo,
    start: u32,
    end: u32,
    permalink: String,
}

/// Resolve a URL, apply overrides and print the permalink.
pub fn permalink(
    ctx: &Context,
    url: &str,
    start: u32,
    end: Option<u32>,
    overrides: Overrides,
) -> Result<()> {
    let info = overrides.apply(ctx.registry.resolve(url))?;
    let link = ctx.registry.to_permalink(&info, start, end)?;

    let result = Permalink {
        info,
        start,
        end: end.unwrap_or(start),
        permalink: link,
    };
    output::result(&result, &result.permalink, ctx.format)
}
