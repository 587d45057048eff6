//! resolve command - Split a URL into VCS type, repository, revision and path

use anyhow::Result;

use super::Context;
use crate::ui::output;

/// Resolve a URL and print the resulting VCS information.
pub fn resolve(ctx: &Context, url: &str) -> Result<()> {
    let info = ctx.registry.resolve(url);

    if info.vcs_type() == crate::core::types::VcsType::Unknown {
        output::warn(
            format!("could not determine the VCS type of {}", url),
            ctx.verbosity,
        );
    }

    output::result(&info, output::format_vcs_info(&info), ctx.format)
}
