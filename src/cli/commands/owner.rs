//! owner command - Show the user or organization and project of a URL

use anyhow::{Context as _, Result};
use serde::Serialize;

use super::Context;
use crate::host::VcsHost;
use crate::ui::output;

#[derive(Serialize)]
struct Owner {
    host: VcsHost,
    user_or_organization: String,
    project: String,
}

/// Print the host, user or organization, and project named by a URL.
pub fn owner(ctx: &Context, url: &str) -> Result<()> {
    let host = ctx
        .registry
        .detect(url)
        .with_context(|| format!("{} is not on a known host (see `vcslink hosts`)", url))?;

    let owner = Owner {
        host,
        user_or_organization: ctx.registry.user_or_organization(url)?,
        project: ctx.registry.project(url)?,
    };

    let text = output::format_fields(&[
        ("host", owner.host.name()),
        ("owner", owner.user_or_organization.as_str()),
        ("project", owner.project.as_str()),
    ]);
    output::result(&owner, text, ctx.format)
}
