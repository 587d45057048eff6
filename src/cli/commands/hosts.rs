//! hosts command - List known hosts in dispatch order

use anyhow::Result;
use serde::Serialize;

use super::Context;
use crate::core::types::VcsType;
use crate::host::VcsHost;
use crate::ui::output;

#[derive(Serialize)]
struct HostEntry {
    name: VcsHost,
    hostname: &'static str,
    aliases: Vec<String>,
    types: Vec<VcsType>,
}

/// List hosts with their hostnames, configured aliases and VCS types.
pub fn hosts(ctx: &Context) -> Result<()> {
    let entries: Vec<HostEntry> = VcsHost::all()
        .iter()
        .map(|host| HostEntry {
            name: *host,
            hostname: host.hostname(),
            aliases: ctx.registry.aliases(*host).map(String::from).collect(),
            types: host.supported_types().to_vec(),
        })
        .collect();

    let text = entries
        .iter()
        .map(|entry| {
            let mut names = vec![entry.hostname.to_string()];
            names.extend(entry.aliases.iter().cloned());
            let types: Vec<&str> = entry.types.iter().map(|t| t.name()).collect();
            format!("{:<10} {} ({})", entry.name.name(), names.join(", "), types.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n");

    output::result(&entries, text, ctx.format)
}
