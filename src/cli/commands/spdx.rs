//! spdx command - Print the SPDX download location of a URL

use anyhow::Result;
use serde::Serialize;

use super::Context;
use crate::ui::output;

#[derive(Serialize)]
struct SpdxLocation<'a> {
    url: &'a str,
    download_location: String,
}

/// Resolve a URL and print it as an SPDX `PackageDownloadLocation`.
pub fn spdx(ctx: &Context, url: &str) -> Result<()> {
    let info = ctx.registry.resolve(url);
    let location = SpdxLocation {
        url,
        download_location: info.to_spdx_download_location(),
    };

    output::result(&location, &location.download_location, ctx.format)
}
