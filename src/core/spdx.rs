//! core::spdx
//!
//! Rendering of [`VcsInfo`] as an SPDX `PackageDownloadLocation`.
//!
//! The SPDX 2.x format for VCS locations is
//! `<vcs_tool>+<transport>://<host_name>[/<path_to_repository>][@<revision>][#<sub_path>]`.

use super::types::{VcsInfo, VcsType};
use super::url::strip_credentials;

/// The SPDX tool prefix for a VCS type.
///
/// Empty for [`VcsType::Unknown`], in which case no `+` separator is emitted.
pub fn spdx_tool(vcs_type: VcsType) -> &'static str {
    match vcs_type {
        VcsType::Cvs => "cvs",
        VcsType::Git => "git",
        VcsType::GitRepo => "repo",
        VcsType::Mercurial => "hg",
        VcsType::Subversion => "svn",
        VcsType::Unknown => "",
    }
}

impl VcsInfo {
    /// Render as an SPDX download location.
    ///
    /// # Example
    ///
    /// ```
    /// use vcslink::core::types::{VcsInfo, VcsType};
    ///
    /// let info = VcsInfo::new(
    ///     VcsType::Subversion,
    ///     "http://svn.osdn.net/svnroot/tortoisesvn",
    ///     "branches/1.13.x",
    ///     "src/gpl.txt",
    /// );
    /// assert_eq!(
    ///     info.to_spdx_download_location(),
    ///     "svn+http://svn.osdn.net/svnroot/tortoisesvn@branches/1.13.x#src/gpl.txt"
    /// );
    /// ```
    pub fn to_spdx_download_location(&self) -> String {
        let tool = spdx_tool(self.vcs_type());

        let mut location = String::new();
        if !tool.is_empty() {
            location.push_str(tool);
            location.push('+');
        }
        location.push_str(&strip_credentials(self.url()));
        if !self.revision().trim().is_empty() {
            location.push('@');
            location.push_str(self.revision());
        }
        if !self.path().trim().is_empty() {
            location.push('#');
            location.push_str(self.path());
        }
        location
    }
}
