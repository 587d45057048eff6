//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--json`: Machine-readable output
//! - `--config <path>`: Read configuration from this file

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// vcslink - Resolve VCS hosting URLs and render line permalinks
#[derive(Parser, Debug)]
#[command(name = "vcslink")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output; only results and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Read configuration from this file instead of the default locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a URL into VCS type, repository, revision and path
    #[command(after_help = "\
EXAMPLES:
    vcslink resolve https://github.com/oss-review-toolkit/ort/blob/main/README.md
    vcslink resolve 'git+ssh://example.com:42/foo-bar#b3b5b3c6'
    vcslink resolve --json http://svn.example.org/svn/proj/tags/1.0/pom.xml")]
    Resolve {
        /// Project, clone or web URL
        url: String,
    },

    /// Render a permalink to a line or line range
    #[command(after_help = "\
EXAMPLES:
    # Single line
    vcslink permalink https://gitlab.com/group/app/-/blob/v1.2/src/main.c --start 10

    # Line range, pinning the revision of a plain clone URL
    vcslink permalink git@github.com:owner/repo.git --revision 4a836c3a --path src/lib.rs -s 3 -e 5")]
    Permalink {
        /// Project, clone or web URL
        url: String,

        /// First line (1-based)
        #[arg(short, long)]
        start: u32,

        /// Last line; defaults to the first line
        #[arg(short, long)]
        end: Option<u32>,

        /// Revision to link to, overriding the one in the URL
        #[arg(long)]
        revision: Option<String>,

        /// Path inside the repository, overriding the one in the URL
        #[arg(long)]
        path: Option<String>,

        /// VCS type (e.g. git, hg), overriding the detected one
        #[arg(long = "type", value_name = "TYPE")]
        vcs_type: Option<String>,
    },

    /// Show the user or organization and project named by a URL
    Owner {
        /// URL on a known host
        url: String,
    },

    /// Show the SPDX download location of a URL
    Spdx {
        /// Project, clone or web URL
        url: String,
    },

    /// List known hosts in dispatch order
    Hosts,

    /// Generate shell completion scripts
    #[command(after_help = "\
INSTALLATION:
    # Bash
    vcslink completion bash > ~/.local/share/bash-completion/completions/vcslink

    # Zsh
    vcslink completion zsh > ~/.zfunc/_vcslink

    # Fish
    vcslink completion fish > ~/.config/fish/completions/vcslink.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
