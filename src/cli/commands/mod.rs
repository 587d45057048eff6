//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Calls into the host registry
//! 3. Formats and displays output
//!
//! Handlers hold no state of their own; everything they need is in the
//! [`Context`].

mod completion;
mod hosts;
mod owner;
mod permalink;
mod resolve;
mod spdx;

pub use completion::completion;
pub use hosts::hosts;
pub use owner::owner;
pub use permalink::permalink;
pub use resolve::resolve;
pub use spdx::spdx;

use anyhow::Result;

use super::args::Command;
use crate::core::config::OutputFormat;
use crate::host::HostRegistry;
use crate::ui::output::Verbosity;

/// Execution context shared by all handlers.
#[derive(Debug, Clone)]
pub struct Context {
    /// Registry honoring configured host aliases
    pub registry: HostRegistry,
    /// Output format for results
    pub format: OutputFormat,
    /// Verbosity for messages other than results
    pub verbosity: Verbosity,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            registry: HostRegistry::default(),
            format: OutputFormat::Text,
            verbosity: Verbosity::Normal,
        }
    }
}

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Resolve { url } => resolve(ctx, &url),
        Command::Permalink {
            url,
            start,
            end,
            revision,
            path,
            vcs_type,
        } => permalink(
            ctx,
            &url,
            start,
            end,
            permalink::Overrides {
                revision,
                path,
                vcs_type,
            },
        ),
        Command::Owner { url } => owner(ctx, &url),
        Command::Spdx { url } => spdx(ctx, &url),
        Command::Hosts => hosts(ctx),
        Command::Completion { shell } => completion(shell),
    }
}
