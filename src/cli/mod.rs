//! cli
//!
//! Command-line interface layer for vcslink.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration and set up logging
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap, builds a
//! [`commands::Context`] and dispatches to the handlers, which call into
//! [`crate::host`] for all URL work.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use anyhow::{Context as _, Result};

use crate::core::config::{Config, OutputFormat};
use crate::host::HostRegistry;
use crate::ui::output::Verbosity;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);

    init_logging(verbosity);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load()?,
    };

    // --json wins over the configured default.
    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output()
    };

    let ctx = commands::Context {
        registry: HostRegistry::from_config(&config),
        format,
        verbosity,
    };

    commands::dispatch(cli.command, &ctx)
}

/// Initialize `env_logger`; `RUST_LOG` overrides the flag-derived level.
fn init_logging(verbosity: Verbosity) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(verbosity.log_level());
    builder.parse_default_env();
    builder.format_timestamp(None);
    let _ = builder.try_init();
}
