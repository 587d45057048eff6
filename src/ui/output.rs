//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag.
//! When `--json` is enabled, results are machine-readable JSON.

use std::fmt::Display;

use serde::Serialize;

use crate::core::config::OutputFormat;
use crate::core::types::VcsInfo;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }

    /// The log level filter matching this verbosity.
    pub fn log_level(&self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Error,
            Verbosity::Normal => log::LevelFilter::Warn,
            Verbosity::Debug => log::LevelFilter::Debug,
        }
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Print a command result.
///
/// Results are printed even in quiet mode; they are what the command is for.
pub fn result<T: Serialize + ?Sized>(
    value: &T,
    text: impl Display,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => println!("{}", text),
    }
    Ok(())
}

/// Format a [`VcsInfo`] as aligned `key: value` lines.
pub fn format_vcs_info(info: &VcsInfo) -> String {
    format_fields(&[
        ("type", info.vcs_type().name()),
        ("url", info.url()),
        ("revision", info.revision()),
        ("path", info.path()),
    ])
}

/// Format `key: value` pairs with values aligned.
pub fn format_fields(fields: &[(&str, &str)]) -> String {
    let width = fields.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    fields
        .iter()
        .map(|(key, value)| format!("{:width$}  {}", format!("{}:", key), value, width = width + 1))
        .map(|line| line.trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
