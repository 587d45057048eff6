//! completion command - Generate shell completion scripts

use std::io::{self, Write};

use anyhow::Result;
use clap::CommandFactory;

use crate::cli::args::{Cli, Shell};

impl From<Shell> for clap_complete::Shell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
        }
    }
}

/// Write the completion script for `shell` to `out`.
pub fn write_completion(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(clap_complete::Shell::from(shell), &mut cmd, name, out);
}

/// Generate shell completion scripts.
pub fn completion(shell: Shell) -> Result<()> {
    write_completion(shell, &mut io::stdout());
    Ok(())
}
