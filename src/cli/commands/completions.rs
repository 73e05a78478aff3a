//! Shell completions generation.
//!
//! Generates shell completion scripts for bash, zsh, fish, elvish and
//! PowerShell.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::PomofogError;

/// Generate shell completions for the specified shell.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, PomofogError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "pomofog", &mut buf);
    String::from_utf8(buf).map_err(|e| PomofogError::Parse(format!("UTF-8 error: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completions_mention_subcommands() {
        let script = completions(Shell::Bash).unwrap();
        assert!(script.contains("pomofog"));
        assert!(script.contains("config"));
    }

    #[test]
    fn test_zsh_completions() {
        let script = completions(Shell::Zsh).unwrap();
        assert!(script.contains("#compdef pomofog"));
    }
}
