use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "pomofog")]
#[command(about = "A terminal Pomodoro timer with a focus fog and a task list")]
#[command(long_about = "pomofog - A terminal Pomodoro timer

Runs focus sessions with short breaks, and a long break after every fourth
completed focus session. While a focus session runs, switching away from
the terminal slowly fogs up the screen; staying on it clears the fog again.

QUICK START:
  pomofog                       Launch the timer
  pomofog tui --focus 50        Launch with 50-minute focus sessions
  pomofog config show           Print the effective configuration

KEYS:
  space  start/pause    r/Enter  reset    s  settings
  a      add task       x        done     d  delete task    q  quit")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Path of the configuration file (default: ~/.pomofog/config.yaml)
    #[arg(long = "config", global = true, env = "POMOFOG_CONFIG", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive timer (default)
    ///
    /// Flags override the config file for this run only. Values are in
    /// minutes and are floored to one minute.
    ///
    /// # Examples
    ///
    ///   pomofog tui
    ///   pomofog tui --focus 50 --short-break 10
    ///   pomofog tui --fog-increase 2 --fog-decrease 5
    #[command(alias = "t")]
    Tui(TuiArgs),

    /// Show or create the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   pomofog completions zsh > ~/.zsh/completions/_pomofog
    ///   source <(pomofog completions bash)
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the TUI command.
#[derive(Args, Debug, Default, Clone)]
pub struct TuiArgs {
    /// Focus session length in minutes
    #[arg(long)]
    pub focus: Option<String>,

    /// Short break length in minutes
    #[arg(long)]
    pub short_break: Option<String>,

    /// Long break length in minutes
    #[arg(long)]
    pub long_break: Option<String>,

    /// Minutes away per step of fog
    #[arg(long)]
    pub fog_increase: Option<String>,

    /// Minutes on the page to clear one step of fog
    #[arg(long)]
    pub fog_decrease: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the path of the configuration file
    Path,

    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
