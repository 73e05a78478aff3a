use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use pomofog::cli::args::{Cli, Commands, TuiArgs};
use pomofog::cli::commands;
use pomofog::config::{Config, Paths};
use pomofog::error::PomofogError;
use pomofog::logging::init_logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PomofogError> {
    let cli = Cli::parse();
    let format = cli.output;
    let config_file = cli.config_file;

    let output = match cli.command.unwrap_or_else(|| Commands::Tui(TuiArgs::default())) {
        Commands::Tui(args) => {
            let paths = resolve_paths(config_file)?;
            let _guard = init_logging(&paths)?;
            let config = Config::load_from_path(&paths.config_file)?;
            commands::tui(&config, args)?
        }
        Commands::Config(args) => {
            let paths = resolve_paths(config_file)?;
            commands::config(&paths, args.command, format)?
        }
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Locate `~/.pomofog`, honouring an explicit config file path.
fn resolve_paths(config_file: Option<PathBuf>) -> Result<Paths, PomofogError> {
    let mut paths = Paths::new()?;
    if let Some(path) = config_file {
        paths.config_file = path;
    }
    Ok(paths)
}
