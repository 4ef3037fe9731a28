//! Cluster Manager CLI
//!
//! Read-only inspection of the system topology, repository, and daemon
//! configuration documents.

mod cli;
mod commands;
mod error;

use std::path::Path;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands, SystemAction};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} Cluster Manager CLI", "cluster".green().bold());
            println!();
            println!("Run {} for available commands.", "cluster --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::System { action } => match action {
            SystemAction::List { config } => commands::run_system_list(Path::new(&config)),
            SystemAction::Show { name, config } => {
                commands::run_system_show(&name, Path::new(&config))
            }
            SystemAction::Verify { config } => commands::run_system_verify(Path::new(&config)),
        },
        Commands::Repo { name, config } => commands::run_repo_show(&name, Path::new(&config)),
        Commands::Services { config } => commands::run_services(Path::new(&config)),
        Commands::Daemons { config } => commands::run_daemons(Path::new(&config)),
    }
}
