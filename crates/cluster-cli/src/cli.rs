//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};

pub const DEFAULT_SYSTEMS: &str = "config/systems.yaml";
pub const DEFAULT_REPOSITORIES: &str = "config/repositories.yaml";
pub const DEFAULT_DAEMONS: &str = "config/daemons.yaml";

/// Cluster Manager - Inspect cluster, repository, and daemon configuration
#[derive(Parser, Debug)]
#[command(name = "cluster")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Inspect the system topology
    System {
        /// System action to perform
        #[command(subcommand)]
        action: SystemAction,
    },

    /// Show a repository and the shared build environment
    Repo {
        /// Repository name
        name: String,

        /// Path to the repository document
        #[arg(short, long, default_value = DEFAULT_REPOSITORIES)]
        config: String,
    },

    /// List third-party service endpoints
    Services {
        /// Path to the repository document
        #[arg(short, long, default_value = DEFAULT_REPOSITORIES)]
        config: String,
    },

    /// List daemons from the daemon manifest
    Daemons {
        /// Path to the daemon manifest
        #[arg(short, long, default_value = DEFAULT_DAEMONS)]
        config: String,
    },
}

/// System topology actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SystemAction {
    /// List all systems with their aliases and node counts
    List {
        /// Path to the system topology document
        #[arg(short, long, default_value = DEFAULT_SYSTEMS)]
        config: String,
    },

    /// Show one system, resolved by name or alias
    Show {
        /// System name or alias
        name: String,

        /// Path to the system topology document
        #[arg(short, long, default_value = DEFAULT_SYSTEMS)]
        config: String,
    },

    /// Load and verify the topology document
    Verify {
        /// Path to the system topology document
        #[arg(short, long, default_value = DEFAULT_SYSTEMS)]
        config: String,
    },
}
