//! Command implementations for cluster-cli

pub mod daemon;
pub mod repository;
pub mod system;

pub use daemon::run_daemons;
pub use repository::{run_repo_show, run_services};
pub use system::{run_system_list, run_system_show, run_system_verify};
