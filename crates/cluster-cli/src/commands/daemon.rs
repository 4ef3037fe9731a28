//! Daemon manifest commands

use std::path::Path;

use cluster_config::for_each_daemon;
use colored::Colorize;

use crate::error::Result;

/// Run the daemons command
pub fn run_daemons(config: &Path) -> Result<()> {
    println!("{}", "Daemons".bold());
    println!();

    let mut count = 0usize;
    for_each_daemon(config, |daemon| -> Result<()> {
        count += 1;
        println!(
            "  {:<16} {} ({})",
            daemon.name.green(),
            daemon.repository,
            daemon.path.dimmed()
        );
        if let Some(account) = &daemon.service_account {
            println!(
                "  {:<16} {}",
                "",
                format!("account: {}/{}", account.namespace, account.name).dimmed()
            );
        }
        Ok(())
    })?;

    println!();
    println!(
        "{} {} daemons in {}",
        "Total:".dimmed(),
        count,
        config.display()
    );

    Ok(())
}
