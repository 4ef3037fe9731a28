//! Repository and third-party service commands

use std::path::Path;

use cluster_config::{find_repository, third_party_services};
use colored::Colorize;

use crate::error::Result;

/// Run the repo show command
pub fn run_repo_show(name: &str, config: &Path) -> Result<()> {
    let (repository, build) = find_repository(config, name)?;

    println!("{} {}", "repository".dimmed(), repository.name.green().bold());
    println!(
        "  {:<12} {}",
        "development".cyan(),
        repository.development
    );
    println!("  {:<12} {}", "master".cyan(), repository.master);
    if !repository.overlays.is_empty() {
        println!(
            "  {:<12} {}",
            "overlays".cyan(),
            repository.overlays.join(", ")
        );
    }
    if repository.use_remote_k {
        println!("  {:<12} yes", "remote-k".cyan());
    }
    if let Some(remote) = &repository.remote_reference {
        println!(
            "  {:<12} {} ({})",
            "remote".cyan(),
            remote.url,
            remote.build.dimmed()
        );
    }

    if !build.env.is_empty() {
        println!();
        println!("{}", "Build environment".bold());
        for var in &build.env {
            println!("  {}={}", var.name.green(), var.value);
        }
    }

    Ok(())
}

/// Run the services command
pub fn run_services(config: &Path) -> Result<()> {
    let services = third_party_services(config)?;

    println!("{}", "Third-party services".bold());
    println!();

    for service in &services {
        let remote = if service.use_remote_f { " [remote]" } else { "" };
        println!(
            "  {:<16} {}{}",
            service.name.green(),
            service.url,
            remote.dimmed()
        );
        if let Some(wait_cmd) = &service.wait_cmd {
            println!("  {:<16} {}", "", format!("wait: {wait_cmd}").dimmed());
        }
    }

    println!();
    println!(
        "{} {} services in {}",
        "Total:".dimmed(),
        services.len(),
        config.display()
    );

    Ok(())
}
