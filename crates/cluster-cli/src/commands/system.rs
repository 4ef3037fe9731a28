//! System topology commands

use std::path::Path;

use cluster_config::{System, SystemConfigFile, find_system};
use colored::Colorize;

use crate::error::Result;

/// Run the system list command
pub fn run_system_list(config: &Path) -> Result<()> {
    let topology = SystemConfigFile::load(config)?;

    println!("{}", "Systems".bold());
    println!();

    for system in &topology.systems {
        let aliases = if system.aliases.is_empty() {
            String::new()
        } else {
            format!(" ({})", system.aliases.join(", "))
        };
        println!(
            "  {:<16}{} {} rabbits, {} computes, {} workers",
            system.name.green(),
            aliases.dimmed(),
            system.rabbits.len(),
            system.computes().count(),
            system.workers.len()
        );
    }

    println!();
    println!(
        "{} {} systems in {}",
        "Total:".dimmed(),
        topology.systems.len(),
        config.display()
    );

    Ok(())
}

/// Run the system show command
pub fn run_system_show(name: &str, config: &Path) -> Result<()> {
    let system = find_system(name, config)?;
    print_system(&system);
    Ok(())
}

fn print_system(system: &System) {
    println!("{} {}", "system".dimmed(), system.name.green().bold());
    if !system.aliases.is_empty() {
        println!("  {:<10} {}", "aliases".cyan(), system.aliases.join(", "));
    }
    println!("  {:<10} {}", "overlays".cyan(), system.overlays.join(", "));
    println!("  {:<10} {}", "workers".cyan(), system.workers.join(", "));
    println!("  {}", "rabbits".cyan());
    for (rabbit, slots) in &system.rabbits {
        let computes: Vec<String> = slots
            .iter()
            .map(|(slot, compute)| format!("{slot}:{compute}"))
            .collect();
        println!("    {:<14} {}", rabbit, computes.join(" ").dimmed());
    }
    if !system.ports.is_empty() {
        println!("  {:<10} {}", "ports".cyan(), system.ports.join(", "));
    }
    if let Some(host) = &system.k8s_host {
        let port = system.k8s_port.as_deref().unwrap_or("");
        println!("  {:<10} {}:{}", "k8s".cyan(), host, port);
    }
}

/// Run the system verify command
pub fn run_system_verify(config: &Path) -> Result<()> {
    let topology = SystemConfigFile::load(config)?;
    println!(
        "{} {} systems verified in {}",
        "ok:".green().bold(),
        topology.systems.len(),
        config.display()
    );
    Ok(())
}
