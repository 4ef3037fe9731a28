//! System topology definitions and validation
//!
//! A *system* is a named cluster grouping rabbit (storage) nodes, their
//! slot-indexed compute assignments, worker nodes, and network overlays.
//! The topology document is validated as a whole: system names and aliases
//! must be unique across the entire file, while overlays, workers, and
//! compute assignments must be unique within each system.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, store};

/// Slot-indexed compute assignments for a single rabbit node.
pub type ComputeSlots = BTreeMap<u32, String>;

/// A named cluster of rabbit, compute, and worker nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct System {
    /// Primary name, unique across the topology file.
    pub name: String,

    /// Alternate lookup names, unique across the entire topology file.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,

    /// Network overlays attached to this system.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overlays: Vec<String>,

    /// Worker node names.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub workers: Vec<String>,

    /// Rabbit nodes mapped to their slot-indexed compute nodes.
    ///
    /// The map structure itself guarantees rabbit names and slot indices
    /// are unique; compute node values are checked during verification.
    #[serde(default)]
    pub rabbits: BTreeMap<String, ComputeSlots>,

    /// Port ranges reserved for this system.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<String>,

    /// Kubernetes API host, if the system fronts a cluster endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k8s_host: Option<String>,

    /// Kubernetes API port.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k8s_port: Option<String>,
}

impl System {
    /// True if `query` is this system's name or one of its aliases.
    pub fn matches(&self, query: &str) -> bool {
        self.name == query || self.aliases.iter().any(|alias| alias == query)
    }

    /// All compute node names assigned across this system's rabbits,
    /// in rabbit order and slot order within each rabbit.
    pub fn computes(&self) -> impl Iterator<Item = &str> {
        self.rabbits
            .values()
            .flat_map(|slots| slots.values().map(String::as_str))
    }

    /// Check this system's structural invariants.
    ///
    /// `path` is the source file, used only for error messages. Checks run
    /// in a fixed order and the first violation is returned: missing
    /// rabbits, duplicate compute node, duplicate alias, missing or
    /// duplicate overlay, missing or duplicate worker.
    pub fn verify(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if self.rabbits.is_empty() {
            return Err(Error::NoRabbits {
                system: self.name.clone(),
                path: path.to_path_buf(),
            });
        }

        let mut computes = HashSet::new();
        for slots in self.rabbits.values() {
            for compute in slots.values() {
                if !computes.insert(compute.as_str()) {
                    return Err(Error::DuplicateCompute {
                        compute: compute.clone(),
                        system: self.name.clone(),
                        path: path.to_path_buf(),
                    });
                }
            }
        }

        let mut aliases = HashSet::new();
        for alias in &self.aliases {
            if !aliases.insert(alias.as_str()) {
                return Err(Error::DuplicateSystemAlias {
                    alias: alias.clone(),
                    system: self.name.clone(),
                    path: path.to_path_buf(),
                });
            }
        }

        if self.overlays.is_empty() {
            return Err(Error::NoOverlays {
                system: self.name.clone(),
                path: path.to_path_buf(),
            });
        }
        let mut overlays = HashSet::new();
        for overlay in &self.overlays {
            if !overlays.insert(overlay.as_str()) {
                return Err(Error::DuplicateOverlay {
                    overlay: overlay.clone(),
                    system: self.name.clone(),
                    path: path.to_path_buf(),
                });
            }
        }

        if self.workers.is_empty() {
            return Err(Error::NoWorkers {
                system: self.name.clone(),
                path: path.to_path_buf(),
            });
        }
        let mut workers = HashSet::new();
        for worker in &self.workers {
            if !workers.insert(worker.as_str()) {
                return Err(Error::DuplicateWorker {
                    worker: worker.clone(),
                    system: self.name.clone(),
                    path: path.to_path_buf(),
                });
            }
        }

        Ok(())
    }
}

/// The system topology document: an ordered sequence of systems.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SystemConfigFile {
    #[serde(default)]
    pub systems: Vec<System>,
}

impl SystemConfigFile {
    /// Load and verify the system topology at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config: SystemConfigFile = store::load(path)?;
        config.verify(path)?;
        Ok(config)
    }

    /// Verify file-global and per-system invariants.
    ///
    /// System names and aliases are collected across the whole file, so an
    /// alias reused by two different systems is rejected. Each system is
    /// then checked individually; the first violation aborts.
    pub fn verify(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut names = HashSet::new();
        let mut aliases = HashSet::new();

        for system in &self.systems {
            if !names.insert(system.name.as_str()) {
                return Err(Error::DuplicateSystemName {
                    name: system.name.clone(),
                    path: path.to_path_buf(),
                });
            }

            for alias in &system.aliases {
                if !aliases.insert(alias.as_str()) {
                    return Err(Error::DuplicateAlias {
                        alias: alias.clone(),
                        path: path.to_path_buf(),
                    });
                }
            }

            system.verify(path)?;
        }

        Ok(())
    }

    /// First system matching `query` by name or alias, in file order.
    pub fn find(&self, query: &str) -> Option<&System> {
        self.systems.iter().find(|system| system.matches(query))
    }
}

/// Resolve a system by primary name or alias.
///
/// Reloads and re-verifies the topology at `path` on every call; nothing is
/// cached. Load and verification errors propagate unchanged.
pub fn find_system(name: &str, path: impl AsRef<Path>) -> Result<System> {
    let path = path.as_ref();
    let config = SystemConfigFile::load(path)?;
    config
        .find(name)
        .cloned()
        .ok_or_else(|| Error::SystemNotFound {
            name: name.to_string(),
            path: path.to_path_buf(),
        })
}
