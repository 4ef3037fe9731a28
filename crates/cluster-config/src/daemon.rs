//! Daemon manifest definitions and enumeration
//!
//! Daemons are processed one at a time by caller-supplied logic (build,
//! deploy, and so on); the manifest itself carries no uniqueness rules and
//! is never validated beyond strict decoding.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, store};

/// A deployable daemon process and its build/run metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Daemon {
    pub name: String,

    /// Executable name produced by the build.
    pub bin: String,

    #[serde(default)]
    pub build_cmd: String,

    /// Name of the repository this daemon is built from. Not checked
    /// against the repository document.
    #[serde(default)]
    pub repository: String,

    /// Source path of the daemon within its repository.
    #[serde(default)]
    pub path: String,

    #[serde(default)]
    pub skip_nnf_node_name: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_account: Option<ServiceAccount>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_args: Option<String>,
}

/// Kubernetes service account a daemon runs under.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceAccount {
    pub name: String,
    pub namespace: String,
}

/// The daemon manifest: an ordered sequence of daemons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DaemonConfigFile {
    #[serde(default)]
    pub daemons: Vec<Daemon>,
}

impl DaemonConfigFile {
    /// Load the daemon manifest at `path`. No fallback search, no
    /// structural validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        store::load(path.as_ref())
    }
}

/// Invoke `handle` on each daemon in file order, stopping at the first
/// failure.
///
/// The handler's error is returned verbatim; daemons after the failing one
/// are never seen. Load and decode errors convert into the handler's error
/// type through `From`. Nothing is retried at this layer.
pub fn for_each_daemon<F, E>(path: impl AsRef<Path>, mut handle: F) -> std::result::Result<(), E>
where
    F: FnMut(&Daemon) -> std::result::Result<(), E>,
    E: From<Error>,
{
    let config = DaemonConfigFile::load(path)?;
    for daemon in &config.daemons {
        handle(daemon)?;
    }
    Ok(())
}
