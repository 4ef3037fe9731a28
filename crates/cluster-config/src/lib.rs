//! Typed access to the Cluster Manager configuration documents
//!
//! This crate is the configuration registry for the cluster bring-up
//! toolchain. It decodes and validates three independent document families:
//!
//! - **System topology** (`systems.yaml`): named clusters of rabbit
//!   (storage), compute, and worker nodes with their network overlays.
//!   Validated for file-global name/alias uniqueness and per-system
//!   structure, looked up by name or alias.
//! - **Repositories** (`repositories.yaml`): source repositories, the
//!   shared build environment, and third-party service endpoints. Looked
//!   up by name with a one-directory-up fallback for nested callers.
//! - **Daemons** (`daemons.yaml`): deployable daemon processes, enumerated
//!   with a caller-supplied handler that aborts on first failure.
//!
//! All loading is synchronous and uncached: every entry point re-reads its
//! document from disk, and the source path is threaded into every error so
//! messages stand on their own.
//!
//! # Example
//!
//! ```no_run
//! use cluster_config::find_system;
//!
//! let system = find_system("prod", "config/systems.yaml")?;
//! for compute in system.computes() {
//!     println!("{compute}");
//! }
//! # Ok::<(), cluster_config::Error>(())
//! ```

pub mod daemon;
pub mod error;
pub mod repository;
pub mod store;
pub mod system;

pub use daemon::{Daemon, DaemonConfigFile, ServiceAccount, for_each_daemon};
pub use error::{Error, Result};
pub use repository::{
    BuildConfiguration, EnvVar, RemoteReference, Repository, RepositoryConfigFile,
    ThirdPartyService, find_repository, third_party_services,
};
pub use system::{ComputeSlots, System, SystemConfigFile, find_system};
