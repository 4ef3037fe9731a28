//! Error types for cluster-config

use std::path::PathBuf;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, validating, or querying
/// configuration documents.
///
/// Every variant carries the source path so the message is self-sufficient
/// for an operator reading it out of context.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {format} document at {path}: {message}")]
    Decode {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("failed to encode {format} document: {message}")]
    Encode { format: String, message: String },

    #[error("unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("system name '{name}' declared more than once in {path}")]
    DuplicateSystemName { name: String, path: PathBuf },

    #[error("alias '{alias}' declared more than once in {path}")]
    DuplicateAlias { alias: String, path: PathBuf },

    #[error("no rabbit nodes declared for system '{system}' in {path}")]
    NoRabbits { system: String, path: PathBuf },

    #[error("compute node '{compute}' declared more than once for system '{system}' in {path}")]
    DuplicateCompute {
        compute: String,
        system: String,
        path: PathBuf,
    },

    #[error("alias '{alias}' declared more than once for system '{system}' in {path}")]
    DuplicateSystemAlias {
        alias: String,
        system: String,
        path: PathBuf,
    },

    #[error("no overlays declared for system '{system}' in {path}")]
    NoOverlays { system: String, path: PathBuf },

    #[error("overlay '{overlay}' declared more than once for system '{system}' in {path}")]
    DuplicateOverlay {
        overlay: String,
        system: String,
        path: PathBuf,
    },

    #[error("no workers declared for system '{system}' in {path}")]
    NoWorkers { system: String, path: PathBuf },

    #[error("worker node '{worker}' declared more than once for system '{system}' in {path}")]
    DuplicateWorker {
        worker: String,
        system: String,
        path: PathBuf,
    },

    #[error("system '{name}' not found in {path}")]
    SystemNotFound { name: String, path: PathBuf },

    #[error("repository '{name}' not found in {path}")]
    RepositoryNotFound { name: String, path: PathBuf },
}
