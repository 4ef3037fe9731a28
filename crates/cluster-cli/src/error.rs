//! Error types for cluster-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from cluster-config
    #[error(transparent)]
    Config(#[from] cluster_config::Error),
}
