//! Repository, build-environment, and third-party service definitions
//!
//! The repository document is decode-only: no uniqueness or non-emptiness
//! rules apply, and lookups take the first match in file order. Loading
//! retries one directory up when the document is not readable at the given
//! path, so tooling invoked from a nested working directory still resolves
//! a repo-relative path.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, store};

/// The repository document: repositories, a single shared build
/// configuration, and third-party service endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RepositoryConfigFile {
    #[serde(default)]
    pub repositories: Vec<Repository>,

    /// Build environment shared by every repository in the file.
    #[serde(default)]
    pub build_configuration: BuildConfiguration,

    #[serde(default)]
    pub third_party_services: Vec<ThirdPartyService>,
}

/// A source repository with branch/ref and overlay metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Repository {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overlays: Vec<String>,

    /// Ref checked out for development builds.
    #[serde(default)]
    pub development: String,

    /// Ref checked out for release builds.
    #[serde(default)]
    pub master: String,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub use_remote_k: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_reference: Option<RemoteReference>,
}

/// Pointer to a remotely hosted build of a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RemoteReference {
    pub build: String,
    pub url: String,
}

/// Environment variables applied to every build from this document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfiguration {
    #[serde(default)]
    pub env: Vec<EnvVar>,
}

/// A single name/value environment variable pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvVar {
    pub name: String,
    pub value: String,
}

/// An external service endpoint with an optional readiness-wait command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThirdPartyService {
    pub name: String,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub use_remote_f: bool,

    pub url: String,

    /// Command run to wait for the service to become ready.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_cmd: Option<String>,
}

impl RepositoryConfigFile {
    /// Load the repository document, retrying one directory up if `path`
    /// cannot be read.
    ///
    /// Only a read failure triggers the retry; a document that reads but
    /// fails to decode is reported as-is. When both attempts fail, the
    /// error from the second attempt is returned.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match store::load(path) {
            Ok(config) => Ok(config),
            Err(Error::Read { .. }) => {
                let fallback = Path::new("..").join(path);
                tracing::debug!(
                    path = %fallback.display(),
                    "repository document not readable, retrying one directory up"
                );
                store::load(&fallback)
            }
            Err(err) => Err(err),
        }
    }

    /// First repository named `name`, in file order.
    pub fn find(&self, name: &str) -> Option<&Repository> {
        self.repositories.iter().find(|repo| repo.name == name)
    }
}

/// Resolve a repository by name together with the document's shared build
/// configuration.
pub fn find_repository(
    path: impl AsRef<Path>,
    name: &str,
) -> Result<(Repository, BuildConfiguration)> {
    let path = path.as_ref();
    let config = RepositoryConfigFile::load(path)?;
    match config.find(name) {
        Some(repository) => Ok((repository.clone(), config.build_configuration)),
        None => Err(Error::RepositoryNotFound {
            name: name.to_string(),
            path: path.to_path_buf(),
        }),
    }
}

/// All third-party service entries, in file order, unfiltered.
pub fn third_party_services(path: impl AsRef<Path>) -> Result<Vec<ThirdPartyService>> {
    Ok(RepositoryConfigFile::load(path)?.third_party_services)
}
