//! Format-agnostic document loading and saving
//!
//! Format is detected from the file extension:
//! - `.yaml`, `.yml` -> YAML
//! - `.json` -> JSON
//! - `.toml` -> TOML
//!
//! Decoding is strict: the document types in this crate reject unknown
//! fields, so a typo in a key fails the load rather than being ignored.

use std::fs;
use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Result};

/// Load a document from a file, decoding according to its extension.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    tracing::debug!(path = %path.display(), "loading config document");
    let content = fs::read_to_string(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    decode(path, &content)
}

fn decode<T: DeserializeOwned>(path: &Path, content: &str) -> Result<T> {
    match extension_of(path).as_str() {
        "yaml" | "yml" => serde_yaml::from_str(content).map_err(|e| Error::Decode {
            path: path.to_path_buf(),
            format: "YAML".into(),
            message: e.to_string(),
        }),
        "json" => serde_json::from_str(content).map_err(|e| Error::Decode {
            path: path.to_path_buf(),
            format: "JSON".into(),
            message: e.to_string(),
        }),
        "toml" => toml::from_str(content).map_err(|e| Error::Decode {
            path: path.to_path_buf(),
            format: "TOML".into(),
            message: e.to_string(),
        }),
        other => Err(Error::UnsupportedFormat {
            extension: other.to_string(),
        }),
    }
}

/// Save a document to a file, encoding according to its extension.
///
/// Writes to a temp file in the same directory and renames it into place
/// so a crash never leaves a truncated document behind.
pub fn save<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = match extension_of(path).as_str() {
        "yaml" | "yml" => serde_yaml::to_string(value).map_err(|e| Error::Encode {
            format: "YAML".into(),
            message: e.to_string(),
        })?,
        "json" => serde_json::to_string_pretty(value).map_err(|e| Error::Encode {
            format: "JSON".into(),
            message: e.to_string(),
        })?,
        "toml" => toml::to_string_pretty(value).map_err(|e| Error::Encode {
            format: "TOML".into(),
            message: e.to_string(),
        })?,
        other => {
            return Err(Error::UnsupportedFormat {
                extension: other.to_string(),
            });
        }
    };
    write_atomic(path, content.as_bytes())
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::Write {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    // Temp file in the same directory, so the rename stays on one filesystem.
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    fs::write(&temp_path, content).map_err(|e| Error::Write {
        path: temp_path.clone(),
        source: e,
    })?;
    fs::rename(&temp_path, path).map_err(|e| Error::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
