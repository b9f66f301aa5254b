use crate::error::{AbError, Result};
use abmaker_api::PackageManifest;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads and saves the per-package manifest file.
#[derive(Debug, Clone)]
pub struct ManifestStore {
    manifest_file: String,
}

impl ManifestStore {
    pub fn new(manifest_file: impl Into<String>) -> Self {
        Self {
            manifest_file: manifest_file.into(),
        }
    }

    pub fn manifest_file(&self) -> &str {
        &self.manifest_file
    }

    pub fn path_in(&self, package_dir: &Path) -> PathBuf {
        package_dir.join(&self.manifest_file)
    }

    /// Returns `None` when the package has no manifest yet.
    pub fn load(&self, package_dir: &Path) -> Result<Option<PackageManifest>> {
        let path = self.path_in(package_dir);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| AbError::Manifest { file: path, source })
    }

    /// Persist `manifest`, leaving the file untouched when its content would not change.
    /// Returns whether the file was written.
    pub fn save(&self, package_dir: &Path, manifest: &PackageManifest) -> Result<bool> {
        let path = self.path_in(package_dir);
        let serialized = to_pretty_json(manifest)?;

        match fs::read(&path) {
            Ok(existing) if existing == serialized.as_bytes() => {
                debug!("Manifest unchanged: {}", path.display());
                return Ok(false);
            }
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        fs::write(&path, serialized)?;
        Ok(true)
    }
}

/// Pretty-printed JSON with a trailing newline, shared by persisted and exported manifests.
pub fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}
