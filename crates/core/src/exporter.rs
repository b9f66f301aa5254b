use crate::error::{AbError, Result};
use crate::layout;
use crate::store::{ManifestStore, to_pretty_json};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Writes every package manifest to `<out_dir>/<identifier>.<extension>`.
pub struct ManifestExporter {
    store: ManifestStore,
    extension: String,
}

impl ManifestExporter {
    pub fn new(store: ManifestStore, extension: impl Into<String>) -> Self {
        Self {
            store,
            extension: extension.into(),
        }
    }

    pub fn output_path(&self, out_dir: &Path, identifier: &str) -> PathBuf {
        out_dir.join(format!("{}.{}", identifier, self.extension))
    }

    /// Export manifests found under `root`. Packages without a readable
    /// manifest are skipped. Returns the files written.
    pub fn export(&self, root: &Path, out_dir: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            info!("Package root {} does not exist, nothing to export", root.display());
            return Ok(Vec::new());
        }
        fs::create_dir_all(out_dir)?;

        let mut written = Vec::new();
        let mut seen = HashSet::new();
        for package in layout::package_dirs(root)? {
            let manifest = match self.store.load(&package.path) {
                Ok(Some(manifest)) => manifest,
                Ok(None) => {
                    debug!("No manifest in {}, skipping", package.path.display());
                    continue;
                }
                Err(AbError::Manifest { file, source }) => {
                    warn!("Skipping unreadable manifest {}: {}", file.display(), source);
                    continue;
                }
                Err(e) => return Err(e),
            };

            // File name comes from the directory, matching what a refresh would record
            if !seen.insert(package.identifier.clone()) {
                warn!(
                    "Package identifier {} is not unique, {}/{} overwrites the earlier export",
                    package.identifier, package.group, package.identifier
                );
            }
            let out_path = self.output_path(out_dir, &package.identifier);
            fs::write(&out_path, to_pretty_json(&manifest)?)?;
            info!("Write {}.{} to {}", package.identifier, self.extension, out_path.display());
            written.push(out_path);
        }

        Ok(written)
    }
}
