//! Creating packages from scratch.

use crate::error::{AbError, Result};
use crate::store::ManifestStore;
use abmaker_api::{FileEntry, PackageManifest};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

/// Fresh package identifier: a v4 UUID without hyphens.
pub fn new_identifier() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Create an empty package with a generated identifier under `<root>/<group>`.
///
/// The manifest's group path is the group name with `.` turned into `/`.
pub fn create_package(root: &Path, group: &str, store: &ManifestStore) -> Result<PackageManifest> {
    // Must name a visible direct child of the root: no separators, no `.`/`..`
    if group.is_empty() || group.starts_with('.') || group.contains(['/', '\\']) {
        return Err(AbError::InvalidArgument(format!(
            "group must be a single visible directory name, got {:?}",
            group
        )));
    }

    let identifier = new_identifier();
    let package_dir = root.join(group).join(&identifier);
    fs::create_dir_all(&package_dir)?;

    let manifest = PackageManifest::new(identifier, group.replace('.', "/"));
    store.save(&package_dir, &manifest)?;
    info!("Created package {}", package_dir.display());
    Ok(manifest)
}

/// Copy each asset into its own standalone package `<out_dir>/<id>/`.
///
/// Every package gets a generated identifier, an empty group path and the
/// copied file as its only member.
pub fn process_assets(
    assets: &[PathBuf],
    out_dir: &Path,
    store: &ManifestStore,
) -> Result<Vec<PackageManifest>> {
    let mut created = Vec::with_capacity(assets.len());
    for asset in assets {
        let file_name = asset
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|_| asset.is_file())
            .ok_or_else(|| {
                AbError::InvalidArgument(format!("not a file: {}", asset.display()))
            })?;

        let identifier = new_identifier();
        let package_dir = out_dir.join(&identifier);
        fs::create_dir_all(&package_dir)?;
        fs::copy(asset, package_dir.join(file_name))?;

        let mut manifest = PackageManifest::new(identifier, "");
        manifest
            .members
            .push(FileEntry::new(crate::layout::file_stem(file_name)));
        store.save(&package_dir, &manifest)?;

        info!("Processed {} into {}", asset.display(), package_dir.display());
        created.push(manifest);
    }
    Ok(created)
}
