//! Bundle tagging and building.

mod pipeline;
mod tags;

pub use pipeline::ZipPipeline;
pub use tags::TagFile;

use crate::error::Result;
use abmaker_api::{BundlePipeline, BundleTags, Platform};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const MANIFEST_SIDECAR_EXTENSION: &str = "manifest";

/// Runs a [`BundlePipeline`] into `<output_dir>/<platform>/` and cleans up after it.
pub struct BundleBuilder<'a> {
    pipeline: &'a dyn BundlePipeline,
    output_dir: PathBuf,
}

impl<'a> BundleBuilder<'a> {
    pub fn new(pipeline: &'a dyn BundlePipeline, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            pipeline,
            output_dir: output_dir.into(),
        }
    }

    pub fn platform_dir(&self, platform: Platform) -> PathBuf {
        self.output_dir.join(platform.as_str())
    }

    /// Build all tagged bundles for `platform`. Returns the archives left after cleanup.
    pub fn build(&self, tags: &BundleTags, root: &Path, platform: Platform) -> Result<Vec<PathBuf>> {
        let out_dir = self.platform_dir(platform);
        fs::create_dir_all(&out_dir)?;
        if tags.is_empty() {
            warn!("No bundle tags recorded, run a refresh before building");
        }

        info!(
            "build assetbundle at {} with {} pipeline",
            out_dir.display(),
            self.pipeline.name()
        );
        let archives = self.pipeline.build(tags, root, &out_dir, platform)?;
        let removed = cleanup(&out_dir, platform)?;
        debug!("Removed {} redundant build files", removed.len());

        Ok(archives.into_iter().filter(|a| !removed.contains(a)).collect())
    }
}

/// Remove the redundant top-level archive (`<platform>`), its manifest and
/// every `*.manifest` sidecar directly inside `platform_dir`.
///
/// Files that do not exist are ignored. Returns the files removed.
pub fn cleanup(platform_dir: &Path, platform: Platform) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();

    let top_level = platform_dir.join(platform.as_str());
    let top_level_manifest =
        platform_dir.join(format!("{}.{}", platform.as_str(), MANIFEST_SIDECAR_EXTENSION));
    for path in [top_level, top_level_manifest] {
        if remove_if_present(&path)? {
            removed.push(path);
        }
    }

    for entry in fs::read_dir(platform_dir)? {
        let path = entry?.path();
        let is_sidecar = path.is_file()
            && path.extension().and_then(|e| e.to_str()) == Some(MANIFEST_SIDECAR_EXTENSION);
        if is_sidecar && remove_if_present(&path)? {
            removed.push(path);
        }
    }

    Ok(removed)
}

fn remove_if_present(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}
