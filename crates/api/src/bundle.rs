use crate::error::BoxError;
use crate::models::{BundleTags, Platform};
use std::path::{Path, PathBuf};

/// Receives bundle labels for discovered files during a scan.
pub trait BundleTagger {
    /// Mark `asset` (relative to the package root, `/`-separated) as a member of `bundle`.
    fn tag(&mut self, asset: &str, bundle: &str) -> Result<(), BoxError>;

    /// Called once after a complete traversal. Labels not re-tagged during the
    /// traversal are considered unused.
    fn finish(&mut self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl BundleTagger for BundleTags {
    fn tag(&mut self, asset: &str, bundle: &str) -> Result<(), BoxError> {
        self.insert(asset, bundle);
        Ok(())
    }
}

/// External build step turning tagged files into platform archives.
pub trait BundlePipeline {
    /// Build every bundle named in `tags` into `out_dir`.
    ///
    /// Asset paths in `tags` are resolved against `root`. Returns the archive
    /// files written.
    fn build(
        &self,
        tags: &BundleTags,
        root: &Path,
        out_dir: &Path,
        platform: Platform,
    ) -> Result<Vec<PathBuf>, BoxError>;

    /// Pipeline name (for logging/debugging)
    fn name(&self) -> &str;
}
