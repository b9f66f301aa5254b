use std::path::{Path, PathBuf};

use crate::authoring;
use crate::bundle::{BundleBuilder, TagFile};
use crate::config::AbConfig;
use crate::error::Result;
use crate::exporter::ManifestExporter;
use crate::scanner::{PackageScanner, ScanReport};
use crate::snapshot::SnapshotExporter;
use crate::store::ManifestStore;
use abmaker_api::{BundlePipeline, PackageManifest, Platform, SceneSnapshot, SceneSource};

/// Pipeline handle - every operation wired to one configuration
///
/// Clients (the CLI, tests, host integrations) go through this instead of
/// assembling scanner, exporter and builder themselves.
#[derive(Debug, Clone)]
pub struct AssetPipeline {
    config: AbConfig,
}

impl AssetPipeline {
    pub fn new(config: AbConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AbConfig {
        &self.config
    }

    fn store(&self) -> ManifestStore {
        ManifestStore::new(self.config.manifest_file.clone())
    }

    /// Reconcile every manifest and persist the bundle tags.
    pub fn refresh(&self) -> Result<ScanReport> {
        let mut tags = TagFile::open(self.config.tag_file())?;
        PackageScanner::new(self.store()).scan(&self.config.packages_root, &mut tags)
    }

    /// Export manifests to the configured metadata directory.
    pub fn export_manifests(&self) -> Result<Vec<PathBuf>> {
        ManifestExporter::new(self.store(), self.config.manifest_extension.clone())
            .export(&self.config.packages_root, &self.config.manifest_out_dir())
    }

    /// Snapshot `source` into the configured snapshot path.
    pub fn export_snapshot(&self, source: &dyn SceneSource) -> Result<SceneSnapshot> {
        self.export_snapshot_to(source, &self.config.snapshot_path())
    }

    pub fn export_snapshot_to(
        &self,
        source: &dyn SceneSource,
        out_path: &Path,
    ) -> Result<SceneSnapshot> {
        SnapshotExporter::new(&self.config.template_prefix).export(source, out_path)
    }

    /// Build bundles from the tags recorded by the last refresh.
    pub fn build_bundles(
        &self,
        pipeline: &dyn BundlePipeline,
        platform: Platform,
    ) -> Result<Vec<PathBuf>> {
        let tags = TagFile::read(&self.config.tag_file())?;
        BundleBuilder::new(pipeline, self.config.output_dir.clone()).build(
            &tags,
            &self.config.packages_root,
            platform,
        )
    }

    pub fn new_package(&self, group: &str) -> Result<PackageManifest> {
        authoring::create_package(&self.config.packages_root, group, &self.store())
    }

    pub fn process(&self, assets: &[PathBuf]) -> Result<Vec<PackageManifest>> {
        authoring::process_assets(assets, &self.config.process_dir, &self.store())
    }
}
