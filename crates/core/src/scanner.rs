//! Package scanner.
//!
//! Reconciles every package directory against its persisted manifest:
//! 1. Identity (`identifier`, `group_path`) is always re-derived from the directory names
//! 2. Members are rebuilt from disk, carrying aliases forward by name
//! 3. Every member file is tagged with the package's bundle name

use crate::error::Result;
use crate::layout::{self, PackageDir};
use crate::store::ManifestStore;
use abmaker_api::{BundleTagger, PackageManifest};
use indexmap::IndexMap;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub struct PackageScanner {
    store: ManifestStore,
}

impl PackageScanner {
    pub fn new(store: ManifestStore) -> Self {
        Self { store }
    }

    /// Scan the package tree under `root`, persisting each manifest.
    ///
    /// A missing root is reported and leaves everything untouched, including
    /// the tagger.
    pub fn scan(&self, root: &Path, tagger: &mut dyn BundleTagger) -> Result<ScanReport> {
        let mut report = ScanReport::default();
        if !root.is_dir() {
            info!("Package root {} does not exist, nothing to scan", root.display());
            return Ok(report);
        }

        let start = Instant::now();
        for package in layout::package_dirs(root)? {
            let outcome = self.scan_package(&package, tagger, &mut report)?;
            match outcome {
                PackageOutcome::Created => report.created += 1,
                PackageOutcome::Updated => report.updated += 1,
                PackageOutcome::Unchanged => report.unchanged += 1,
            }
        }
        tagger.finish()?;

        report.duration = start.elapsed();
        info!(
            "Refresh complete: {} packages ({} created, {} updated), {} files tagged in {:?}",
            report.manifests.len(),
            report.created,
            report.updated,
            report.tagged_files,
            report.duration
        );
        Ok(report)
    }

    fn scan_package(
        &self,
        package: &PackageDir,
        tagger: &mut dyn BundleTagger,
        report: &mut ScanReport,
    ) -> Result<PackageOutcome> {
        let existing = self.store.load(&package.path)?;
        let is_new = existing.is_none();
        if is_new {
            info!(
                "No manifest in {}/{}, initializing one",
                package.group, package.identifier
            );
        }

        let mut manifest = existing.unwrap_or_default();
        manifest.identifier = package.identifier.clone();
        manifest.group_path = package.group.clone();

        let files = layout::member_files(&package.path, self.store.manifest_file())?;
        for file in &files {
            tagger.tag(&package.asset_key(file), &package.identifier)?;
        }
        report.tagged_files += files.len();

        manifest.reconcile(files.iter().map(|f| layout::file_stem(f).to_string()));
        let written = self.store.save(&package.path, &manifest)?;
        debug!(
            "Scanned {}/{}: {} members",
            package.group,
            package.identifier,
            manifest.members.len()
        );

        if let Some(previous) = report.manifests.get(&package.identifier) {
            warn!(
                "Package identifier {} appears in groups {} and {}, keeping the latter",
                package.identifier, previous.group_path, package.group
            );
        }
        report
            .manifests
            .insert(package.identifier.clone(), manifest);

        Ok(match (is_new, written) {
            (true, _) => PackageOutcome::Created,
            (false, true) => PackageOutcome::Updated,
            (false, false) => PackageOutcome::Unchanged,
        })
    }
}

enum PackageOutcome {
    Created,
    Updated,
    Unchanged,
}

/// Result of a scan
#[derive(Debug, Default, Clone)]
pub struct ScanReport {
    /// Reconciled manifests keyed by package identifier, in traversal order
    pub manifests: IndexMap<String, PackageManifest>,
    /// Packages that had no manifest before this scan
    pub created: usize,
    /// Packages whose manifest content changed
    pub updated: usize,
    /// Packages whose manifest was already up to date
    pub unchanged: usize,
    /// Number of files handed to the tagger
    pub tagged_files: usize,
    pub duration: Duration,
}
