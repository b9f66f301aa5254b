use abmaker_api::{BoxError, BundlePipeline, BundleTags, Platform};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

/// Packs each bundle into a zip archive named after the bundle.
///
/// Entries are stored under their file name only. Archives are rebuilt from
/// scratch on every build.
#[derive(Debug, Default)]
pub struct ZipPipeline;

impl ZipPipeline {
    pub fn new() -> Self {
        Self
    }

    fn write_archive(root: &Path, archive: &Path, assets: &[&str]) -> Result<(), BoxError> {
        let mut writer = zip::ZipWriter::new(File::create(archive)?);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for asset in assets {
            let entry_name = asset.rsplit('/').next().unwrap_or(asset);
            writer.start_file(entry_name, options)?;
            let mut input = File::open(root.join(asset))?;
            io::copy(&mut input, &mut writer)?;
        }
        writer.finish()?;
        Ok(())
    }
}

impl BundlePipeline for ZipPipeline {
    fn build(
        &self,
        tags: &BundleTags,
        root: &Path,
        out_dir: &Path,
        platform: Platform,
    ) -> Result<Vec<PathBuf>, BoxError> {
        fs::create_dir_all(out_dir)?;
        let mut archives = Vec::new();
        for (bundle, assets) in tags.by_bundle() {
            let archive = out_dir.join(bundle);
            debug!(
                "Packing {} assets into {} for {}",
                assets.len(),
                archive.display(),
                platform
            );
            Self::write_archive(root, &archive, &assets)?;
            archives.push(archive);
        }
        Ok(archives)
    }

    fn name(&self) -> &str {
        "zip"
    }
}
