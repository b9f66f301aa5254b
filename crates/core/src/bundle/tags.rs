use crate::error::Result;
use crate::store::to_pretty_json;
use abmaker_api::{BoxError, BundleTagger, BundleTags};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Bundle tags persisted as JSON between a refresh and a build.
///
/// Tagging starts from an empty set, so finishing a traversal drops every
/// label that was not re-applied.
pub struct TagFile {
    path: PathBuf,
    previous: usize,
    tags: BundleTags,
}

impl TagFile {
    /// Open for tagging. The current file content is only used for reporting.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let previous = Self::read(&path)?.len();
        Ok(Self {
            path,
            previous,
            tags: BundleTags::new(),
        })
    }

    /// Read the persisted tags, empty when the file does not exist.
    pub fn read(path: &Path) -> Result<BundleTags> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BundleTags::new()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn tags(&self) -> &BundleTags {
        &self.tags
    }

    fn write(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, to_pretty_json(&self.tags)?)?;
        Ok(())
    }
}

impl BundleTagger for TagFile {
    fn tag(&mut self, asset: &str, bundle: &str) -> std::result::Result<(), BoxError> {
        debug!("Tag {} -> {}", asset, bundle);
        self.tags.insert(asset, bundle);
        Ok(())
    }

    fn finish(&mut self) -> std::result::Result<(), BoxError> {
        let dropped = self.previous.saturating_sub(self.tags.len());
        if dropped > 0 {
            info!("Removing {} unused bundle tags", dropped);
        }
        self.write().map_err(|e| Box::new(e) as BoxError)
    }
}
