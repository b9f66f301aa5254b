//! Pipeline configuration.
//!
//! Every location the pipeline reads or writes is configured here instead of
//! being derived from a fixed relative path. Values come from `abmaker.toml`
//! and may be overridden by command-line flags.

use crate::error::{AbError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File looked up in the working directory when no explicit config is given.
pub const DEFAULT_CONFIG_FILE: &str = "abmaker.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbConfig {
    /// Root of the `<group>/<package>/` tree
    pub packages_root: PathBuf,
    /// Base output directory for bundles and metadata
    pub output_dir: PathBuf,
    /// Where exported manifests go; `<output_dir>/meta` when unset
    pub manifest_out_dir: Option<PathBuf>,
    /// Where the scene snapshot goes; `<output_dir>/scene.json` when unset
    pub snapshot_path: Option<PathBuf>,
    /// Where bundle tags are persisted; `<output_dir>/bundle_tags.json` when unset
    pub tag_file: Option<PathBuf>,
    /// Package-relative name of the persisted manifest
    pub manifest_file: String,
    /// Extension of exported manifests
    pub manifest_extension: String,
    /// First two segments a template path must carry to count as package-sourced
    pub template_prefix: String,
    /// Destination of `process`ed standalone packages
    pub process_dir: PathBuf,
}

impl Default for AbConfig {
    fn default() -> Self {
        Self {
            packages_root: PathBuf::from("Assets/Packages"),
            output_dir: PathBuf::from("_assets"),
            manifest_out_dir: None,
            snapshot_path: None,
            tag_file: None,
            manifest_file: "_manifest.json".to_string(),
            manifest_extension: "mf".to_string(),
            template_prefix: "Assets/Packages".to_string(),
            process_dir: PathBuf::from("Assets/_out"),
        }
    }
}

impl AbConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `abmaker.toml` in the working
    /// directory is used when present and defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let implicit = Path::new(DEFAULT_CONFIG_FILE);
                if implicit.is_file() {
                    Self::from_file(implicit)
                } else {
                    debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content).map_err(|source| AbError::Config {
            file: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn manifest_out_dir(&self) -> PathBuf {
        self.manifest_out_dir
            .clone()
            .unwrap_or_else(|| self.output_dir.join("meta"))
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.snapshot_path
            .clone()
            .unwrap_or_else(|| self.output_dir.join("scene.json"))
    }

    pub fn tag_file(&self) -> PathBuf {
        self.tag_file
            .clone()
            .unwrap_or_else(|| self.output_dir.join("bundle_tags.json"))
    }
}
