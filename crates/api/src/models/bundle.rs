use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Bundle assignment for every tagged asset.
///
/// Keys are asset paths relative to the package root (`group/package/file.ext`,
/// always `/`-separated), values are bundle names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleTags {
    #[serde(default)]
    pub assets: BTreeMap<String, String>,
}

impl BundleTags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, asset: impl Into<String>, bundle: impl Into<String>) {
        self.assets.insert(asset.into(), bundle.into());
    }

    pub fn bundle_of(&self, asset: &str) -> Option<&str> {
        self.assets.get(asset).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Group assets by bundle name, both levels in sorted order.
    ///
    /// A bundle name claimed by packages in several groups belongs to the last
    /// group in name order, the same package a scan keeps. Assets of the other
    /// groups are left out.
    pub fn by_bundle(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut owners: BTreeMap<&str, &str> = BTreeMap::new();
        for (asset, bundle) in &self.assets {
            let group = asset_group(asset);
            let owner = owners.entry(bundle.as_str()).or_insert(group);
            if group > *owner {
                *owner = group;
            }
        }

        let mut grouped: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (asset, bundle) in &self.assets {
            if owners.get(bundle.as_str()) == Some(&asset_group(asset)) {
                grouped.entry(bundle.as_str()).or_default().push(asset.as_str());
            }
        }
        grouped
    }
}

fn asset_group(asset: &str) -> &str {
    asset.split('/').next().unwrap_or(asset)
}

/// Target platform of a bundle build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    WebGl,
    Win32,
    Win64,
    Android,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::WebGl,
        Platform::Win32,
        Platform::Win64,
        Platform::Android,
    ];

    /// Directory (and top-level archive) name used for this platform's output
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::WebGl => "webgl",
            Platform::Win32 => "win32",
            Platform::Win64 => "win64",
            Platform::Android => "android",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ApiError;

    fn from_str(s: &str) -> ApiResult<Self> {
        let lower = s.to_ascii_lowercase();
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == lower)
            .ok_or_else(|| ApiError::UnknownPlatform(s.to_string()))
    }
}
