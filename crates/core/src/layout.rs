//! Enumeration of the `<root>/<group>/<package>/*` tree.
//!
//! Every level is enumerated in file-name order so repeated traversals of an
//! unchanged tree visit packages and members identically.

use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Extension of editor-generated sidecar files that never count as members.
const SIDECAR_EXTENSION: &str = "meta";

/// A package directory discovered under a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDir {
    pub group: String,
    pub identifier: String,
    pub path: PathBuf,
}

impl PackageDir {
    /// Root-relative, `/`-separated key of a file inside this package.
    pub fn asset_key(&self, file_name: &str) -> String {
        format!("{}/{}/{}", self.group, self.identifier, file_name)
    }
}

/// List every package of every group under `root`. Hidden directories are
/// neither groups nor packages.
pub fn package_dirs(root: &Path) -> Result<Vec<PackageDir>> {
    let mut packages = Vec::new();
    for (group, group_path) in visible_dirs(root)? {
        for (identifier, path) in visible_dirs(&group_path)? {
            packages.push(PackageDir {
                group: group.clone(),
                identifier,
                path,
            });
        }
    }
    Ok(packages)
}

/// File names of the members of a package, excluding the manifest, hidden
/// files and editor sidecars.
pub fn member_files(package: &Path, manifest_file: &str) -> Result<Vec<String>> {
    Ok(entries(package, EntryKind::File)?
        .into_iter()
        .map(|(name, _)| name)
        .filter(|name| !is_ignored(name, manifest_file))
        .collect())
}

pub fn is_ignored(file_name: &str, manifest_file: &str) -> bool {
    file_name == manifest_file
        || is_hidden(file_name)
        || Path::new(file_name).extension().and_then(|e| e.to_str()) == Some(SIDECAR_EXTENSION)
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

fn visible_dirs(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    Ok(entries(dir, EntryKind::Dir)?
        .into_iter()
        .filter(|(name, _)| !is_hidden(name))
        .collect())
}

/// File name without its last extension.
pub fn file_stem(file_name: &str) -> &str {
    Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Dir,
    File,
}

fn entries(dir: &Path, kind: EntryKind) -> Result<Vec<(String, PathBuf)>> {
    let mut found = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry?;
        let matches = match kind {
            EntryKind::Dir => entry.file_type().is_dir(),
            EntryKind::File => entry.file_type().is_file(),
        };
        if !matches {
            continue;
        }
        match entry.file_name().to_str() {
            Some(name) => found.push((name.to_string(), entry.into_path())),
            None => warn!("Skipping non UTF-8 path {}", entry.path().display()),
        }
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_package_dirs_two_levels_sorted() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("trees/pkg_b/nested")).unwrap();
        fs::create_dir_all(root.join("trees/pkg_a")).unwrap();
        fs::create_dir_all(root.join("rocks/pkg_c")).unwrap();
        fs::write(root.join("stray.txt"), "x").unwrap();
        fs::write(root.join("rocks/loose.txt"), "x").unwrap();

        let packages = package_dirs(root).unwrap();
        let ids: Vec<_> = packages
            .iter()
            .map(|p| format!("{}/{}", p.group, p.identifier))
            .collect();
        assert_eq!(ids, vec!["rocks/pkg_c", "trees/pkg_a", "trees/pkg_b"]);
    }

    #[test]
    fn test_package_dirs_skip_hidden_directories() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join(".git/objects/pack")).unwrap();
        fs::create_dir_all(root.join("trees/.cache")).unwrap();
        fs::create_dir_all(root.join("trees/pkg_a")).unwrap();

        let packages = package_dirs(root).unwrap();
        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].group, "trees");
        assert_eq!(packages[0].identifier, "pkg_a");
    }

    #[test]
    fn test_member_files_skip_manifest_and_sidecars() {
        let temp = tempfile::tempdir().unwrap();
        let pkg = temp.path();
        for name in [
            "b.prefab",
            "a.png",
            "a.png.meta",
            "_manifest.json",
            ".DS_Store",
        ] {
            fs::write(pkg.join(name), "x").unwrap();
        }
        fs::create_dir(pkg.join("sub")).unwrap();

        let files = member_files(pkg, "_manifest.json").unwrap();
        assert_eq!(files, vec!["a.png", "b.prefab"]);
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("tree01.prefab"), "tree01");
        assert_eq!(file_stem("archive.tar.gz"), "archive.tar");
        assert_eq!(file_stem("README"), "README");
    }

    #[test]
    fn test_asset_key() {
        let pkg = PackageDir {
            group: "trees".to_string(),
            identifier: "p1".to_string(),
            path: PathBuf::from("/x/trees/p1"),
        };
        assert_eq!(pkg.asset_key("oak.prefab"), "trees/p1/oak.prefab");
    }
}
