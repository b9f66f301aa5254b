use abmaker_core::AbConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary project with a package root and an output directory.
pub struct Fixture {
    pub dir: TempDir,
    pub config: AbConfig,
}

#[allow(dead_code)]
impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = AbConfig {
            packages_root: dir.path().join("Assets/Packages"),
            output_dir: dir.path().join("_assets"),
            process_dir: dir.path().join("Assets/_out"),
            ..AbConfig::default()
        };
        fs::create_dir_all(&config.packages_root).unwrap();
        Self { dir, config }
    }

    pub fn root(&self) -> &Path {
        &self.config.packages_root
    }

    pub fn package_dir(&self, group: &str, package: &str) -> PathBuf {
        self.root().join(group).join(package)
    }

    pub fn add_file(&self, group: &str, package: &str, file: &str) -> PathBuf {
        let dir = self.package_dir(group, package);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(file);
        fs::write(&path, format!("content of {}", file)).unwrap();
        path
    }

    pub fn remove_file(&self, group: &str, package: &str, file: &str) {
        fs::remove_file(self.package_dir(group, package).join(file)).unwrap();
    }

    pub fn manifest_bytes(&self, group: &str, package: &str) -> Vec<u8> {
        fs::read(
            self.package_dir(group, package)
                .join(&self.config.manifest_file),
        )
        .unwrap()
    }
}
