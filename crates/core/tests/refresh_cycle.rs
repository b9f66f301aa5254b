mod common;

use abmaker_api::FileEntry;
use abmaker_core::AssetPipeline;
use abmaker_core::bundle::TagFile;
use abmaker_core::store::ManifestStore;
use common::Fixture;

fn set_member_alias(fixture: &Fixture, group: &str, package: &str, name: &str, alias: &str) {
    let store = ManifestStore::new(fixture.config.manifest_file.clone());
    let dir = fixture.package_dir(group, package);
    let mut manifest = store.load(&dir).unwrap().unwrap();
    for member in manifest.members.iter_mut().filter(|m| m.name == name) {
        member.alias = alias.to_string();
    }
    store.save(&dir, &manifest).unwrap();
}

#[test]
fn test_missing_manifest_is_initialized() {
    let fixture = Fixture::new();
    fixture.add_file("trees", "p1", "oak.prefab");
    fixture.add_file("trees", "p1", "oak.prefab.meta");

    let report = AssetPipeline::new(fixture.config.clone()).refresh().unwrap();

    assert_eq!(report.created, 1);
    let manifest = &report.manifests["p1"];
    assert_eq!(manifest.identifier, "p1");
    assert_eq!(manifest.group_path, "trees");
    assert_eq!(manifest.members, vec![FileEntry::new("oak")]);
    assert!(fixture.package_dir("trees", "p1").join("_manifest.json").is_file());
}

#[test]
fn test_rescan_is_byte_identical() {
    let fixture = Fixture::new();
    fixture.add_file("trees", "p1", "oak.prefab");
    fixture.add_file("trees", "p1", "elm.prefab");
    fixture.add_file("rocks", "p2", "granite.prefab");
    let pipeline = AssetPipeline::new(fixture.config.clone());

    pipeline.refresh().unwrap();
    let first = (
        fixture.manifest_bytes("trees", "p1"),
        fixture.manifest_bytes("rocks", "p2"),
    );

    let report = pipeline.refresh().unwrap();
    let second = (
        fixture.manifest_bytes("trees", "p1"),
        fixture.manifest_bytes("rocks", "p2"),
    );

    assert_eq!(first, second);
    assert_eq!(report.unchanged, 2);
    assert_eq!(report.updated + report.created, 0);
}

#[test]
fn test_alias_survives_additions_and_removals() {
    let fixture = Fixture::new();
    fixture.add_file("trees", "p1", "tree01.prefab");
    fixture.add_file("trees", "p1", "tree02.prefab");
    let pipeline = AssetPipeline::new(fixture.config.clone());
    pipeline.refresh().unwrap();
    set_member_alias(&fixture, "trees", "p1", "tree01", "BigTree");

    fixture.remove_file("trees", "p1", "tree02.prefab");
    fixture.add_file("trees", "p1", "tree03.prefab");
    let report = pipeline.refresh().unwrap();

    assert_eq!(
        report.manifests["p1"].members,
        vec![
            FileEntry::with_alias("tree01", "BigTree"),
            FileEntry::new("tree03"),
        ]
    );
}

#[test]
fn test_removed_file_leaves_members_and_tags() {
    let fixture = Fixture::new();
    fixture.add_file("trees", "p1", "oak.prefab");
    fixture.add_file("trees", "p1", "elm.prefab");
    let pipeline = AssetPipeline::new(fixture.config.clone());
    pipeline.refresh().unwrap();

    fixture.remove_file("trees", "p1", "elm.prefab");
    let report = pipeline.refresh().unwrap();

    assert!(report.manifests["p1"].member("elm").is_none());
    let tags = TagFile::read(&fixture.config.tag_file()).unwrap();
    assert_eq!(tags.bundle_of("trees/p1/elm.prefab"), None);
    assert_eq!(tags.bundle_of("trees/p1/oak.prefab"), Some("p1"));
}

#[test]
fn test_tags_cover_every_member_file() {
    let fixture = Fixture::new();
    fixture.add_file("trees", "p1", "oak.prefab");
    fixture.add_file("rocks", "p2", "granite.prefab");
    fixture.add_file("rocks", "p2", "granite.png");

    let report = AssetPipeline::new(fixture.config.clone()).refresh().unwrap();
    assert_eq!(report.tagged_files, 3);

    let tags = TagFile::read(&fixture.config.tag_file()).unwrap();
    assert_eq!(tags.len(), 3);
    assert_eq!(tags.bundle_of("rocks/p2/granite.png"), Some("p2"));
    // Both files share a stem and collapse into one member
    assert_eq!(report.manifests["p2"].members.len(), 1);
}

#[test]
fn test_missing_root_touches_nothing() {
    let fixture = Fixture::new();
    let mut config = fixture.config.clone();
    config.packages_root = fixture.dir.path().join("NoSuchDir");

    let report = AssetPipeline::new(config.clone()).refresh().unwrap();
    assert!(report.manifests.is_empty());
    assert!(!config.tag_file().exists());
}

#[test]
fn test_malformed_manifest_aborts_refresh() {
    let fixture = Fixture::new();
    fixture.add_file("trees", "p1", "oak.prefab");
    std::fs::write(
        fixture.package_dir("trees", "p1").join("_manifest.json"),
        "{ broken",
    )
    .unwrap();

    let result = AssetPipeline::new(fixture.config.clone()).refresh();
    assert!(matches!(
        result,
        Err(abmaker_core::AbError::Manifest { .. })
    ));
}
