mod common;

use abmaker_core::AssetPipeline;
use common::Fixture;

#[test]
fn test_new_package_is_picked_up_by_refresh() {
    let fixture = Fixture::new();
    let pipeline = AssetPipeline::new(fixture.config.clone());

    let created = pipeline.new_package("props").unwrap();
    fixture.add_file("props", &created.identifier, "chair.prefab");
    let report = pipeline.refresh().unwrap();

    let manifest = &report.manifests[&created.identifier];
    assert_eq!(manifest.group_path, "props");
    assert_eq!(manifest.members.len(), 1);
    assert_eq!(manifest.members[0].name, "chair");
    assert_eq!(report.created, 0);
}

#[test]
fn test_process_creates_standalone_packages() {
    let fixture = Fixture::new();
    let loose = fixture.dir.path().join("lamp.prefab");
    std::fs::write(&loose, "lamp").unwrap();

    let created = AssetPipeline::new(fixture.config.clone())
        .process(&[loose])
        .unwrap();

    assert_eq!(created.len(), 1);
    assert_eq!(created[0].group_path, "");
    let dir = fixture.config.process_dir.join(&created[0].identifier);
    assert!(dir.join("lamp.prefab").is_file());
    assert!(dir.join(&fixture.config.manifest_file).is_file());
}
