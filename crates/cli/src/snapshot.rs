use abmaker_core::AssetPipeline;
use abmaker_core::snapshot::JsonSceneSource;
use std::path::PathBuf;

pub fn run(pipeline: AssetPipeline, scene: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let source = JsonSceneSource::new(scene);
    let snapshot = pipeline.export_snapshot(&source)?;
    println!(
        "{} placed objects written to {}",
        snapshot.objects.len(),
        pipeline.config().snapshot_path().display()
    );
    Ok(())
}
