use abmaker_core::AssetPipeline;
use tracing::info;

pub fn run(pipeline: AssetPipeline) -> Result<(), Box<dyn std::error::Error>> {
    let written = pipeline.export_manifests()?;
    info!(
        "Exported {} manifests to {}",
        written.len(),
        pipeline.config().manifest_out_dir().display()
    );
    Ok(())
}
