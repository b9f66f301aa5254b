use abmaker_api::Platform;
use abmaker_core::AssetPipeline;
use abmaker_core::bundle::ZipPipeline;
use tracing::info;

pub fn run(pipeline: AssetPipeline, platform: Platform) -> Result<(), Box<dyn std::error::Error>> {
    let archives = pipeline.build_bundles(&ZipPipeline::new(), platform)?;
    for archive in &archives {
        println!(" - {}", archive.display());
    }
    info!("Built {} bundles for {}", archives.len(), platform);
    Ok(())
}
