use abmaker_core::AssetPipeline;
use std::path::PathBuf;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct ProcessedRow {
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Package")]
    identifier: String,
}

pub fn run_new(pipeline: AssetPipeline, group: &str) -> Result<(), Box<dyn std::error::Error>> {
    let manifest = pipeline.new_package(group)?;
    println!(
        "{}",
        pipeline
            .config()
            .packages_root
            .join(group)
            .join(&manifest.identifier)
            .display()
    );
    Ok(())
}

pub fn run_process(
    pipeline: AssetPipeline,
    files: &[PathBuf],
) -> Result<(), Box<dyn std::error::Error>> {
    let created = pipeline.process(files)?;
    let rows: Vec<ProcessedRow> = files
        .iter()
        .zip(&created)
        .map(|(file, manifest)| ProcessedRow {
            source: file.display().to_string(),
            identifier: manifest.identifier.clone(),
        })
        .collect();
    println!("{}", Table::new(rows));
    Ok(())
}
