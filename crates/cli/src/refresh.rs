use abmaker_core::AssetPipeline;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::info;

#[derive(Tabled)]
struct PackageRow {
    #[tabled(rename = "Package")]
    identifier: String,
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Alias")]
    alias: String,
    #[tabled(rename = "Files")]
    files: usize,
}

pub fn run(pipeline: AssetPipeline) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        "Refreshing packages under {}...",
        pipeline.config().packages_root.display()
    );
    let report = pipeline.refresh()?;

    let rows: Vec<PackageRow> = report
        .manifests
        .values()
        .map(|m| PackageRow {
            identifier: m.identifier.clone(),
            group: m.group_path.clone(),
            alias: if m.alias.is_empty() {
                "-".to_string()
            } else {
                m.alias.clone()
            },
            files: m.members.len(),
        })
        .collect();

    if rows.is_empty() {
        println!("No packages found.");
    } else {
        println!("{}", Table::new(rows).with(Style::psql()));
        println!(
            "{} created, {} updated, {} unchanged",
            report.created, report.updated, report.unchanged
        );
    }
    info!("refresh finish");
    Ok(())
}
