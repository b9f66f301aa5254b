mod build;
mod export;
mod package;
mod refresh;
mod snapshot;

use abmaker_api::Platform;
use abmaker_core::{AbConfig, AssetPipeline};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "abmaker",
    version,
    about = "Asset package pipeline: manifests, bundle tags, bundle builds and scene snapshots",
    long_about = "abmaker keeps a tree of <group>/<package>/ asset directories in sync with their \
                  manifests, exports manifest metadata, builds tagged bundles for a target \
                  platform and exports placed-object snapshots of a scene."
)]
pub struct Cli {
    /// Path to the configuration file (defaults to ./abmaker.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Package root override
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Output directory override
    #[arg(long, global = true, value_name = "DIR")]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reconcile package manifests with the files on disk and retag bundles
    #[command(
        long_about = "Walks every <group>/<package>/ directory, creates missing manifests, \
                            rebuilds member lists while keeping aliases, and records which bundle \
                            each file belongs to."
    )]
    Refresh,
    /// Export every package manifest as <identifier>.mf
    Export {
        /// Directory for exported manifests (defaults to <output>/meta)
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
    /// Export placed objects of a scene dump as a JSON snapshot
    Snapshot {
        /// Scene dump produced by the host ({"instances": [...]})
        #[arg(long, value_name = "FILE")]
        scene: PathBuf,
        /// Snapshot destination (defaults to <output>/scene.json)
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Build tagged bundles for a target platform
    Build {
        #[arg(long, value_enum)]
        platform: PlatformArg,
    },
    /// Create an empty package with a generated identifier
    New {
        /// Group directory to create the package in
        #[arg(value_name = "GROUP")]
        group: String,
    },
    /// Copy loose asset files into standalone packages
    Process {
        #[arg(value_name = "FILES", required = true)]
        files: Vec<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PlatformArg {
    Webgl,
    Win32,
    Win64,
    Android,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Webgl => Platform::WebGl,
            PlatformArg::Win32 => Platform::Win32,
            PlatformArg::Win64 => Platform::Win64,
            PlatformArg::Android => Platform::Android,
        }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = abmaker_core::logging::init_logging("cli", true);

    let mut config = AbConfig::load(cli.config.as_deref())?;
    if let Some(root) = cli.root {
        config.packages_root = root;
    }
    if let Some(output) = cli.output {
        config.output_dir = output;
    }

    match cli.command {
        Commands::Refresh => refresh::run(AssetPipeline::new(config)),
        Commands::Export { out } => {
            if out.is_some() {
                config.manifest_out_dir = out;
            }
            export::run(AssetPipeline::new(config))
        }
        Commands::Snapshot { scene, out } => {
            if out.is_some() {
                config.snapshot_path = out;
            }
            snapshot::run(AssetPipeline::new(config), scene)
        }
        Commands::Build { platform } => build::run(AssetPipeline::new(config), platform.into()),
        Commands::New { group } => package::run_new(AssetPipeline::new(config), &group),
        Commands::Process { files } => package::run_process(AssetPipeline::new(config), &files),
    }
}
