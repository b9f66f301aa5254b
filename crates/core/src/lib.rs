pub mod authoring;
pub mod bundle;
pub mod config;
pub mod error;
pub mod exporter;
pub mod facade;
pub mod layout;
pub mod logging;
pub mod scanner;
pub mod snapshot;
pub mod store;

pub use config::AbConfig;
pub use error::{AbError, Result};
pub use facade::AssetPipeline;
