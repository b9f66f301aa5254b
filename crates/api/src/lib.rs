pub mod bundle;
pub mod error;
pub mod models;
pub mod scene;

// Re-export commonly used types
pub use bundle::{BundlePipeline, BundleTagger};
pub use error::{ApiError, ApiResult, BoxError};
pub use models::*;
pub use scene::SceneSource;
