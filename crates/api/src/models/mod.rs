pub mod bundle;
pub mod manifest;
pub mod scene;

pub use bundle::*;
pub use manifest::*;
pub use scene::*;
