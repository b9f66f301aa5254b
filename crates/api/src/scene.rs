use crate::error::BoxError;
use crate::models::PlacedInstance;

/// Supplies the live object instances of the current scene.
///
/// The host environment owns the scene graph; the snapshot exporter only sees
/// what this returns, in the order it is returned.
pub trait SceneSource {
    fn placed_instances(&self) -> Result<Vec<PlacedInstance>, BoxError>;

    /// Source name (for logging/debugging)
    fn name(&self) -> &str {
        "scene"
    }
}

impl SceneSource for Vec<PlacedInstance> {
    fn placed_instances(&self) -> Result<Vec<PlacedInstance>, BoxError> {
        Ok(self.clone())
    }

    fn name(&self) -> &str {
        "in-memory scene"
    }
}
