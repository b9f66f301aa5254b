use abmaker_api::{BoxError, PlacedInstance, SceneDump, SceneSource};
use std::path::PathBuf;

/// Scene source backed by a host-produced JSON dump (`{"instances": [...]}`).
pub struct JsonSceneSource {
    path: PathBuf,
    name: String,
}

impl JsonSceneSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl SceneSource for JsonSceneSource {
    fn placed_instances(&self) -> Result<Vec<PlacedInstance>, BoxError> {
        let content = std::fs::read_to_string(&self.path)?;
        let dump: SceneDump = serde_json::from_str(&content)?;
        Ok(dump.instances)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
