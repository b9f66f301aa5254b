//! Scene snapshot export.
//!
//! Captures placed instances of package-sourced templates with their
//! transforms rounded to 4 decimal places. Only templates whose path has the
//! shape `<prefix0>/<prefix1>/<group>/<package>/<file>` are kept; everything
//! else is dropped without a diagnostic.
//!
//! Output order is whatever order the [`SceneSource`] yields. Hosts generally
//! do not guarantee a stable object enumeration order between runs.

mod source;

pub use source::JsonSceneSource;

use crate::error::Result;
use crate::store::to_pretty_json;
use abmaker_api::{PlacedInstance, PlacedObject, Rotation, SceneSnapshot, SceneSource, Vec3};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Number of segments a package-sourced template path has.
const TEMPLATE_SEGMENTS: usize = 5;

const DECIMALS_SCALE: f64 = 10_000.0;

/// Round to 4 decimal places, halves away from zero.
///
/// The midpoint is decided on the binary product `value * 10^4`, so a decimal
/// literal such as `1.23455` rounds according to its nearest double.
pub fn round4(value: f64) -> f64 {
    (value * DECIMALS_SCALE).round() / DECIMALS_SCALE
}

/// Rebuild a vector from its individually rounded components.
pub fn round_vec(v: Vec3) -> Vec3 {
    v.map(round4)
}

/// Rounded Euler angles of `rotation`.
///
/// Angles derived from a quaternion stay in `[0, 360)` after rounding, so a
/// value just below 360 becomes 0. Euler angles supplied by the host are only
/// rounded.
pub fn round_rotation(rotation: &Rotation) -> Vec3 {
    let rounded = round_vec(rotation.euler_degrees());
    match rotation {
        Rotation::Quaternion(_) => rounded.map(|deg| if deg >= 360.0 { 0.0 } else { deg }),
        Rotation::Euler(_) => rounded,
    }
}

pub struct SnapshotExporter {
    prefix: Vec<String>,
}

impl SnapshotExporter {
    /// `template_prefix` is the `/`-separated pair of leading segments (e.g. `Assets/Packages`).
    pub fn new(template_prefix: &str) -> Self {
        Self {
            prefix: split_segments(template_prefix)
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    /// `package/file` of a package-sourced template path, or `None` when the
    /// path does not have the expected shape.
    pub fn source_reference(&self, template_path: &str) -> Option<String> {
        let normalized = template_path.replace('\\', "/");
        let segments = split_segments(&normalized);
        if segments.len() != TEMPLATE_SEGMENTS || segments.iter().any(|s| s.is_empty()) {
            return None;
        }
        if self.prefix.len() + 3 != TEMPLATE_SEGMENTS
            || segments[..self.prefix.len()] != self.prefix[..]
        {
            return None;
        }
        Some(format!("{}/{}", segments[3], segments[4]))
    }

    fn capture_instance(&self, instance: &PlacedInstance) -> Option<PlacedObject> {
        let source_reference = self.source_reference(instance.template_path.as_deref()?)?;
        let transform = &instance.transform;
        Some(PlacedObject {
            source_reference,
            name: instance.name.clone(),
            position: round_vec(transform.position),
            rotation: round_rotation(&transform.rotation),
            scale: round_vec(transform.scale),
        })
    }

    pub fn capture(&self, source: &dyn SceneSource) -> Result<SceneSnapshot> {
        let instances = source.placed_instances()?;
        let total = instances.len();
        let objects: Vec<PlacedObject> = instances
            .iter()
            .filter_map(|instance| self.capture_instance(instance))
            .collect();
        debug!(
            "Captured {} of {} instances from {}",
            objects.len(),
            total,
            source.name()
        );
        Ok(SceneSnapshot { objects })
    }

    /// Capture and write the snapshot to `out_path`.
    pub fn export(&self, source: &dyn SceneSource, out_path: &Path) -> Result<SceneSnapshot> {
        let snapshot = self.capture(source)?;
        if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(out_path, to_pretty_json(&snapshot)?)?;
        info!(
            "Wrote {} placed objects to {}",
            snapshot.objects.len(),
            out_path.display()
        );
        Ok(snapshot)
    }
}

fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use abmaker_api::{Quaternion, Transform};

    fn exporter() -> SnapshotExporter {
        SnapshotExporter::new("Assets/Packages")
    }

    fn instance(path: Option<&str>, name: &str) -> PlacedInstance {
        PlacedInstance {
            template_path: path.map(str::to_string),
            name: name.to_string(),
            transform: Transform::default(),
        }
    }

    #[test]
    fn test_round4() {
        assert_eq!(round4(1.234567), 1.2346);
        assert_eq!(round4(-1.234567), -1.2346);
        assert_eq!(round4(2.0), 2.0);
        let first = round4(1.23455);
        assert!(first == 1.2345 || first == 1.2346);
        for _ in 0..10 {
            assert_eq!(round4(1.23455), first);
        }
    }

    #[test]
    fn test_quaternion_rotation_wraps_after_rounding() {
        let half = (-0.00001f64).to_radians() / 2.0;
        let rotation = Rotation::Quaternion(Quaternion {
            x: 0.0,
            y: 0.0,
            z: half.sin(),
            w: half.cos(),
        });
        assert!(rotation.euler_degrees().z > 359.9999);
        assert_eq!(round_rotation(&rotation), Vec3::new(0.0, 0.0, 0.0));

        // Host-supplied Euler angles are passed through
        let euler = Rotation::Euler(Vec3::new(0.0, 0.0, 359.99999));
        assert_eq!(round_rotation(&euler), Vec3::new(0.0, 0.0, 360.0));
    }

    #[test]
    fn test_source_reference_shape() {
        let e = exporter();
        assert_eq!(
            e.source_reference("Assets/Packages/trees/p1/oak.prefab"),
            Some("p1/oak.prefab".to_string())
        );
        assert_eq!(
            e.source_reference("Assets\\Packages\\trees\\p1\\oak.prefab"),
            Some("p1/oak.prefab".to_string())
        );
        assert_eq!(e.source_reference("Assets/Packages/trees/oak.prefab"), None);
        assert_eq!(
            e.source_reference("Assets/Packages/trees/p1/sub/oak.prefab"),
            None
        );
        assert_eq!(e.source_reference("Assets/Other/trees/p1/oak.prefab"), None);
        assert_eq!(e.source_reference("Assets/Packages//p1/oak.prefab"), None);
    }

    #[test]
    fn test_capture_filters_and_rounds() {
        let mut placed = instance(Some("Assets/Packages/trees/p1/oak.prefab"), "Oak (1)");
        placed.transform = Transform {
            position: Vec3::new(1.234567, -0.000049, 10.0),
            rotation: Rotation::Euler(Vec3::new(90.00004, 0.0, 359.99999)),
            scale: Vec3::new(1.00001, 1.0, 0.33333333),
        };
        let scene = vec![
            instance(None, "Camera"),
            placed,
            instance(Some("Assets/Packages/trees/oak.prefab"), "Short"),
        ];

        let snapshot = exporter().capture(&scene).unwrap();
        assert_eq!(snapshot.objects.len(), 1);
        let obj = &snapshot.objects[0];
        assert_eq!(obj.source_reference, "p1/oak.prefab");
        assert_eq!(obj.name, "Oak (1)");
        assert_eq!(obj.position, Vec3::new(1.2346, -0.0, 10.0));
        assert_eq!(obj.rotation, Vec3::new(90.0, 0.0, 360.0));
        assert_eq!(obj.scale, Vec3::new(1.0, 1.0, 0.3333));
    }

    #[test]
    fn test_capture_keeps_source_order() {
        let scene = vec![
            instance(Some("Assets/Packages/g/p2/b.prefab"), "B"),
            instance(Some("Assets/Packages/g/p1/a.prefab"), "A"),
        ];
        let names: Vec<_> = exporter()
            .capture(&scene)
            .unwrap()
            .objects
            .into_iter()
            .map(|o| o.name)
            .collect();
        assert_eq!(names, vec!["B", "A"]);
    }
}
