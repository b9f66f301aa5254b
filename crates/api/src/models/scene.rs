use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const ONE: Vec3 = Vec3::new(1.0, 1.0, 1.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Apply `f` to each component independently.
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// Euler angles in degrees, rotation applied Z first, then X, then Y.
    /// Each angle is normalized to `[0, 360)`.
    pub fn to_euler_degrees(&self) -> Vec3 {
        let Quaternion { x, y, z, w } = *self;

        let sin_x = (2.0 * (w * x - y * z)).clamp(-1.0, 1.0);
        let pitch = sin_x.asin();
        let yaw = (2.0 * (w * y + x * z)).atan2(1.0 - 2.0 * (x * x + y * y));
        let roll = (2.0 * (w * z + x * y)).atan2(1.0 - 2.0 * (x * x + z * z));

        Vec3::new(pitch, yaw, roll).map(|rad| normalize_degrees(rad.to_degrees()))
    }
}

fn normalize_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Rotation as supplied by the host, either as Euler degrees or a quaternion.
///
/// Quaternion comes first so that a `{x, y, z, w}` object is never mistaken for
/// Euler angles with an ignored `w`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rotation {
    Quaternion(Quaternion),
    Euler(Vec3),
}

impl Rotation {
    pub fn euler_degrees(&self) -> Vec3 {
        match self {
            Rotation::Quaternion(q) => q.to_euler_degrees(),
            Rotation::Euler(angles) => *angles,
        }
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Rotation::Euler(Vec3::ZERO)
    }
}

/// World position, world rotation and local scale of a placed instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    #[serde(default)]
    pub position: Vec3,
    #[serde(default)]
    pub rotation: Rotation,
    #[serde(default = "unit_scale")]
    pub scale: Vec3,
}

fn unit_scale() -> Vec3 {
    Vec3::ONE
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Rotation::default(),
            scale: Vec3::ONE,
        }
    }
}

/// A live object in the host scene.
///
/// `template_path` is the asset path of the template the instance was created
/// from, or `None` when the object is not a template instance at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedInstance {
    #[serde(default)]
    pub template_path: Option<String>,
    pub name: String,
    #[serde(default)]
    pub transform: Transform,
}

/// Host-produced listing of the live scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDump {
    #[serde(default)]
    pub instances: Vec<PlacedInstance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedObject {
    pub source_reference: String,
    pub name: String,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub objects: Vec<PlacedObject>,
}
