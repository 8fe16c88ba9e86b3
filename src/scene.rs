//! Host-owned scene object manipulated in object-rotation mode.

use glam::{Mat4, Quat, Vec3};

/// The single object the trackball rotates when
/// [`RotationTarget::Object`](crate::options::RotationTarget::Object) is
/// selected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneObject {
    /// World-space position.
    pub position: Vec3,
    /// Up direction, restored on reset.
    pub up: Vec3,
    /// Accumulated trackball rotation. Kept unit-length by the controller.
    pub orientation: Quat,
}

impl SceneObject {
    /// Create an object at `position` with identity orientation.
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            up: Vec3::Y,
            orientation: Quat::IDENTITY,
        }
    }

    /// Model matrix combining orientation and position.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position)
    }
}

impl Default for SceneObject {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}
