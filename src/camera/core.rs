use glam::{Mat3, Mat4, Quat, Vec3};

/// Host-owned camera moved by the trackball controller.
///
/// The controller writes `position` and `up` and calls
/// [`look_at`](Self::look_at) at the end of every frame; projection settings
/// stay with the host's renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye position in world space.
    pub position: Vec3,
    /// Up direction used when orienting toward the target.
    pub up: Vec3,
    /// World-space rotation, written by [`look_at`](Self::look_at).
    pub orientation: Quat,
}

impl Camera {
    /// Create a camera at `position` with the given up vector, facing -Z.
    #[must_use]
    pub fn new(position: Vec3, up: Vec3) -> Self {
        Self {
            position,
            up,
            orientation: Quat::IDENTITY,
        }
    }

    /// Rotate the camera so its -Z axis points at `target`, keeping `up` as
    /// close to vertical as possible.
    ///
    /// When `up` is parallel to the view direction (looking straight down
    /// or up), a world axis off the view direction stands in for it. A
    /// target at the eye leaves the orientation untouched.
    pub fn look_at(&mut self, target: Vec3) {
        let forward = (target - self.position).normalize_or_zero();
        if forward == Vec3::ZERO {
            return;
        }
        let mut right = forward.cross(self.up).normalize_or_zero();
        if right == Vec3::ZERO {
            let fallback = if forward.z.abs() < 0.9 { Vec3::Z } else { Vec3::X };
            right = forward.cross(fallback).normalize_or_zero();
        }
        let up = right.cross(forward);
        self.orientation =
            Quat::from_mat3(&Mat3::from_cols(right, up, -forward)).normalize();
    }

    /// Direction the camera is facing.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Right-handed view matrix for the current pose.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), self.orientation * Vec3::Y)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 1.0), Vec3::Y)
    }
}
