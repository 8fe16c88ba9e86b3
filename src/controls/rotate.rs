use glam::{Quat, Vec3};

use super::controller::TrackballController;
use crate::camera::Camera;
use crate::scene::SceneObject;
use crate::util::vector::angle_between;

impl TrackballController {
    /// Axis and (speed-scaled) angle carrying `rotate_start` onto
    /// `rotate_end`, or `None` when the pair is degenerate.
    fn rotation_delta(&self) -> Option<(Vec3, f32)> {
        let start = self.points.rotate_start;
        let end = self.points.rotate_end;
        let angle = angle_between(start, end)?;
        // Antiparallel points have no unique axis.
        let axis = start.cross(end).normalize_or_zero();
        if axis == Vec3::ZERO {
            return None;
        }
        Some((axis, angle * self.options.speed.rotate))
    }

    /// Orbit the eye vector (and the camera's up) around the target.
    pub(super) fn rotate_camera(&mut self, eye: &mut Vec3, camera: &mut Camera) {
        let Some((axis, angle)) = self.rotation_delta() else {
            return;
        };

        let rotation = Quat::from_axis_angle(axis, -angle);
        *eye = rotation * *eye;
        camera.up = rotation * camera.up;
        self.points.rotate_end = rotation * self.points.rotate_end;

        if self.options.damping.static_moving {
            self.points.rotate_start = self.points.rotate_end;
        } else {
            let decay = Quat::from_axis_angle(
                axis,
                angle * (self.options.damping.camera - 1.0),
            );
            self.points.rotate_start = decay * self.points.rotate_start;
        }
    }

    /// Rotate the object about its own trackball.
    pub(super) fn rotate_object(&mut self, object: &mut SceneObject) {
        let Some((axis, angle)) = self.rotation_delta() else {
            return;
        };

        let rotation = Quat::from_axis_angle(axis, angle);
        object.orientation = (rotation * object.orientation).normalize();

        if self.options.damping.static_moving {
            self.points.rotate_start = self.points.rotate_end;
        } else {
            self.points.rotate_start = self
                .points
                .rotate_start
                .lerp(self.points.rotate_end, self.options.damping.object);
        }
    }
}
