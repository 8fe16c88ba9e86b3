use glam::{Quat, Vec3};

use super::controller::{TrackballController, EPS};
use super::state::InteractionState;
use crate::camera::Camera;
use crate::scene::SceneObject;

fn near(a: Vec3, b: Vec3) -> bool {
    a.distance_squared(b) <= EPS
}

fn near_rotation(a: Quat, b: Quat) -> bool {
    1.0 - a.dot(b).abs() <= EPS
}

impl TrackballController {
    /// Blend target, object, and camera one step back toward their
    /// construction-time state.
    ///
    /// Each call moves by `options.damping.fade` of the remaining distance,
    /// so calling once per frame gives an eased reset. Once everything is
    /// within the change threshold it snaps exactly onto the snapshot. Any
    /// gesture in progress is dropped.
    ///
    /// Returns `true` while still converging.
    pub fn reset_with_fade(&mut self, camera: &mut Camera, object: &mut SceneObject) -> bool {
        self.set_state(InteractionState::Idle);
        self.prev_state = InteractionState::Idle;
        self.points.settle();

        let baseline = self.baseline;
        let t = if self.options.damping.fade.is_finite() {
            self.options.damping.fade.clamp(0.0, 1.0)
        } else {
            1.0
        };

        self.target = self.target.lerp(baseline.target, t);
        object.position = object.position.lerp(baseline.object_position, t);
        object.up = object.up.lerp(baseline.object_up, t);
        object.orientation = object
            .orientation
            .slerp(baseline.object_orientation, t)
            .normalize();
        camera.position = camera.position.lerp(baseline.camera_position, t);
        camera.up = camera.up.lerp(baseline.camera_up, t);

        let settled = near(self.target, baseline.target)
            && near(object.position, baseline.object_position)
            && near(object.up, baseline.object_up)
            && near_rotation(object.orientation, baseline.object_orientation)
            && near(camera.position, baseline.camera_position)
            && near(camera.up, baseline.camera_up);
        if settled {
            self.target = baseline.target;
            object.position = baseline.object_position;
            object.up = baseline.object_up;
            object.orientation = baseline.object_orientation;
            camera.position = baseline.camera_position;
            camera.up = baseline.camera_up;
            log::debug!("trackball fade reset settled at target {}", self.target);
        }
        camera.look_at(self.target);

        let _ = self.report_change(camera, object);
        !settled
    }
}
