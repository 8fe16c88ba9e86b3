use glam::Vec3;

use super::controller::TrackballController;
use super::state::InteractionState;
use crate::camera::Camera;
use crate::util::vector::with_length;

impl TrackballController {
    /// Scale the eye vector by the pinch ratio (two-finger gesture) or by
    /// the vertical zoom drag.
    pub(super) fn zoom_camera(&mut self, eye: &mut Vec3) {
        if self.state == InteractionState::TouchZoomPan {
            let factor = self.points.touch_zoom_distance_start
                / self.points.touch_zoom_distance_end;
            self.points.touch_zoom_distance_start = self.points.touch_zoom_distance_end;
            if factor.is_finite() && factor > 0.0 {
                *eye *= factor;
            }
            return;
        }

        let drag = self.points.zoom_end.y - self.points.zoom_start.y;
        let factor = 1.0 + drag * self.options.speed.zoom;
        if factor != 1.0 && factor > 0.0 && factor.is_finite() {
            *eye *= factor;
            if self.options.damping.static_moving {
                self.points.zoom_start = self.points.zoom_end;
            } else {
                self.points.zoom_start.y += drag * self.options.damping.camera;
            }
        }
    }

    /// Slide camera and target together across the view plane.
    pub(super) fn pan_camera(&mut self, eye: Vec3, camera: &mut Camera) {
        let change = self.points.pan_end - self.points.pan_start;
        if change.length_squared() == 0.0 || !change.is_finite() {
            return;
        }

        let scaled = change * eye.length() * self.options.speed.pan;
        let pan = with_length(eye.cross(camera.up), scaled.x)
            + with_length(camera.up, scaled.y);
        log::trace!("trackball pan by {pan}");
        camera.position += pan;
        self.target += pan;

        if self.options.damping.static_moving {
            self.points.pan_start = self.points.pan_end;
        } else {
            self.points.pan_start += change * self.options.damping.camera;
        }
    }

    /// Keep the orbit distance within the configured limits while zoom or
    /// pan is enabled. The upper bound is applied first.
    pub(super) fn check_distances(&self, eye: &mut Vec3) {
        let interaction = &self.options.interaction;
        if interaction.no_zoom && interaction.no_pan {
            return;
        }

        let (min, max) = self.options.distance.bounds();
        if eye.length_squared() > max * max {
            *eye = with_length(*eye, max);
        }
        if eye.length_squared() < min * min {
            *eye = with_length(*eye, min);
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::controls::ScreenRect;
    use crate::input::{InputEvent, MouseButton, WheelDelta};
    use crate::scene::SceneObject;

    fn setup() -> (TrackballController, Camera, SceneObject) {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 600.0), Vec3::Y);
        let object = SceneObject::default();
        let controls = TrackballController::new(&mut camera, &object, Vec3::ZERO)
            .with_screen(ScreenRect::from_size(800.0, 600.0));
        (controls, camera, object)
    }

    fn drag(
        controls: &mut TrackballController,
        camera: &Camera,
        button: MouseButton,
        from: Vec2,
        to: Vec2,
    ) {
        let _ = controls.handle_event(
            &InputEvent::Press {
                button,
                x: from.x,
                y: from.y,
            },
            camera,
        );
        let _ = controls.handle_event(&InputEvent::Move { x: to.x, y: to.y }, camera);
    }

    #[test]
    fn zoom_in_clamps_to_min_distance() {
        let (mut controls, mut camera, mut object) = setup();
        controls.options.speed.zoom = 1.0;
        controls.options.distance.min = 240.0;
        controls.options.distance.max = 10_000.0;

        // Drag from the bottom edge almost to the top: factor 0.01.
        drag(
            &mut controls,
            &camera,
            MouseButton::Middle,
            Vec2::new(400.0, 600.0),
            Vec2::new(400.0, 6.0),
        );
        assert!(controls.update(&mut camera, &mut object));

        let distance = camera.position.distance(controls.target());
        assert!((distance - 240.0).abs() < 1e-4, "distance {distance}");
    }

    #[test]
    fn zoom_out_clamps_to_max_distance() {
        let (mut controls, mut camera, mut object) = setup();
        controls.options.damping.static_moving = true;
        controls.options.distance.max = 700.0;

        drag(
            &mut controls,
            &camera,
            MouseButton::Middle,
            Vec2::new(400.0, 100.0),
            Vec2::new(400.0, 500.0),
        );
        let _ = controls.update(&mut camera, &mut object);

        assert!((camera.position.length() - 700.0).abs() < 1e-3);
        let p = controls.control_points();
        assert_eq!(p.zoom_start, p.zoom_end);
    }

    #[test]
    fn inverted_limits_still_bound_the_distance() {
        let (mut controls, mut camera, mut object) = setup();
        controls.options.distance.min = 300.0;
        controls.options.distance.max = 100.0;

        let _ = controls.update(&mut camera, &mut object);
        assert!((camera.position.length() - 300.0).abs() < 1e-3);
    }

    #[test]
    fn limits_ignored_when_zoom_and_pan_disabled() {
        let (mut controls, mut camera, mut object) = setup();
        controls.options.interaction.no_zoom = true;
        controls.options.interaction.no_pan = true;
        controls.options.distance.max = 100.0;

        assert!(!controls.update(&mut camera, &mut object));
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 600.0));
    }

    #[test]
    fn wheel_zoom_decays_with_damping() {
        let (mut controls, mut camera, mut object) = setup();
        let _ = controls.handle_event(
            &InputEvent::Wheel {
                delta: WheelDelta::Wheel(120.0),
            },
            &camera,
        );

        let mut previous = camera.position.length();
        assert!(controls.update(&mut camera, &mut object));
        let first = previous - camera.position.length();
        assert!(first > 0.0, "positive wheel delta zooms in");
        previous = camera.position.length();

        let _ = controls.update(&mut camera, &mut object);
        let second = previous - camera.position.length();
        assert!(second.abs() < first.abs());
    }

    #[test]
    fn static_pan_moves_camera_and_target_together() {
        let (mut controls, mut camera, mut object) = setup();
        controls.options.damping.static_moving = true;

        drag(
            &mut controls,
            &camera,
            MouseButton::Right,
            Vec2::new(400.0, 300.0),
            Vec2::new(480.0, 300.0),
        );
        assert!(controls.update(&mut camera, &mut object));

        // 0.1 of the width at distance 600 and pan speed 0.3.
        assert!(controls.target().abs_diff_eq(Vec3::new(-18.0, 0.0, 0.0), 1e-3));
        assert!((camera.position.distance(controls.target()) - 600.0).abs() < 1e-3);
        let p = controls.control_points();
        assert_eq!(p.pan_start, p.pan_end);

        assert!(!controls.update(&mut camera, &mut object));
    }

    #[test]
    fn damped_pan_keeps_drifting_after_release() {
        let (mut controls, mut camera, mut object) = setup();
        let damping = controls.options.damping.camera;

        drag(
            &mut controls,
            &camera,
            MouseButton::Right,
            Vec2::new(400.0, 300.0),
            Vec2::new(480.0, 300.0),
        );
        let gap = |c: &TrackballController| {
            let p = c.control_points();
            p.pan_end.x - p.pan_start.x
        };

        let mut previous_gap = gap(&controls);
        assert!(controls.update(&mut camera, &mut object));
        let mut previous_x = controls.target().x;
        assert!(previous_x < 0.0);
        let _ = controls.handle_event(
            &InputEvent::Release {
                button: MouseButton::Right,
            },
            &camera,
        );

        for _ in 0..5 {
            let current_gap = gap(&controls);
            assert!((current_gap - previous_gap * (1.0 - damping)).abs() < 1e-5);
            previous_gap = current_gap;

            assert!(controls.update(&mut camera, &mut object));
            let x = controls.target().x;
            assert!(x < previous_x, "target stopped at {x}");
            previous_x = x;
        }
        assert_eq!(controls.target().y, 0.0);
    }

    #[test]
    fn vertical_pan_follows_camera_up() {
        let (mut controls, mut camera, mut object) = setup();
        controls.options.damping.static_moving = true;

        drag(
            &mut controls,
            &camera,
            MouseButton::Right,
            Vec2::new(400.0, 300.0),
            Vec2::new(400.0, 360.0),
        );
        let _ = controls.update(&mut camera, &mut object);

        // 0.1 of the height, dragged down: the view slides up.
        assert!(controls.target().abs_diff_eq(Vec3::new(0.0, 18.0, 0.0), 1e-3));
    }

    #[test]
    fn distance_stays_within_limits_under_random_input() {
        let (mut controls, mut camera, mut object) = setup();
        controls.options.interaction.rotation_target =
            crate::options::RotationTarget::Camera;
        controls.options.distance.min = 200.0;
        controls.options.distance.max = 800.0;
        let mut rng = StdRng::seed_from_u64(0x7eac_ba11);

        for _ in 0..500 {
            let event = match rng.random_range(0..5) {
                0 => InputEvent::Press {
                    button: MouseButton::from_code(rng.random_range(0..3)),
                    x: rng.random_range(0.0..800.0),
                    y: rng.random_range(0.0..600.0),
                },
                1 | 2 => InputEvent::Move {
                    x: rng.random_range(0.0..800.0),
                    y: rng.random_range(0.0..600.0),
                },
                3 => InputEvent::Release {
                    button: MouseButton::Left,
                },
                _ => InputEvent::Wheel {
                    delta: WheelDelta::Wheel(rng.random_range(-480.0..480.0)),
                },
            };
            let _ = controls.handle_event(&event, &camera);
            let _ = controls.update(&mut camera, &mut object);

            let distance = camera.position.distance(controls.target());
            assert!(
                (199.9..=800.1).contains(&distance),
                "distance {distance} escaped the limits"
            );
            assert!(camera.position.is_finite());
        }
    }
}
