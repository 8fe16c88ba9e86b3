use glam::{Vec2, Vec3};

use super::controller::TrackballController;
use super::events::ControlEvent;
use super::screen::ball_to_camera_basis;
use super::state::InteractionState;
use crate::camera::Camera;
use crate::input::{InputEvent, MouseButton, WheelDelta};
use crate::options::InteractionOptions;

/// Scale from a normalized wheel step to zoom drag units.
const WHEEL_ZOOM_STEP: f32 = 0.01;

fn midpoint(a: Vec2, b: Vec2) -> Vec2 {
    (a + b) * 0.5
}

impl TrackballController {
    /// Route one input event to its handler.
    ///
    /// Handlers only record control points and switch modes; the camera is
    /// borrowed to orient trackball points when rotating the camera orbit.
    /// Nothing moves until the next [`update`](Self::update).
    ///
    /// Returns `false` when the event was ignored (controller disabled, or a
    /// wheel step while zoom is off).
    pub fn handle_event(&mut self, event: &InputEvent, camera: &Camera) -> bool {
        if !self.options.interaction.enabled {
            return false;
        }

        match event {
            InputEvent::Press { button, x, y } => {
                self.on_press(*button, Vec2::new(*x, *y), camera);
            }
            InputEvent::Move { x, y } => self.on_move(Vec2::new(*x, *y), camera),
            InputEvent::Release { .. } => self.on_release(),
            InputEvent::Wheel { delta } => return self.on_wheel(*delta),
            InputEvent::TouchStart { touches } => self.on_touch_start(touches, camera),
            InputEvent::TouchMove { touches } => self.on_touch_move(touches, camera),
            InputEvent::TouchEnd { touches } => self.on_touch_end(touches, camera),
        }
        true
    }

    /// Trackball point under `page`, in world space when the camera orbits.
    fn ball_point(&self, page: Vec2, camera: &Camera) -> Vec3 {
        let ball = self
            .screen
            .project_on_ball(page, self.options.interaction.no_roll);
        if self.options.interaction.moves_camera() {
            ball_to_camera_basis(ball, camera.up, camera.position - self.target)
        } else {
            ball
        }
    }

    fn on_press(&mut self, button: MouseButton, page: Vec2, camera: &Camera) {
        if self.state == InteractionState::Idle {
            self.set_state(InteractionState::from_button(button));
        }

        let interaction = &self.options.interaction;
        match self.state {
            InteractionState::Rotate if !interaction.no_rotate => {
                self.points.rotate_end = self.ball_point(page, camera);
                self.points.rotate_start = self.points.rotate_end;
            }
            InteractionState::Zoom if !interaction.no_zoom => {
                self.points.zoom_end = self.screen.normalize(page);
                self.points.zoom_start = self.points.zoom_end;
            }
            InteractionState::Pan if !interaction.no_pan => {
                self.points.pan_end = self.screen.normalize(page);
                self.points.pan_start = self.points.pan_end;
            }
            _ => {}
        }

        self.emit(ControlEvent::Start);
    }

    fn on_move(&mut self, page: Vec2, camera: &Camera) {
        let interaction = &self.options.interaction;
        match self.state {
            InteractionState::Rotate if !interaction.no_rotate => {
                self.points.rotate_end = self.ball_point(page, camera);
            }
            InteractionState::Zoom if !interaction.no_zoom => {
                self.points.zoom_end = self.screen.normalize(page);
            }
            InteractionState::Pan if !interaction.no_pan => {
                self.points.pan_end = self.screen.normalize(page);
            }
            _ => {}
        }
    }

    fn on_release(&mut self) {
        self.set_state(InteractionState::Idle);
        self.emit(ControlEvent::End);
    }

    fn on_wheel(&mut self, delta: WheelDelta) -> bool {
        let step = delta.normalized();
        if self.options.interaction.no_zoom || !step.is_finite() {
            return false;
        }

        self.points.zoom_start.y += step * WHEEL_ZOOM_STEP;
        self.emit(ControlEvent::Start);
        self.emit(ControlEvent::End);
        true
    }

    fn on_touch_start(&mut self, touches: &[Vec2], camera: &Camera) {
        let InteractionOptions {
            no_rotate,
            no_zoom,
            no_pan,
            ..
        } = self.options.interaction;
        match touches {
            [touch] => {
                self.set_state(InteractionState::TouchRotate);
                if !no_rotate {
                    self.points.rotate_end = self.ball_point(*touch, camera);
                    self.points.rotate_start = self.points.rotate_end;
                }
            }
            [first, second] => {
                self.set_state(InteractionState::TouchZoomPan);
                if !no_zoom {
                    let distance = first.distance(*second);
                    self.points.touch_zoom_distance_start = distance;
                    self.points.touch_zoom_distance_end = distance;
                }
                if !no_pan {
                    self.points.pan_end = self.screen.normalize(midpoint(*first, *second));
                    self.points.pan_start = self.points.pan_end;
                }
            }
            _ => self.set_state(InteractionState::Idle),
        }

        self.emit(ControlEvent::Start);
    }

    fn on_touch_move(&mut self, touches: &[Vec2], camera: &Camera) {
        let InteractionOptions {
            no_rotate,
            no_zoom,
            no_pan,
            ..
        } = self.options.interaction;
        match (self.state, touches) {
            (InteractionState::TouchRotate, [touch]) => {
                if !no_rotate {
                    self.points.rotate_end = self.ball_point(*touch, camera);
                }
            }
            (InteractionState::TouchZoomPan, [first, second]) => {
                if !no_zoom {
                    self.points.touch_zoom_distance_end = first.distance(*second);
                }
                if !no_pan {
                    self.points.pan_end = self.screen.normalize(midpoint(*first, *second));
                }
            }
            _ => self.set_state(InteractionState::Idle),
        }
    }

    /// `touches` holds the fingers still on the surface.
    fn on_touch_end(&mut self, touches: &[Vec2], camera: &Camera) {
        match touches {
            [touch] => {
                self.points.rotate_end = self.ball_point(*touch, camera);
                self.points.rotate_start = self.points.rotate_end;
            }
            [first, second] => {
                self.points.touch_zoom_distance_start = 0.0;
                self.points.touch_zoom_distance_end = 0.0;
                self.points.pan_end = self.screen.normalize(midpoint(*first, *second));
                self.points.pan_start = self.points.pan_end;
            }
            [] if self.state == InteractionState::TouchZoomPan => {
                self.points.touch_zoom_distance_start = 0.0;
                self.points.touch_zoom_distance_end = 0.0;
                self.points.pan_start = self.points.pan_end;
            }
            _ => {}
        }

        self.set_state(InteractionState::Idle);
        self.emit(ControlEvent::End);
    }
}
