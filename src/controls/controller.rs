use glam::{Quat, Vec3};

use super::events::{ControlEvent, ListenerId, Listeners};
use super::screen::ScreenRect;
use super::state::{ControlPoints, InteractionState};
use crate::camera::Camera;
use crate::options::Options;
use crate::scene::SceneObject;

/// Squared distance (and quaternion dot deficit) below which motion is not
/// reported as a change.
pub(super) const EPS: f32 = 0.000_001;

/// Construction-time state restored by [`TrackballController::reset`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Baseline {
    pub(super) target: Vec3,
    pub(super) camera_position: Vec3,
    pub(super) camera_up: Vec3,
    pub(super) object_position: Vec3,
    pub(super) object_up: Vec3,
    pub(super) object_orientation: Quat,
}

/// Trackball controller orbiting a camera around a target point, or rotating
/// a single object in place.
///
/// The controller owns the orbit target, the interaction state machine, and
/// the gesture control points. The camera and object stay with the host and
/// are borrowed only for the duration of [`update`](Self::update),
/// [`reset`](Self::reset), and [`reset_with_fade`](Self::reset_with_fade).
///
/// # Frame loop
///
/// 1. Forward input with [`handle_event`](Self::handle_event). Handlers only
///    move control points and switch modes.
/// 2. Call [`update`](Self::update) exactly once per rendered frame. Calling
///    it more often speeds up inertia decay.
/// 3. Re-render when `update` returns `true` (or on
///    [`ControlEvent::Change`]).
#[derive(Debug)]
pub struct TrackballController {
    /// Live configuration, read at the start of every computation.
    pub options: Options,
    pub(super) screen: ScreenRect,
    pub(super) target: Vec3,
    pub(super) baseline: Baseline,
    pub(super) state: InteractionState,
    pub(super) prev_state: InteractionState,
    pub(super) points: ControlPoints,
    pub(super) last_camera_position: Vec3,
    pub(super) last_object_position: Vec3,
    pub(super) last_object_orientation: Quat,
    listeners: Listeners,
}

impl TrackballController {
    /// Create a controller orbiting `target` and snapshot the camera, object,
    /// and target for [`reset`](Self::reset).
    ///
    /// The camera is turned to face the target immediately. The screen
    /// starts empty; call [`handle_resize`](Self::handle_resize) before
    /// forwarding input.
    pub fn new(camera: &mut Camera, object: &SceneObject, target: Vec3) -> Self {
        camera.look_at(target);
        Self {
            options: Options::default(),
            screen: ScreenRect::default(),
            target,
            baseline: Baseline {
                target,
                camera_position: camera.position,
                camera_up: camera.up,
                object_position: object.position,
                object_up: object.up,
                object_orientation: object.orientation,
            },
            state: InteractionState::Idle,
            prev_state: InteractionState::Idle,
            points: ControlPoints::default(),
            last_camera_position: camera.position,
            last_object_position: object.position,
            last_object_orientation: object.orientation,
            listeners: Listeners::default(),
        }
    }

    /// Replace the options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Replace the screen rectangle.
    #[must_use]
    pub fn with_screen(mut self, screen: ScreenRect) -> Self {
        self.set_screen(screen);
        self
    }

    /// Current orbit target.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Target captured at construction.
    #[must_use]
    pub fn initial_target(&self) -> Vec3 {
        self.baseline.target
    }

    /// Active interaction mode.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Mode active before the most recent transition.
    #[must_use]
    pub fn previous_state(&self) -> InteractionState {
        self.prev_state
    }

    /// Gesture control points.
    #[must_use]
    pub fn control_points(&self) -> &ControlPoints {
        &self.points
    }

    /// Input surface used to normalize pointer coordinates.
    #[must_use]
    pub fn screen(&self) -> ScreenRect {
        self.screen
    }

    /// Recompute the screen rectangle from the viewport size. Call whenever
    /// the host surface resizes.
    pub fn handle_resize(&mut self, width: f32, height: f32) {
        self.set_screen(ScreenRect::from_size(width, height));
    }

    /// Set a screen rectangle whose origin is not the page origin.
    pub fn set_screen(&mut self, screen: ScreenRect) {
        if screen.is_degenerate() {
            log::warn!(
                "trackball screen is degenerate ({}x{}), pointer input will \
                 be ignored",
                screen.width,
                screen.height
            );
        }
        self.screen = screen;
    }

    /// Register a notification callback.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(ControlEvent) + 'static,
    ) -> ListenerId {
        self.listeners.subscribe(Box::new(listener))
    }

    /// Remove a callback. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub(super) fn emit(&mut self, event: ControlEvent) {
        self.listeners.emit(event);
    }

    pub(super) fn set_state(&mut self, next: InteractionState) {
        if next != self.state {
            log::debug!("trackball state {:?} -> {:?}", self.state, next);
        }
        self.prev_state = self.state;
        self.state = next;
    }

    /// Return to idle and drop any pending inertia.
    ///
    /// Disabling the controller through `options.interaction.enabled` leaves
    /// an in-flight gesture untouched, so re-enabling resumes it. Hosts that
    /// want a clean stop call this alongside disabling.
    pub fn cancel_motion(&mut self) {
        self.set_state(InteractionState::Idle);
        self.points.settle();
    }

    /// Advance one frame: apply rotation, zoom, and pan (each unless
    /// disabled), clamp the orbit distance, then place the camera at
    /// `target + eye` looking at the target.
    ///
    /// Returns `true` and emits [`ControlEvent::Change`] when the camera or
    /// object moved since the last reported change.
    pub fn update(&mut self, camera: &mut Camera, object: &mut SceneObject) -> bool {
        let mut eye = camera.position - self.target;
        let interaction = self.options.interaction;

        if !interaction.no_rotate {
            if interaction.moves_camera() {
                self.rotate_camera(&mut eye, camera);
            } else {
                self.rotate_object(object);
            }
        }

        if !interaction.no_zoom {
            self.zoom_camera(&mut eye);
        }

        if !interaction.no_pan {
            self.pan_camera(eye, camera);
        }

        self.check_distances(&mut eye);

        camera.position = self.target + eye;
        camera.look_at(self.target);
        log::trace!(
            "trackball frame: state={:?} distance={:.3}",
            self.state,
            eye.length()
        );

        self.report_change(camera, object)
    }

    /// Restore camera, target, and object to their construction-time state,
    /// return to idle, and emit [`ControlEvent::Change`].
    pub fn reset(&mut self, camera: &mut Camera, object: &mut SceneObject) {
        self.set_state(InteractionState::Idle);
        self.prev_state = InteractionState::Idle;
        self.points.settle();

        let baseline = self.baseline;
        self.target = baseline.target;
        object.position = baseline.object_position;
        object.up = baseline.object_up;
        object.orientation = baseline.object_orientation;
        camera.position = baseline.camera_position;
        camera.up = baseline.camera_up;
        camera.look_at(self.target);
        log::debug!("trackball reset to target {}", self.target);

        self.emit(ControlEvent::Change);
        self.remember(camera, object);
    }

    /// Emit a change if the camera or object drifted past [`EPS`] since the
    /// last reported change.
    pub(super) fn report_change(
        &mut self,
        camera: &Camera,
        object: &SceneObject,
    ) -> bool {
        let camera_moved = self
            .last_camera_position
            .distance_squared(camera.position)
            > EPS;
        let object_moved = self
            .last_object_position
            .distance_squared(object.position)
            > EPS
            || 1.0 - self.last_object_orientation.dot(object.orientation).abs()
                > EPS;

        if !(camera_moved || object_moved) {
            return false;
        }
        self.emit(ControlEvent::Change);
        self.remember(camera, object);
        true
    }

    fn remember(&mut self, camera: &Camera, object: &SceneObject) {
        self.last_camera_position = camera.position;
        self.last_object_position = object.position;
        self.last_object_orientation = object.orientation;
    }
}
