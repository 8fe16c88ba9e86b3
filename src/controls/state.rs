use glam::{Vec2, Vec3};

use crate::input::MouseButton;

/// Active interaction mode.
///
/// Only press, release, and touch-count changes move between modes; pointer
/// motion never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Primary-button drag rotating the camera orbit or the object.
    Rotate,
    /// Middle-button drag zooming along the eye vector.
    Zoom,
    /// Secondary-button drag panning camera and target together.
    Pan,
    /// Single-finger drag rotating.
    TouchRotate,
    /// Two-finger pinch zooming and midpoint drag panning.
    TouchZoomPan,
}

impl InteractionState {
    /// Mode entered when `button` is pressed while idle.
    #[must_use]
    pub fn from_button(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Self::Rotate,
            MouseButton::Middle => Self::Zoom,
            MouseButton::Right => Self::Pan,
            MouseButton::Other(_) => Self::Idle,
        }
    }

    /// Whether this mode was entered from a touch gesture.
    #[must_use]
    pub fn is_touch(self) -> bool {
        matches!(self, Self::TouchRotate | Self::TouchZoomPan)
    }
}

/// Start/end pairs consumed by the per-frame engines.
///
/// Input handlers write these; `update` reads them and advances each start
/// point toward its end point (immediately when moving statically, otherwise
/// by the damping factor).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlPoints {
    /// Trackball point where the rotate drag started (or has decayed to).
    pub rotate_start: Vec3,
    /// Latest trackball point of the rotate drag.
    pub rotate_end: Vec3,
    /// Normalized screen point where the zoom drag started.
    pub zoom_start: Vec2,
    /// Latest normalized screen point of the zoom drag.
    pub zoom_end: Vec2,
    /// Normalized screen point where the pan drag started.
    pub pan_start: Vec2,
    /// Latest normalized screen point of the pan drag.
    pub pan_end: Vec2,
    /// Pinch distance in pixels already consumed by zoom.
    pub touch_zoom_distance_start: f32,
    /// Latest pinch distance in pixels.
    pub touch_zoom_distance_end: f32,
}

impl ControlPoints {
    /// Snap every start point onto its end point and clear the pinch, so the
    /// next frame applies no residual motion.
    pub fn settle(&mut self) {
        self.rotate_start = self.rotate_end;
        self.zoom_start = self.zoom_end;
        self.pan_start = self.pan_end;
        self.touch_zoom_distance_start = 0.0;
        self.touch_zoom_distance_end = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_map_to_modes() {
        assert_eq!(
            InteractionState::from_button(MouseButton::Left),
            InteractionState::Rotate
        );
        assert_eq!(
            InteractionState::from_button(MouseButton::Middle),
            InteractionState::Zoom
        );
        assert_eq!(
            InteractionState::from_button(MouseButton::Right),
            InteractionState::Pan
        );
        assert_eq!(
            InteractionState::from_button(MouseButton::Other(3)),
            InteractionState::Idle
        );
        assert!(InteractionState::TouchZoomPan.is_touch());
        assert!(!InteractionState::Pan.is_touch());
    }

    #[test]
    fn settle_snaps_starts_to_ends() {
        let mut points = ControlPoints {
            rotate_end: Vec3::X,
            zoom_end: Vec2::new(0.2, 0.4),
            pan_end: Vec2::new(0.6, 0.1),
            touch_zoom_distance_start: 40.0,
            touch_zoom_distance_end: 80.0,
            ..ControlPoints::default()
        };
        points.settle();
        assert_eq!(points.rotate_start, Vec3::X);
        assert_eq!(points.zoom_start, points.zoom_end);
        assert_eq!(points.pan_start, points.pan_end);
        assert_eq!(points.touch_zoom_distance_start, 0.0);
        assert_eq!(points.touch_zoom_distance_end, 0.0);
    }
}
