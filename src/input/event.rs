use glam::Vec2;

/// Platform-agnostic input events.
///
/// Hosts translate their native pointer, wheel, and touch events into these
/// and feed them to
/// [`TrackballController::handle_event`](crate::controls::TrackballController::handle_event).
/// Coordinates are page pixels, the same space as the controller's
/// [`ScreenRect`](crate::controls::ScreenRect).
///
/// # Example
///
/// ```ignore
/// controls.handle_event(
///     &InputEvent::Press { button: MouseButton::Left, x: 100.0, y: 200.0 },
///     &camera,
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button pressed at a position.
    Press {
        /// Which button went down.
        button: MouseButton,
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// Pointer moved to an absolute position.
    Move {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// Mouse button released.
    Release {
        /// Which button went up.
        button: MouseButton,
    },
    /// Scroll wheel step.
    Wheel {
        /// Raw delta in the convention reported by the device.
        delta: WheelDelta,
    },
    /// One or more fingers touched down. Carries every active touch.
    TouchStart {
        /// All touches currently on the surface.
        touches: Vec<Vec2>,
    },
    /// Active touches moved. Carries every active touch.
    TouchMove {
        /// All touches currently on the surface.
        touches: Vec<Vec2>,
    },
    /// One or more fingers lifted. Carries the touches that remain.
    TouchEnd {
        /// Touches still on the surface after the lift.
        touches: Vec<Vec2>,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button. Rotates.
    Left,
    /// Middle mouse button (wheel click). Zooms.
    Middle,
    /// Secondary (right) mouse button. Pans.
    Right,
    /// Any other button, identified by its platform code. Ignored.
    Other(u16),
}

impl MouseButton {
    /// Map a DOM-style button code (0 = left, 1 = middle, 2 = right).
    #[must_use]
    pub fn from_code(code: u16) -> Self {
        match code {
            0 => Self::Left,
            1 => Self::Middle,
            2 => Self::Right,
            other => Self::Other(other),
        }
    }
}

/// Scroll amount in one of the two common device conventions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelDelta {
    /// Wheel units, 120 per notch, positive when scrolling up/away.
    Wheel(f32),
    /// Line detail, 3 per notch, positive when scrolling down/toward.
    Detail(f32),
}

impl WheelDelta {
    /// Normalize to a signed step, positive when scrolling away from the
    /// user. Wheel units divide by 40 (3 per notch); line detail divides by
    /// 3 (1 per notch).
    #[must_use]
    pub fn normalized(self) -> f32 {
        match self {
            Self::Wheel(delta) => delta / 40.0,
            Self::Detail(detail) => -detail / 3.0,
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Middle => Self::Middle,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Back => Self::Other(3),
            winit::event::MouseButton::Forward => Self::Other(4),
            winit::event::MouseButton::Other(code) => Self::Other(code),
        }
    }
}
