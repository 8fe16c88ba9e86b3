use ::winit::dpi::PhysicalPosition;
use ::winit::event::{
    ElementState, MouseScrollDelta, TouchPhase, WindowEvent,
};
use glam::Vec2;

use super::event::{InputEvent, MouseButton, WheelDelta};

/// Wheel units reported per `winit` scroll line.
const WHEEL_UNITS_PER_LINE: f32 = 120.0;

/// Stateful translator from `winit` window events to [`InputEvent`]s.
///
/// `winit` reports button presses without a position and touches one finger
/// at a time, so this tracks the last cursor position and the set of active
/// touches (in touch-down order) to fill in what the controller expects.
#[derive(Debug, Default)]
pub struct WinitInput {
    cursor: Vec2,
    touches: Vec<(u64, Vec2)>,
}

impl WinitInput {
    /// Create a translator with no cursor history and no active touches.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate a window event. Returns `None` for events the trackball
    /// does not consume (including `Resized`, which hosts forward to
    /// [`handle_resize`](crate::controls::TrackballController::handle_resize)
    /// directly).
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(self.cursor_moved(*position))
            }
            WindowEvent::MouseInput { state, button, .. } => Some(
                self.mouse_input(*state == ElementState::Pressed, (*button).into()),
            ),
            WindowEvent::MouseWheel { delta, .. } => Some(Self::wheel(*delta)),
            WindowEvent::Touch(touch) => {
                Some(self.touch(touch.id, touch.phase, touch.location))
            }
            _ => None,
        }
    }

    /// Number of touches currently tracked.
    #[must_use]
    pub fn active_touches(&self) -> usize {
        self.touches.len()
    }

    fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> InputEvent {
        self.cursor = to_vec2(position);
        InputEvent::Move {
            x: self.cursor.x,
            y: self.cursor.y,
        }
    }

    fn mouse_input(&self, pressed: bool, button: MouseButton) -> InputEvent {
        if pressed {
            InputEvent::Press {
                button,
                x: self.cursor.x,
                y: self.cursor.y,
            }
        } else {
            InputEvent::Release { button }
        }
    }

    fn wheel(delta: MouseScrollDelta) -> InputEvent {
        let units = match delta {
            MouseScrollDelta::LineDelta(_, y) => y * WHEEL_UNITS_PER_LINE,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
        };
        InputEvent::Wheel {
            delta: WheelDelta::Wheel(units),
        }
    }

    fn touch(
        &mut self,
        id: u64,
        phase: TouchPhase,
        location: PhysicalPosition<f64>,
    ) -> InputEvent {
        let point = to_vec2(location);
        match phase {
            TouchPhase::Started => {
                self.touches.retain(|(tid, _)| *tid != id);
                self.touches.push((id, point));
                InputEvent::TouchStart {
                    touches: self.points(),
                }
            }
            TouchPhase::Moved => {
                if let Some(entry) =
                    self.touches.iter_mut().find(|(tid, _)| *tid == id)
                {
                    entry.1 = point;
                }
                InputEvent::TouchMove {
                    touches: self.points(),
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.touches.retain(|(tid, _)| *tid != id);
                InputEvent::TouchEnd {
                    touches: self.points(),
                }
            }
        }
    }

    fn points(&self) -> Vec<Vec2> {
        self.touches.iter().map(|(_, p)| *p).collect()
    }
}

fn to_vec2(position: PhysicalPosition<f64>) -> Vec2 {
    Vec2::new(position.x as f32, position.y as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_uses_last_cursor_position() {
        let mut input = WinitInput::new();
        let _ = input.cursor_moved(PhysicalPosition::new(120.0, 48.0));
        assert_eq!(
            input.mouse_input(true, MouseButton::Right),
            InputEvent::Press {
                button: MouseButton::Right,
                x: 120.0,
                y: 48.0
            }
        );
        assert_eq!(
            input.mouse_input(false, MouseButton::Right),
            InputEvent::Release {
                button: MouseButton::Right
            }
        );
    }

    #[test]
    fn one_line_scroll_is_one_wheel_notch() {
        let event = WinitInput::wheel(MouseScrollDelta::LineDelta(0.0, 1.0));
        assert_eq!(
            event,
            InputEvent::Wheel {
                delta: WheelDelta::Wheel(120.0)
            }
        );
    }

    #[test]
    fn touches_are_tracked_until_lifted() {
        let mut input = WinitInput::new();
        let _ = input.touch(7, TouchPhase::Started, PhysicalPosition::new(10.0, 10.0));
        let second =
            input.touch(9, TouchPhase::Started, PhysicalPosition::new(30.0, 50.0));
        assert_eq!(
            second,
            InputEvent::TouchStart {
                touches: vec![Vec2::new(10.0, 10.0), Vec2::new(30.0, 50.0)]
            }
        );

        let moved =
            input.touch(7, TouchPhase::Moved, PhysicalPosition::new(12.0, 14.0));
        assert_eq!(
            moved,
            InputEvent::TouchMove {
                touches: vec![Vec2::new(12.0, 14.0), Vec2::new(30.0, 50.0)]
            }
        );

        let lifted =
            input.touch(7, TouchPhase::Ended, PhysicalPosition::new(12.0, 14.0));
        assert_eq!(
            lifted,
            InputEvent::TouchEnd {
                touches: vec![Vec2::new(30.0, 50.0)]
            }
        );
        assert_eq!(input.active_touches(), 1);
    }
}
