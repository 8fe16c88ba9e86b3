//! Input vocabulary consumed by the controller, plus an optional `winit`
//! adapter that produces it from window events.

/// Platform-agnostic input events.
pub mod event;
/// Translates `winit` window events into [`InputEvent`]s.
#[cfg(feature = "viewer")]
pub mod winit;

pub use event::{InputEvent, MouseButton, WheelDelta};
