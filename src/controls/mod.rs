//! Trackball controller: input state machine plus the per-frame rotate,
//! zoom, and pan engines.
//!
//! The controller is split across files by concern, each adding an `impl`
//! block to [`TrackballController`]:
//!
//! - `controller`: construction, accessors, `update`, and `reset`
//! - `input`: event routing and gesture capture
//! - `rotate`: trackball rotation of the camera orbit or the object
//! - `motion`: zoom, pan, and the orbit distance clamp
//! - `fade`: animated reset toward the construction-time snapshot

mod controller;
mod events;
mod fade;
mod input;
mod motion;
mod rotate;
mod screen;
mod state;

pub use controller::TrackballController;
pub use events::{ControlEvent, ListenerId};
pub use screen::{ball_to_camera_basis, ScreenRect};
pub use state::{ControlPoints, InteractionState};
