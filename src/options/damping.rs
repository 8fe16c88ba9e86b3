use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Damping", inline)]
#[serde(default)]
/// Inertia settings.
///
/// With `static_moving` the control points snap to the latest input each
/// frame. Otherwise the start point chases the end point by the given factor,
/// so motion decays over several frames after the pointer stops.
pub struct DampingOptions {
    /// Disable inertia entirely.
    #[schemars(title = "Static Moving")]
    pub static_moving: bool,
    /// Per-frame blend for camera rotation, zoom, and pan.
    #[schemars(title = "Camera Damping", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub camera: f32,
    /// Per-frame blend for object rotation.
    #[schemars(title = "Object Damping", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub object: f32,
    /// Per-call blend used by
    /// [`reset_with_fade`](crate::controls::TrackballController::reset_with_fade).
    #[schemars(title = "Reset Fade", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub fade: f32,
}

impl Default for DampingOptions {
    fn default() -> Self {
        Self {
            static_moving: false,
            camera: 0.2,
            object: 0.08,
            fade: 0.1,
        }
    }
}
