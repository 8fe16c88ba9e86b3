use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which entity receives trackball rotation.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RotationTarget {
    /// Rotate the scene object in its own trackball space; the camera only
    /// zooms and pans.
    #[default]
    Object,
    /// Orbit the camera around the target point.
    Camera,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Interaction", inline)]
#[serde(default)]
/// Input gating and rotation mode.
#[allow(clippy::struct_excessive_bools)]
pub struct InteractionOptions {
    /// Master switch; when false every input handler is a no-op.
    #[schemars(title = "Enabled")]
    pub enabled: bool,
    /// Entity rotated by drag gestures.
    #[schemars(title = "Rotate")]
    pub rotation_target: RotationTarget,
    /// Disable rotation (input capture and per-frame update).
    #[schemars(title = "Lock Rotation")]
    pub no_rotate: bool,
    /// Disable zoom (input capture and per-frame update).
    #[schemars(title = "Lock Zoom")]
    pub no_zoom: bool,
    /// Disable pan (input capture and per-frame update).
    #[schemars(title = "Lock Pan")]
    pub no_pan: bool,
    /// Disable roll about the view axis at the rim of the trackball.
    #[schemars(title = "No Roll")]
    pub no_roll: bool,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            rotation_target: RotationTarget::Object,
            no_rotate: false,
            no_zoom: false,
            no_pan: false,
            no_roll: false,
        }
    }
}

impl InteractionOptions {
    /// Whether rotation is applied to the camera orbit.
    #[must_use]
    pub fn moves_camera(self) -> bool {
        self.rotation_target == RotationTarget::Camera
    }
}
