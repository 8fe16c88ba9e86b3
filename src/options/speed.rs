use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Speed", inline)]
#[serde(default)]
/// Gesture sensitivity multipliers. Negative values are honored as given.
pub struct SpeedOptions {
    /// Multiplier applied to the trackball rotation angle.
    #[schemars(title = "Rotate Speed", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub rotate: f32,
    /// Multiplier applied to vertical zoom drag.
    #[schemars(title = "Zoom Speed", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub zoom: f32,
    /// Multiplier applied to pan drag, relative to orbit distance.
    #[schemars(title = "Pan Speed", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub pan: f32,
}

impl Default for SpeedOptions {
    fn default() -> Self {
        Self {
            rotate: 1.0,
            zoom: 1.2,
            pan: 0.3,
        }
    }
}
