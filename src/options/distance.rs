use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Distance", inline)]
#[serde(default)]
/// Camera-to-target distance limits, enforced while zoom or pan is enabled.
pub struct DistanceOptions {
    /// Closest allowed orbit distance.
    #[schemars(title = "Min Distance", range(min = 0.0), extend("step" = 1.0))]
    pub min: f32,
    /// Farthest allowed orbit distance (`inf` for unbounded).
    #[schemars(title = "Max Distance", range(min = 0.0), extend("step" = 1.0))]
    pub max: f32,
}

impl Default for DistanceOptions {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: f32::INFINITY,
        }
    }
}

impl DistanceOptions {
    /// Bounds as `(low, high)`. Inverted limits are swapped.
    #[must_use]
    pub fn bounds(&self) -> (f32, f32) {
        if self.min > self.max {
            (self.max, self.min)
        } else {
            (self.min, self.max)
        }
    }
}
