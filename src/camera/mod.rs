//! Host-side camera type driven by the trackball controller.

/// Camera pose and look-at helper.
pub mod core;

pub use self::core::Camera;
