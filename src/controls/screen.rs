//! Pointer normalization and trackball projection.

use std::f32::consts::FRAC_1_SQRT_2;

use glam::{Vec2, Vec3};

use crate::util::vector::with_length;

/// Input surface in page pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenRect {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl ScreenRect {
    /// Rectangle with an explicit origin.
    #[must_use]
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Rectangle anchored at the page origin.
    #[must_use]
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// True when either dimension is zero, negative, or NaN. Pointer
    /// normalization on such a rectangle yields non-finite points, which the
    /// engines skip.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Map page coordinates to `[0, 1]` across the rectangle (y grows down).
    #[must_use]
    pub fn normalize(&self, page: Vec2) -> Vec2 {
        Vec2::new(
            (page.x - self.left) / self.width,
            (page.y - self.top) / self.height,
        )
    }

    /// Project page coordinates onto the virtual trackball.
    ///
    /// `x` and `y` are centered on the rectangle and scaled to `[-1, 1]`,
    /// with `y` pointing up. With `no_roll` the point is lifted onto the
    /// sphere near the center and onto the hyperbolic sheet `z = 0.5 / r`
    /// past `r = sqrt(0.5)`, which keeps rotation axes away from the view
    /// direction. Otherwise points outside the unit disk are pulled onto the
    /// rim (`z = 0`), allowing roll about the view axis.
    #[must_use]
    pub fn project_on_ball(&self, page: Vec2, no_roll: bool) -> Vec3 {
        let half_width = self.width * 0.5;
        let half_height = self.height * 0.5;
        let mut ball = Vec3::new(
            (page.x - half_width - self.left) / half_width,
            (half_height + self.top - page.y) / half_height,
            0.0,
        );
        let length = ball.length();

        if no_roll {
            ball.z = if length < FRAC_1_SQRT_2 {
                (1.0 - length * length).sqrt()
            } else {
                0.5 / length
            };
        } else if length > 1.0 {
            ball = ball.normalize();
        } else {
            ball.z = (1.0 - length * length).sqrt();
        }

        ball
    }
}

/// Express a ball-space point in the camera's world-space basis: `y` along
/// `up`, `x` along `up x eye`, `z` along `eye`.
#[must_use]
pub fn ball_to_camera_basis(ball: Vec3, up: Vec3, eye: Vec3) -> Vec3 {
    with_length(up, ball.y)
        + with_length(up.cross(eye), ball.x)
        + with_length(eye, ball.z)
}
