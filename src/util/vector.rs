//! Small vector helpers shared by the trackball engines.

use glam::Vec3;

/// Rescale `v` to `length`, keeping its direction.
///
/// A negative `length` flips the direction. A zero vector stays zero.
#[inline]
#[must_use]
pub fn with_length(v: Vec3, length: f32) -> Vec3 {
    v.normalize_or_zero() * length
}

/// Angle in radians between two vectors, or `None` when it is undefined or
/// zero (either vector has zero length, the vectors are parallel, or a
/// component is not finite).
///
/// The cosine is clamped into `[-1, 1]` so rounding never yields NaN.
#[must_use]
pub fn angle_between(a: Vec3, b: Vec3) -> Option<f32> {
    let denom = a.length() * b.length();
    if denom == 0.0 || !denom.is_finite() {
        return None;
    }
    let angle = (a.dot(b) / denom).clamp(-1.0, 1.0).acos();
    (angle.is_finite() && angle != 0.0).then_some(angle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_length_keeps_direction_and_sign() {
        let v = Vec3::new(3.0, 0.0, 4.0);
        assert!(with_length(v, 10.0).abs_diff_eq(Vec3::new(6.0, 0.0, 8.0), 1e-5));
        assert!(with_length(v, -5.0).abs_diff_eq(Vec3::new(-3.0, 0.0, -4.0), 1e-5));
        assert_eq!(with_length(Vec3::ZERO, 3.0), Vec3::ZERO);
    }

    #[test]
    fn angle_between_orthogonal_vectors() {
        let angle = angle_between(Vec3::X, Vec3::Y * 2.0).unwrap();
        assert!((angle - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn angle_between_degenerate_inputs() {
        assert_eq!(angle_between(Vec3::X, Vec3::X * 3.0), None);
        assert_eq!(angle_between(Vec3::ZERO, Vec3::Y), None);
        assert_eq!(angle_between(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::Y), None);
    }

    #[test]
    fn angle_between_nearly_parallel_never_nan() {
        let a = Vec3::new(0.577_350_3, 0.577_350_3, 0.577_350_3);
        let b = a * 1.000_000_1;
        assert!(angle_between(a, b).map_or(true, f32::is_finite));
    }
}
