//! Joint angle calculation using dot product
//!
//! Computes the interior angle at a joint from the two bone vectors
//! leaving it, e.g. elbow angle from elbow→shoulder and elbow→wrist.

use nalgebra::Vector2;

/// Vectors shorter than this are treated as degenerate
const MIN_BONE_LENGTH: f32 = 1e-4;

/// Calculate the interior angle at `vertex` in degrees
///
/// Uses dot product formula: cos(θ) = (v1 · v2) / (|v1| × |v2|)
///
/// Returns angle in degrees, 0-180:
/// - 180° = fully straight (joint extended)
/// - 90° = bent at a right angle
pub fn joint_angle(a: (f32, f32), vertex: (f32, f32), c: (f32, f32)) -> f32 {
    let v1 = Vector2::new(a.0 - vertex.0, a.1 - vertex.1);
    let v2 = Vector2::new(c.0 - vertex.0, c.1 - vertex.1);

    let mag1 = v1.norm();
    let mag2 = v2.norm();

    // Coincident points carry no direction; callers keep this unreachable
    // by requiring landmark visibility first
    if mag1 < MIN_BONE_LENGTH || mag2 < MIN_BONE_LENGTH {
        return 180.0;
    }

    let cos_angle = (v1.dot(&v2) / (mag1 * mag2)).clamp(-1.0, 1.0);
    cos_angle.acos().to_degrees()
}
