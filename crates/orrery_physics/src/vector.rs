use orrery_core::constants::ZERO_DISTANCE_FALLBACK;
use orrery_core::types::Vec3;

/// Euclidean distance between two points in meters.
pub fn distance(a: Vec3, b: Vec3) -> f64 {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    let dz = b[2] - a[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Separation guarded against division by zero: coincident points yield
/// `ZERO_DISTANCE_FALLBACK` instead of 0.0. Every divisor derived from a
/// body separation goes through here.
pub fn non_zero(distance: f64) -> f64 {
    if distance == 0.0 {
        ZERO_DISTANCE_FALLBACK
    } else {
        distance
    }
}

/// Unit vector pointing from `a` toward `b`. For coincident points the
/// fallback divisor applies and the result degenerates to zero rather than
/// NaN.
pub fn direction(a: Vec3, b: Vec3) -> Vec3 {
    let d = non_zero(distance(a, b));
    [(b[0] - a[0]) / d, (b[1] - a[1]) / d, (b[2] - a[2]) / d]
}

/// Componentwise sum.
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

/// Vector scaled by a constant.
pub fn scale(v: Vec3, k: f64) -> Vec3 {
    [v[0] * k, v[1] * k, v[2] * k]
}

/// Vector magnitude.
pub fn norm(v: Vec3) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}
