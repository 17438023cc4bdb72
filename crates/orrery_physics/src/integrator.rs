use orrery_core::error::InvalidInput;
use orrery_core::types::{Body, Vec3};

use crate::vector;

/// Advance one body by `dt` seconds under a fixed acceleration.
/// Returns `(new_velocity, new_position)`. The position update uses the
/// velocity from before the velocity update; the two lines are not
/// interchangeable and the ordering is pinned by test.
pub fn integrate(body: &Body, accel: Vec3, dt: f64) -> Result<(Vec3, Vec3), InvalidInput> {
    if dt < 0.0 {
        return Err(InvalidInput::NegativeTimeStep(dt));
    }

    let new_velocity = vector::add(body.velocity, vector::scale(accel, dt));
    let new_position = vector::add(body.position, vector::scale(body.velocity, dt));
    Ok((new_velocity, new_position))
}
