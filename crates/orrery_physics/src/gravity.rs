use orrery_core::constants::G;
use orrery_core::error::InvalidInput;
use orrery_core::types::{Body, Vec3};

use crate::vector;

/// Newtonian force magnitude between two masses, in newtons.
/// Distance zero is accepted as a precondition; callers apply the
/// zero-distance fallback before invoking this.
pub fn force_magnitude(mass_a: f64, mass_b: f64, distance: f64) -> Result<f64, InvalidInput> {
    if mass_a <= 0.0 {
        return Err(InvalidInput::NonPositiveMass(mass_a));
    }
    if mass_b <= 0.0 {
        return Err(InvalidInput::NonPositiveMass(mass_b));
    }
    if distance < 0.0 {
        return Err(InvalidInput::NegativeDistance(distance));
    }
    Ok(G * mass_a * mass_b / (distance * distance))
}

/// Combined gravitational acceleration on `bodies[index]` from every other
/// body. Positions are read as-is; nothing is mutated, so all per-body
/// calls within one tick see the same snapshot.
pub fn acceleration_on(index: usize, bodies: &[Body]) -> Result<Vec3, InvalidInput> {
    let body = &bodies[index];
    let mut accel = [0.0, 0.0, 0.0];

    for (j, other) in bodies.iter().enumerate() {
        // Identity skip: this exact slot, not any body with equal fields.
        // Skipping contributes zero to the sum.
        if j == index {
            continue;
        }

        let d = vector::non_zero(vector::distance(body.position, other.position));
        let force = force_magnitude(body.mass, other.mass, d)?;
        let dir = vector::direction(body.position, other.position);

        accel[0] += dir[0] * force / body.mass;
        accel[1] += dir[1] * force / body.mass;
        accel[2] += dir[2] * force / body.mass;
    }

    Ok(accel)
}

/// Acceleration of every body against the same position snapshot.
/// Integration must only start after this returns, so that no body sees a
/// neighbor that has already moved within the tick.
pub fn accumulate_accelerations(bodies: &[Body]) -> Result<Vec<Vec3>, InvalidInput> {
    let mut accels = Vec::with_capacity(bodies.len());
    for index in 0..bodies.len() {
        accels.push(acceleration_on(index, bodies)?);
    }
    Ok(accels)
}
