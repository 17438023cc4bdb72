use crate::error::InvalidInput;

/// Fixed-size 3-vector for positions, velocities, and accelerations.
/// The fixed dimensionality makes shape mismatches impossible to construct.
pub type Vec3 = [f64; 3];

/// A point-mass body in the simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Diagnostic label. Not a uniqueness key; bodies are identified by
    /// their index in the live collection.
    pub name: String,
    /// Mass in kilograms. Always positive; merges only add masses.
    pub mass: f64,
    /// Position in meters.
    pub position: Vec3,
    /// Velocity in meters per second.
    pub velocity: Vec3,
    /// Visual radius in display units. Doubles as the collision extent via
    /// RADIUS_SCALE. Always positive; merges only add radii.
    pub radius: f64,
    /// Display color (RGBA). Irrelevant to the physics.
    pub color: [f32; 4],
}

impl Body {
    pub fn new(
        name: impl Into<String>,
        mass: f64,
        position: Vec3,
        velocity: Vec3,
        radius: f64,
        color: [f32; 4],
    ) -> Self {
        Self {
            name: name.into(),
            mass,
            position,
            velocity,
            radius,
            color,
        }
    }

    /// Linear momentum (mass * velocity).
    pub fn momentum(&self) -> Vec3 {
        [
            self.mass * self.velocity[0],
            self.mass * self.velocity[1],
            self.mass * self.velocity[2],
        ]
    }

    /// Check the mass/radius invariants. Called wherever a body enters the
    /// live collection (scenario build, spawn); once inside, merging only
    /// adds positive quantities so the invariants are preserved.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if self.mass <= 0.0 || !self.mass.is_finite() {
            return Err(InvalidInput::NonPositiveMass(self.mass));
        }
        if self.radius <= 0.0 || !self.radius.is_finite() {
            return Err(InvalidInput::NonPositiveRadius(self.radius));
        }
        Ok(())
    }
}
