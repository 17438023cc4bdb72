use orrery_core::types::{Body, Vec3};

/// Total linear momentum of the ensemble. Gravity and inelastic merging
/// both conserve this, which makes it a good drift check for logs.
pub fn total_momentum(bodies: &[Body]) -> Vec3 {
    let mut total = [0.0f64; 3];
    for body in bodies {
        let p = body.momentum();
        total[0] += p[0];
        total[1] += p[1];
        total[2] += p[2];
    }
    total
}

/// Total mass of the ensemble, conserved across merges.
pub fn total_mass(bodies: &[Body]) -> f64 {
    bodies.iter().map(|b| b.mass).sum()
}

/// Total kinetic energy. Inelastic merges only ever lose kinetic energy.
pub fn kinetic_energy(bodies: &[Body]) -> f64 {
    bodies
        .iter()
        .map(|b| {
            let v2 = b.velocity[0] * b.velocity[0]
                + b.velocity[1] * b.velocity[1]
                + b.velocity[2] * b.velocity[2];
            0.5 * b.mass * v2
        })
        .sum()
}
