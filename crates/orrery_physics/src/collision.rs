use orrery_core::constants::RADIUS_SCALE;
use orrery_core::types::{Body, Vec3};

use crate::vector;

/// Whether two bodies overlap. The boundary is inclusive: separation
/// exactly equal to the combined collision extent counts.
pub fn collided(a: &Body, b: &Body) -> bool {
    vector::distance(a.position, b.position) <= (a.radius + b.radius) * RADIUS_SCALE
}

/// Velocity of the merged body: total momentum over total mass. Momentum
/// is conserved; kinetic energy is not.
pub fn merged_velocity(a: &Body, b: &Body) -> Vec3 {
    let total = a.mass + b.mass;
    let pa = a.momentum();
    let pb = b.momentum();
    [
        (pa[0] + pb[0]) / total,
        (pa[1] + pb[1]) / total,
        (pa[2] + pb[2]) / total,
    ]
}

/// Scan all pairs of live bodies and merge each overlapping pair in place.
/// The heavier body absorbs the lighter; on an exact mass tie the earlier
/// slot wins. The absorber keeps its position and gains the other body's
/// mass and radius. Returns the number of merges committed.
pub fn resolve_collisions(bodies: &mut Vec<Body>) -> usize {
    let count = bodies.len();
    let mut dead = vec![false; count];
    let mut merges = 0;

    for i in 0..count {
        if dead[i] {
            continue;
        }
        for j in (i + 1)..count {
            if dead[j] || !collided(&bodies[i], &bodies[j]) {
                continue;
            }

            let (winner, loser) = if bodies[i].mass >= bodies[j].mass {
                (i, j)
            } else {
                (j, i)
            };

            let velocity = merged_velocity(&bodies[winner], &bodies[loser]);
            let loser_mass = bodies[loser].mass;
            let loser_radius = bodies[loser].radius;
            bodies[winner].mass += loser_mass;
            bodies[winner].velocity = velocity;
            bodies[winner].radius += loser_radius;
            dead[loser] = true;
            merges += 1;

            // One merge per detected collision. Body i changed (or died),
            // so its remaining pairs wait for the next scan.
            break;
        }
    }

    if merges > 0 {
        let mut slot = 0;
        bodies.retain(|_| {
            let keep = !dead[slot];
            slot += 1;
            keep
        });
    }
    merges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(name: &str, mass: f64, position: Vec3, velocity: Vec3, radius: f64) -> Body {
        Body::new(name, mass, position, velocity, radius, [1.0, 1.0, 1.0, 1.0])
    }

    #[test]
    fn test_boundary_contact_counts_as_collision() {
        let a = body("a", 1.0e20, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0], 10.0);
        let extent = (10.0 + 15.0) * RADIUS_SCALE;
        let touching = body("b", 1.0e20, [extent, 0.0, 0.0], [0.0, 0.0, 0.0], 15.0);
        let apart = body("c", 1.0e20, [extent + 1.0, 0.0, 0.0], [0.0, 0.0, 0.0], 15.0);

        assert!(collided(&a, &touching));
        assert!(!collided(&a, &apart));
    }

    #[test]
    fn test_merged_velocity_conserves_momentum() {
        let a = body("a", 6.0e22, [0.0, 0.0, 0.0], [100.0, 0.0, -40.0], 10.0);
        let b = body("b", 2.0e22, [1.0, 0.0, 0.0], [-300.0, 80.0, 0.0], 10.0);

        let v = merged_velocity(&a, &b);
        let before = [
            a.mass * a.velocity[0] + b.mass * b.velocity[0],
            a.mass * a.velocity[1] + b.mass * b.velocity[1],
            a.mass * a.velocity[2] + b.mass * b.velocity[2],
        ];
        let total = a.mass + b.mass;
        for axis in 0..3 {
            assert!((v[axis] * total - before[axis]).abs() / before[axis].abs().max(1.0) < 1e-12);
        }
    }

    #[test]
    fn test_heavier_body_absorbs_lighter() {
        let mut bodies = vec![
            body("pebble", 1.0e20, [0.0, 0.0, 0.0], [500.0, 0.0, 0.0], 10.0),
            body("planet", 5.0e24, [1.0e5, 0.0, 0.0], [0.0, 10.0, 0.0], 20.0),
        ];

        let merges = resolve_collisions(&mut bodies);

        assert_eq!(merges, 1);
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0].name, "planet");
        assert_eq!(bodies[0].mass, 5.0e24 + 1.0e20);
        assert_eq!(bodies[0].radius, 30.0);
        // Absorber keeps its own position.
        assert_eq!(bodies[0].position, [1.0e5, 0.0, 0.0]);
    }

    #[test]
    fn test_equal_masses_keep_first_encountered() {
        let mut bodies = vec![
            body("first", 3.0e22, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0], 10.0),
            body("second", 3.0e22, [100.0, 0.0, 0.0], [0.0, 0.0, 0.0], 10.0),
        ];

        resolve_collisions(&mut bodies);

        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0].name, "first");
    }

    #[test]
    fn test_merge_conserves_total_momentum_and_mass() {
        let mut bodies = vec![
            body("a", 4.0e22, [0.0, 0.0, 0.0], [120.0, -30.0, 0.0], 10.0),
            body("b", 1.0e22, [50.0, 0.0, 0.0], [-200.0, 60.0, 15.0], 10.0),
        ];
        let momentum_before: Vec<f64> = (0..3)
            .map(|axis| bodies.iter().map(|b| b.mass * b.velocity[axis]).sum())
            .collect();
        let mass_before: f64 = bodies.iter().map(|b| b.mass).sum();

        resolve_collisions(&mut bodies);

        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0].mass, mass_before);
        for axis in 0..3 {
            let after = bodies[0].mass * bodies[0].velocity[axis];
            assert!((after - momentum_before[axis]).abs() < 1e-6 * mass_before);
        }
    }

    #[test]
    fn test_separated_bodies_are_untouched() {
        let mut bodies = vec![
            body("a", 1.0e22, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0], 1.0),
            body("b", 1.0e22, [1.0e9, 0.0, 0.0], [0.0, 0.0, 0.0], 1.0),
        ];

        let merges = resolve_collisions(&mut bodies);

        assert_eq!(merges, 0);
        assert_eq!(bodies.len(), 2);
    }

    #[test]
    fn test_one_merge_per_scan_for_chained_overlaps() {
        // Three bodies piled together: the first scan commits one merge for
        // the pair it finds, the survivor picks up the third on the next.
        let mut bodies = vec![
            body("big", 9.0e24, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0], 10.0),
            body("near", 1.0e22, [100.0, 0.0, 0.0], [0.0, 0.0, 0.0], 10.0),
            body("close", 1.0e22, [-100.0, 0.0, 0.0], [0.0, 0.0, 0.0], 10.0),
        ];

        assert_eq!(resolve_collisions(&mut bodies), 1);
        assert_eq!(bodies.len(), 2);
        assert_eq!(resolve_collisions(&mut bodies), 1);
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0].name, "big");
        assert_eq!(bodies[0].mass, 9.0e24 + 1.0e22 + 1.0e22);
    }
}
