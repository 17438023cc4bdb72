use orrery_core::constants::{
    SPAWN_MASS_EXP_MAX, SPAWN_MASS_EXP_MIN, SPAWN_POSITION_RANGE, SPAWN_RADIUS_MAX,
    SPAWN_RADIUS_MIN, SPAWN_SPEED_MAX,
};
use orrery_core::types::Body;
use rand::Rng;

/// Generate a random body for interactive spawning. `seq` feeds the name
/// so log lines can tell spawned bodies apart.
pub fn random_body(seq: u64, rng: &mut impl Rng) -> Body {
    // Mass: log-uniform, so small moons and heavy planets are equally likely.
    let mass = 10.0f64.powf(rng.gen_range(SPAWN_MASS_EXP_MIN..SPAWN_MASS_EXP_MAX));

    let position = [
        rng.gen_range(-SPAWN_POSITION_RANGE..SPAWN_POSITION_RANGE),
        rng.gen_range(-SPAWN_POSITION_RANGE..SPAWN_POSITION_RANGE),
        rng.gen_range(-SPAWN_POSITION_RANGE..SPAWN_POSITION_RANGE),
    ];

    // Spherical sampling gives a uniform random direction; the speed is
    // drawn separately so slow and fast bodies both occur.
    let theta = rng.gen_range(0.0..std::f64::consts::TAU);
    let phi = (rng.gen_range(-1.0..1.0f64)).acos();
    let speed = rng.gen_range(0.0..SPAWN_SPEED_MAX);

    let velocity = [
        speed * phi.sin() * theta.cos(),
        speed * phi.sin() * theta.sin(),
        speed * phi.cos(),
    ];

    let radius = rng.gen_range(SPAWN_RADIUS_MIN..SPAWN_RADIUS_MAX);

    // Keep colors away from black so every body shows up against the void.
    let color = [
        rng.gen_range(0.2..1.0f32),
        rng.gen_range(0.2..1.0f32),
        rng.gen_range(0.2..1.0f32),
        1.0,
    ];

    Body::new(format!("body-{seq}"), mass, position, velocity, radius, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_spawned_bodies_are_valid() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for seq in 0..100 {
            let body = random_body(seq, &mut rng);
            assert!(body.validate().is_ok());
            assert!(body.mass >= 1.0e20 && body.mass < 1.0e26);
            assert!(body.radius >= SPAWN_RADIUS_MIN && body.radius < SPAWN_RADIUS_MAX);
            for axis in 0..3 {
                assert!(body.position[axis].abs() < SPAWN_POSITION_RANGE);
            }
            let speed = crate::vector::norm(body.velocity);
            assert!(speed < SPAWN_SPEED_MAX);
        }
    }

    #[test]
    fn test_same_seed_same_body() {
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);

        let body_a = random_body(0, &mut a);
        let body_b = random_body(0, &mut b);

        assert_eq!(body_a.mass, body_b.mass);
        assert_eq!(body_a.position, body_b.position);
        assert_eq!(body_a.velocity, body_b.velocity);
        assert_eq!(body_a.radius, body_b.radius);
    }

    #[test]
    fn test_sequence_number_lands_in_name() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let body = random_body(17, &mut rng);
        assert_eq!(body.name, "body-17");
    }
}
