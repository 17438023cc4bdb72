// Physical constants and process-wide configuration values.
// Defined once and shared by seeding, spawning, and the collision predicate
// so the same unit conventions hold everywhere:
// - Distance: 1 unit = 1 meter
// - Mass: 1 unit = 1 kilogram
// - Time: 1 unit = 1 second
// Visual radii are in display units; RADIUS_SCALE converts them to meters.

/// Gravitational constant (m^3 / (kg * s^2))
pub const G: f64 = 6.674e-11;

/// Conversion from a body's visual radius to a physical collision extent in
/// meters. Two bodies collide when their separation is at most
/// `(radius_a + radius_b) * RADIUS_SCALE`. Scenario and spawn radii are
/// chosen against this same scale.
pub const RADIUS_SCALE: f64 = 4.0e5;

/// Substitute divisor for two bodies occupying the same point, so direction
/// normalization and the force law never divide by zero.
pub const ZERO_DISTANCE_FALLBACK: f64 = 1.0;

/// Default duration of one simulation tick, in seconds.
pub const DEFAULT_TICK_SECONDS: f64 = 1000.0;

/// Spawned bodies draw their mass as 10^e kilograms with e uniform in
/// [SPAWN_MASS_EXP_MIN, SPAWN_MASS_EXP_MAX], a spread from asteroid-like
/// to planet-like masses.
pub const SPAWN_MASS_EXP_MIN: f64 = 20.0;

/// Upper mass exponent for spawned bodies.
pub const SPAWN_MASS_EXP_MAX: f64 = 26.0;

/// Spawned bodies land uniformly within this distance of the origin on each
/// axis, in meters (about the Earth-Moon distance).
pub const SPAWN_POSITION_RANGE: f64 = 4.0e8;

/// Maximum speed for spawned bodies, in meters per second.
pub const SPAWN_SPEED_MAX: f64 = 1500.0;

/// Smallest visual radius for spawned bodies, in display units.
pub const SPAWN_RADIUS_MIN: f64 = 5.0;

/// Largest visual radius for spawned bodies, in display units.
pub const SPAWN_RADIUS_MAX: f64 = 40.0;
