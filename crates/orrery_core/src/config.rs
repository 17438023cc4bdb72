use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TICK_SECONDS;
use crate::types::Body;

/// Simulation configuration and initial scenario.
/// Loaded from a YAML scenario file by the runner, or built with
/// `SimConfig::default()` for the stock two-body scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Random seed for deterministic body spawning.
    pub seed: u64,
    /// Duration of one simulation tick, in seconds.
    pub tick_seconds: f64,
    /// Bodies present when the simulation starts.
    pub bodies: Vec<BodySeed>,
}

/// Initial state of one body as written in a scenario file.
/// Converted to a runtime `Body` when the universe is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodySeed {
    pub name: String,
    /// Mass in kilograms.
    pub mass: f64,
    /// Position in meters.
    pub position: [f64; 3],
    /// Velocity in meters per second.
    pub velocity: [f64; 3],
    /// Visual radius in display units.
    pub radius: f64,
    /// Display color (RGBA). White when the scenario omits it.
    #[serde(default = "white")]
    pub color: [f32; 4],
}

fn white() -> [f32; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

impl BodySeed {
    /// Runtime body with the seed's initial state. Invariants are checked
    /// where the body enters the live collection.
    pub fn to_body(&self) -> Body {
        Body::new(
            self.name.clone(),
            self.mass,
            self.position,
            self.velocity,
            self.radius,
            self.color,
        )
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        // The classic two-body scenario: Earth at the origin, Moon at its
        // mean orbital distance with a tangential velocity.
        Self {
            seed: 42,
            tick_seconds: DEFAULT_TICK_SECONDS,
            bodies: vec![
                BodySeed {
                    name: "Earth".into(),
                    mass: 5.972e24,
                    position: [0.0, 0.0, 0.0],
                    velocity: [0.0, -12.3, 0.0],
                    radius: 20.0,
                    color: [1.0, 0.0, 0.0, 1.0],
                },
                BodySeed {
                    name: "Moon".into(),
                    mass: 7.348e22,
                    position: [3.844e8, 0.0, 0.0],
                    velocity: [0.0, 1000.0, 0.0],
                    radius: 20.0,
                    color: [0.0, 0.0, 1.0, 1.0],
                },
            ],
        }
    }
}
