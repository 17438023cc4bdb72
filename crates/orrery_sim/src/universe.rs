use log::{info, warn};
use orrery_core::error::InvalidInput;
use orrery_core::types::Body;
use orrery_core::SimConfig;
use orrery_physics::{collision, gravity, integrator, spawn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// What a single tick did to the ensemble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Collision merges committed this tick.
    pub merges: usize,
}

/// Full simulation state: the bodies plus the clock that drives them.
pub struct Universe {
    /// Scenario this run started from.
    pub config: SimConfig,
    /// Whether ticks advance the simulation.
    pub paused: bool,
    /// Simulated seconds since the start.
    pub elapsed: f64,
    /// Ticks advanced so far.
    pub ticks: u64,
    tick_seconds: f64,
    bodies: Vec<Body>,
    rng: ChaCha8Rng,
    spawned: u64,
}

impl Universe {
    /// Build a universe from a scenario, validating every seeded body.
    pub fn from_config(config: SimConfig) -> Result<Self, InvalidInput> {
        if !(config.tick_seconds >= 0.0) {
            return Err(InvalidInput::NegativeTimeStep(config.tick_seconds));
        }

        let mut bodies = Vec::with_capacity(config.bodies.len());
        for seed in &config.bodies {
            let body = seed.to_body();
            body.validate()?;
            bodies.push(body);
        }

        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        let tick_seconds = config.tick_seconds;
        Ok(Self {
            config,
            paused: false,
            elapsed: 0.0,
            ticks: 0,
            tick_seconds,
            bodies,
            rng,
            spawned: 0,
        })
    }

    /// Advance the simulation by one tick.
    ///
    /// Phase order is fixed: accelerations for every body are computed
    /// against the start-of-tick positions, then every body integrates,
    /// then collisions merge. No body ever sees a half-updated neighbor.
    pub fn tick(&mut self) -> Result<TickOutcome, InvalidInput> {
        if self.paused {
            return Ok(TickOutcome { merges: 0 });
        }

        let accels = gravity::accumulate_accelerations(&self.bodies)?;
        for (body, accel) in self.bodies.iter_mut().zip(&accels) {
            let (velocity, position) = integrator::integrate(body, *accel, self.tick_seconds)?;
            body.velocity = velocity;
            body.position = position;
        }

        let merges = collision::resolve_collisions(&mut self.bodies);
        if merges > 0 {
            info!(
                "Merged {} colliding pair(s), {} bodies remain",
                merges,
                self.bodies.len()
            );
        }

        self.elapsed += self.tick_seconds;
        self.ticks += 1;
        Ok(TickOutcome { merges })
    }

    /// Current bodies, in slot order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Seconds of simulated time per tick.
    pub fn tick_seconds(&self) -> f64 {
        self.tick_seconds
    }

    /// Set the tick duration from user text. Anything that does not parse
    /// to a finite non-negative number is logged and ignored; the previous
    /// duration stays in effect.
    pub fn set_tick_seconds(&mut self, input: &str) {
        match input.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => {
                info!("Tick duration set to {value} s");
                self.tick_seconds = value;
            }
            Ok(value) => {
                warn!("Ignoring tick duration {value}: must be finite and non-negative");
            }
            Err(_) => {
                warn!("Ignoring tick duration {input:?}: not a number");
            }
        }
    }

    /// Add a caller-built body after validating it.
    pub fn spawn_body(&mut self, body: Body) -> Result<(), InvalidInput> {
        body.validate()?;
        info!("Spawned {} ({:.3e} kg)", body.name, body.mass);
        self.bodies.push(body);
        Ok(())
    }

    /// Add a randomized body drawn from the universe's own RNG.
    pub fn spawn_random(&mut self) -> &Body {
        let body = spawn::random_body(self.spawned, &mut self.rng);
        self.spawned += 1;
        info!("Spawned {} ({:.3e} kg)", body.name, body.mass);
        self.bodies.push(body);
        &self.bodies[self.bodies.len() - 1]
    }
}
