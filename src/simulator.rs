//! Simulation of robots in an arena.
//!
//! Each step moves every robot along its velocity and bounces it off the arena boundary, then
//! resolves contacts between robots pair by pair. Pairs are visited once per step in index order,
//! which keeps runs reproducible for a given random number generator.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::domain::{
    collide_boundary, collide_particles, Arena, BoundaryResponse, Contact, HasCollision, History,
    Particle,
};

pub const DEFAULT_TOLERANCE: f64 = 1e-5;

#[derive(Clone, Debug)]
pub struct Simulator<R = ChaCha8Rng> {
    arena: Arena,
    particles: Vec<Particle>,
    config: SimulationConfig,
    rng: R,
    history: History,
    stats: CollisionStats,
}

impl Simulator<ChaCha8Rng> {
    pub fn seeded(arena: Arena, particles: Vec<Particle>, seed: u64) -> Self {
        Self::new(
            arena,
            particles,
            SimulationConfig::default(),
            ChaCha8Rng::seed_from_u64(seed),
        )
    }
}

impl<R: Rng> Simulator<R> {
    pub fn new(arena: Arena, particles: Vec<Particle>, config: SimulationConfig, rng: R) -> Self {
        Self {
            arena,
            particles,
            config,
            rng,
            history: History::new(),
            stats: CollisionStats::default(),
        }
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle(&self, idx: usize) -> Result<&Particle, SimulationError> {
        self.particles
            .get(idx)
            .ok_or(SimulationError::MissingParticle(idx))
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn stats(&self) -> CollisionStats {
        self.stats
    }

    pub fn check_collision(&self, a: usize, b: usize) -> Result<bool, SimulationError> {
        Ok(self
            .particle(a)?
            .has_collision(self.particle(b)?, self.config.tolerance))
    }

    /// Advance all robots by `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        for particle in self.particles.iter_mut() {
            particle.advance(dt);
            self.stats.boundary_hits += collide_boundary(
                particle,
                &self.arena,
                self.config.tolerance,
                self.config.boundary_response,
                &mut self.rng,
            );
        }

        for i in 0..self.particles.len() {
            let (head, tail) = self.particles.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail.iter_mut() {
                if !a.has_collision(&*b, self.config.tolerance) {
                    continue;
                }
                match collide_particles(a, b) {
                    Contact::Resolved => self.stats.particle_contacts += 1,
                    Contact::Coincident => self.stats.coincident_contacts += 1,
                }
            }
        }
    }

    /// Run `num_steps` steps, recording the positions before each of them.
    ///
    /// Previous history and statistics are discarded. The state after the last step is not part
    /// of the history.
    pub fn simulate(&mut self, num_steps: usize, dt: f64) -> &History {
        log::debug!(
            "simulating {} particles for {num_steps} steps of {dt}s",
            self.particles.len()
        );

        self.history.clear();
        self.stats = CollisionStats::default();

        for _ in 0..num_steps {
            self.history
                .push(self.particles.iter().map(|p| p.position()).collect());
            self.step(dt);
        }

        log::debug!(
            "simulation finished: {} particle contacts, {} coincident contacts, {} boundary hits",
            self.stats.particle_contacts,
            self.stats.coincident_contacts,
            self.stats.boundary_hits
        );

        &self.history
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Slack for all contact and boundary comparisons.
    pub tolerance: f64,
    pub boundary_response: BoundaryResponse,
}

impl SimulationConfig {
    pub const fn new(tolerance: f64, boundary_response: BoundaryResponse) -> Self {
        SimulationConfig {
            tolerance,
            boundary_response,
        }
    }

    pub fn with_tolerance(&self, tolerance: f64) -> Self {
        Self {
            tolerance,
            ..self.clone()
        }
    }

    pub fn with_boundary_response(&self, boundary_response: BoundaryResponse) -> Self {
        Self {
            boundary_response,
            ..self.clone()
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE, BoundaryResponse::default())
    }
}

/// Counters of a single `simulate` run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CollisionStats {
    pub particle_contacts: usize,
    pub coincident_contacts: usize,
    /// One per axis on which a wall was hit.
    pub boundary_hits: usize,
}

#[derive(Error, Debug, PartialEq)]
pub enum SimulationError {
    #[error("missing particle {0}")]
    MissingParticle(usize),
}
