//! Simulation of circular robots bouncing around a rectangular arena.
//!
//! Robots move with constant velocity between collisions. Collisions are detected at discrete
//! time steps only: robot-robot contacts are resolved elastically along the line of centers, and
//! a robot reaching the arena boundary is sent back inside in a random direction with unchanged
//! speed. Every run yields a [`History`] of positions which is left to the caller to render.


pub mod domain;
mod simulator;

pub use domain::{
    Arena, Axis, BoundaryResponse, Contact, History, Particle, Position, Snapshot, Tag, Velocity,
    Wall,
};
pub use simulator::{
    CollisionStats, SimulationConfig, SimulationError, Simulator, DEFAULT_TOLERANCE,
};
