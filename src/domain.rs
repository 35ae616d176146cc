//! The domain module encapsulates the physics. It defines the `Particle` and `Arena` entities,
//! along with the rules governing their collisions.
//!
//! Nothing in here knows about stepping or history bookkeeping; that is left to the simulator.

mod arena;
mod basis;
mod collision;
mod history;
mod particle;
mod response;

pub use arena::{Arena, Wall};
pub use basis::{Axis, Position, Velocity};
pub use collision::{HasCollision, Shape};
pub use history::{History, Snapshot};
pub use particle::{Particle, Tag};
pub use response::{collide_boundary, collide_particles, BoundaryResponse, Contact};
