//! Collision response.
//!
//! Robot-robot contacts are resolved as elastic collisions along the line of centers, see
//! <https://en.wikipedia.org/wiki/Elastic_collision>. Boundary contacts either send the robot back
//! into the arena in a random direction or mirror its velocity. Positions are never corrected.

use rand::Rng;

use super::{Arena, Axis, Particle, Velocity, Wall};

/// Outcome of resolving a robot-robot contact.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Contact {
    Resolved,
    /// The centers coincide, so there is no collision normal. Velocities were left unchanged.
    Coincident,
}

/// Reaction of a robot hitting the arena boundary.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum BoundaryResponse {
    /// Point the hit component back into the arena with a random magnitude in `[0, speed]` and
    /// give the remaining speed a random sign on the other axis.
    #[default]
    RandomRedirect,
    /// Negate the hit component.
    Mirror,
}

/// Update both velocities of two touching robots.
///
/// Momentum and kinetic energy of the pair are conserved. The velocity components tangential to
/// the contact are unchanged.
pub fn collide_particles(a: &mut Particle, b: &mut Particle) -> Contact {
    let n = a.position() - b.position();
    let distance = n.norm();

    if distance == 0.0 {
        log::warn!(
            "skipping collision of coincident particles at ({}, {})",
            a.position().x(),
            a.position().y()
        );
        return Contact::Coincident;
    }

    let n_hat = n / distance;
    let v_rel = (a.velocity() - b.velocity()).vector();
    let total_mass = a.mass() + b.mass();
    let impulse = n_hat * v_rel.dot(&n_hat);

    a.set_velocity(a.velocity() - Velocity::from(impulse * (2.0 * b.mass() / total_mass)));
    b.set_velocity(b.velocity() + Velocity::from(impulse * (2.0 * a.mass() / total_mass)));

    Contact::Resolved
}

/// Redirect a robot which is moving into a wall. Returns the number of axes on which a wall was
/// hit.
///
/// Both axes are tested against the velocity before any change. If both register a hit (corner),
/// the y axis is resolved after the x axis and overwrites both components again.
pub fn collide_boundary<R: Rng>(
    particle: &mut Particle,
    arena: &Arena,
    tolerance: f64,
    response: BoundaryResponse,
    rng: &mut R,
) -> usize {
    let hits = Axis::iter()
        .filter_map(|&axis| {
            arena
                .boundary_hit(particle, axis, tolerance)
                .map(|wall| (axis, wall))
        })
        .collect::<Vec<_>>();

    if hits.is_empty() {
        return 0;
    }

    let speed = particle.velocity().speed();
    let mut velocity = particle.velocity();

    for &(axis, wall) in &hits {
        log::trace!("particle hit {wall:?} wall on {axis:?} axis with speed {speed}");

        match response {
            BoundaryResponse::RandomRedirect => {
                let magnitude = rng.random_range(0.0..=speed);
                let inward = match wall {
                    Wall::Lower => magnitude,
                    Wall::Upper => -magnitude,
                };
                let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
                velocity.set_component(axis, inward);
                velocity.set_component(
                    axis.other(),
                    sign * (speed * speed - inward * inward).sqrt(),
                );
            }
            BoundaryResponse::Mirror => {
                velocity.set_component(axis, -velocity.component(axis));
            }
        }
    }

    particle.set_velocity(velocity);
    hits.len()
}
