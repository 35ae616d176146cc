//! Circular robot moving with constant velocity.

use std::fmt;

use nalgebra::Vector2;

use super::{HasCollision, Position, Shape, Velocity};

/// Mass and radius are fixed at construction. Position and velocity are only changed by the
/// simulator.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    mass: f64,
    radius: f64,
    position: Position,
    velocity: Velocity,
    tag: Tag,
}

impl Particle {
    pub fn new(mass: f64, radius: f64, position: Position, velocity: Velocity) -> Self {
        Self {
            mass,
            radius,
            position,
            velocity,
            tag: Tag::default(),
        }
    }

    pub fn with_tag(self, tag: impl Into<Tag>) -> Self {
        Self {
            tag: tag.into(),
            ..self
        }
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn momentum(&self) -> Vector2<f64> {
        self.velocity.vector() * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.vector().norm_squared()
    }

    pub(crate) fn set_velocity(&mut self, velocity: Velocity) {
        self.velocity = velocity;
    }

    pub(crate) fn advance(&mut self, dt: f64) {
        self.position = self.position.translated(self.velocity, dt);
    }
}

impl HasCollision for Particle {
    fn shape(&self) -> Shape {
        Shape::Circle {
            position: self.position,
            radius: self.radius,
        }
    }
}

/// Display identifier, e.g. a color name. Ignored by the physics.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tag(String);

impl Tag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Tag {
    fn default() -> Self {
        Self("blue".to_owned())
    }
}

impl From<&str> for Tag {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Tag {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    const EPSILON: f64 = 2.0 * f64::EPSILON;

    #[rstest]
    #[case::right(( 1.0,  0.0), 1.0, ( 1.0,  0.0))]
    #[case::up(   ( 0.0,  1.0), 1.0, ( 0.0,  1.0))]
    #[case::left( (-1.0,  0.0), 2.0, (-2.0,  0.0))]
    #[case::diagonal((0.5, -0.25), 4.0, (2.0, -1.0))]
    #[case::at_rest((0.0, 0.0), 10.0, (0.0, 0.0))]
    fn test_particle_advance(
        #[case] velocity: (f64, f64),
        #[case] dt: f64,
        #[case] position: (f64, f64),
    ) {
        let mut particle = Particle::new(
            1.0,
            0.1,
            Position::default(),
            Velocity::new(velocity.0, velocity.1),
        );
        particle.advance(dt);
        assert_abs_diff_eq!(particle.position().x(), position.0, epsilon = EPSILON);
        assert_abs_diff_eq!(particle.position().y(), position.1, epsilon = EPSILON);
        assert_abs_diff_eq!(particle.velocity(), Velocity::new(velocity.0, velocity.1));
    }

    #[test]
    fn test_particle_momentum_and_energy() {
        let particle = Particle::new(2.0, 0.1, Position::default(), Velocity::new(3.0, -4.0));
        assert_abs_diff_eq!(particle.momentum().x, 6.0);
        assert_abs_diff_eq!(particle.momentum().y, -8.0);
        assert_abs_diff_eq!(particle.kinetic_energy(), 25.0);
    }

    #[test]
    fn test_particle_tag() {
        let particle = Particle::new(1.0, 0.1, Position::default(), Velocity::default());
        assert_eq!(particle.tag().as_str(), "blue");

        let particle = particle.with_tag("royalblue");
        assert_eq!(particle.tag(), &Tag::from("royalblue"));
        assert_eq!(particle.tag().to_string(), "royalblue");
    }

    #[test]
    fn test_particle_collision() {
        let a = Particle::new(1.0, 0.1, Position::new(0.0, 0.0), Velocity::default());
        let b = Particle::new(1.0, 0.1, Position::new(0.15, 0.0), Velocity::default());
        let c = Particle::new(1.0, 0.1, Position::new(0.5, 0.0), Velocity::default());
        assert!(a.has_collision(&b, 1e-5));
        assert!(!a.has_collision(&c, 1e-5));
        assert!(!b.has_collision(&c, 1e-5));
    }
}
