//! Rectangular arena with its lower left corner at the origin.

use nalgebra::Vector2;

use super::{Axis, HasCollision, Particle, Position, Shape};

#[derive(Clone, Debug, PartialEq)]
pub struct Arena {
    size: Vector2<f64>,
}

impl Arena {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Vector2::new(width, height),
        }
    }

    pub fn size(&self) -> Vector2<f64> {
        self.size
    }

    pub fn width(&self) -> f64 {
        self.size.x
    }

    pub fn height(&self) -> f64 {
        self.size.y
    }

    pub fn extent(&self, axis: Axis) -> f64 {
        self.size[axis.index()]
    }

    pub fn center(&self) -> Position {
        Position::from(self.size / 2.0)
    }

    /// Wall the particle is pushing against along `axis`, if any.
    ///
    /// A particle only hits a wall if its edge reached the wall and it is still moving towards
    /// it. A particle which already turned around is left alone, even if it overlaps the wall.
    pub fn boundary_hit(&self, particle: &Particle, axis: Axis, tolerance: f64) -> Option<Wall> {
        let position = particle.position().component(axis);
        let velocity = particle.velocity().component(axis);
        let radius = particle.radius();

        if position - radius <= tolerance && velocity < 0.0 {
            Some(Wall::Lower)
        } else if position + radius >= self.extent(axis) - tolerance && velocity > 0.0 {
            Some(Wall::Upper)
        } else {
            None
        }
    }

    pub fn contains(&self, object: &dyn HasCollision, tolerance: f64) -> bool {
        let (lower, upper) = object.shape().bounds();
        lower.x() >= -tolerance
            && lower.y() >= -tolerance
            && upper.x() <= self.width() + tolerance
            && upper.y() <= self.height() + tolerance
    }
}

impl HasCollision for Arena {
    fn shape(&self) -> Shape {
        Shape::Rectangle {
            position: self.center(),
            x_length: self.width(),
            y_length: self.height(),
        }
    }
}

/// Side of the arena along one axis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Wall {
    /// At coordinate zero.
    Lower,
    /// At the arena's extent.
    Upper,
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::super::Velocity;
    use super::*;

    const TOLERANCE: f64 = 1e-5;

    fn particle(position: (f64, f64), velocity: (f64, f64)) -> Particle {
        Particle::new(
            1.0,
            0.1,
            Position::new(position.0, position.1),
            Velocity::new(velocity.0, velocity.1),
        )
    }

    #[test]
    fn test_arena_dimensions() {
        let arena = Arena::new(8.0, 6.0);
        assert_abs_diff_eq!(arena.width(), 8.0);
        assert_abs_diff_eq!(arena.height(), 6.0);
        assert_abs_diff_eq!(arena.extent(Axis::X), 8.0);
        assert_abs_diff_eq!(arena.extent(Axis::Y), 6.0);
        assert_abs_diff_eq!(arena.center(), Position::new(4.0, 3.0));
    }

    #[rstest]
    #[case::left(          ( 0.1, 4.0), (-1.0,  0.0), Axis::X, Some(Wall::Lower))]
    #[case::left_overshot( (-0.3, 4.0), (-1.0,  0.0), Axis::X, Some(Wall::Lower))]
    #[case::left_leaving(  ( 0.1, 4.0), ( 1.0,  0.0), Axis::X, None)]
    #[case::right(         ( 7.9, 4.0), ( 1.0,  0.0), Axis::X, Some(Wall::Upper))]
    #[case::right_leaving( ( 7.9, 4.0), (-1.0,  0.0), Axis::X, None)]
    #[case::bottom(        ( 4.0, 0.1), ( 0.0, -1.0), Axis::Y, Some(Wall::Lower))]
    #[case::top(           ( 4.0, 7.9), ( 0.5,  1.0), Axis::Y, Some(Wall::Upper))]
    #[case::top_other_axis(( 4.0, 7.9), ( 0.5,  1.0), Axis::X, None)]
    #[case::center(        ( 4.0, 4.0), ( 1.0,  1.0), Axis::X, None)]
    #[case::sliding_along( ( 0.1, 4.0), ( 0.0,  1.0), Axis::X, None)]
    fn test_arena_boundary_hit(
        #[case] position: (f64, f64),
        #[case] velocity: (f64, f64),
        #[case] axis: Axis,
        #[case] expected: Option<Wall>,
    ) {
        let arena = Arena::new(8.0, 8.0);
        assert_eq!(
            arena.boundary_hit(&particle(position, velocity), axis, TOLERANCE),
            expected
        );
    }

    #[rstest]
    #[case::center((4.0, 4.0), true)]
    #[case::touching_left((0.1, 4.0), true)]
    #[case::touching_top_right((7.9, 7.9), true)]
    #[case::crossing_left((0.05, 4.0), false)]
    #[case::outside((9.0, 4.0), false)]
    fn test_arena_contains(#[case] position: (f64, f64), #[case] expected: bool) {
        let arena = Arena::new(8.0, 8.0);
        assert_eq!(
            arena.contains(&particle(position, (0.0, 0.0)), TOLERANCE),
            expected
        );
    }

    #[test]
    fn test_arena_collides_with_overlapping_particle() {
        let arena = Arena::new(8.0, 8.0);
        assert!(arena.has_collision(&particle((4.0, 4.0), (0.0, 0.0)), TOLERANCE));
        assert!(!arena.has_collision(&particle((9.0, 4.0), (0.0, 0.0)), TOLERANCE));
    }
}
