//! Collision detection based on basic shapes.
//!
//! All tests are inclusive and widened by a tolerance, so touching shapes count as colliding.

use super::Position;

pub trait HasCollision {
    fn has_collision(&self, other: &dyn HasCollision, tolerance: f64) -> bool {
        self.shape().has_intersection(&other.shape(), tolerance)
    }

    fn shape(&self) -> Shape;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Axis-aligned rectangle around a center position.
    Rectangle {
        position: Position,
        x_length: f64,
        y_length: f64,
    },
    Circle {
        position: Position,
        radius: f64,
    },
}

impl Shape {
    pub fn has_intersection(&self, other: &Shape, tolerance: f64) -> bool {
        match (self, other) {
            (
                Shape::Circle { position, radius },
                Shape::Circle {
                    position: other_position,
                    radius: other_radius,
                },
            ) => position.distance(*other_position) <= radius + other_radius + tolerance,
            (
                Shape::Circle { position, radius },
                Shape::Rectangle {
                    position: other_position,
                    x_length: other_x_length,
                    y_length: other_y_length,
                },
            )
            | (
                Shape::Rectangle {
                    position: other_position,
                    x_length: other_x_length,
                    y_length: other_y_length,
                },
                Shape::Circle { position, radius },
            ) => {
                let closest = Position::new(
                    position.x().clamp(
                        other_position.x() - other_x_length / 2.0,
                        other_position.x() + other_x_length / 2.0,
                    ),
                    position.y().clamp(
                        other_position.y() - other_y_length / 2.0,
                        other_position.y() + other_y_length / 2.0,
                    ),
                );
                position.distance(closest) <= radius + tolerance
            }
            (
                Shape::Rectangle {
                    position,
                    x_length,
                    y_length,
                },
                Shape::Rectangle {
                    position: other_position,
                    x_length: other_x_length,
                    y_length: other_y_length,
                },
            ) => {
                (position.x() - other_position.x()).abs()
                    <= (x_length + other_x_length) / 2.0 + tolerance
                    && (position.y() - other_position.y()).abs()
                        <= (y_length + other_y_length) / 2.0 + tolerance
            }
        }
    }

    /// Lower left and upper right corner of the bounding box.
    pub fn bounds(&self) -> (Position, Position) {
        match *self {
            Shape::Circle { position, radius } => (
                Position::new(position.x() - radius, position.y() - radius),
                Position::new(position.x() + radius, position.y() + radius),
            ),
            Shape::Rectangle {
                position,
                x_length,
                y_length,
            } => (
                Position::new(position.x() - x_length / 2.0, position.y() - y_length / 2.0),
                Position::new(position.x() + x_length / 2.0, position.y() + y_length / 2.0),
            ),
        }
    }
}
