//! Basic building blocks.

use std::{
    ops::{Add, Mul, Neg, Sub},
    slice::Iter,
};

use nalgebra::Vector2;

/// Point in arena coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position(Vector2<f64>);

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self(Vector2::new(x, y))
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn component(&self, axis: Axis) -> f64 {
        self.0[axis.index()]
    }

    pub fn distance(&self, position: Self) -> f64 {
        (self.0 - position.0).norm()
    }

    pub fn vector(&self) -> Vector2<f64> {
        self.0
    }

    /// Position reached after moving with `velocity` for `dt` seconds.
    pub fn translated(&self, velocity: Velocity, dt: f64) -> Position {
        Self(self.0 + velocity.0 * dt)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self(Vector2::zeros())
    }
}

impl From<Vector2<f64>> for Position {
    fn from(value: Vector2<f64>) -> Self {
        Self(value)
    }
}

impl From<Position> for (f64, f64) {
    fn from(value: Position) -> Self {
        (value.0.x, value.0.y)
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

/// The difference of two positions is the vector pointing from `rhs` to `self`.
impl Sub for Position {
    type Output = Vector2<f64>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Velocity(Vector2<f64>);

impl Velocity {
    pub const fn new(x: f64, y: f64) -> Self {
        Self(Vector2::new(x, y))
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn speed(&self) -> f64 {
        self.0.norm()
    }

    pub fn component(&self, axis: Axis) -> f64 {
        self.0[axis.index()]
    }

    pub fn set_component(&mut self, axis: Axis, value: f64) {
        self.0[axis.index()] = value;
    }

    pub fn vector(&self) -> Vector2<f64> {
        self.0
    }
}

impl Default for Velocity {
    fn default() -> Self {
        Self(Vector2::zeros())
    }
}

impl From<Vector2<f64>> for Velocity {
    fn from(value: Vector2<f64>) -> Self {
        Self(value)
    }
}

impl From<Velocity> for (f64, f64) {
    fn from(value: Velocity) -> Self {
        (value.0.x, value.0.y)
    }
}

impl Add for Velocity {
    type Output = Velocity;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Velocity {
    type Output = Velocity;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f64> for Velocity {
    type Output = Velocity;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Neg for Velocity {
    type Output = Velocity;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn iter() -> Iter<'static, Axis> {
        static AXES: [Axis; 2] = [Axis::X, Axis::Y];
        AXES.iter()
    }

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }

    /// The perpendicular axis.
    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}
