//! Grid coordinates and cardinal facings.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable cell coordinate on the grid.
///
/// `x` counts rows (growing downwards) and `y` counts columns (growing to the right),
/// so [`Direction::Top`] decreases `x`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the point translated by `delta`, or `None` if either axis overflows `i32`.
    pub fn checked_offset(self, delta: IVec2) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(delta.x)?,
            y: self.y.checked_add(delta.y)?,
        })
    }
}

impl From<IVec2> for Point {
    fn from(v: IVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Point> for IVec2 {
    fn from(p: Point) -> Self {
        IVec2::new(p.x, p.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The way a robot is facing. Determines where the next step lands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    /// Towards row 0.
    #[default]
    Top,
    /// Towards higher columns.
    Right,
    /// Towards higher rows.
    Bottom,
    /// Towards column 0.
    Left,
}

impl Direction {
    /// All four facings, clockwise from [`Direction::Top`].
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    /// Unit movement for a single step in this direction.
    pub const fn delta(self) -> IVec2 {
        match self {
            Direction::Top => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(0, 1),
            Direction::Bottom => IVec2::new(1, 0),
            Direction::Left => IVec2::new(0, -1),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Direction::Top => "TOP",
            Direction::Right => "RIGHT",
            Direction::Bottom => "BOTTOM",
            Direction::Left => "LEFT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
