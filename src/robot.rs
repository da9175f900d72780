//! Robot state and the mutable handle used to drive it.

use crate::error::{GridError, GridResult};
use crate::geometry::{Direction, Point};
use crate::grid::GridSpace;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Identity of a robot within the [`GridSpace`] that created it.
///
/// Ids are minted in increasing order and never reused by the same grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RobotId(pub u64);

impl fmt::Display for RobotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A robot standing on the grid.
///
/// Only [`GridSpace::create_robot`] builds these. Position changes go through
/// [`RobotMut`] so every step is checked against the rest of the grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robot {
    id: RobotId,
    position: Point,
    direction: Direction,
}

impl Robot {
    /// Facing given to every freshly created robot.
    pub const DEFAULT_DIRECTION: Direction = Direction::Top;

    pub(crate) fn new(id: RobotId, position: Point) -> Self {
        Self {
            id,
            position,
            direction: Self::DEFAULT_DIRECTION,
        }
    }

    pub fn id(&self) -> RobotId {
        self.id
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl fmt::Display for Robot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} [{}]", self.id, self.position, self.direction)
    }
}

/// Exclusive handle to one live robot.
///
/// The handle borrows the whole grid mutably, so the robot cannot be deleted and
/// no other robot can move while it exists.
pub struct RobotMut<'a> {
    grid: &'a mut GridSpace,
    id: RobotId,
}

impl<'a> RobotMut<'a> {
    /// `id` must name a robot currently held by `grid`.
    pub(crate) fn new(grid: &'a mut GridSpace, id: RobotId) -> Self {
        Self { grid, id }
    }

    pub fn id(&self) -> RobotId {
        self.id
    }

    pub fn position(&self) -> Point {
        self.robot().position
    }

    pub fn direction(&self) -> Direction {
        self.robot().direction
    }

    /// Read-only view of the underlying robot.
    pub fn robot(&self) -> &Robot {
        self.grid
            .robots
            .get(&self.id)
            .unwrap_or_else(|| unreachable!("handle outlived robot {}", self.id))
    }

    fn robot_mut(&mut self) -> &mut Robot {
        self.grid
            .robots
            .get_mut(&self.id)
            .unwrap_or_else(|| unreachable!("handle outlived robot {}", self.id))
    }

    /// Turns the robot to face `direction`. Always succeeds.
    pub fn change_direction(&mut self, direction: Direction) {
        self.robot_mut().direction = direction;
    }

    /// Moves one cell forward. Same as `advance(1)`.
    pub fn step(&mut self) -> GridResult<()> {
        self.advance(1)
    }

    /// Moves `steps` cells forward, one at a time.
    ///
    /// Every step is validated before it is committed. If a step is rejected the
    /// error is returned and the robot stays on the last accepted cell, so earlier
    /// steps are not rolled back.
    pub fn advance(&mut self, steps: u32) -> GridResult<()> {
        for _ in 0..steps {
            let from = self.position();
            let Some(to) = from.checked_offset(self.direction().delta()) else {
                trace!(robot = %self.id, %from, "step leaves the coordinate range");
                return Err(GridError::OutOfBounds { point: from });
            };
            self.grid.validate_move_point(to, Some(self.id))?;
            self.robot_mut().position = to;
            debug!(robot = %self.id, %from, %to, "robot moved");
        }
        Ok(())
    }
}

impl fmt::Debug for RobotMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RobotMut").field(self.robot()).finish()
    }
}
