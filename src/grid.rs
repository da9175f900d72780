//! The bounded grid that owns every robot and enforces placement rules.
//!
//! Build one with [`GridSpace::new`], [`GridSpace::with_capacity`] or
//! [`GridSpace::from_config`], place robots with [`GridSpace::create_robot`] and
//! drive them through the returned [`RobotMut`] handle.
//!
//! # Bounds
//!
//! A point is inside the grid when `0 <= x <= rows` and `0 <= y <= cols`. Both
//! upper bounds are inclusive, so a `rows x cols` grid has `(rows + 1) * (cols + 1)`
//! usable cells. This looks like an off-by-one but is the established contract.

use crate::error::{GridError, GridResult};
use crate::geometry::Point;
use crate::robot::{Robot, RobotId, RobotMut};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Hard upper limit on how many robots any grid may hold.
pub const MAX_ROBOTS_CEILING: usize = 5;

/// Robot cap used when none is given.
pub const DEFAULT_MAX_ROBOTS: usize = 5;

/// Configuration for a [`GridSpace`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Highest valid `x` coordinate. Must be non-negative.
    pub rows: i32,
    /// Highest valid `y` coordinate. Must be non-negative.
    pub cols: i32,
    /// Maximum number of live robots. Must not exceed [`MAX_ROBOTS_CEILING`].
    pub max_robots: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            max_robots: DEFAULT_MAX_ROBOTS,
        }
    }
}

/// Fixed-size grid holding a capped set of robots.
///
/// No two robots share a cell and the population never exceeds the cap. Robots are
/// kept in insertion order for [`for_each_robot`](Self::for_each_robot).
#[derive(Debug)]
pub struct GridSpace {
    rows: i32,
    cols: i32,
    max_robots: usize,
    pub(crate) robots: HashMap<RobotId, Robot>,
    order: Vec<RobotId>,
    next_id: u64,
}

impl GridSpace {
    /// Creates a grid with the default robot cap.
    pub fn new(rows: i32, cols: i32) -> GridResult<Self> {
        Self::with_capacity(rows, cols, DEFAULT_MAX_ROBOTS)
    }

    /// Creates a grid holding at most `max_robots` robots.
    pub fn with_capacity(rows: i32, cols: i32, max_robots: usize) -> GridResult<Self> {
        Self::from_config(GridConfig {
            rows,
            cols,
            max_robots,
        })
    }

    /// Creates a grid from `config`.
    ///
    /// Fails with [`GridError::InvalidDimensions`] if `rows` or `cols` is negative and
    /// with [`GridError::InvalidCapacity`] if `max_robots` exceeds [`MAX_ROBOTS_CEILING`].
    pub fn from_config(config: GridConfig) -> GridResult<Self> {
        let GridConfig {
            rows,
            cols,
            max_robots,
        } = config;
        if rows < 0 || cols < 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        if max_robots > MAX_ROBOTS_CEILING {
            return Err(GridError::InvalidCapacity {
                requested: max_robots,
                ceiling: MAX_ROBOTS_CEILING,
            });
        }
        Ok(Self {
            rows,
            cols,
            max_robots,
            robots: HashMap::with_capacity(max_robots),
            order: Vec::with_capacity(max_robots),
            next_id: 1,
        })
    }

    /// Highest valid `x` coordinate.
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Highest valid `y` coordinate.
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Maximum number of robots this grid may hold.
    pub fn max_robots(&self) -> usize {
        self.max_robots
    }

    /// Number of live robots.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// `true` when no robots are on the grid.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Places a new robot facing [`Direction::Top`](crate::Direction::Top) at `point`.
    ///
    /// Checks bounds, then occupancy, then the population cap. Nothing is inserted
    /// and no id is consumed when any check fails.
    pub fn create_robot(&mut self, point: Point) -> GridResult<RobotMut<'_>> {
        self.validate_move_point(point, None)?;
        if self.order.len() >= self.max_robots {
            trace!(%point, max = self.max_robots, "robot cap reached");
            return Err(GridError::CapacityExceeded {
                max: self.max_robots,
            });
        }

        let id = RobotId(self.next_id);
        self.next_id += 1;
        self.robots.insert(id, Robot::new(id, point));
        self.order.push(id);
        debug!(robot = %id, %point, "robot created");

        Ok(RobotMut::new(self, id))
    }

    /// Removes the robot with `id`. Unknown ids are ignored.
    pub fn delete(&mut self, id: RobotId) {
        if self.robots.remove(&id).is_some() {
            self.order.retain(|&other| other != id);
            debug!(robot = %id, "robot deleted");
        }
    }

    /// The robot with `id`, or `None` if it was never created or has been deleted.
    pub fn get_by_id(&self, id: RobotId) -> Option<&Robot> {
        self.robots.get(&id)
    }

    /// Returns a handle for moving or turning the robot with `id`.
    pub fn robot_mut(&mut self, id: RobotId) -> Option<RobotMut<'_>> {
        if self.robots.contains_key(&id) {
            Some(RobotMut::new(self, id))
        } else {
            None
        }
    }

    /// The robot standing on `point`, if any.
    pub fn robot_at(&self, point: Point) -> Option<&Robot> {
        self.robots().find(|robot| robot.position() == point)
    }

    /// `true` when a robot stands on `point`.
    pub fn contains(&self, point: Point) -> bool {
        self.robot_at(point).is_some()
    }

    /// Iterates robots in insertion order.
    pub fn robots(&self) -> impl Iterator<Item = &Robot> + '_ {
        self.order.iter().filter_map(|id| self.robots.get(id))
    }

    /// Calls `visitor` once per robot, in insertion order.
    pub fn for_each_robot<F>(&self, visitor: F)
    where
        F: FnMut(&Robot),
    {
        self.robots().for_each(visitor);
    }

    /// Owned copies of every robot in insertion order.
    pub fn snapshot(&self) -> Vec<Robot> {
        self.robots().cloned().collect()
    }

    /// `true` when `point` lies in the inclusive range `[0, rows] x [0, cols]`.
    pub fn in_bounds(&self, point: Point) -> bool {
        (0..=self.rows).contains(&point.x) && (0..=self.cols).contains(&point.y)
    }

    /// Bounds and occupancy check shared by placement and movement.
    ///
    /// `mover` is skipped when looking for an occupant.
    pub(crate) fn validate_move_point(&self, point: Point, mover: Option<RobotId>) -> GridResult<()> {
        if !self.in_bounds(point) {
            trace!(%point, rows = self.rows, cols = self.cols, "point out of bounds");
            return Err(GridError::OutOfBounds { point });
        }
        if let Some(occupant) = self.robot_at(point)
            && Some(occupant.id()) != mover
        {
            trace!(%point, occupant = %occupant.id(), "point occupied");
            return Err(GridError::PointOccupied { point });
        }
        Ok(())
    }
}
