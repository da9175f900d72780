//! # robot-grid
//!
//! A bounded two-dimensional grid holding a small, capped set of directional robots.
//!
//! [`GridSpace`] owns every [`Robot`] and is the only place state changes. It rejects
//! any placement or step that would leave the grid, land on another robot, or push
//! the population past its cap. Robots are driven through a [`RobotMut`] handle that
//! validates each single-cell step against the grid before committing it.
//!
//! ```
//! use robot_grid::{Direction, GridSpace, Point};
//!
//! let mut grid = GridSpace::new(5, 5)?;
//! let mut robot = grid.create_robot(Point::new(2, 2))?;
//! robot.advance(2)?;
//! assert_eq!(robot.position(), Point::new(0, 2));
//!
//! robot.change_direction(Direction::Right);
//! robot.step()?;
//! assert_eq!(robot.position(), Point::new(0, 3));
//! # Ok::<(), robot_grid::GridError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod grid;
pub mod robot;

pub use error::*;
pub use geometry::*;
pub use grid::*;
pub use robot::*;
