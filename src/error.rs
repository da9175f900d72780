use crate::geometry::Point;
use thiserror::Error;

/// Validation failures reported by [`GridSpace`](crate::GridSpace) and its robot handles.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid grid dimensions {rows}x{cols}: both must be non-negative")]
    InvalidDimensions { rows: i32, cols: i32 },
    #[error("robot cap {requested} exceeds the ceiling of {ceiling}")]
    InvalidCapacity { requested: usize, ceiling: usize },
    #[error("point {point} is outside the grid")]
    OutOfBounds { point: Point },
    #[error("point {point} is occupied")]
    PointOccupied { point: Point },
    #[error("robot limit of {max} reached")]
    CapacityExceeded { max: usize },
}

pub type GridResult<T> = Result<T, GridError>;
