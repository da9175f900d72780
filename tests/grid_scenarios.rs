// tests/grid_scenarios.rs
use robot_grid::{Direction, GridError, GridSpace, Point, Robot, RobotId};

fn grid(rows: i32, cols: i32) -> GridSpace {
    GridSpace::new(rows, cols).unwrap()
}

#[test]
fn test_walk_to_edge_then_blocked() {
    let mut grid = grid(5, 5);
    let mut robot = grid.create_robot(Point::new(2, 2)).unwrap();
    assert_eq!(robot.direction(), Direction::Top);
    assert_eq!(robot.position(), Point::new(2, 2));

    // (2,2) -> (1,2) -> (0,2)
    robot.advance(2).unwrap();
    assert_eq!(robot.position(), Point::new(0, 2));

    // Next TOP step would be (-1,2).
    let err = robot.step().unwrap_err();
    assert_eq!(
        err,
        GridError::OutOfBounds {
            point: Point::new(-1, 2)
        }
    );
    assert_eq!(robot.position(), Point::new(0, 2));
}

#[test]
fn test_cap_frees_up_after_delete() {
    let mut grid = GridSpace::with_capacity(3, 3, 1).unwrap();
    let a = grid.create_robot(Point::new(0, 0)).unwrap().id();

    let err = grid.create_robot(Point::new(1, 1)).unwrap_err();
    assert_eq!(err, GridError::CapacityExceeded { max: 1 });
    assert_eq!(grid.len(), 1);

    grid.delete(a);
    let b = grid.create_robot(Point::new(1, 1)).unwrap().id();
    assert_ne!(a, b);
    assert_eq!(grid.len(), 1);
}

#[test]
fn test_blocked_by_neighbour() {
    let mut grid = grid(5, 5);
    let a = grid.create_robot(Point::new(0, 0)).unwrap().id();
    grid.create_robot(Point::new(0, 1)).unwrap();

    let mut robot_a = grid.robot_mut(a).unwrap();
    robot_a.change_direction(Direction::Right);
    let err = robot_a.step().unwrap_err();
    assert_eq!(
        err,
        GridError::PointOccupied {
            point: Point::new(0, 1)
        }
    );
    assert_eq!(robot_a.position(), Point::new(0, 0));
}

#[test]
fn test_cell_vacated_by_move_is_reusable() {
    let mut grid = grid(3, 3);
    let a = grid.create_robot(Point::new(1, 1)).unwrap().id();
    grid.robot_mut(a).unwrap().step().unwrap();

    assert!(grid.create_robot(Point::new(1, 1)).is_ok());
    assert_eq!(grid.get_by_id(a).map(Robot::position), Some(Point::new(0, 1)));
}

#[test]
fn test_full_grid_reports_occupancy_before_cap() {
    let mut grid = grid(5, 5);
    for y in 0..5 {
        grid.create_robot(Point::new(0, y)).unwrap();
    }
    assert_eq!(
        grid.create_robot(Point::new(0, 0)).unwrap_err(),
        GridError::PointOccupied {
            point: Point::new(0, 0)
        }
    );
    assert_eq!(
        grid.create_robot(Point::new(4, 4)).unwrap_err(),
        GridError::CapacityExceeded { max: 5 }
    );
}

#[test]
fn test_delete_then_lookup() {
    let mut grid = grid(3, 3);
    let id = grid.create_robot(Point::new(2, 2)).unwrap().id();
    assert!(grid.get_by_id(id).is_some());

    grid.delete(id);
    assert!(grid.get_by_id(id).is_none());
    assert!(grid.robot_mut(id).is_none());
    assert!(grid.is_empty());

    // Second delete is harmless.
    grid.delete(id);
    grid.delete(RobotId(42));
}

#[test]
fn test_visitor_sees_every_robot_once() {
    let mut grid = grid(4, 4);
    let points = [Point::new(4, 4), Point::new(0, 0), Point::new(2, 3)];
    for p in points {
        grid.create_robot(p).unwrap();
    }

    let mut rendered = Vec::new();
    grid.for_each_robot(|robot| rendered.push(robot.to_string()));
    assert_eq!(
        rendered,
        vec!["[1] (4, 4) [TOP]", "[2] (0, 0) [TOP]", "[3] (2, 3) [TOP]"]
    );
}

#[test]
fn test_snapshot_serializes_for_presentation() {
    let mut grid = grid(3, 3);
    let mut robot = grid.create_robot(Point::new(1, 2)).unwrap();
    robot.change_direction(Direction::Left);

    let json = serde_json::to_value(grid.snapshot()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "id": 1, "position": { "x": 1, "y": 2 }, "direction": "LEFT" }
        ])
    );
}

#[test]
fn test_error_messages_name_the_point() {
    let mut grid = grid(1, 1);
    let err = grid.create_robot(Point::new(2, 0)).unwrap_err();
    assert_eq!(err.to_string(), "point (2, 0) is outside the grid");
}
