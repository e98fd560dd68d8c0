//! Sprite orientation from the geometry of neighboring segments. Nothing here
//! touches simulation state.

use super::error::SnakeError;
use super::types::{Cell, Direction};

/// The side the tail tip points to, away from the rest of the body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TailOrientation {
    Left,
    Right,
    Up,
    Down,
}

/// Shape of a body segment; corner variants name the two sides of the cell
/// the segment connects to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyOrientation {
    Horizontal,
    Vertical,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NeighborDirection {
    Top,
    Bottom,
    Left,
    Right,
    Invalid,
}

impl NeighborDirection {
    pub fn flipped(self) -> Self {
        match self {
            NeighborDirection::Top => NeighborDirection::Bottom,
            NeighborDirection::Bottom => NeighborDirection::Top,
            NeighborDirection::Left => NeighborDirection::Right,
            NeighborDirection::Right => NeighborDirection::Left,
            NeighborDirection::Invalid => NeighborDirection::Invalid,
        }
    }

    pub fn points_to(self, direction: Direction) -> bool {
        matches!(
            (self, direction),
            (NeighborDirection::Top, Direction::Up)
                | (NeighborDirection::Bottom, Direction::Down)
                | (NeighborDirection::Left, Direction::Left)
                | (NeighborDirection::Right, Direction::Right)
        )
    }
}

/// Where `b` lies relative to `a`, if they share a row or a column.
pub fn neighbor_direction(a: Cell, b: Cell) -> NeighborDirection {
    if a.column == b.column {
        if a.row < b.row {
            return NeighborDirection::Bottom;
        }
        return NeighborDirection::Top;
    }

    if a.row == b.row {
        if a.column < b.column {
            return NeighborDirection::Right;
        }
        return NeighborDirection::Left;
    }

    NeighborDirection::Invalid
}

pub fn tail_orientation(tail: Cell, next: Cell) -> TailOrientation {
    if next.column > tail.column {
        TailOrientation::Left
    } else if next.column < tail.column {
        TailOrientation::Right
    } else if next.row < tail.row {
        TailOrientation::Down
    } else {
        TailOrientation::Up
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

fn side_of(cell: Cell, neighbor: Cell) -> Option<Side> {
    match (neighbor.column - cell.column, neighbor.row - cell.row) {
        (0, -1) => Some(Side::Top),
        (0, 1) => Some(Side::Bottom),
        (-1, 0) => Some(Side::Left),
        (1, 0) => Some(Side::Right),
        _ => None,
    }
}

/// Callers pass neighbors already unwrapped across the grid edge, so every
/// valid triple is 4-connected.
pub fn body_orientation(before: Cell, cell: Cell, after: Cell) -> Result<BodyOrientation, SnakeError> {
    let (Some(from), Some(to)) = (side_of(cell, before), side_of(cell, after)) else {
        return Err(SnakeError::InvariantViolation(format!(
            "segment {} is not 4-connected to {} and {}",
            cell, before, after
        )));
    };

    match (from, to) {
        (Side::Left, Side::Right) | (Side::Right, Side::Left) => Ok(BodyOrientation::Horizontal),
        (Side::Top, Side::Bottom) | (Side::Bottom, Side::Top) => Ok(BodyOrientation::Vertical),
        (Side::Top, Side::Left) | (Side::Left, Side::Top) => Ok(BodyOrientation::TopLeft),
        (Side::Top, Side::Right) | (Side::Right, Side::Top) => Ok(BodyOrientation::TopRight),
        (Side::Bottom, Side::Left) | (Side::Left, Side::Bottom) => Ok(BodyOrientation::BottomLeft),
        (Side::Bottom, Side::Right) | (Side::Right, Side::Bottom) => Ok(BodyOrientation::BottomRight),
        _ => Err(SnakeError::InvariantViolation(format!(
            "segment {} folds back: {} and {} are the same side",
            cell, before, after
        ))),
    }
}
