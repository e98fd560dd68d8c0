use serde::{Deserialize, Serialize};
use std::fmt;

/// A grid square addressed by (column, row). Coordinates are signed so that a
/// head stepped past the left or top edge can exist until it is wrapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub column: i32,
    pub row: i32,
}

impl Cell {
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dc, dr) = direction.delta();
        Self::new(self.column + dc, self.row + dr)
    }

    pub fn is_adjacent_to(self, other: Cell) -> bool {
        (self.column - other.column).abs() + (self.row - other.row).abs() == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.column, self.row)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Column/row offset applied to the head; rows grow downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// Pixel dimensions of the playing surface and the pixel size of one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSize {
    pub width: u32,
    pub height: u32,
    pub piece_size: u32,
}

impl FieldSize {
    pub fn new(width: u32, height: u32, piece_size: u32) -> Self {
        Self { width, height, piece_size }
    }

    pub fn columns(&self) -> i32 {
        (self.width / self.piece_size.max(1)) as i32
    }

    pub fn rows(&self) -> i32 {
        (self.height / self.piece_size.max(1)) as i32
    }

    pub fn cell_count(&self) -> usize {
        self.columns() as usize * self.rows() as usize
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.columns()).contains(&cell.column) && (0..self.rows()).contains(&cell.row)
    }

    /// Every cell of the grid, column by column.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let rows = self.rows();
        (0..self.columns()).flat_map(move |column| (0..rows).map(move |row| Cell::new(column, row)))
    }

    /// Re-expresses `neighbor` as seen from `cell`: a neighbor lying on the
    /// opposite edge is moved just outside the grid next to `cell`.
    pub fn unwrap_neighbor(&self, cell: Cell, neighbor: Cell) -> Cell {
        let mut unwrapped = neighbor;
        let dc = neighbor.column - cell.column;
        if dc > 1 {
            unwrapped.column -= self.columns();
        } else if dc < -1 {
            unwrapped.column += self.columns();
        }
        let dr = neighbor.row - cell.row;
        if dr > 1 {
            unwrapped.row -= self.rows();
        } else if dr < -1 {
            unwrapped.row += self.rows();
        }
        unwrapped
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEndReason {
    SelfCollision,
    /// No free cell left for food; the player filled the board.
    BoardFilled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Over(GameEndReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_size_from_pixels() {
        let field = FieldSize::new(600, 300, 30);
        assert_eq!(field.columns(), 20);
        assert_eq!(field.rows(), 10);
        assert_eq!(field.cell_count(), 200);
        assert_eq!(field.cells().count(), 200);
    }

    #[test]
    fn test_contains() {
        let field = FieldSize::new(600, 300, 30);
        assert!(field.contains(Cell::new(0, 0)));
        assert!(field.contains(Cell::new(19, 9)));
        assert!(!field.contains(Cell::new(20, 9)));
        assert!(!field.contains(Cell::new(-1, 0)));
    }

    #[test]
    fn test_unwrap_neighbor_across_edges() {
        let field = FieldSize::new(600, 300, 30);
        assert_eq!(field.unwrap_neighbor(Cell::new(0, 3), Cell::new(19, 3)), Cell::new(-1, 3));
        assert_eq!(field.unwrap_neighbor(Cell::new(19, 3), Cell::new(0, 3)), Cell::new(20, 3));
        assert_eq!(field.unwrap_neighbor(Cell::new(4, 0), Cell::new(4, 9)), Cell::new(4, -1));
        assert_eq!(field.unwrap_neighbor(Cell::new(4, 5), Cell::new(4, 6)), Cell::new(4, 6));
    }

    #[test]
    fn test_step_and_opposite() {
        let cell = Cell::new(5, 1);
        for direction in Direction::ALL {
            assert_eq!(cell.step(direction).step(direction.opposite()), cell);
            assert!(cell.step(direction).is_adjacent_to(cell));
            assert_ne!(direction, direction.opposite());
        }
    }
}
