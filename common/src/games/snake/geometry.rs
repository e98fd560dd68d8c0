use std::collections::HashSet;

use crate::games::SessionRng;
use super::error::SnakeError;
use super::types::{Cell, FieldSize};

/// Moves a coordinate that left the grid to the opposite edge, per axis.
pub fn wrap_if_out_of_bounds(cell: Cell, field: &FieldSize) -> Cell {
    let piece_size = i64::from(field.piece_size);

    let column = if cell.column < 0 {
        field.columns() - 1
    } else if i64::from(cell.column) * piece_size >= i64::from(field.width) {
        0
    } else {
        cell.column
    };

    let row = if cell.row < 0 {
        field.rows() - 1
    } else if i64::from(cell.row) * piece_size >= i64::from(field.height) {
        0
    } else {
        cell.row
    };

    Cell::new(column, row)
}

pub fn cells_equal(a: Cell, b: Cell) -> bool {
    a.column == b.column && a.row == b.row
}

pub fn sample_free_cell(
    field: &FieldSize,
    occupied: &HashSet<Cell>,
    rng: &mut SessionRng,
) -> Result<Cell, SnakeError> {
    let mut free = Vec::with_capacity(field.cell_count().saturating_sub(occupied.len()));
    free.extend(field.cells().filter(|cell| !occupied.contains(cell)));

    if free.is_empty() {
        return Err(SnakeError::Exhausted);
    }

    Ok(free[rng.random_range(0..free.len())])
}
