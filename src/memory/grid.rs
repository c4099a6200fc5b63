//! Program grid
//!
//! The grid is the program text itself: a list of rows, each an independent
//! `Vec<char>`. Rows keep the lengths they had in the source; nothing pads
//! them to a common width. The shape is fixed after construction, only cell
//! contents change (through the `p` instruction).
//!
//! # Wraparound
//!
//! Horizontal moves wrap within the current row, using that row's length.
//! Vertical moves wrap on the row count and keep the column unchanged, so on
//! a jagged grid the IP can land past the end of a shorter row. That position
//! is not clamped here; fetching it fails later with
//! [`OutOfRangeAddress`](crate::interpreter::errors::RuntimeError::OutOfRangeAddress).

use crate::interpreter::state::{Direction, Position};

/// Mutable two-dimensional character store with jagged rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<char>>) -> Self {
        Grid { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of `row`, or `None` if the row does not exist
    pub fn row_len(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(Vec::len)
    }

    /// Length of the longest row
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    pub fn get(&self, pos: Position) -> Option<char> {
        self.rows.get(pos.row)?.get(pos.col).copied()
    }

    /// Overwrite a cell, returning the character it held
    pub fn set(&mut self, pos: Position, value: char) -> Option<char> {
        let cell = self.rows.get_mut(pos.row)?.get_mut(pos.col)?;
        Some(std::mem::replace(cell, value))
    }

    /// Look up a cell by signed coordinates as popped off the stack
    pub fn get_signed(&self, row: i32, col: i32) -> Option<char> {
        self.get(Self::to_position(row, col)?)
    }

    fn to_position(row: i32, col: i32) -> Option<Position> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        Some(Position::new(row, col))
    }

    /// Move one cell in `direction`, wrapping at the edges
    pub fn advance(&self, pos: Position, direction: Direction) -> Position {
        match direction {
            Direction::Right => self.move_right(pos),
            Direction::Left => self.move_left(pos),
            Direction::Down => self.move_down(pos),
            Direction::Up => self.move_up(pos),
        }
    }

    pub fn move_right(&self, pos: Position) -> Position {
        let col = if pos.col >= self.last_column(pos.row) {
            0
        } else {
            pos.col + 1
        };
        Position::new(pos.row, col)
    }

    pub fn move_left(&self, pos: Position) -> Position {
        let col = if pos.col == 0 {
            self.last_column(pos.row)
        } else {
            pos.col - 1
        };
        Position::new(pos.row, col)
    }

    pub fn move_down(&self, pos: Position) -> Position {
        let row = if pos.row >= self.last_row() {
            0
        } else {
            pos.row + 1
        };
        Position::new(row, pos.col)
    }

    pub fn move_up(&self, pos: Position) -> Position {
        let row = if pos.row == 0 {
            self.last_row()
        } else {
            pos.row - 1
        };
        Position::new(row, pos.col)
    }

    fn last_row(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    fn last_column(&self, row: usize) -> usize {
        self.row_len(row).unwrap_or(0).saturating_sub(1)
    }

    /// Rough memory footprint in bytes, used by the snapshot budget
    pub fn estimated_size(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.len() * std::mem::size_of::<char>() + 24)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> Grid {
        Grid::from_rows(rows.iter().map(|r| r.chars().collect()).collect())
    }

    #[test]
    fn test_horizontal_wrap_uses_row_length() {
        let g = grid(&["abc", "de"]);
        assert_eq!(g.move_right(Position::new(0, 2)), Position::new(0, 0));
        assert_eq!(g.move_right(Position::new(1, 1)), Position::new(1, 0));
        assert_eq!(g.move_left(Position::new(0, 0)), Position::new(0, 2));
        assert_eq!(g.move_left(Position::new(1, 0)), Position::new(1, 1));
        assert_eq!(g.move_right(Position::new(0, 0)), Position::new(0, 1));
    }

    #[test]
    fn test_vertical_wrap_keeps_column() {
        let g = grid(&["abc", "de", "fgh"]);
        assert_eq!(g.move_down(Position::new(2, 2)), Position::new(0, 2));
        assert_eq!(g.move_up(Position::new(0, 1)), Position::new(2, 1));
        // Lands past the end of the shorter row; not clamped
        let landed = g.move_down(Position::new(0, 2));
        assert_eq!(landed, Position::new(1, 2));
        assert_eq!(g.get(landed), None);
    }

    #[test]
    fn test_set_returns_previous() {
        let mut g = grid(&["ab"]);
        assert_eq!(g.set(Position::new(0, 1), 'z'), Some('b'));
        assert_eq!(g.get(Position::new(0, 1)), Some('z'));
        assert_eq!(g.set(Position::new(0, 5), 'z'), None);
        assert_eq!(g.row_len(0), Some(2));
    }

    #[test]
    fn test_signed_access_rejects_negative() {
        let g = grid(&["ab"]);
        assert_eq!(g.get_signed(-1, 0), None);
        assert_eq!(g.get_signed(0, -1), None);
        assert_eq!(g.get_signed(0, 1), Some('b'));
    }
}
