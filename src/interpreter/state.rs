//! Instruction pointer and mode flags

use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;

/// A cell coordinate: `row` indexes lines, `col` indexes characters in a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}, column {}", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Right,
    Left,
    Down,
    Up,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    /// Arrow glyph used by the UI
    pub fn arrow(self) -> char {
        match self {
            Direction::Right => '→',
            Direction::Left => '←',
            Direction::Down => '↓',
            Direction::Up => '↑',
        }
    }
}

/// Uniform choice among the four directions, used by `?`
impl Distribution<Direction> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        Direction::ALL[rng.gen_range(0..Direction::ALL.len())]
    }
}

/// Everything about the IP except the cell under it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecutionState {
    pub position: Position,
    pub direction: Direction,
    pub string_mode: bool,
    /// Set by `#`: the next visited cell is fetched but not executed
    pub skip_next: bool,
}

impl ExecutionState {
    /// IP at the top-left corner heading right, both flags off
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_initial_state() {
        let state = ExecutionState::new();
        assert_eq!(state.position, Position::new(0, 0));
        assert_eq!(state.direction, Direction::Right);
        assert!(!state.string_mode);
        assert!(!state.skip_next);
    }

    #[test]
    fn test_random_direction_covers_all() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts = [0usize; 4];
        for _ in 0..2000 {
            let dir: Direction = rng.gen();
            let idx = Direction::ALL.iter().position(|d| *d == dir).unwrap();
            counts[idx] += 1;
        }
        // Expected 500 each; allow a wide margin
        for count in counts {
            assert!(count > 400 && count < 600, "skewed counts: {:?}", counts);
        }
    }
}
