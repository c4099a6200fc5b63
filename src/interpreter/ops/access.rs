//! Grid self-modification: `p` and `g`
//!
//! Both pop the row index first and the column index second. Coordinates are
//! checked against the grid's current shape; there is no wraparound for
//! `p`/`g` addresses.

use crate::interpreter::engine::{to_char, Interpreter};
use crate::interpreter::errors::RuntimeError;
use crate::interpreter::state::Position;
use rand::Rng;

impl<R: Rng> Interpreter<R> {
    /// `p`: pop row, column, value; store the low 16 bits of `value` as a character
    pub(crate) fn put(&mut self, instruction: char) -> Result<(), RuntimeError> {
        let row = self.pop(instruction)?;
        let col = self.pop(instruction)?;
        let value = self.pop(instruction)?;

        let target = self.checked_address(row, col)?;
        self.write_cell(target, to_char(value));
        Ok(())
    }

    /// `g`: pop row, column; push the code of the character stored there
    pub(crate) fn get(&mut self, instruction: char) -> Result<(), RuntimeError> {
        let row = self.pop(instruction)?;
        let col = self.pop(instruction)?;

        let c = self
            .grid()
            .get_signed(row, col)
            .ok_or_else(|| self.out_of_range(row, col))?;
        self.stack_mut().push(c as i32);
        Ok(())
    }

    fn checked_address(&self, row: i32, col: i32) -> Result<Position, RuntimeError> {
        match self.grid().get_signed(row, col) {
            Some(_) => Ok(Position::new(row as usize, col as usize)),
            None => Err(self.out_of_range(row, col)),
        }
    }

    fn out_of_range(&self, row: i32, col: i32) -> RuntimeError {
        RuntimeError::OutOfRangeAddress {
            row: i64::from(row),
            col: i64::from(col),
            position: self.state().position,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::config::InterpreterConfig;
    use crate::interpreter::engine::{interpret_with, Interpreter, StepOutcome};
    use crate::interpreter::errors::RuntimeError;
    use crate::interpreter::state::Position;

    fn run(source: &str) -> Result<String, RuntimeError> {
        interpret_with(source, &InterpreterConfig::seeded(0))
    }

    #[test]
    fn test_get_reads_other_row() {
        // Row 1, column 0 holds 'A' (65)
        assert_eq!(run("01g.@\nA").unwrap(), "65");
    }

    #[test]
    fn test_put_changes_executed_code() {
        assert_eq!(run("7$@").unwrap(), "");
        // Store '.' (46) over the `$` before the IP reaches it
        assert_eq!(run("759*1+90p$@").unwrap(), "7");
    }

    #[test]
    fn test_put_truncates_negative_value() {
        let mut interp = Interpreter::new("01-00p@", &InterpreterConfig::seeded(0));
        while interp.step().unwrap() == StepOutcome::Running {}
        assert_eq!(interp.grid().get(Position::new(0, 0)), Some('\u{FFFF}'));
        assert!(interp.modified_cells().contains(&Position::new(0, 0)));
    }

    #[test]
    fn test_out_of_range_put() {
        let err = run("1990p@").unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::OutOfRangeAddress { row: 0, col: 9, .. }
        ));
        let err = run("01-0g@").unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::OutOfRangeAddress { row: 0, col: -1, .. }
        ));
    }
}
