// Execution engine for the Befunge interpreter

use crate::interpreter::config::InterpreterConfig;
use crate::interpreter::constants::TERMINATOR;
use crate::interpreter::errors::RuntimeError;
use crate::interpreter::instruction::Instruction;
use crate::interpreter::state::{Direction, ExecutionState, Position};
use crate::memory::{grid::Grid, stack::Stack};
use crate::parser;
use crate::snapshot::{OutputBuffer, Snapshot};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;

/// Run a program to completion and return its output
pub fn interpret(source: &str) -> Result<String, RuntimeError> {
    interpret_with(source, &InterpreterConfig::default())
}

/// Run a program with explicit configuration (e.g. a fixed `?` seed)
pub fn interpret_with(source: &str, config: &InterpreterConfig) -> Result<String, RuntimeError> {
    Interpreter::new(source, config).run()
}

/// Character for a stack value, as stored by `p` and printed by `,`
///
/// Only the low 16 bits are kept. Codes in the surrogate range have no `char`
/// and become U+FFFD.
pub(crate) fn to_char(value: i32) -> char {
    char::from_u32(u32::from(value as u16)).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Result of a single [`Interpreter::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A cell was consumed and the IP moved on
    Running,
    /// The IP is on the terminator; nothing was executed
    Halted,
}

/// A single run of a Befunge program
///
/// Owns the grid, stack, IP state and output for exactly one run. `R` is the
/// random source used by `?`.
pub struct Interpreter<R = StdRng> {
    /// Program text, mutated by `p`
    grid: Grid,

    stack: Stack,

    /// IP position, direction and mode flags
    state: ExecutionState,

    output: OutputBuffer,

    /// Cells overwritten by `p` so far
    modified_cells: FxHashSet<Position>,

    /// Number of cells consumed (executed or skipped)
    steps: u64,

    /// Whether the terminator has been reached
    halted: bool,

    rng: R,
}

impl Interpreter<StdRng> {
    /// Create an interpreter whose RNG is seeded from `config`
    pub fn new(source: &str, config: &InterpreterConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Interpreter::with_rng(source, rng)
    }
}

impl<R: Rng> Interpreter<R> {
    /// Create an interpreter with a caller-supplied random source
    pub fn with_rng(source: &str, rng: R) -> Self {
        Interpreter {
            grid: parser::parse(source),
            stack: Stack::new(),
            state: ExecutionState::new(),
            output: OutputBuffer::new(),
            modified_cells: FxHashSet::default(),
            steps: 0,
            halted: false,
            rng,
        }
    }

    /// Run until the terminator and return the accumulated output.
    ///
    /// Does not return if the program never reaches `@`.
    pub fn run(mut self) -> Result<String, RuntimeError> {
        while self.step()? == StepOutcome::Running {}
        Ok(self.output.into_string())
    }

    /// Execute one iteration of the fetch/dispatch/move loop
    pub fn step(&mut self) -> Result<StepOutcome, RuntimeError> {
        if self.halted {
            return Ok(StepOutcome::Halted);
        }

        let position = self.state.position;
        let cell = self
            .grid
            .get(position)
            .ok_or(RuntimeError::OutOfRangeAddress {
                row: position.row as i64,
                col: position.col as i64,
                position,
            })?;

        // Terminator wins over a pending trampoline
        if cell == TERMINATOR {
            self.halted = true;
            return Ok(StepOutcome::Halted);
        }

        if self.state.skip_next {
            self.state.skip_next = false;
        } else {
            self.execute(Instruction::decode(cell), cell)?;
        }

        self.state.position = self.grid.advance(position, self.state.direction);
        self.steps += 1;
        Ok(StepOutcome::Running)
    }

    /// Dispatch one decoded instruction
    fn execute(&mut self, instruction: Instruction, cell: char) -> Result<(), RuntimeError> {
        match instruction {
            Instruction::Add => self.binary_op(cell, |a, b| a.wrapping_add(b))?,
            Instruction::Subtract => self.binary_op(cell, |a, b| b.wrapping_sub(a))?,
            Instruction::Multiply => self.binary_op(cell, |a, b| a.wrapping_mul(b))?,
            Instruction::Divide => {
                self.binary_op(cell, |a, b| if a == 0 { 0 } else { b.wrapping_div(a) })?
            }
            Instruction::Modulo => {
                self.binary_op(cell, |a, b| if a == 0 { 0 } else { b.wrapping_rem(a) })?
            }
            Instruction::GreaterThan => self.binary_op(cell, |a, b| i32::from(b > a))?,
            Instruction::Not => {
                if self.state.string_mode {
                    self.stack.push(cell as i32);
                } else {
                    let value = self.pop(cell)?;
                    self.stack.push(i32::from(value == 0));
                }
            }
            Instruction::Go(direction) => self.state.direction = direction,
            Instruction::Random => self.state.direction = self.rng.gen(),
            Instruction::HorizontalIf => {
                self.state.direction = if self.pop(cell)? == 0 {
                    Direction::Right
                } else {
                    Direction::Left
                };
            }
            Instruction::VerticalIf => {
                self.state.direction = if self.pop(cell)? == 0 {
                    Direction::Down
                } else {
                    Direction::Up
                };
            }
            Instruction::ToggleStringMode => self.state.string_mode = !self.state.string_mode,
            Instruction::Duplicate => self.stack.duplicate(),
            Instruction::Swap => self.stack.swap(),
            Instruction::Discard => {
                self.pop(cell)?;
            }
            Instruction::OutputInt => {
                let value = self.pop(cell)?;
                self.output.push_str(&value.to_string());
            }
            Instruction::OutputChar => {
                let value = self.pop(cell)?;
                self.output.push(to_char(value));
            }
            Instruction::Trampoline => self.state.skip_next = true,
            Instruction::Put => self.put(cell)?,
            Instruction::Get => self.get(cell)?,
            Instruction::Space => {
                if self.state.string_mode {
                    self.stack.push(cell as i32);
                }
            }
            Instruction::Push(c) => {
                self.stack
                    .push(Instruction::push_value(c, self.state.string_mode));
            }
        }
        Ok(())
    }

    /// Pop for an instruction that has no zero-fill policy
    pub(crate) fn pop(&mut self, instruction: char) -> Result<i32, RuntimeError> {
        self.stack.pop().ok_or(RuntimeError::StackUnderflow {
            instruction,
            position: self.state.position,
        })
    }

    // ========== Snapshot support ==========

    /// Copy the full run state
    pub fn capture(&self) -> Snapshot {
        Snapshot {
            grid: self.grid.clone(),
            stack: self.stack.clone(),
            state: self.state,
            output: self.output.clone(),
            modified_cells: self.modified_cells.clone(),
            steps: self.steps,
            halted: self.halted,
        }
    }

    /// Restore run state from a snapshot; the RNG is left as is
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.grid = snapshot.grid.clone();
        self.stack = snapshot.stack.clone();
        self.state = snapshot.state;
        self.output = snapshot.output.clone();
        self.modified_cells = snapshot.modified_cells.clone();
        self.steps = snapshot.steps;
        self.halted = snapshot.halted;
    }

    // ========== Getter methods for UI ==========

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn state(&self) -> &ExecutionState {
        &self.state
    }

    pub fn output(&self) -> &OutputBuffer {
        &self.output
    }

    pub fn modified_cells(&self) -> &FxHashSet<Position> {
        &self.modified_cells
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub(crate) fn stack_mut(&mut self) -> &mut Stack {
        &mut self.stack
    }

    // Grid writes go through here so the modified set stays in sync
    pub(crate) fn write_cell(&mut self, pos: Position, value: char) {
        if self.grid.set(pos, value).is_some() {
            self.modified_cells.insert(pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str) -> Result<String, RuntimeError> {
        interpret_with(source, &InterpreterConfig::seeded(0))
    }

    #[test]
    fn test_add_and_print() {
        assert_eq!(run("91+.@").unwrap(), "10");
        assert_eq!(run("22*.@").unwrap(), "4");
    }

    #[test]
    fn test_terminator_only() {
        assert_eq!(run("@").unwrap(), "");
    }

    #[test]
    fn test_string_mode_pushes_codes() {
        assert_eq!(run("\"Hi\",,@").unwrap(), "iH");
    }

    #[test]
    fn test_subtract_operand_order() {
        assert_eq!(run("73-.@").unwrap(), "4");
        assert_eq!(run("37-.@").unwrap(), "-4");
        assert_eq!(run("72/.@").unwrap(), "3");
        assert_eq!(run("72%.@").unwrap(), "1");
        assert_eq!(run("72`.@").unwrap(), "1");
        assert_eq!(run("27`.@").unwrap(), "0");
    }

    #[test]
    fn test_division_by_zero_yields_zero() {
        assert_eq!(run("50/.@").unwrap(), "0");
        assert_eq!(run("50%.@").unwrap(), "0");
        assert_eq!(run("00/.@").unwrap(), "0");
    }

    #[test]
    fn test_not() {
        assert_eq!(run("0!.@").unwrap(), "1");
        assert_eq!(run("5!.@").unwrap(), "0");
        // In string mode `!` is a literal
        assert_eq!(run("\"!\",@").unwrap(), "!");
    }

    #[test]
    fn test_operators_still_run_in_string_mode() {
        // `+` inside the string adds '2' (50) and '3' (51)
        assert_eq!(run("\"23+\".@").unwrap(), "101");
    }

    #[test]
    fn test_space_in_string_mode() {
        assert_eq!(run("\" \".@").unwrap(), "32");
        assert_eq!(run("1 2 + .@").unwrap(), "3");
    }

    #[test]
    fn test_unlisted_character_pushes_offset() {
        // 'A' - '0' = 17
        assert_eq!(run("A.@").unwrap(), "17");
    }

    #[test]
    fn test_trampoline_skips_one_cell() {
        assert_eq!(run("1#2.@").unwrap(), "1");
    }

    #[test]
    fn test_terminator_beats_trampoline() {
        assert_eq!(run("#@5.@").unwrap(), "");
    }

    #[test]
    fn test_put_then_get() {
        // Write 'X' (88) at row 1, col 0, which the IP never reaches
        assert_eq!(run("9:*7+01p01g.@\n ").unwrap(), "88");
    }

    #[test]
    fn test_wrapping_arithmetic() {
        // 0 - 1 then multiply far past i32::MAX must not panic
        let source = "01-99*:*:*:*:*.@";
        assert!(run(source).is_ok());
    }

    #[test]
    fn test_stack_underflow() {
        let err = run("+@").unwrap_err();
        assert_eq!(
            err,
            RuntimeError::StackUnderflow {
                instruction: '+',
                position: Position::new(0, 0),
            }
        );
        assert!(matches!(run(".@"), Err(RuntimeError::StackUnderflow { .. })));
        assert!(matches!(run("$@"), Err(RuntimeError::StackUnderflow { .. })));
        assert!(matches!(run("_@"), Err(RuntimeError::StackUnderflow { .. })));
    }

    #[test]
    fn test_duplicate_and_swap_never_underflow() {
        assert_eq!(run(":.@").unwrap(), "0");
        assert_eq!(run("5\\..@").unwrap(), "50");
        assert_eq!(run("\\..@").unwrap(), "00");
    }

    #[test]
    fn test_vertical_wrap_into_short_row() {
        let err = run("  v\n@\n").unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::OutOfRangeAddress { row: 1, col: 2, .. }
        ));
    }

    #[test]
    fn test_output_character_keeps_low_16_bits() {
        assert_eq!(run("01-,@").unwrap(), "\u{FFFF}");
        assert_eq!(to_char(65 + 65536), 'A');
        assert_eq!(to_char(-65536), '\0');
        assert_eq!(to_char(0xD800), char::REPLACEMENT_CHARACTER);
        assert_eq!(to_char(0xDFFF), char::REPLACEMENT_CHARACTER);
    }

    #[test]
    fn test_step_reports_halt_and_stays_halted() {
        let mut interp = Interpreter::new("1@", &InterpreterConfig::seeded(1));
        assert_eq!(interp.step().unwrap(), StepOutcome::Running);
        assert_eq!(interp.stack().values(), &[1]);
        assert_eq!(interp.step().unwrap(), StepOutcome::Halted);
        assert_eq!(interp.step().unwrap(), StepOutcome::Halted);
        assert!(interp.is_halted());
        assert_eq!(interp.steps(), 1);
        assert_eq!(interp.state().position, Position::new(0, 1));
    }

    #[test]
    fn test_capture_and_restore() {
        let mut interp = Interpreter::new("12+.@", &InterpreterConfig::seeded(1));
        interp.step().unwrap();
        let snap = interp.capture();
        interp.step().unwrap();
        interp.step().unwrap();
        assert_eq!(interp.stack().values(), &[3]);

        interp.restore(&snap);
        assert_eq!(interp.stack().values(), &[1]);
        assert_eq!(interp.state().position, Position::new(0, 1));
        assert_eq!(interp.steps(), 1);
    }
}
