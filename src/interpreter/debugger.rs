//! Time-travel execution history
//!
//! [`Debugger`] wraps an [`Interpreter`] and records a [`Snapshot`] after every
//! step. Stepping backward restores an earlier snapshot; stepping forward
//! replays recorded history first and only executes new cells once the end of
//! history is reached. Because replayed steps never re-run, `?` keeps
//! whatever direction it picked the first time.
//!
//! History is bounded only by the snapshot memory limit. A program that never
//! reaches `@` can be stepped until that limit is hit. Hitting the limit is
//! sticky like a runtime error, so a `?` that could not be recorded is never
//! drawn again.

use crate::interpreter::engine::{Interpreter, StepOutcome};
use crate::interpreter::errors::RuntimeError;
use crate::snapshot::SnapshotManager;
use rand::rngs::StdRng;
use rand::Rng;

pub struct Debugger<R = StdRng> {
    interpreter: Interpreter<R>,

    snapshot_manager: SnapshotManager,

    /// Index of the snapshot currently loaded into the interpreter
    history_position: usize,

    /// Error raised by the step after the last snapshot, if any
    error: Option<RuntimeError>,
}

impl<R: Rng> Debugger<R> {
    /// Wrap `interpreter`, recording its current state as the first snapshot
    pub fn new(interpreter: Interpreter<R>, memory_limit: usize) -> Result<Self, RuntimeError> {
        let mut snapshot_manager = SnapshotManager::new(memory_limit);
        snapshot_manager
            .push(interpreter.capture())
            .map_err(|_| RuntimeError::SnapshotLimitExceeded {
                current: snapshot_manager.memory_usage(),
                limit: snapshot_manager.memory_limit(),
            })?;

        Ok(Debugger {
            interpreter,
            snapshot_manager,
            history_position: 0,
            error: None,
        })
    }

    /// Step forward in execution (restore next snapshot if available, or execute next cell)
    pub fn step_forward(&mut self) -> Result<(), RuntimeError> {
        // Check if we have a snapshot ahead in history
        if let Some(snapshot) = self.snapshot_manager.get(self.history_position + 1) {
            let snapshot = snapshot.clone();
            self.history_position += 1;
            self.interpreter.restore(&snapshot);
            return Ok(());
        }

        if let Some(error) = &self.error {
            return Err(error.clone());
        }

        if self.interpreter.is_halted() {
            return Err(self.generic("Execution finished"));
        }

        match self.interpreter.step() {
            Ok(StepOutcome::Running) => self.record(),
            Ok(StepOutcome::Halted) => {
                // Landing on `@` consumes no step; mark the current snapshot halted
                if let Some(snapshot) = self.snapshot_manager.get_mut(self.history_position) {
                    snapshot.halted = true;
                }
                Err(self.generic("Execution finished"))
            }
            Err(error) => {
                // Roll back whatever the failed instruction already popped
                if let Some(snapshot) = self.snapshot_manager.get(self.history_position) {
                    let snapshot = snapshot.clone();
                    self.interpreter.restore(&snapshot);
                }
                self.error = Some(error.clone());
                Err(error)
            }
        }
    }

    /// Step backward in execution (restore previous snapshot)
    pub fn step_backward(&mut self) -> Result<(), RuntimeError> {
        if self.history_position == 0 {
            return Err(self.generic("Already at the beginning of execution"));
        }

        self.history_position -= 1;

        if let Some(snapshot) = self.snapshot_manager.get(self.history_position) {
            let snapshot = snapshot.clone();
            self.interpreter.restore(&snapshot);
            Ok(())
        } else {
            Err(self.generic("Snapshot not found in history"))
        }
    }

    /// Rewind to the beginning of execution history
    pub fn rewind_to_start(&mut self) -> Result<(), RuntimeError> {
        self.history_position = 0;
        // Clone the snapshot to avoid borrow checker issues
        if let Some(snapshot) = self.snapshot_manager.get(0).cloned() {
            self.interpreter.restore(&snapshot);
            Ok(())
        } else {
            Err(self.generic("Failed to restore initial snapshot"))
        }
    }

    /// Step forward until the program halts, fails, or history is full.
    ///
    /// Returns the number of steps taken and the error that stopped it.
    /// Reaching `@` is reported as a `Generic` "Execution finished" error.
    pub fn run_to_end(&mut self) -> (usize, RuntimeError) {
        let mut stepped = 0;
        loop {
            match self.step_forward() {
                Ok(()) => stepped += 1,
                Err(error) => return (stepped, error),
            }
        }
    }

    /// Step forward at most `limit` times.
    ///
    /// Returns the number of steps taken and the error that stopped it early,
    /// or `None` if all `limit` steps succeeded.
    pub fn run_steps(&mut self, limit: usize) -> (usize, Option<RuntimeError>) {
        for stepped in 0..limit {
            if let Err(error) = self.step_forward() {
                return (stepped, Some(error));
            }
        }
        (limit, None)
    }

    fn record(&mut self) -> Result<(), RuntimeError> {
        let snapshot = self.interpreter.capture();
        if self.snapshot_manager.push(snapshot).is_err() {
            let error = RuntimeError::SnapshotLimitExceeded {
                current: self.snapshot_manager.memory_usage(),
                limit: self.snapshot_manager.memory_limit(),
            };
            // Keep the interpreter consistent with the last recorded snapshot
            if let Some(last) = self.snapshot_manager.get(self.history_position).cloned() {
                self.interpreter.restore(&last);
            }
            self.error = Some(error.clone());
            return Err(error);
        }
        self.history_position += 1;
        Ok(())
    }

    fn generic(&self, message: &str) -> RuntimeError {
        RuntimeError::Generic {
            message: message.to_string(),
            position: self.interpreter.state().position,
        }
    }

    // ========== Getter methods for UI ==========

    pub fn interpreter(&self) -> &Interpreter<R> {
        &self.interpreter
    }

    pub fn history_position(&self) -> usize {
        self.history_position
    }

    pub fn total_snapshots(&self) -> usize {
        self.snapshot_manager.len()
    }

    /// Error that ended execution, once it has been hit
    pub fn error(&self) -> Option<&RuntimeError> {
        self.error.as_ref()
    }

    /// Whether no further step is possible from the current position
    pub fn is_at_end(&self) -> bool {
        self.history_position + 1 >= self.snapshot_manager.len()
            && (self.interpreter.is_halted() || self.error.is_some())
    }

    pub fn memory_usage(&self) -> usize {
        self.snapshot_manager.memory_usage()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::config::InterpreterConfig;
    use crate::interpreter::constants::DEFAULT_SNAPSHOT_LIMIT;

    fn debugger(source: &str) -> Debugger {
        let interp = Interpreter::new(source, &InterpreterConfig::seeded(3));
        Debugger::new(interp, DEFAULT_SNAPSHOT_LIMIT).unwrap()
    }

    #[test]
    fn test_step_back_and_replay() {
        let mut dbg = debugger("12+.@");
        dbg.step_forward().unwrap();
        dbg.step_forward().unwrap();
        dbg.step_forward().unwrap();
        assert_eq!(dbg.interpreter().stack().values(), &[3]);
        assert_eq!(dbg.total_snapshots(), 4);

        dbg.step_backward().unwrap();
        assert_eq!(dbg.interpreter().stack().values(), &[1, 2]);

        dbg.step_forward().unwrap();
        assert_eq!(dbg.interpreter().stack().values(), &[3]);
        assert_eq!(dbg.total_snapshots(), 4);
    }

    #[test]
    fn test_run_to_end_reports_finish() {
        let mut dbg = debugger("12+.@");
        let (stepped, error) = dbg.run_to_end();
        assert_eq!(stepped, 4);
        assert!(matches!(error, RuntimeError::Generic { .. }));
        assert_eq!(dbg.interpreter().output().as_str(), "3");
        assert!(dbg.interpreter().is_halted());
        assert!(dbg.is_at_end());
    }

    #[test]
    fn test_error_is_sticky_and_rolled_back() {
        let mut dbg = debugger("1+@");
        dbg.step_forward().unwrap();
        let err = dbg.step_forward().unwrap_err();
        assert!(matches!(err, RuntimeError::StackUnderflow { .. }));
        // The `1` popped by the failed `+` is restored
        assert_eq!(dbg.interpreter().stack().values(), &[1]);
        assert_eq!(dbg.step_forward().unwrap_err(), err);
        assert_eq!(dbg.error(), Some(&err));
        assert!(dbg.is_at_end());
    }

    #[test]
    fn test_rewind_and_beginning() {
        let mut dbg = debugger("123@");
        dbg.run_to_end();
        dbg.rewind_to_start().unwrap();
        assert_eq!(dbg.history_position(), 0);
        assert!(dbg.interpreter().stack().is_empty());
        assert!(dbg.step_backward().is_err());
    }

    #[test]
    fn test_snapshot_limit_stops_infinite_program() {
        // `>` loops forever on a one-cell row
        let interp = Interpreter::new(">", &InterpreterConfig::seeded(0));
        let size = interp.capture().estimated_size();
        let mut dbg = Debugger::new(interp, size * 10).unwrap();
        let (stepped, error) = dbg.run_to_end();
        assert_eq!(stepped, 9);
        assert!(matches!(error, RuntimeError::SnapshotLimitExceeded { .. }));

        // The limit sticks; no further cell is executed
        assert_eq!(dbg.step_forward().unwrap_err(), error);
        assert_eq!(dbg.error(), Some(&error));
        assert!(dbg.is_at_end());
        assert_eq!(dbg.interpreter().steps(), 9);
    }

    #[test]
    fn test_snapshot_limit_keeps_random_choice() {
        // `?` on a one-cell row: every failed retry would draw again
        let interp = Interpreter::new("?", &InterpreterConfig::seeded(5));
        let size = interp.capture().estimated_size();
        let mut dbg = Debugger::new(interp, size * 4).unwrap();
        dbg.run_to_end();
        let state = *dbg.interpreter().state();
        for _ in 0..10 {
            assert!(dbg.step_forward().is_err());
            assert_eq!(*dbg.interpreter().state(), state);
        }
    }

    #[test]
    fn test_run_steps_stops_at_limit() {
        let mut dbg = debugger(">");
        assert_eq!(dbg.run_steps(5), (5, None));
        assert_eq!(dbg.history_position(), 5);

        let mut dbg = debugger("12+.@");
        let (stepped, stop) = dbg.run_steps(100);
        assert_eq!(stepped, 4);
        assert!(matches!(stop, Some(RuntimeError::Generic { .. })));
    }
}
