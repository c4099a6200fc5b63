use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use rand::Rng;

impl<R: Rng> Interpreter<R> {
    /// Pop `a` (top) then `b`, push `f(a, b)`.
    ///
    /// If only one value is present the pop of `b` fails after `a` is gone;
    /// the run is aborted anyway, so the stack is not repaired.
    #[inline]
    pub(crate) fn binary_op<F>(&mut self, instruction: char, f: F) -> Result<(), RuntimeError>
    where
        F: FnOnce(i32, i32) -> i32,
    {
        let a = self.pop(instruction)?;
        let b = self.pop(instruction)?;
        let result = f(a, b);
        self.stack_mut().push(result);
        Ok(())
    }
}
