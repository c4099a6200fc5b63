//! Integer working stack
//!
//! A plain LIFO of `i32` values. Reads always remove their element, except for
//! [`Stack::peek`], which only the duplicate instruction uses.
//!
//! # Zero-fill policy
//!
//! Plain [`Stack::pop`] returns `None` on an empty stack and the engine turns
//! that into a [`StackUnderflow`](crate::interpreter::errors::RuntimeError::StackUnderflow).
//! [`Stack::duplicate`] and [`Stack::swap`] never fail: a missing value reads
//! as `0`.

/// LIFO stack of signed integers; the last element is the top
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack {
    values: Vec<i32>,
}

impl Stack {
    pub fn new() -> Self {
        Stack { values: Vec::new() }
    }

    pub fn push(&mut self, value: i32) {
        self.values.push(value);
    }

    pub fn pop(&mut self) -> Option<i32> {
        self.values.pop()
    }

    pub fn peek(&self) -> Option<i32> {
        self.values.last().copied()
    }

    /// Push a copy of the top value, or `0` if the stack is empty
    pub fn duplicate(&mut self) {
        let top = self.peek().unwrap_or(0);
        self.values.push(top);
    }

    /// Exchange the two top values.
    ///
    /// With a single value `a` the stack becomes `[0, a]`; an empty stack
    /// becomes `[0, 0]`.
    pub fn swap(&mut self) {
        match self.values.len() {
            0 => {
                self.values.push(0);
                self.values.push(0);
            }
            1 => {
                let a = self.values[0];
                self.values[0] = 0;
                self.values.push(a);
            }
            len => self.values.swap(len - 1, len - 2),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values from bottom to top
    pub fn values(&self) -> &[i32] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_is_lifo() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_duplicate_empty_pushes_zero() {
        let mut stack = Stack::new();
        stack.duplicate();
        assert_eq!(stack.values(), &[0]);

        stack.push(7);
        stack.duplicate();
        assert_eq!(stack.values(), &[0, 7, 7]);
    }

    #[test]
    fn test_swap_small_stacks() {
        let mut stack = Stack::new();
        stack.push(5);
        stack.swap();
        assert_eq!(stack.values(), &[0, 5]);

        stack.swap();
        assert_eq!(stack.values(), &[5, 0]);

        let mut empty = Stack::new();
        empty.swap();
        assert_eq!(empty.values(), &[0, 0]);
    }
}
