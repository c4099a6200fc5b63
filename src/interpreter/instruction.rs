//! Instruction decoding
//!
//! Every character decodes to exactly one [`Instruction`]. Characters with no
//! entry in the table decode to [`Instruction::Push`], which pushes either the
//! raw character code (string mode) or its offset from `'0'`. That is how
//! digits push their value, and it also means letters and unlisted
//! punctuation push an offset rather than doing nothing.
//!
//! The terminator `@` is not an instruction: the engine checks for it before
//! decoding.

use super::state::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `!`
    Not,
    /// `` ` ``
    GreaterThan,
    /// `>` `<` `v` `^`
    Go(Direction),
    /// `?`
    Random,
    /// `_`
    HorizontalIf,
    /// `|`
    VerticalIf,
    /// `"`
    ToggleStringMode,
    /// `:`
    Duplicate,
    /// `\`
    Swap,
    /// `$`
    Discard,
    /// `.`
    OutputInt,
    /// `,`
    OutputChar,
    /// `#`
    Trampoline,
    /// `p`
    Put,
    /// `g`
    Get,
    /// ` `
    Space,
    /// Anything else
    Push(char),
}

impl Instruction {
    pub fn decode(c: char) -> Self {
        match c {
            '+' => Instruction::Add,
            '-' => Instruction::Subtract,
            '*' => Instruction::Multiply,
            '/' => Instruction::Divide,
            '%' => Instruction::Modulo,
            '!' => Instruction::Not,
            '`' => Instruction::GreaterThan,
            '>' => Instruction::Go(Direction::Right),
            '<' => Instruction::Go(Direction::Left),
            'v' => Instruction::Go(Direction::Down),
            '^' => Instruction::Go(Direction::Up),
            '?' => Instruction::Random,
            '_' => Instruction::HorizontalIf,
            '|' => Instruction::VerticalIf,
            '"' => Instruction::ToggleStringMode,
            ':' => Instruction::Duplicate,
            '\\' => Instruction::Swap,
            '$' => Instruction::Discard,
            '.' => Instruction::OutputInt,
            ',' => Instruction::OutputChar,
            '#' => Instruction::Trampoline,
            'p' => Instruction::Put,
            'g' => Instruction::Get,
            ' ' => Instruction::Space,
            other => Instruction::Push(other),
        }
    }

    /// Value pushed by the fallback rule
    pub fn push_value(c: char, string_mode: bool) -> i32 {
        if string_mode {
            c as i32
        } else {
            c as i32 - '0' as i32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_table() {
        assert_eq!(Instruction::decode('+'), Instruction::Add);
        assert_eq!(Instruction::decode('\\'), Instruction::Swap);
        assert_eq!(Instruction::decode('v'), Instruction::Go(Direction::Down));
        assert_eq!(Instruction::decode(' '), Instruction::Space);
        assert_eq!(Instruction::decode('7'), Instruction::Push('7'));
        assert_eq!(Instruction::decode('x'), Instruction::Push('x'));
    }

    #[test]
    fn test_push_value_offsets_from_zero() {
        assert_eq!(Instruction::push_value('9', false), 9);
        assert_eq!(Instruction::push_value('9', true), 57);
        // Non-digits still push an offset outside string mode
        assert_eq!(Instruction::push_value('A', false), 17);
        assert_eq!(Instruction::push_value('&', false), -10);
    }
}
