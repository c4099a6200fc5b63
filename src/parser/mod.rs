//! Program text to grid conversion
//!
//! Befunge source has no tokens to speak of: every character is a cell.
//! Parsing is only line splitting. `\r\n`, a lone `\r` and `\n` are all
//! accepted as separators and may be mixed in one text. A trailing separator
//! yields a final empty row, since row count matters for vertical wraparound.

use crate::memory::grid::Grid;

/// Split program text into rows of cells
pub fn parse(source: &str) -> Grid {
    Grid::from_rows(split_lines(source).map(|line| line.chars().collect()).collect())
}

/// Split on `\r\n`, `\r` or `\n`
pub fn split_lines(source: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(source);
    std::iter::from_fn(move || {
        let text = rest?;
        match text.find(|c: char| c == '\r' || c == '\n') {
            Some(idx) => {
                let sep_len = if text[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&text[idx + sep_len..]);
                Some(&text[..idx])
            }
            None => {
                rest = None;
                Some(text)
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_separators() {
        let lines: Vec<&str> = split_lines("ab\r\ncd\ref\ngh").collect();
        assert_eq!(lines, vec!["ab", "cd", "ef", "gh"]);
    }

    #[test]
    fn test_trailing_and_empty_lines() {
        let lines: Vec<&str> = split_lines("a\n\nb\n").collect();
        assert_eq!(lines, vec!["a", "", "b", ""]);

        let lines: Vec<&str> = split_lines("").collect();
        assert_eq!(lines, vec![""]);
    }

    #[test]
    fn test_crlf_is_one_separator() {
        let grid = parse("12\r\n34");
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.rows()[1], vec!['3', '4']);
    }

    #[test]
    fn test_rows_are_not_padded() {
        let grid = parse(">v\nlonger row\n@");
        assert_eq!(grid.row_len(0), Some(2));
        assert_eq!(grid.row_len(1), Some(10));
        assert_eq!(grid.row_len(2), Some(1));
        assert_eq!(grid.width(), 10);
    }
}
