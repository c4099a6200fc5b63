//! Program grid pane rendering
//!
//! This module renders the grid pane, which displays the (possibly
//! self-modified) program with per-instruction coloring and the IP.
//!
//! # Features
//!
//! - Instruction classes colored like syntax highlighting
//! - Cell under the IP drawn inverted
//! - Cells written by `p` shown underlined in a distinct color
//! - Viewport that follows the IP, or stays where the user scrolled it
//! - Row numbering

use crate::interpreter::constants::TERMINATOR;
use crate::interpreter::instruction::Instruction;
use crate::interpreter::state::{ExecutionState, Position};
use crate::memory::grid::Grid;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rustc_hash::FxHashSet;

/// Width of the row-number gutter, including its trailing space
const GUTTER_WIDTH: usize = 5;

/// Scroll state for the grid pane
#[derive(Debug, Clone, Copy, Default)]
pub struct GridViewport {
    pub row_offset: usize,
    pub col_offset: usize,
    /// Re-center on the IP at the next render
    pub follow_ip: bool,
}

impl GridViewport {
    pub fn new() -> Self {
        GridViewport {
            row_offset: 0,
            col_offset: 0,
            follow_ip: true,
        }
    }

    /// Shift the window so that `ip` is inside `height` x `width`
    fn keep_visible(&mut self, ip: Position, height: usize, width: usize) {
        if ip.row < self.row_offset {
            self.row_offset = ip.row;
        } else if ip.row >= self.row_offset + height {
            self.row_offset = ip.row + 1 - height;
        }
        if ip.col < self.col_offset {
            self.col_offset = ip.col;
        } else if ip.col >= self.col_offset + width {
            self.col_offset = ip.col + 1 - width;
        }
    }
}

fn cell_style(c: char) -> Style {
    if c == TERMINATOR {
        return Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD);
    }
    match Instruction::decode(c) {
        Instruction::Go(_)
        | Instruction::Random
        | Instruction::HorizontalIf
        | Instruction::VerticalIf
        | Instruction::Trampoline => Style::default().fg(DEFAULT_THEME.keyword),
        Instruction::ToggleStringMode => Style::default().fg(DEFAULT_THEME.string),
        Instruction::Put | Instruction::Get => Style::default().fg(DEFAULT_THEME.function),
        Instruction::OutputInt | Instruction::OutputChar => {
            Style::default().fg(DEFAULT_THEME.success)
        }
        Instruction::Push(d) if d.is_ascii_digit() => Style::default().fg(DEFAULT_THEME.number),
        Instruction::Push(_) => Style::default().fg(DEFAULT_THEME.comment),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

fn render_row<'a>(
    row_index: usize,
    cells: &[char],
    viewport: &GridViewport,
    width: usize,
    state: &ExecutionState,
    modified: &FxHashSet<Position>,
) -> Line<'a> {
    let is_ip_row = row_index == state.position.row;
    let gutter_style = if is_ip_row {
        Style::default()
            .fg(DEFAULT_THEME.function)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.comment)
    };

    let mut spans = vec![Span::styled(
        format!("{:>width$} ", row_index, width = GUTTER_WIDTH - 1),
        gutter_style,
    )];

    for (col, &c) in cells
        .iter()
        .enumerate()
        .skip(viewport.col_offset)
        .take(width)
    {
        let pos = Position::new(row_index, col);
        let mut style = cell_style(c);
        if modified.contains(&pos) {
            style = style
                .fg(DEFAULT_THEME.modified_cell)
                .add_modifier(Modifier::UNDERLINED);
        }
        if pos == state.position {
            style = style
                .bg(DEFAULT_THEME.ip_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled(c.to_string(), style));
    }

    let line = Line::from(spans);
    if is_ip_row {
        line.style(Style::default().bg(DEFAULT_THEME.current_line_bg))
    } else {
        line
    }
}

/// Render the grid pane
pub fn render_grid_pane(
    frame: &mut Frame,
    area: Rect,
    grid: &Grid,
    state: &ExecutionState,
    modified: &FxHashSet<Position>,
    is_focused: bool,
    viewport: &mut GridViewport,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let mut title = format!(" Grid {} ", state.direction.arrow());
    if state.string_mode {
        title.push_str("\"str\" ");
    }
    if state.skip_next {
        title.push_str("#skip ");
    }

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let visible_width = (area.width.saturating_sub(2) as usize)
        .saturating_sub(GUTTER_WIDTH)
        .max(1);

    if viewport.follow_ip {
        viewport.keep_visible(state.position, visible_height, visible_width);
    }
    viewport.row_offset = viewport.row_offset.min(grid.row_count().saturating_sub(1));
    viewport.col_offset = viewport.col_offset.min(grid.width().saturating_sub(1));

    let lines: Vec<Line> = grid
        .rows()
        .iter()
        .enumerate()
        .skip(viewport.row_offset)
        .take(visible_height)
        .map(|(row, cells)| render_row(row, cells, viewport, visible_width, state, modified))
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_follows_ip() {
        let mut vp = GridViewport::new();
        vp.keep_visible(Position::new(30, 100), 10, 40);
        assert_eq!(vp.row_offset, 21);
        assert_eq!(vp.col_offset, 61);

        vp.keep_visible(Position::new(0, 0), 10, 40);
        assert_eq!(vp.row_offset, 0);
        assert_eq!(vp.col_offset, 0);
    }
}
