//! Stack pane rendering
//!
//! Lists the integer stack with the top first. Values that are printable
//! characters also show their character form, since most Befunge programs
//! push text one code at a time.

use crate::memory::stack::Stack;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Character form of a stack value, if it is worth showing
fn char_hint(value: i32) -> Option<String> {
    let c = char::from_u32(u32::try_from(value).ok()?)?;
    match c {
        '\n' => Some("'\\n'".to_string()),
        ' ' => Some("' '".to_string()),
        c if c.is_control() => None,
        c => Some(format!("'{}'", c)),
    }
}

/// Render the stack pane
pub fn render_stack_pane(
    frame: &mut Frame,
    area: Rect,
    stack: &Stack,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" Stack ({}) ", stack.len()))
        .borders(Borders::ALL)
        .border_style(border_style);

    if stack.is_empty() {
        let paragraph = Paragraph::new("(empty)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let total_items = stack.len();
    if total_items > visible_height {
        *scroll_offset = (*scroll_offset).min(total_items - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let items: Vec<ListItem> = stack
        .values()
        .iter()
        .rev()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(depth, &value)| {
            let value_style = if depth == 0 {
                Style::default()
                    .fg(DEFAULT_THEME.number)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            let mut spans = vec![
                Span::styled(
                    format!(" {:>3} ", depth),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(format!("{:>11}", value), value_style),
            ];
            if let Some(hint) = char_hint(value) {
                spans.push(Span::styled(
                    format!("  {}", hint),
                    Style::default().fg(DEFAULT_THEME.string),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_hint() {
        assert_eq!(char_hint(72).as_deref(), Some("'H'"));
        assert_eq!(char_hint(10).as_deref(), Some("'\\n'"));
        assert_eq!(char_hint(7), None);
        assert_eq!(char_hint(-1), None);
    }
}
