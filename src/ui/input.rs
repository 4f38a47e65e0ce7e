//! Input field widget

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::input_utils::TextInput;

use super::styles;

/// Draw a bordered single-line input; the terminal cursor is placed only when focused
pub fn draw_input(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    input: &TextInput,
    placeholder: &str,
    focused: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused))
        .title(format!(" {} ", title));

    let line = if input.value().is_empty() && !focused {
        Line::from(Span::styled(format!(" {}", placeholder), styles::faint_style()))
    } else {
        let (before_cursor, after_cursor) = input.split_at_cursor();
        let mut spans = vec![
            Span::styled(" ", styles::input_style()), // Left padding
            Span::styled(before_cursor, styles::input_style()),
        ];
        if focused {
            spans.push(Span::styled("│", styles::cursor_style()));
        }
        spans.push(Span::styled(after_cursor, styles::input_style()));
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line).block(block), area);

    if focused {
        // +1 border, +1 padding
        let cursor = u16::try_from(input.cursor()).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(2).saturating_add(cursor);
        let y = area.y.saturating_add(1);
        if x < area.x + area.width.saturating_sub(1) {
            frame.set_cursor_position((x, y));
        }
    }
}
