//! Empty-state widget

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::styles;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    NoSelection,
    Closed,
}

impl Placeholder {
    fn title(self) -> &'static str {
        match self {
            Placeholder::NoSelection => "No conversation selected",
            Placeholder::Closed => "Chat closed",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Placeholder::NoSelection => "Select a conversation from the list to start chatting",
            Placeholder::Closed => "This conversation has been closed",
        }
    }

    fn action(self) -> Option<&'static str> {
        match self {
            Placeholder::NoSelection => None,
            Placeholder::Closed => Some(" Enter: Reopen chat "),
        }
    }
}

pub fn draw_placeholder(frame: &mut Frame, area: Rect, placeholder: Placeholder, focused: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused));

    // Vertically center the text
    let mut lines = Vec::new();
    let content_height = 4;
    let top = (block.inner(area).height as usize).saturating_sub(content_height) / 2;
    lines.extend(std::iter::repeat(Line::from("")).take(top));

    lines.push(Line::from(Span::styled(placeholder.title(), styles::title_style())));
    lines.push(Line::from(Span::styled(placeholder.description(), styles::muted_style())));
    if let Some(action) = placeholder.action() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(action, styles::action_style())));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
