//! Conversation list widget

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::inbox::Filter;

use super::{draw_input, styles, RenderState};

/// Draw the search box, filter bar and conversation rows
pub fn draw_list(frame: &mut Frame, area: Rect, state: &RenderState, focused: bool) {
    let controller = state.controller;
    let list = controller.list();
    let store = controller.store();
    let visible = list.visible(store);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search
            Constraint::Min(3),    // Rows
        ])
        .split(area);

    draw_input(
        frame,
        chunks[0],
        "Search",
        &list.search,
        "Search conversations...",
        focused,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused))
        .title(format!(" {} Conversations ", visible.len()));

    let mut lines: Vec<Line> = Vec::new();

    // Filter bar
    let mut filters = Vec::new();
    for filter in Filter::ALL {
        let style = if filter == list.filter() {
            styles::active_tab_style()
        } else {
            styles::muted_style()
        };
        filters.push(Span::styled(filter.label(), style));
        filters.push(Span::raw(" "));
    }
    lines.push(Line::from(filters));
    lines.push(Line::from(""));

    if visible.is_empty() {
        lines.push(Line::from(Span::styled("No conversations found", styles::faint_style())));
    }

    let mut cursor_end = 0;
    for (index, conversation) in visible.iter().enumerate() {
        let active = controller.active_id() == Some(conversation.id.as_str());
        let highlighted = focused && index == list.cursor();
        let user = &conversation.user;

        let name_style = if conversation.unread {
            styles::unread_style()
        } else {
            styles::text_style()
        };

        let mut header = vec![
            Span::styled(if active { "▌" } else { " " }, styles::mode_style()),
            Span::styled(format!("[{}] ", user.initial), styles::bot_style()),
            Span::styled(user.name.clone(), name_style),
        ];
        if let Some(company) = &user.company {
            header.push(Span::styled(format!(" · {}", company), styles::muted_style()));
        }
        if user.is_bot {
            header.push(Span::styled(" bot", styles::bot_style()));
        }
        if conversation.priority {
            header.push(Span::styled(" ★", styles::priority_style()));
        }
        header.push(Span::styled(format!("  {}", conversation.time), styles::faint_style()));

        let mut header = Line::from(header);
        if highlighted {
            header = header.style(styles::highlight_style());
        }
        lines.push(header);

        lines.push(Line::from(Span::styled(
            format!("  {}", conversation.preview),
            styles::muted_style(),
        )));
        if let Some(subtext) = &conversation.subtext {
            lines.push(Line::from(Span::styled(format!("  {}", subtext), styles::faint_style())));
        }
        if index == list.cursor() {
            cursor_end = lines.len();
        }
        lines.push(Line::from(""));
    }

    // Keep the highlighted row on screen
    let visible_height = block.inner(chunks[1]).height as usize;
    let scroll = cursor_end.saturating_sub(visible_height);

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll as u16, 0));

    frame.render_widget(paragraph, chunks[1]);
}
