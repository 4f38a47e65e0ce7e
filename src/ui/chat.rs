//! Chat panel widget

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::inbox::ChatView;
use crate::store::{Conversation, Sender};

use super::{draw_input, styles};

fn sender_label(sender: Sender, conversation: &Conversation) -> String {
    match sender {
        Sender::User => conversation.user.name.clone(),
        Sender::Agent => "You".to_string(),
        Sender::System => "System".to_string(),
        Sender::Notification => "Notice".to_string(),
    }
}

/// Draw the thread of the active conversation with its draft input
pub fn draw_chat(
    frame: &mut Frame,
    area: Rect,
    chat: &ChatView,
    conversation: &Conversation,
    show_header: bool,
    focused: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Thread
            Constraint::Length(3), // Draft
        ])
        .split(area);

    let mut title = if show_header {
        format!(" {} ", conversation.user.display_name())
    } else {
        " Chat ".to_string()
    };
    if chat.is_starred() {
        title.push_str("★ ");
    }
    if chat.is_snoozed() {
        title.push_str("(snoozed) ");
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused))
        .title(title);

    let inner = block.inner(chunks[0]);

    // Build lines from messages
    let mut lines: Vec<Line> = Vec::new();

    for message in chat.messages() {
        let selected = chat.selected() == Some(message.id.as_str());
        let mut header = vec![
            Span::styled(
                format!("{} ", sender_label(message.sender, conversation)),
                styles::sender_style(message.sender),
            ),
            Span::styled(
                message.timestamp.with_timezone(&Local).format("%H:%M").to_string(),
                styles::faint_style(),
            ),
        ];
        if message.has_bot {
            header.push(Span::styled(" [bot]", styles::bot_style()));
        }
        if message.seen {
            header.push(Span::styled(" ✓✓ seen", styles::ready_style()));
        }
        lines.push(Line::from(header));

        let content_style = if selected {
            styles::selected_message_style()
        } else {
            styles::text_style()
        };
        for line in message.content.lines() {
            lines.push(Line::from(Span::styled(format!("  {}", line), content_style)));
        }
        if selected {
            lines.push(Line::from(Span::styled(
                "  Ctrl+G: Ask assist",
                styles::action_style().add_modifier(Modifier::ITALIC),
            )));
        }
        lines.push(Line::from(""));
    }

    // Show typing indicator
    if chat.is_typing() {
        lines.push(Line::from(Span::styled(
            format!("{} is typing...", conversation.user.name),
            styles::busy_style(),
        )));
    }

    // Calculate scroll over wrapped rows so the newest message stays visible
    let paragraph = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false });
    let visible_height = inner.height as usize;
    let total_lines = paragraph.line_count(inner.width);
    let scroll = if total_lines > visible_height {
        let max_scroll = total_lines.saturating_sub(visible_height);
        max_scroll.saturating_sub(chat.scroll_offset)
    } else {
        0
    };

    let paragraph = paragraph
        .block(block)
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));

    frame.render_widget(paragraph, chunks[0]);

    draw_input(
        frame,
        chunks[1],
        "Reply",
        &chat.draft,
        "Type a reply, or /help",
        focused,
    );
}
