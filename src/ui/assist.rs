//! Assist panel widget

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::inbox::{AssistPanel, AssistTab};
use crate::store::Conversation;

use super::{draw_input, styles};

pub fn draw_assist(
    frame: &mut Frame,
    area: Rect,
    assist: &AssistPanel,
    conversation: Option<&Conversation>,
    focused: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Body
            Constraint::Length(3), // Question
        ])
        .split(area);

    let tab_style = |tab: AssistTab| {
        if assist.tab() == tab {
            styles::active_tab_style()
        } else {
            styles::muted_style()
        }
    };
    let title = Line::from(vec![
        Span::raw(" "),
        Span::styled("Copilot", tab_style(AssistTab::Copilot)),
        Span::raw(" | "),
        Span::styled("Details", tab_style(AssistTab::Details)),
        Span::raw(" "),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused))
        .title(title);

    let lines = match assist.tab() {
        AssistTab::Copilot => copilot_lines(assist, focused),
        AssistTab::Details => details_lines(conversation),
    };

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, chunks[0]);

    draw_input(
        frame,
        chunks[1],
        "Ask",
        &assist.input,
        "Ask a question...",
        focused,
    );
}

fn copilot_lines(assist: &AssistPanel, focused: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let row_style = |index: usize| {
        if focused && index == assist.cursor() {
            styles::highlight_style()
        } else {
            styles::text_style()
        }
    };

    if assist.is_processing() {
        lines.push(Line::from(Span::styled("● ● ● Thinking...", styles::busy_style())));
        lines.push(Line::from(""));
    }

    match assist.response() {
        Some(response) => {
            lines.push(Line::from(Span::styled(response.summary.clone(), styles::title_style())));
            lines.push(Line::from(""));

            if !response.suggestions.is_empty() {
                lines.push(Line::from(Span::styled("Suggested replies", styles::muted_style())));
                for (index, suggestion) in response.suggestions.iter().enumerate() {
                    lines.push(Line::from(Span::styled(format!("› {}", suggestion), row_style(index))));
                }
                lines.push(Line::from(""));
            }

            if !response.resources.is_empty() {
                lines.push(Line::from(Span::styled("Resources", styles::muted_style())));
                for resource in &response.resources {
                    lines.push(Line::from(vec![
                        Span::styled(resource.title.clone(), styles::link_style()),
                        Span::styled(format!(" {}", resource.link), styles::faint_style()),
                    ]));
                }
                lines.push(Line::from(""));
            }

            lines.push(Line::from(Span::styled("Ctrl+L: Clear", styles::faint_style())));
        }
        None if !assist.is_processing() => {
            lines.push(Line::from(Span::styled(
                "Ask me anything about this conversation.",
                styles::muted_style(),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Suggested questions", styles::muted_style())));
            for (index, question) in assist.items().into_iter().enumerate() {
                lines.push(Line::from(Span::styled(format!("? {}", question), row_style(index))));
            }
        }
        None => {}
    }

    lines
}

fn details_lines(conversation: Option<&Conversation>) -> Vec<Line<'static>> {
    let Some(conversation) = conversation else {
        return vec![Line::from(Span::styled("No conversation selected", styles::faint_style()))];
    };
    let user = &conversation.user;

    let field = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<10}", label), styles::muted_style()),
            Span::styled(value, styles::text_style()),
        ])
    };

    let mut lines = vec![
        field("Name", user.name.clone()),
        field("Company", user.company.clone().unwrap_or_else(|| "-".to_string())),
        field("Type", if user.is_bot { "Bot" } else { "Person" }.to_string()),
        field("Waiting", conversation.time.clone()),
    ];
    if let Some(subtext) = &conversation.subtext {
        lines.push(field("Via", subtext.clone()));
    }
    if conversation.priority {
        lines.push(Line::from(Span::styled("Priority", styles::priority_style())));
    }
    lines
}
