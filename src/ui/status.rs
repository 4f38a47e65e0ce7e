//! Status bar widget

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::inbox::PanelView;

use super::{styles, RenderState};

fn pane_name(view: PanelView) -> &'static str {
    match view {
        PanelView::List => "list",
        PanelView::Chat | PanelView::Closed | PanelView::NoSelection => "chat",
        PanelView::Assist => "assist",
    }
}

/// Draw the status bar
pub fn draw_status(frame: &mut Frame, area: Rect, state: &RenderState) {
    let controller = state.controller;
    let mut spans = vec![];

    // Layout and focus
    spans.push(Span::styled(
        format!(" {} ", controller.layout()),
        styles::mode_style(),
    ));
    spans.push(Span::styled(" | ", styles::status_style()));
    spans.push(Span::styled(pane_name(state.focus), styles::status_style()));
    spans.push(Span::styled(" | ", styles::status_style()));

    // Activity indicator
    let typing = controller.chat().is_some_and(|chat| chat.is_typing());
    if controller.assist().is_processing() {
        spans.push(Span::styled("Assist thinking...", styles::busy_style()));
    } else if typing {
        spans.push(Span::styled("Customer typing...", styles::busy_style()));
    } else {
        spans.push(Span::styled("Ready", styles::ready_style()));
    }

    // Status message
    if let Some(msg) = state.status_message {
        spans.push(Span::styled(" | ", styles::status_style()));
        spans.push(Span::styled(msg.to_string(), styles::status_style()));
    }

    let hints = "Tab: Switch  Ctrl+A: Assist  Ctrl+Q: Quit ";

    // Calculate padding to right-align
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding = (area.width as usize).saturating_sub(left_len + hints.len());
    if padding > 0 {
        spans.push(Span::raw(" ".repeat(padding)));
    }
    spans.push(Span::styled(hints, styles::faint_style()));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
