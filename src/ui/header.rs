//! Single-panel header: title on the list, back/assist hints elsewhere

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::inbox::PanelView;

use super::{styles, RenderState};

pub fn draw_header(frame: &mut Frame, area: Rect, state: &RenderState, view: PanelView) {
    let mut spans = Vec::new();

    if view == PanelView::List {
        spans.push(Span::styled(" Inbox", styles::title_style()));
    } else {
        spans.push(Span::styled(" ‹ Esc ", styles::mode_style()));
        if let Some(conversation) = state.controller.active_conversation() {
            let user = &conversation.user;
            spans.push(Span::styled(format!("[{}] ", user.initial), styles::bot_style()));
            spans.push(Span::styled(user.name.clone(), styles::title_style()));
            if let Some(company) = &user.company {
                spans.push(Span::styled(format!(" · {}", company), styles::muted_style()));
            }
        }

        let toggle = if view == PanelView::Assist {
            " Ctrl+A: ✕ "
        } else {
            " Ctrl+A: Assist "
        };
        let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let padding = (area.width as usize).saturating_sub(left_len + toggle.chars().count());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(toggle, styles::action_style()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
