//! UI components using ratatui

mod assist;
mod chat;
mod header;
mod input;
mod layout;
mod list;
mod placeholder;
mod status;
mod styles;

pub use assist::*;
pub use chat::*;
pub use header::*;
pub use input::*;
pub use layout::*;
pub use list::*;
pub use placeholder::*;
pub use status::*;

use ratatui::Frame;

use crate::inbox::{LayoutController, PanelView, RenderPlan};

/// State needed for rendering (borrowed references)
pub struct RenderState<'a> {
    pub controller: &'a LayoutController,
    pub plan: RenderPlan,
    /// Panel receiving keyboard input
    pub focus: PanelView,
    pub status_message: Option<&'a str>,
}

/// Main draw function
pub fn draw(frame: &mut Frame, state: &RenderState) {
    let areas = create_layout(frame.area(), &state.plan);
    let controller = state.controller;
    let narrow = state.plan.layout.is_narrow();

    if let Some(header) = areas.header {
        draw_header(frame, header, state, state.plan.panels[0]);
    }

    for (view, area) in state.plan.panels.iter().zip(areas.panels) {
        let focused = *view == state.focus;
        match view {
            PanelView::List => draw_list(frame, area, state, focused),
            PanelView::Chat => {
                if let (Some(chat), Some(conversation)) =
                    (controller.chat(), controller.active_conversation())
                {
                    draw_chat(frame, area, chat, conversation, !narrow, focused);
                }
            }
            PanelView::Closed => draw_placeholder(frame, area, Placeholder::Closed, focused),
            PanelView::NoSelection => {
                draw_placeholder(frame, area, Placeholder::NoSelection, focused)
            }
            PanelView::Assist => draw_assist(
                frame,
                area,
                controller.assist(),
                controller.active_conversation(),
                focused,
            ),
        }
    }

    draw_status(frame, areas.status, state);
}
