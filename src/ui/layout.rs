//! Layout definitions

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::inbox::{PanelView, RenderPlan};

const LIST_WIDTH: u16 = 36;
const ASSIST_WIDTH: u16 = 42;

/// Screen areas for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboxAreas {
    /// Narrow layouts only
    pub header: Option<Rect>,
    /// One area per planned panel, same order
    pub panels: Vec<Rect>,
    pub status: Rect,
}

/// Split the screen according to the render plan
pub fn create_layout(area: Rect, plan: &RenderPlan) -> InboxAreas {
    let narrow = plan.layout.is_narrow();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if narrow { 1 } else { 0 }), // Header
            Constraint::Min(5),                             // Panels
            Constraint::Length(1),                          // Status bar
        ])
        .split(area);

    let constraints: Vec<Constraint> = plan
        .panels
        .iter()
        .map(|panel| match panel {
            _ if narrow => Constraint::Min(0),
            PanelView::List => Constraint::Length(LIST_WIDTH),
            PanelView::Assist => Constraint::Length(ASSIST_WIDTH),
            PanelView::Chat | PanelView::Closed | PanelView::NoSelection => Constraint::Min(20),
        })
        .collect();

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(rows[1])
        .to_vec();

    InboxAreas {
        header: narrow.then_some(rows[0]),
        panels,
        status: rows[2],
    }
}
