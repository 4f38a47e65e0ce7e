//! UI styles and colors (Catppuccin theme)

use ratatui::style::{Color, Modifier, Style};

use crate::store::Sender;

// Catppuccin Mocha palette
pub const MAUVE: Color = Color::Rgb(203, 166, 247);
pub const RED: Color = Color::Rgb(243, 139, 168);
pub const PEACH: Color = Color::Rgb(250, 179, 135);
pub const YELLOW: Color = Color::Rgb(249, 226, 175);
pub const GREEN: Color = Color::Rgb(166, 227, 161);
pub const TEAL: Color = Color::Rgb(148, 226, 213);
pub const SAPPHIRE: Color = Color::Rgb(116, 199, 236);
pub const BLUE: Color = Color::Rgb(137, 180, 250);
pub const LAVENDER: Color = Color::Rgb(180, 190, 254);
pub const TEXT: Color = Color::Rgb(205, 214, 244);
pub const SUBTEXT0: Color = Color::Rgb(166, 173, 200);
pub const OVERLAY1: Color = Color::Rgb(127, 132, 156);
pub const OVERLAY0: Color = Color::Rgb(108, 112, 134);
pub const SURFACE2: Color = Color::Rgb(88, 91, 112);
pub const SURFACE0: Color = Color::Rgb(49, 50, 68);
pub const BASE: Color = Color::Rgb(30, 30, 46);

// Sender-specific styles
pub fn sender_style(sender: Sender) -> Style {
    match sender {
        Sender::User => Style::default().fg(SAPPHIRE).add_modifier(Modifier::BOLD),
        Sender::Agent => Style::default().fg(MAUVE),
        Sender::System => Style::default().fg(OVERLAY1).add_modifier(Modifier::ITALIC),
        Sender::Notification => Style::default().fg(PEACH),
    }
}

pub fn text_style() -> Style {
    Style::default().fg(TEXT)
}

pub fn muted_style() -> Style {
    Style::default().fg(SUBTEXT0)
}

pub fn faint_style() -> Style {
    Style::default().fg(OVERLAY0).add_modifier(Modifier::ITALIC)
}

pub fn title_style() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(LAVENDER)
    } else {
        Style::default().fg(SURFACE2)
    }
}

pub fn highlight_style() -> Style {
    Style::default().bg(SURFACE0).add_modifier(Modifier::BOLD)
}

pub fn selected_message_style() -> Style {
    Style::default().fg(BASE).bg(SAPPHIRE)
}

pub fn unread_style() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn priority_style() -> Style {
    Style::default().fg(RED)
}

pub fn bot_style() -> Style {
    Style::default().fg(TEAL)
}

pub fn busy_style() -> Style {
    Style::default().fg(YELLOW)
}

pub fn ready_style() -> Style {
    Style::default().fg(GREEN)
}

pub fn link_style() -> Style {
    Style::default().fg(BLUE).add_modifier(Modifier::UNDERLINED)
}

pub fn action_style() -> Style {
    Style::default().fg(BASE).bg(MAUVE).add_modifier(Modifier::BOLD)
}

pub fn active_tab_style() -> Style {
    Style::default().fg(MAUVE).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

pub fn input_style() -> Style {
    Style::default().fg(TEXT)
}

pub fn cursor_style() -> Style {
    Style::default().fg(BASE).bg(TEXT)
}

pub fn status_style() -> Style {
    Style::default().fg(SUBTEXT0)
}

pub fn mode_style() -> Style {
    Style::default().fg(BLUE)
}
