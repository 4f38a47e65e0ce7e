//! Viewport classification: one panel at a time, or side by side

use std::fmt;

/// Default width (in columns) below which the inbox shows one panel at a time
pub const DEFAULT_BREAKPOINT: u16 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    /// All eligible panels render side by side
    Wide,
    /// Exactly one panel renders at a time
    Narrow,
}

impl LayoutMode {
    pub fn classify(width: u16, breakpoint: u16) -> Self {
        if width < breakpoint {
            LayoutMode::Narrow
        } else {
            LayoutMode::Wide
        }
    }

    pub fn is_narrow(self) -> bool {
        self == LayoutMode::Narrow
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutMode::Wide => write!(f, "wide"),
            LayoutMode::Narrow => write!(f, "narrow"),
        }
    }
}

/// How the app decides the layout mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportPolicy {
    /// Follow the terminal width
    Auto { breakpoint: u16 },
    /// Ignore the terminal width
    Fixed(LayoutMode),
}

impl Default for ViewportPolicy {
    fn default() -> Self {
        ViewportPolicy::Auto {
            breakpoint: DEFAULT_BREAKPOINT,
        }
    }
}

impl ViewportPolicy {
    pub fn classify(&self, width: u16) -> LayoutMode {
        match *self {
            ViewportPolicy::Auto { breakpoint } => LayoutMode::classify(width, breakpoint),
            ViewportPolicy::Fixed(mode) => mode,
        }
    }
}
