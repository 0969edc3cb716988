//! Responsive layout for the shell chrome.
//!
//! Wide terminals dock the sidebar on the left. Narrow terminals hide it; while
//! the drawer is open it slides over the left edge and everything to its right
//! becomes a dimmed overlay that closes the drawer when clicked.

use ratatui::layout::{Constraint, Layout, Rect};

/// Minimum terminal width that docks the sidebar permanently.
pub const DOCKED_BREAKPOINT: u16 = 100;
pub const SIDEBAR_WIDTH: u16 = 28;
pub const TOP_BAR_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellLayout {
    /// Present when the sidebar is drawn this frame.
    pub sidebar: Option<Rect>,
    pub top_bar: Rect,
    pub content: Rect,
    pub hints: Rect,
    /// Present only while the drawer is open on a narrow terminal.
    pub overlay: Option<Rect>,
    pub docked: bool,
}

impl ShellLayout {
    pub fn compute(area: Rect, drawer_open: bool) -> Self {
        let docked = area.width >= DOCKED_BREAKPOINT;
        let [body, hints] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        if docked {
            let [sidebar, main] = Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)]).areas(body);
            let [top_bar, content] = Layout::vertical([Constraint::Length(TOP_BAR_HEIGHT), Constraint::Min(0)]).areas(main);
            return Self {
                sidebar: Some(sidebar),
                top_bar,
                content,
                hints,
                overlay: None,
                docked,
            };
        }

        let [top_bar, content] = Layout::vertical([Constraint::Length(TOP_BAR_HEIGHT), Constraint::Min(0)]).areas(body);
        let (sidebar, overlay) = if drawer_open {
            let [drawer, rest] =
                Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH.min(body.width)), Constraint::Min(0)]).areas(body);
            (Some(drawer), Some(rest))
        } else {
            (None, None)
        };

        Self {
            sidebar,
            top_bar,
            content,
            hints,
            overlay,
            docked,
        }
    }
}
