//! Application state for the shell UI.
//!
//! [`App`] ties the shell controller to the per-component UI state (sidebar
//! cursor, recorded hit-test areas, current layout) and the active theme.

use neobank_types::{Effect, Msg};
use tracing::debug;

use crate::shell::{ShellController, ShellModel};
use crate::ui::components::{SidebarState, TopBarState};
use crate::ui::layout::ShellLayout;
use crate::ui::theme::{LoadedTheme, Theme};

/// Cross-cutting context shared by every component.
#[derive(Debug)]
pub struct SharedCtx {
    pub theme: Box<dyn Theme>,
    /// Identifier the theme was selected under
    pub theme_id: &'static str,
}

#[derive(Debug)]
pub struct App {
    pub ctx: SharedCtx,
    pub shell: ShellController,
    pub sidebar: SidebarState,
    pub top_bar: TopBarState,
    /// Layout used for the last rendered frame.
    pub layout: ShellLayout,
    /// Last known terminal size as (columns, rows).
    pub viewport: (u16, u16),
    /// Chrome model for the frame being drawn.
    pub model: ShellModel,
}

impl App {
    pub fn new(theme: LoadedTheme, shell: ShellController) -> Self {
        let model = shell.compose();
        let mut app = Self {
            ctx: SharedCtx {
                theme: theme.theme,
                theme_id: theme.id,
            },
            shell,
            sidebar: SidebarState::default(),
            top_bar: TopBarState::default(),
            layout: ShellLayout::default(),
            viewport: (0, 0),
            model,
        };
        app.sync_sidebar_cursor();
        app
    }

    /// Recomposes the chrome model; called once at the start of each frame.
    pub fn refresh_model(&mut self) {
        self.model = self.shell.compose();
    }

    /// Whether the sidebar was drawn in the last frame and can take input.
    pub fn sidebar_visible(&self) -> bool {
        self.layout.sidebar.is_some()
    }

    /// Moves the sidebar cursor onto the active link, or the first link when
    /// the current path matches none.
    pub fn sync_sidebar_cursor(&mut self) {
        self.refresh_model();
        self.sidebar
            .place_cursor(self.model.active_index().unwrap_or(0), self.model.links.len());
    }

    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::Tick => {}
            Msg::Resize(width, height) => {
                self.viewport = (*width, *height);
            }
            Msg::UnreadCountChanged(count) => {
                debug!(count, "unread count changed");
            }
        }
        Vec::new()
    }
}
