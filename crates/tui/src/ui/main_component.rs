use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use neobank_types::{DASHBOARD_PATH, Effect, Msg};
use ratatui::{
    prelude::*,
    widgets::{Block, Clear, Paragraph},
};

use super::components::{Component, LoginComponent, PageComponent, SidebarComponent, TopBarComponent};
use super::layout::ShellLayout;
use super::theme::Theme;
use super::theme::theme_helpers as th;
use super::utils::rect_contains;
use crate::app::App;

/// Root component. Draws the chrome around the routed page, or the signed-out
/// screen on the login route, and routes input to the right child.
#[derive(Debug, Default)]
pub struct MainView {
    pub sidebar_view: SidebarComponent,
    pub top_bar_view: TopBarComponent,
    pub page_view: PageComponent,
    pub login_view: LoginComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle_shell_keys(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('b') if ctrl => vec![Effect::ToggleDrawer],
            KeyCode::Char('o') if ctrl => vec![Effect::Logout],
            KeyCode::Char('m') if !ctrl => vec![Effect::ToggleDrawer],
            KeyCode::Char('g') if !ctrl => vec![Effect::ActivateLink(DASHBOARD_PATH.to_string())],
            KeyCode::Esc if app.shell.drawer().is_open() => vec![Effect::ActivateOverlay],
            KeyCode::Backspace => vec![Effect::NavigateBack],
            _ if app.sidebar_visible() => self.sidebar_view.handle_key_events(app, key),
            _ => Vec::new(),
        }
    }
}

impl Component for MainView {
    fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        app.update(&msg)
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if key.kind != KeyEventKind::Press {
            return Vec::new();
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return vec![Effect::Quit];
        }
        if app.shell.is_login_route() {
            return self.login_view.handle_key_events(app, key);
        }
        self.handle_shell_keys(app, key)
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if app.shell.is_login_route() {
            return Vec::new();
        }
        if mouse.kind == MouseEventKind::Down(MouseButton::Left)
            && let Some(overlay) = app.layout.overlay
            && rect_contains(&overlay, mouse.column, mouse.row)
        {
            return vec![Effect::ActivateOverlay];
        }

        // The open drawer is drawn over the top bar, so it owns every point it covers.
        if app.sidebar_visible() && rect_contains(&app.sidebar.last_area, mouse.column, mouse.row) {
            return self.sidebar_view.handle_mouse_events(app, mouse);
        }
        self.top_bar_view.handle_mouse_events(app, mouse)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        app.refresh_model();
        let background = Paragraph::new("").style(th::app_background_style(&*app.ctx.theme));
        frame.render_widget(background, area);

        if app.shell.is_login_route() {
            app.layout = ShellLayout::default();
            app.sidebar.clear_areas();
            let [screen, hints] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
            self.login_view.render(frame, screen, app);
            self.render_hints(frame, hints, app);
            return;
        }

        let layout = ShellLayout::compute(area, app.shell.drawer().is_open());
        app.layout = layout;

        self.top_bar_view.render(frame, layout.top_bar, app);
        self.page_view.render(frame, layout.content, app);

        if let Some(overlay) = layout.overlay {
            render_overlay(frame, overlay, app);
        }
        match layout.sidebar {
            Some(sidebar) => {
                if layout.overlay.is_some() {
                    frame.render_widget(Clear, sidebar);
                }
                self.sidebar_view.render(frame, sidebar, app);
            }
            None => app.sidebar.clear_areas(),
        }

        self.render_hints(frame, layout.hints, app);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let theme = &*app.ctx.theme;
        let mut hint_spans: Vec<Span> = vec![Span::styled("Hints: ", theme.text_muted_style())];
        if app.shell.is_login_route() {
            hint_spans.extend(self.login_view.get_hint_spans(app));
            return hint_spans;
        }

        if app.sidebar_visible() {
            hint_spans.extend(self.sidebar_view.get_hint_spans(app));
        }
        let drawer_hint = if app.shell.drawer().is_open() { "close menu" } else { "menu" };
        hint_spans.extend(th::build_hint_spans(
            theme,
            &[("m", drawer_hint), ("Bksp", "back"), ("Ctrl+O", "sign out"), ("Ctrl+C", "quit")],
        ));
        hint_spans
    }
}

impl MainView {
    fn render_hints(&self, frame: &mut Frame, area: Rect, app: &App) {
        let hints = Paragraph::new(Line::from(self.get_hint_spans(app))).style(app.ctx.theme.text_muted_style());
        frame.render_widget(hints, area);
    }
}

/// Dims everything to the right of the open drawer.
fn render_overlay(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(Block::default().style(app.ctx.theme.overlay_style()).dim(), area);
}
