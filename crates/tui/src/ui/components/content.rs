//! Routed content area and the signed-out screen.
//!
//! Feature pages live outside the shell; the content area only shows which
//! page the router currently points at.

use crossterm::event::{KeyCode, KeyEvent};
use neobank_types::Effect;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Clear, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::shell::{BRAND_ICON, BRAND_NAME};
use crate::ui::components::Component;
use crate::ui::theme::Theme;
use crate::ui::theme::theme_helpers as th;
use crate::ui::utils::centered_rect;

#[derive(Debug, Default)]
pub struct PageComponent;

impl Component for PageComponent {
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let body = vec![
            Line::from(Span::styled(app.model.title, theme.accent_emphasis_style())),
            Line::from(Span::styled(app.shell.current_path().to_string(), theme.text_muted_style())),
        ];
        frame.render_widget(
            Paragraph::new(body)
                .style(th::app_background_style(theme))
                .wrap(Wrap { trim: true })
                .block(Block::default().padding(Padding::new(2, 2, 1, 1))),
            area,
        );
    }
}

/// Shown on the login route. The chrome is gone and polling is stopped.
#[derive(Debug, Default)]
pub struct LoginComponent;

impl Component for LoginComponent {
    fn handle_key_events(&mut self, _app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => vec![Effect::Quit],
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        frame.render_widget(Paragraph::new("").style(th::app_background_style(theme)), area);

        let card = centered_rect(50, 40, area);
        frame.render_widget(Clear, card);
        let lines = vec![
            Line::from(vec![
                Span::styled(format!("{BRAND_ICON} "), theme.accent_emphasis_style()),
                Span::styled(BRAND_NAME, theme.text_primary_style().add_modifier(Modifier::BOLD)),
            ]),
            Line::from(""),
            Line::from(Span::styled("You have been signed out.", theme.text_secondary_style())),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(th::block(theme, Some(" Sign in "), false)),
            card,
        );
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.ctx.theme, &[("q", "quit")])
    }
}
