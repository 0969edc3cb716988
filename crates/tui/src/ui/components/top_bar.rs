//! Top bar: drawer toggle, page title and the user's role badge.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use neobank_types::Effect;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::Theme;
use crate::ui::theme::theme_helpers as th;
use crate::ui::utils::rect_contains;

const MENU_LABEL: &str = " ≡ ";

#[derive(Debug, Default, Clone)]
pub struct TopBarState {
    /// Where the menu button was drawn; empty while the sidebar is docked.
    pub menu_area: Rect,
}

#[derive(Debug, Default)]
pub struct TopBarComponent;

impl Component for TopBarComponent {
    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left)
            && rect_contains(&app.top_bar.menu_area, mouse.column, mouse.row)
        {
            return vec![Effect::ToggleDrawer];
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let model = &app.model;

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme.border_style(false))
            .style(th::panel_style(theme));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = self.get_preferred_layout(app, inner);
        let [menu, title, badge] = [layout[0], layout[1], layout[2]];

        if menu.width > 0 {
            frame.render_widget(
                Paragraph::new(MENU_LABEL).style(th::button_secondary_style(theme, model.drawer_open)),
                menu,
            );
        }
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {}", model.title),
                theme.text_primary_style().add_modifier(Modifier::BOLD),
            )),
            title,
        );
        if !model.user.role_label.is_empty() {
            frame.render_widget(
                Paragraph::new(format!(" {} ", model.user.role_label))
                    .style(th::role_badge_style(theme, model.user.role))
                    .right_aligned(),
                badge,
            );
        }

        app.top_bar.menu_area = menu;
    }

    fn get_preferred_layout(&self, app: &App, area: Rect) -> Vec<Rect> {
        let menu_width = if app.layout.docked {
            0
        } else {
            u16::try_from(MENU_LABEL.chars().count() + 1).unwrap_or(u16::MAX)
        };
        let role_width = app.model.user.role_label.chars().count().saturating_add(3);
        Layout::horizontal([
            Constraint::Length(menu_width),
            Constraint::Min(0),
            Constraint::Length(u16::try_from(role_width).unwrap_or(u16::MAX)),
        ])
        .split(area)
        .to_vec()
    }
}
