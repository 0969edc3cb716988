use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use neobank_types::{DASHBOARD_PATH, Effect};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::SidebarState;
use crate::app::App;
use crate::shell::{BRAND_ICON, BRAND_NAME, NavLink, ShellModel, UserCard};
use crate::ui::components::Component;
use crate::ui::theme::Theme;
use crate::ui::theme::theme_helpers as th;
use crate::ui::utils::{find_target_index_by_mouse_position, rect_contains, truncate_to_width};

const BRAND_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 4;
const SIGN_OUT_LABEL: &str = "⏻ Sign out";

#[derive(Debug, Default)]
pub struct SidebarComponent;

impl SidebarComponent {
    pub fn new() -> Self {
        Self
    }

    fn link_line<'a>(theme: &dyn Theme, link: &'a NavLink, under_cursor: bool) -> Line<'a> {
        let marker = if under_cursor { "›" } else { " " };
        let style = th::nav_link_style(theme, link.active);
        Line::from(vec![
            Span::styled(marker, th::nav_cursor_style(theme)),
            Span::styled(format!("{}  {}", link.entry.icon, link.entry.label), style),
        ])
    }

    fn render_footer(frame: &mut Frame, area: Rect, theme: &dyn Theme, user: &UserCard) -> Rect {
        let [identity, role, _, sign_out] = Layout::vertical([Constraint::Length(1); 4]).areas(area);
        let name_width = usize::from(identity.width.saturating_sub(5));

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!(" {} ", user.initial), th::avatar_style(theme)),
                Span::raw(" "),
                Span::styled(truncate_to_width(&user.name, name_width), theme.text_primary_style()),
            ])),
            identity,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("    {}", truncate_to_width(&user.role_label, name_width)),
                theme.text_muted_style(),
            )),
            role,
        );

        let label_width = u16::try_from(SIGN_OUT_LABEL.chars().count() + 2).unwrap_or(u16::MAX);
        let [button, _] = Layout::horizontal([Constraint::Length(label_width), Constraint::Min(0)]).areas(sign_out);
        frame.render_widget(
            Paragraph::new(format!(" {SIGN_OUT_LABEL} ")).style(th::button_secondary_style(theme, false)),
            button,
        );
        button
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let links = app.shell.navigation();
        match key.code {
            KeyCode::Down => {
                app.sidebar.move_cursor(true, links.len());
                Vec::new()
            }
            KeyCode::Up => {
                app.sidebar.move_cursor(false, links.len());
                Vec::new()
            }
            KeyCode::Enter => links
                .get(app.sidebar.cursor)
                .map(|entry| vec![Effect::ActivateLink(entry.path.to_string())])
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let (x, y) = (mouse.column, mouse.row);
        let SidebarState {
            last_area,
            per_item_areas,
            brand_area,
            logout_area,
            ..
        } = &app.sidebar;

        if rect_contains(brand_area, x, y) {
            return vec![Effect::ActivateLink(DASHBOARD_PATH.to_string())];
        }
        if rect_contains(logout_area, x, y) {
            return vec![Effect::Logout];
        }
        let Some(index) = find_target_index_by_mouse_position(last_area, per_item_areas, x, y) else {
            return Vec::new();
        };
        let Some(entry) = app.shell.navigation().get(index) else {
            return Vec::new();
        };
        app.sidebar.cursor = index;
        vec![Effect::ActivateLink(entry.path.to_string())]
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let ShellModel { links, user, .. } = &app.model;

        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(theme.border_style(false))
            .style(th::panel_style(theme));
        frame.render_widget(block, area);

        let layout = self.get_preferred_layout(app, area);
        let [brand, links_area, footer] = [layout[0], layout[1], layout[2]];

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!("{BRAND_ICON} "), theme.accent_emphasis_style()),
                Span::styled(BRAND_NAME, theme.text_primary_style()),
            ]))
            .block(Block::default().borders(Borders::BOTTOM).border_style(theme.border_style(false))),
            brand,
        );

        let rows = Layout::vertical(vec![Constraint::Length(1); links.len()]).split(links_area);
        let cursor = app.sidebar.cursor;
        for (index, (link, row)) in links.iter().zip(rows.iter()).enumerate() {
            let badge_width = link.badge.as_ref().map_or(0, |badge| badge.chars().count() + 2);
            let [label_area, badge_area] = Layout::horizontal([
                Constraint::Min(0),
                Constraint::Length(u16::try_from(badge_width).unwrap_or(0)),
            ])
            .areas(*row);

            let line = Self::link_line(theme, link, index == cursor);
            let row_style = th::nav_link_style(theme, link.active);
            frame.render_widget(Paragraph::new(line).style(row_style), label_area);
            if let Some(badge) = &link.badge {
                frame.render_widget(
                    Paragraph::new(format!(" {badge} ")).style(th::badge_style(theme)),
                    badge_area,
                );
            }
        }

        let logout_area = Self::render_footer(frame, footer, theme, user);

        app.sidebar.last_area = area;
        app.sidebar.per_item_areas = rows.iter().take(links.len()).copied().collect();
        app.sidebar.brand_area = brand;
        app.sidebar.logout_area = logout_area;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.ctx.theme, &[("↑/↓", "navigate"), ("Enter", "open"), ("g", "home")])
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        let inner = Rect {
            width: area.width.saturating_sub(1),
            ..area
        };
        Layout::vertical([
            Constraint::Length(BRAND_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .horizontal_margin(1)
        .split(inner)
        .to_vec()
    }
}
