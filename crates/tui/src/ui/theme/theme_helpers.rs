use neobank_types::Role;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders},
};

use super::roles::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.text_secondary_style().add_modifier(Modifier::BOLD)));
    }
    block
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Page background behind the routed content.
pub fn app_background_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { background, text, .. } = *theme.roles();
    Style::default().bg(background).fg(text)
}

/// Sidebar link style for the active and inactive cases.
pub fn nav_link_style<T: Theme + ?Sized>(theme: &T, active: bool) -> Style {
    if active {
        theme.selection_style().add_modifier(Modifier::BOLD)
    } else {
        theme.text_secondary_style()
    }
}

/// Keyboard cursor highlight layered on top of a link style.
pub fn nav_cursor_style<T: Theme + ?Sized>(theme: &T) -> Style {
    Style::default().fg(theme.roles().focus).add_modifier(Modifier::BOLD)
}

/// Unread-count badge (filled error tone, readable text).
pub fn badge_style<T: Theme + ?Sized>(theme: &T) -> Style {
    Style::default()
        .bg(theme.roles().error)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD)
}

/// Role badge in the top bar. Each known role gets its own tone; anything the
/// backend sends that we don't recognize uses the muted tone.
pub fn role_badge_style<T: Theme + ?Sized>(theme: &T, role: Option<Role>) -> Style {
    let ThemeRoles {
        info,
        warning,
        error,
        surface_muted,
        text,
        ..
    } = *theme.roles();
    let style = match role {
        Some(Role::Customer) => Style::default().bg(info).fg(Color::Black),
        Some(Role::Employee) => Style::default().bg(warning).fg(Color::Black),
        Some(Role::Admin) => Style::default().bg(error).fg(Color::Black),
        None => Style::default().bg(surface_muted).fg(text),
    };
    style.add_modifier(Modifier::BOLD)
}

/// Round avatar stand-in for the user footer.
pub fn avatar_style<T: Theme + ?Sized>(theme: &T) -> Style {
    Style::default()
        .bg(theme.roles().accent_primary)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD)
}

/// Outline-like button style, as used for sign-out and the menu toggle.
pub fn button_secondary_style<T: Theme + ?Sized>(theme: &T, selected: bool) -> Style {
    let ThemeRoles {
        accent_secondary,
        selection_bg,
        ..
    } = *theme.roles();
    let style = Style::default().fg(accent_secondary);
    if selected { style.bg(selection_bg) } else { style }
}

/// Builds `key label` pairs for the hint bar.
pub fn build_hint_spans<T: Theme + ?Sized>(theme: &T, hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, label) in hints {
        spans.push(Span::styled(key.to_string(), theme.accent_emphasis_style()));
        spans.push(Span::styled(format!(" {label}  "), theme.text_muted_style()));
    }
    spans
}
