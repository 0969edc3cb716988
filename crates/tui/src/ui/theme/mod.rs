//! Theme styling for the shell.
//!
//! Two palettes ship: the truecolor NeoBank palette and an ANSI 256-color
//! fallback. Widgets go through the semantic roles and helper builders here
//! rather than hard-coding colors.

use std::env;

use tracing::debug;

pub mod ansi256;
pub mod neobank;
pub mod roles;
pub mod theme_helpers;

pub use ansi256::Ansi256Theme;
pub use neobank::NeoBankTheme;
pub use roles::Theme;

pub const NEOBANK_THEME_ID: &str = "neobank";
pub const ANSI256_THEME_ID: &str = "ansi256";

/// Theme plus the identifier it was selected under.
#[derive(Debug)]
pub struct LoadedTheme {
    pub id: &'static str,
    pub theme: Box<dyn Theme>,
}

impl LoadedTheme {
    fn by_id(id: &'static str) -> Self {
        let theme: Box<dyn Theme> = match id {
            ANSI256_THEME_ID => Box::new(Ansi256Theme::new()),
            _ => Box::new(NeoBankTheme::new()),
        };
        Self { id, theme }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorCapability {
    Truecolor,
    Ansi256,
}

/// Selects a theme based on environment variables, the configured preference,
/// and terminal capabilities. An ANSI-only terminal always gets the fallback.
pub fn load(preferred_theme: Option<&str>) -> LoadedTheme {
    if matches!(detect_color_capability(), ColorCapability::Ansi256) {
        debug!("ANSI-only terminal detected; using fallback palette");
        return LoadedTheme::by_id(ANSI256_THEME_ID);
    }

    if let Ok(theme_name) = env::var("TUI_THEME")
        && let Some(id) = resolve(theme_name.trim())
    {
        return LoadedTheme::by_id(id);
    }

    if let Some(name) = preferred_theme
        && let Some(id) = resolve(name.trim())
    {
        return LoadedTheme::by_id(id);
    }

    LoadedTheme::by_id(NEOBANK_THEME_ID)
}

fn resolve(name: &str) -> Option<&'static str> {
    match name.to_ascii_lowercase().as_str() {
        "neobank" | "default" => Some(NEOBANK_THEME_ID),
        "ansi256" | "ansi" | "256" => Some(ANSI256_THEME_ID),
        _ => None,
    }
}

fn detect_color_capability() -> ColorCapability {
    if let Some(mode) = env::var("TUI_COLOR_MODE").ok().and_then(|value| parse_color_mode(value.trim())) {
        return mode;
    }

    let color_term = env::var("COLORTERM").unwrap_or_default().to_ascii_lowercase();
    if color_term.contains("truecolor") || color_term.contains("24bit") {
        return ColorCapability::Truecolor;
    }

    let term = env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if term.contains("truecolor") {
        return ColorCapability::Truecolor;
    }

    ColorCapability::Ansi256
}

fn parse_color_mode(value: &str) -> Option<ColorCapability> {
    match value.to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" => Some(ColorCapability::Truecolor),
        "ansi256" | "256" | "8bit" => Some(ColorCapability::Ansi256),
        _ => None,
    }
}
