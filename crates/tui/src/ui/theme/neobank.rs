use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// NeoBank brand palette
pub const NAVY: Color = Color::Rgb(0x0F, 0x17, 0x2A); // #0f172a - app background
pub const SLATE: Color = Color::Rgb(0x1E, 0x29, 0x3B); // #1e293b - sidebar / panels
pub const SLATE_MUTED: Color = Color::Rgb(0x33, 0x41, 0x55); // #334155 - borders, selection
pub const INK: Color = Color::Rgb(0x02, 0x06, 0x17); // #020617 - overlay

pub const SNOW: Color = Color::Rgb(0xF1, 0xF5, 0xF9); // #f1f5f9
pub const MIST: Color = Color::Rgb(0xCB, 0xD5, 0xE1); // #cbd5e1
pub const FOG: Color = Color::Rgb(0x94, 0xA3, 0xB8); // #94a3b8

pub const TEAL: Color = Color::Rgb(0x2D, 0xD4, 0xBF); // #2dd4bf - brand accent
pub const SKY: Color = Color::Rgb(0x38, 0xBD, 0xF8); // #38bdf8 - focus
pub const AMBER: Color = Color::Rgb(0xFB, 0xBF, 0x24); // #fbbf24
pub const ROSE: Color = Color::Rgb(0xFB, 0x71, 0x85); // #fb7185

/// Default truecolor theme.
#[derive(Debug, Clone)]
pub struct NeoBankTheme {
    roles: ThemeRoles,
}

impl NeoBankTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: NAVY,
                surface: SLATE,
                surface_muted: SLATE_MUTED,
                border: SLATE_MUTED,

                text: SNOW,
                text_secondary: MIST,
                text_muted: FOG,

                accent_primary: TEAL,
                accent_secondary: SKY,

                info: SKY,
                warning: AMBER,
                error: ROSE,

                selection_bg: SLATE_MUTED,
                selection_fg: SNOW,
                focus: SKY,
                overlay_bg: INK,
            },
        }
    }
}

impl Default for NeoBankTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for NeoBankTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
