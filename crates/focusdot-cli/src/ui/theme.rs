//! Light/dark color palettes.

use ratatui::style::Color;

/// A full palette for one theme.
pub struct Theme {
    /// Window background
    pub background: Color,
    /// Popover background
    pub surface: Color,
    /// Primary text (countdown, labels)
    pub text: Color,
    /// De-emphasized text (hints, units)
    pub muted: Color,
    /// Inactive progress dot
    pub dot: Color,
    /// Highlighted progress dot
    pub dot_active: Color,
    /// Running indicator / stop hint
    pub running: Color,
    /// Key highlight in the hint bar
    pub key: Color,
}

/// Light theme: the emerald scheme.
pub const LIGHT: Theme = Theme {
    background: Color::Rgb(6, 95, 70),     // Emerald 800
    surface: Color::Rgb(5, 150, 105),      // Emerald 600
    text: Color::White,
    muted: Color::Rgb(209, 250, 229),      // Emerald 100
    dot: Color::Rgb(4, 120, 87),           // Emerald 700
    dot_active: Color::White,
    running: Color::Rgb(225, 29, 72),      // Rose 600
    key: Color::Rgb(252, 211, 77),         // Amber 300
};

/// Dark theme: the slate scheme.
pub const DARK: Theme = Theme {
    background: Color::Rgb(30, 41, 59),    // Slate 800
    surface: Color::Rgb(71, 85, 105),      // Slate 600
    text: Color::White,
    muted: Color::Rgb(148, 163, 184),      // Slate 400
    dot: Color::Rgb(100, 116, 139),        // Slate 500
    dot_active: Color::White,
    running: Color::Rgb(251, 113, 133),    // Rose 400
    key: Color::Rgb(252, 211, 77),         // Amber 300
};

/// Pick the palette for the current mode.
pub fn theme(dark_mode: bool) -> &'static Theme {
    if dark_mode {
        &DARK
    } else {
        &LIGHT
    }
}
