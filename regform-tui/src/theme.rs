//! Dark theme for the form surface.

use crossterm::style::Color;

/// Semantic colors used by the renderer.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
    pub primary: Color,
    pub success: Color,
    pub error: Color,
}

/// Dark theme with a blue accent.
pub fn default_theme() -> Theme {
    Theme {
        background: Color::Rgb { r: 24, g: 26, b: 33 },
        surface: Color::Rgb { r: 33, g: 36, b: 46 },
        border: Color::Rgb { r: 68, g: 74, b: 94 },
        text: Color::Rgb { r: 214, g: 218, b: 228 },
        muted: Color::Rgb { r: 120, g: 128, b: 148 },
        primary: Color::Rgb { r: 116, g: 158, b: 243 },
        success: Color::Rgb { r: 120, g: 200, b: 132 },
        error: Color::Rgb { r: 235, g: 102, b: 98 },
    }
}
