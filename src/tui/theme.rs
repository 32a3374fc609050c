//! Theme system for TUI colors and styles

use iocraft::prelude::Color;

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Brand colors
    pub accent: Color,
    pub accent_dim: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub nav_solid_background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,

    // Feedback colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb {
                r: 168,
                g: 85,
                b: 247,
            },
            accent_dim: Color::Rgb {
                r: 109,
                g: 40,
                b: 217,
            },

            border: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            border_focused: Color::Rgb {
                r: 168,
                g: 85,
                b: 247,
            },
            background: Color::Reset,
            nav_solid_background: Color::Rgb {
                r: 24,
                g: 24,
                b: 37,
            },
            text: Color::White,
            text_dimmed: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            highlight: Color::Magenta,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }
}

impl Theme {
    /// Get the color for a project status label
    pub fn status_color(&self, status: &str) -> Color {
        match status {
            "Completed" => self.success,
            "In Progress" => Color::Cyan,
            _ => self.warning,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
