//! Terminal colors
//!
//! The driver never writes escape codes directly; it asks the theme to
//! paint text, and a plain theme paints nothing.

use crossterm::style::{Color, Stylize};

/// Color palette for driver output
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    enabled: bool,
    /// Town terrain
    pub terrain: Color,
    /// Treasure names
    pub treasure: Color,
    /// Brawls and game over
    pub danger: Color,
    /// Menu entries
    pub menu: Color,
}

impl Theme {
    pub fn colored() -> Self {
        Self {
            enabled: true,
            terrain: Color::Cyan,
            treasure: Color::Yellow,
            danger: Color::Red,
            menu: Color::Blue,
        }
    }

    /// Theme that leaves text untouched
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::colored()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::colored()
    }
}
