//! Color helpers for Moodlet widgets.
//!
//! Pill colors come from the variant palette in `moodlet-core`. The chrome
//! around them (dropdown trigger, menu, rows) adapts to the current theme
//! through [`ThemeColors`].

use iced::{Color, Theme};
use moodlet_core::Rgb;

/// Convert a palette color to an iced color.
pub fn color(rgb: Rgb) -> Color {
    Color::from_rgb8(rgb.r, rgb.g, rgb.b)
}

/// Theme-aware colors for widget chrome.
pub struct ThemeColors<'a> {
    theme: &'a Theme,
}

impl<'a> ThemeColors<'a> {
    /// Create a new ThemeColors from a theme reference.
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn palette(&self) -> &iced::theme::palette::Extended {
        self.theme.extended_palette()
    }

    // ========================================================================
    // Text
    // ========================================================================

    /// Primary text color.
    pub fn text(&self) -> Color {
        self.palette().background.base.text
    }

    /// Muted text, used for disabled dropdown rows.
    pub fn text_muted(&self) -> Color {
        let text = self.text();
        let bg = self.palette().background.base.color;
        Color::from_rgb(
            text.r * 0.5 + bg.r * 0.5,
            text.g * 0.5 + bg.g * 0.5,
            text.b * 0.5 + bg.b * 0.5,
        )
    }

    // ========================================================================
    // Dropdown chrome
    // ========================================================================

    /// Trigger and menu surface.
    pub fn surface(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb8(0x24, 0x21, 0x2E)
        } else {
            Color::from_rgb8(0xF8, 0xF7, 0xFA)
        }
    }

    /// Trigger and menu border.
    pub fn surface_border(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb8(0x5A, 0x51, 0x78)
        } else {
            Color::from_rgb8(0xA8, 0x9D, 0xC8)
        }
    }

    /// Menu drop shadow.
    pub fn surface_shadow(&self) -> Color {
        Color::from_rgba8(0x91, 0x9E, 0xAB, 0.12)
    }

    /// Background of the selected row.
    pub fn row_selected(&self) -> Color {
        if self.is_dark() {
            Color::from_rgb8(0x3B, 0x32, 0x5C)
        } else {
            Color::from_rgb8(0xE2, 0xDE, 0xFF)
        }
    }

    /// Background of a hovered, selectable row.
    pub fn row_hover(&self) -> Color {
        Color::from_rgba8(130, 77, 255, 0.15)
    }

    /// Check if the current theme is dark.
    pub fn is_dark(&self) -> bool {
        self.palette().is_dark
    }
}

/// Convenience function to create ThemeColors.
pub fn colors(theme: &Theme) -> ThemeColors<'_> {
    ThemeColors::new(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_color_conversion() {
        let converted = color(Rgb::hex(0xFF0000));
        assert_eq!(converted, Color::from_rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_surface_follows_theme() {
        assert!(!colors(&Theme::Light).is_dark());
        assert!(colors(&Theme::Dark).is_dark());
        assert_ne!(colors(&Theme::Light).surface(), colors(&Theme::Dark).surface());
    }
}
