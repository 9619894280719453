//! SVG icons for Moodlet widgets.
//!
//! All icons are embedded at compile time using `include_bytes!` and drawn
//! with a single tint so they follow the text color of the pill they sit in.

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Element, Length, Theme};

/// Icon size presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IconSize {
    /// Tiny icon (10px), fits inside a pill.
    Tiny,
    /// Small icon (12px)
    #[default]
    Small,
}

impl IconSize {
    pub fn pixels(self) -> f32 {
        match self {
            IconSize::Tiny => 10.0,
            IconSize::Small => 12.0,
        }
    }
}

/// Available icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    /// Smiling face.
    Smile,
    /// Checkmark.
    Check,
    /// Downward chevron (dropdown trigger).
    ChevronDown,
}

impl Icon {
    fn data(self) -> &'static [u8] {
        match self {
            Icon::Smile => include_bytes!("smile.svg"),
            Icon::Check => include_bytes!("check.svg"),
            Icon::ChevronDown => include_bytes!("chevron-down.svg"),
        }
    }
}

/// Create an icon element, optionally tinted.
pub fn icon<'a, Message: 'a>(icon: Icon, size: IconSize, tint: Option<Color>) -> Element<'a, Message> {
    let handle = Handle::from_memory(icon.data());
    Svg::new(handle)
        .width(Length::Fixed(size.pixels()))
        .height(Length::Fixed(size.pixels()))
        .style(move |_theme: &Theme, _status| svg::Style { color: tint })
        .into()
}
