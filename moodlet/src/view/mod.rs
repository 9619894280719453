//! View components for the Moodlet application.

pub mod components;
pub mod icons;
pub mod showcase;
pub mod theme;
