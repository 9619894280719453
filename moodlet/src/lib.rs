//! Moodlet - FSC status pills, badges and dropdown widgets for iced.
//!
//! This library exposes the widgets and the showcase application for testing.

pub mod app;
pub mod args;
pub mod message;
pub mod view;

// Re-export commonly used types
pub use app::Showcase;
pub use message::{Message, TrioId};
