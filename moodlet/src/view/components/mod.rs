//! Reusable Moodlet widgets.
//!
//! The pill is the building block; FSC indicators and dropdown prefixes are
//! pills with a particular content and interaction wiring.

pub mod dropdown;
pub mod fsc;
pub mod pill;

pub use dropdown::{DropdownMetrics, DropdownOption, DropdownState, dropdown};
pub use fsc::{indicator, trio};
pub use pill::{IconPlacement, Moodlet, PillContent, pill};
