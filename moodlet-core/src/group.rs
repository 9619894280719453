//! FSC trio: one independent indicator per tracked category.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fsc::{FscIndicator, LabelMode};
use crate::variant::Variant;

/// Tracked task category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fuelling,
    Servicing,
    Cleaning,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 3] = [Category::Fuelling, Category::Servicing, Category::Cleaning];

    /// Full word label.
    pub fn word(&self) -> &'static str {
        match self {
            Category::Fuelling => "FUELLING",
            Category::Servicing => "SERVICING",
            Category::Cleaning => "CLEANING",
        }
    }

    /// Single letter label.
    pub fn letter(&self) -> &'static str {
        match self {
            Category::Fuelling => "F",
            Category::Servicing => "S",
            Category::Cleaning => "C",
        }
    }

    /// Label for a display mode.
    pub fn label(&self, mode: LabelMode) -> &'static str {
        match mode {
            LabelMode::Letter => self.letter(),
            LabelMode::Word => self.word(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word())
    }
}

/// A row of independent indicators sharing a label mode.
///
/// The group never looks at more than one indicator at a time; there is no
/// aggregate state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FscGroup {
    mode: LabelMode,
    indicators: Vec<FscIndicator>,
}

impl FscGroup {
    /// The standard Fuelling / Servicing / Cleaning trio.
    pub fn new(mode: LabelMode) -> Self {
        Self::with_labels(Category::ALL.iter().map(|c| c.label(mode)), mode)
    }

    /// A group over an arbitrary ordered list of labels.
    pub fn with_labels<I, S>(labels: I, mode: LabelMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mode,
            indicators: labels
                .into_iter()
                .map(|label| FscIndicator::new(label, mode))
                .collect(),
        }
    }

    /// Use a different in-progress variant for every member.
    pub fn with_in_progress_variant(mut self, variant: Variant) -> Self {
        self.indicators = self
            .indicators
            .into_iter()
            .map(|i| i.with_in_progress_variant(variant))
            .collect();
        self
    }

    pub fn label_mode(&self) -> LabelMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FscIndicator> {
        self.indicators.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FscIndicator> {
        self.indicators.iter()
    }

    /// Advance one member. Unknown indices are ignored.
    pub fn advance(&mut self, index: usize) {
        match self.indicators.get_mut(index) {
            Some(indicator) => indicator.advance(),
            None => tracing::warn!(index, "advance on unknown indicator"),
        }
    }

    /// Toggle exemption on one member. Unknown indices are ignored.
    pub fn toggle_exemption(&mut self, index: usize) {
        match self.indicators.get_mut(index) {
            Some(indicator) => indicator.toggle_exemption(),
            None => tracing::warn!(index, "toggle exemption on unknown indicator"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fsc::FscState;

    #[test]
    fn test_letter_trio() {
        let group = FscGroup::new(LabelMode::Letter);
        let contents: Vec<_> = group.iter().map(|i| i.content()).collect();
        assert_eq!(contents, vec!["F", "S", "C"]);
    }

    #[test]
    fn test_word_trio_shows_full_labels() {
        let group = FscGroup::new(LabelMode::Word);
        let contents: Vec<_> = group.iter().map(|i| i.content()).collect();
        assert_eq!(contents, vec!["FUELLING", "SERVICING", "CLEANING"]);
        assert!(group.iter().all(|i| i.label_mode() == LabelMode::Word));
    }

    #[test]
    fn test_members_are_independent() {
        let mut group = FscGroup::new(LabelMode::Letter);
        group.advance(1);
        group.toggle_exemption(2);

        assert_eq!(group.get(0).map(|i| i.state()), Some(FscState::Required));
        assert_eq!(group.get(1).map(|i| i.state()), Some(FscState::Current));
        assert_eq!(group.get(2).map(|i| i.state()), Some(FscState::NotRequired));
    }

    #[test]
    fn test_unknown_index_is_ignored() {
        let mut group = FscGroup::new(LabelMode::Letter);
        let before = group.clone();
        group.advance(7);
        group.toggle_exemption(3);
        assert_eq!(group, before);
    }

    #[test]
    fn test_custom_labels() {
        let group = FscGroup::with_labels(["Wash", "Dry"], LabelMode::Letter);
        assert_eq!(group.len(), 2);
        assert_eq!(group.get(1).map(|i| i.content()), Some("D"));
    }

    #[test]
    fn test_in_progress_variant_applies_to_all() {
        let mut group = FscGroup::new(LabelMode::Word).with_in_progress_variant(Variant::Red);
        for index in 0..group.len() {
            group.advance(index);
        }
        assert!(group.iter().all(|i| i.variant() == Variant::Red));
    }
}
