/// Which trio on the showcase page a message is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrioId {
    /// Single-letter trio.
    Letters,
    /// Full-word trio.
    Words,
}

/// Messages for the Moodlet application.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Left-click on an FSC indicator.
    Advance(TrioId, usize),

    /// Right-click on an FSC indicator.
    ToggleExemption(TrioId, usize),

    /// Left-click on a generic moodlet.
    MoodletPressed(String),

    /// Dropdown trigger pressed.
    ToggleDropdown,

    /// User picked a dropdown option.
    SelectOption(String),

    /// Click that landed outside every widget.
    DismissDropdown,
}
