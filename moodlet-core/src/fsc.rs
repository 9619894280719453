//! FSC status indicator state machine.
//!
//! ```text
//!              advance              advance
//!   Required ──────────▶ Current ◀──────────▶ Completed
//!      ▲                    │                     │
//!      │ toggle_exemption   └──── toggle_exemption┤
//!      │                                          ▼
//!      └──────────────────────────────────── NotRequired
//! ```
//!
//! `advance` is the primary activation (left-click), `toggle_exemption` the
//! secondary one (right-click). In `NotRequired` the indicator is read-only and
//! `advance` does nothing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::variant::{StyleTable, Variant, VisualStyle};

/// Variant shown while a task is in progress, unless configured otherwise.
pub const DEFAULT_IN_PROGRESS_VARIANT: Variant = Variant::Blue;

/// State of one FSC indicator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FscState {
    /// Not started and not exempted.
    #[default]
    Required,
    /// In progress.
    Current,
    /// Finished.
    Completed,
    /// Exempted; read-only until toggled back.
    NotRequired,
}

impl FscState {
    /// All states.
    pub const ALL: [FscState; 4] = [
        FscState::Required,
        FscState::Current,
        FscState::Completed,
        FscState::NotRequired,
    ];

    /// Primary activation.
    pub fn advance(self) -> Self {
        match self {
            FscState::Required => FscState::Current,
            FscState::Current => FscState::Completed,
            FscState::Completed => FscState::Current,
            FscState::NotRequired => FscState::NotRequired,
        }
    }

    /// Secondary activation: enter exemption from anywhere, or leave it.
    pub fn toggle_exemption(self) -> Self {
        match self {
            FscState::NotRequired => FscState::Required,
            _ => FscState::NotRequired,
        }
    }

    /// Whether the indicator accepts `advance` in this state.
    pub fn is_interactive(self) -> bool {
        !self.is_read_only()
    }

    /// Whether the indicator is display-only in this state.
    pub fn is_read_only(self) -> bool {
        self == FscState::NotRequired
    }

    /// Visual variant, using `in_progress` for [`FscState::Current`].
    pub fn variant_with(self, in_progress: Variant) -> Variant {
        match self {
            FscState::Required => Variant::Primary,
            FscState::Current => in_progress,
            FscState::Completed => Variant::Green,
            FscState::NotRequired => Variant::Inactive,
        }
    }

    /// Visual variant with the default in-progress color.
    pub fn variant(self) -> Variant {
        self.variant_with(DEFAULT_IN_PROGRESS_VARIANT)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FscState::Required => "required",
            FscState::Current => "current",
            FscState::Completed => "completed",
            FscState::NotRequired => "not_required",
        }
    }
}

impl fmt::Display for FscState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How an indicator label is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelMode {
    /// First character only, emphasised.
    #[default]
    Letter,
    /// The full label.
    Word,
}

/// Render-ready output of an indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorView {
    /// State the view was computed from.
    pub state: FscState,
    /// Variant derived from the state.
    pub variant: Variant,
    /// Resolved colors for the current interaction mode.
    pub style: VisualStyle,
    /// Whether primary activation is accepted.
    pub interactive: bool,
    /// Text to display.
    pub content: String,
    /// Letter mode renders the content bold.
    pub emphasis: bool,
}

/// A single FSC indicator: one state plus fixed display settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FscIndicator {
    label: String,
    mode: LabelMode,
    in_progress: Variant,
    state: FscState,
}

impl FscIndicator {
    /// Create an indicator in [`FscState::Required`].
    pub fn new(label: impl Into<String>, mode: LabelMode) -> Self {
        Self {
            label: label.into(),
            mode,
            in_progress: DEFAULT_IN_PROGRESS_VARIANT,
            state: FscState::Required,
        }
    }

    /// Use a different variant for the in-progress state.
    pub fn with_in_progress_variant(mut self, variant: Variant) -> Self {
        self.in_progress = variant;
        self
    }

    pub fn state(&self) -> FscState {
        self.state
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn label_mode(&self) -> LabelMode {
        self.mode
    }

    /// Apply the primary trigger. Ignored while exempted.
    pub fn advance(&mut self) {
        let next = self.state.advance();
        if next == self.state {
            tracing::trace!(label = %self.label, state = %self.state, "advance ignored");
            return;
        }
        tracing::debug!(label = %self.label, from = %self.state, to = %next, "advance");
        self.state = next;
    }

    /// Apply the secondary trigger.
    pub fn toggle_exemption(&mut self) {
        let next = self.state.toggle_exemption();
        tracing::debug!(label = %self.label, from = %self.state, to = %next, "toggle exemption");
        self.state = next;
    }

    pub fn variant(&self) -> Variant {
        self.state.variant_with(self.in_progress)
    }

    pub fn is_interactive(&self) -> bool {
        self.state.is_interactive()
    }

    /// Displayed text: the first character in letter mode, the label otherwise.
    pub fn content(&self) -> &str {
        match self.mode {
            LabelMode::Word => &self.label,
            LabelMode::Letter => self
                .label
                .char_indices()
                .nth(1)
                .map_or(self.label.as_str(), |(end, _)| &self.label[..end]),
        }
    }

    /// Compute the render-ready output against a style table.
    pub fn render(&self, table: &StyleTable) -> IndicatorView {
        let variant = self.variant();
        let interactive = self.is_interactive();
        IndicatorView {
            state: self.state,
            variant,
            style: table.resolve(variant, !interactive),
            interactive,
            content: self.content().to_string(),
            emphasis: self.mode == LabelMode::Letter,
        }
    }
}
