//! Moodlet pill: a small rounded badge with a variant color.

use iced::widget::{Text, button, mouse_area, row, text};
use iced::{Alignment, Background, Border, Element, Font, Length, Padding, Theme, font, mouse};

use moodlet_core::{StyleTable, Variant, VisualStyle};

use crate::view::icons::{self, Icon, IconSize};
use crate::view::theme;

/// Pill height in pixels.
pub const PILL_HEIGHT: f32 = 14.0;
/// Text size inside a pill.
pub const PILL_TEXT_SIZE: f32 = 10.0;
/// Horizontal padding for text content.
const BASE_PADDING_X: f32 = 4.0;
/// Extra padding on the icon side.
const ICON_PADDING_X: f32 = 4.0;
/// Gap between an icon and its text.
const GAP: f32 = 3.0;

/// Which side of the text an icon sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconPlacement {
    Leading,
    Trailing,
}

/// What a pill shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PillContent {
    Text(String),
    Icon(Icon),
    IconText {
        icon: Icon,
        text: String,
        placement: IconPlacement,
    },
}

impl PillContent {
    /// Padding around the content; icons get extra room on their side.
    pub fn padding(&self) -> Padding {
        let base = Padding {
            top: 0.0,
            right: BASE_PADDING_X,
            bottom: 0.0,
            left: BASE_PADDING_X,
        };
        let wide = BASE_PADDING_X + ICON_PADDING_X;

        match self {
            PillContent::Text(_) => base,
            PillContent::Icon(_) => Padding {
                left: wide,
                right: wide,
                ..base
            },
            PillContent::IconText {
                placement: IconPlacement::Leading,
                ..
            } => Padding { right: wide, ..base },
            PillContent::IconText {
                placement: IconPlacement::Trailing,
                ..
            } => Padding { left: wide, ..base },
        }
    }
}

/// Builder for a generic moodlet pill.
#[derive(Debug, Clone)]
pub struct Moodlet<Message> {
    content: PillContent,
    variant: Variant,
    read_only: bool,
    disabled: bool,
    bold: bool,
    on_press: Option<Message>,
    on_context: Option<Message>,
}

impl<Message> Moodlet<Message> {
    /// Create a primary, interactive pill.
    pub fn new(content: PillContent) -> Self {
        Self {
            content,
            variant: Variant::Primary,
            read_only: false,
            disabled: false,
            bold: false,
            on_press: None,
            on_context: None,
        }
    }

    /// A text pill.
    pub fn text(label: impl Into<String>) -> Self {
        Self::new(PillContent::Text(label.into()))
    }

    /// An icon-only pill.
    pub fn icon(icon: Icon) -> Self {
        Self::new(PillContent::Icon(icon))
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Display-only pill: no left-click, read-only colors.
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Render the text in bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Message sent on left-click while interactive.
    pub fn on_press(mut self, message: Message) -> Self {
        self.on_press = Some(message);
        self
    }

    /// Message sent on right-click, in every mode.
    pub fn on_context(mut self, message: Message) -> Self {
        self.on_context = Some(message);
        self
    }

    pub fn is_interactive(&self) -> bool {
        !self.read_only && !self.disabled
    }

    /// Colors this pill renders with.
    pub fn style(&self, table: &StyleTable) -> VisualStyle {
        table.resolve(self.variant, !self.is_interactive())
    }

    /// Render the pill as an Iced element.
    pub fn view<'a>(self, table: &StyleTable) -> Element<'a, Message>
    where
        Message: Clone + 'a,
    {
        let style = self.style(table);
        let interactive = self.is_interactive();
        let weight = if self.bold {
            font::Weight::Bold
        } else {
            font::Weight::Normal
        };

        pill(
            self.content,
            style,
            interactive,
            weight,
            self.on_press,
            self.on_context,
        )
    }
}

/// Render a pill from an already resolved style.
///
/// `on_press` only fires while `interactive`; `on_context` always fires.
pub fn pill<'a, Message: Clone + 'a>(
    content: PillContent,
    style: VisualStyle,
    interactive: bool,
    weight: font::Weight,
    on_press: Option<Message>,
    on_context: Option<Message>,
) -> Element<'a, Message> {
    let padding = content.padding();
    let body = content_row(content, style, weight);

    let pill = button(body)
        .padding(padding)
        .height(Length::Fixed(PILL_HEIGHT))
        .on_press_maybe(on_press.filter(|_| interactive))
        .style(move |_theme: &Theme, status| pill_style(style, interactive, status));

    let mut area = mouse_area(pill);
    if interactive {
        area = area.interaction(mouse::Interaction::Pointer);
    }
    if let Some(message) = on_context {
        area = area.on_right_press(message);
    }
    area.into()
}

fn content_row<'a, Message: 'a>(
    content: PillContent,
    style: VisualStyle,
    weight: font::Weight,
) -> Element<'a, Message> {
    let font = Font {
        weight,
        ..Font::DEFAULT
    };
    let tint = Some(theme::color(style.foreground));

    match content {
        PillContent::Text(s) => label(s, font).into(),
        PillContent::Icon(i) => icons::icon(i, IconSize::Tiny, tint),
        PillContent::IconText {
            icon,
            text,
            placement,
        } => {
            let icon = icons::icon(icon, IconSize::Tiny, tint);
            let items = match placement {
                IconPlacement::Leading => row![icon, label(text, font)],
                IconPlacement::Trailing => row![label(text, font), icon],
            };
            items.spacing(GAP).align_y(Alignment::Center).into()
        }
    }
}

fn label<'a>(content: String, font: Font) -> Text<'a> {
    text(content).size(PILL_TEXT_SIZE).font(font)
}

/// Button style for a pill. Hover colors only apply while interactive.
pub(crate) fn pill_style(style: VisualStyle, interactive: bool, status: button::Status) -> button::Style {
    let hovered = interactive && matches!(status, button::Status::Hovered | button::Status::Pressed);

    let (border, foreground, background) = if hovered {
        (style.hover_border, style.hover_foreground, style.hover_background)
    } else {
        (style.border, style.foreground, style.background)
    };

    button::Style {
        background: Some(Background::Color(theme::color(background))),
        text_color: theme::color(foreground),
        border: Border {
            color: theme::color(border),
            width: 1.0,
            radius: (PILL_HEIGHT / 2.0).into(),
        },
        ..button::Style::default()
    }
}
