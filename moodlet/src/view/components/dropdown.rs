//! Dropdown selector whose options may carry a moodlet prefix.
//!
//! The widget is stateless; the host owns a [`DropdownState`] and maps the
//! toggle/select callbacks onto it. Outside-click dismissal is the host's job
//! (see `app.rs`).

use iced::widget::{Column, Row, button, column, container, scrollable, text};
use iced::{Alignment, Background, Border, Element, Length, Padding, Shadow, Theme, Vector};

use moodlet_core::{LayoutMode, StyleTable};

use super::pill::Moodlet;
use crate::view::icons::{self, Icon, IconSize};
use crate::view::theme;

/// Trigger text when nothing is selected.
pub const PLACEHOLDER: &str = "Select…";

/// One entry in the menu.
#[derive(Debug, Clone)]
pub struct DropdownOption<Message> {
    /// Identifier reported on selection.
    pub id: String,
    /// Text shown to the user.
    pub label: String,
    /// Optional pill shown before the label.
    pub prefix: Option<Moodlet<Message>>,
    /// Greyed out and not selectable.
    pub disabled: bool,
}

impl<Message> DropdownOption<Message> {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            prefix: None,
            disabled: false,
        }
    }

    pub fn with_prefix(mut self, prefix: Moodlet<Message>) -> Self {
        self.prefix = Some(prefix);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Open/closed state and current selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownState {
    /// Whether the menu is visible.
    pub open: bool,
    /// Id of the selected option.
    pub selected: Option<String>,
}

impl DropdownState {
    /// Open a closed menu or close an open one.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close the menu.
    pub fn dismiss(&mut self) {
        self.open = false;
    }

    /// Select an option by id and close the menu.
    ///
    /// Unknown or disabled options are ignored; returns whether the
    /// selection changed hands.
    pub fn select<Message>(&mut self, options: &[DropdownOption<Message>], id: &str) -> bool {
        match options.iter().find(|o| o.id == id) {
            Some(option) if !option.disabled => {
                self.selected = Some(option.id.clone());
                self.open = false;
                true
            }
            _ => false,
        }
    }

    /// The selected option, if it is still in the list.
    pub fn selected_option<'o, Message>(
        &self,
        options: &'o [DropdownOption<Message>],
    ) -> Option<&'o DropdownOption<Message>> {
        let id = self.selected.as_deref()?;
        options.iter().find(|o| o.id == id)
    }
}

/// Sizes that differ between desktop and mobile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropdownMetrics {
    pub menu_width: f32,
    pub menu_max_height: f32,
    pub menu_padding: Padding,
    pub row_height: f32,
    pub row_padding: Padding,
    pub row_radius: f32,
}

impl DropdownMetrics {
    pub fn for_layout(layout: LayoutMode) -> Self {
        match layout {
            LayoutMode::Desktop => Self {
                menu_width: 215.0,
                menu_max_height: 113.0,
                menu_padding: Padding::from([5.0, 6.0]),
                row_height: 22.0,
                row_padding: Padding::from([2.0, 4.0]),
                row_radius: 8.0,
            },
            LayoutMode::Mobile => Self {
                menu_width: 215.0,
                menu_max_height: 150.0,
                menu_padding: Padding::from([6.0, 4.0]),
                row_height: 30.0,
                row_padding: Padding::from([4.0, 8.0]),
                row_radius: 12.0,
            },
        }
    }
}

/// Render the trigger and, when open, the menu below it.
pub fn dropdown<'a, Message: Clone + 'a>(
    options: &[DropdownOption<Message>],
    state: &DropdownState,
    layout: LayoutMode,
    table: &StyleTable,
    on_toggle: Message,
    on_select: impl Fn(String) -> Message,
) -> Element<'a, Message> {
    let metrics = DropdownMetrics::for_layout(layout);
    let trigger = render_trigger(state.selected_option(options), table, on_toggle);

    if !state.open {
        return trigger;
    }

    let menu = render_menu(options, state, metrics, table, on_select);
    column![trigger, menu].spacing(4).into()
}

/// Render the button that opens the menu.
fn render_trigger<'a, Message: Clone + 'a>(
    selected: Option<&DropdownOption<Message>>,
    table: &StyleTable,
    on_toggle: Message,
) -> Element<'a, Message> {
    let mut content = Row::new().spacing(6).align_y(Alignment::Center);

    if let Some(prefix) = selected.and_then(|o| o.prefix.clone()) {
        content = content.push(prefix.view(table));
    }

    let label = selected.map_or(PLACEHOLDER.to_string(), |o| o.label.clone());
    content = content
        .push(text(label).size(14))
        .push(icons::icon(Icon::ChevronDown, IconSize::Small, None));

    button(content)
        .on_press(on_toggle)
        .height(Length::Fixed(30.0))
        .padding([0, 8])
        .style(|t: &Theme, _status| {
            let colors = theme::colors(t);
            button::Style {
                background: Some(Background::Color(colors.surface())),
                text_color: colors.text(),
                border: Border {
                    color: colors.surface_border(),
                    width: 1.0,
                    radius: 12.0.into(),
                },
                ..button::Style::default()
            }
        })
        .into()
}

/// Render the list of options.
fn render_menu<'a, Message: Clone + 'a>(
    options: &[DropdownOption<Message>],
    state: &DropdownState,
    metrics: DropdownMetrics,
    table: &StyleTable,
    on_select: impl Fn(String) -> Message,
) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(2);

    for option in options {
        let selected = state.selected.as_deref() == Some(option.id.as_str());
        rows = rows.push(render_option(option, selected, metrics, table, &on_select));
    }

    container(scrollable(rows))
        .width(Length::Fixed(metrics.menu_width))
        .max_height(metrics.menu_max_height)
        .padding(metrics.menu_padding)
        .style(|t: &Theme| {
            let colors = theme::colors(t);
            container::Style {
                background: Some(Background::Color(colors.surface())),
                border: Border {
                    color: colors.surface_border(),
                    width: 1.0,
                    radius: 4.0.into(),
                },
                shadow: Shadow {
                    color: colors.surface_shadow(),
                    offset: Vector::new(0.0, 1.0),
                    blur_radius: 2.0,
                },
                ..Default::default()
            }
        })
        .into()
}

/// Render a single option row.
fn render_option<'a, Message: Clone + 'a>(
    option: &DropdownOption<Message>,
    selected: bool,
    metrics: DropdownMetrics,
    table: &StyleTable,
    on_select: &impl Fn(String) -> Message,
) -> Element<'a, Message> {
    let mut content = Row::new().spacing(10).align_y(Alignment::Center);

    if let Some(prefix) = option.prefix.clone() {
        content = content.push(prefix.view(table));
    }
    content = content.push(text(option.label.clone()).size(13));

    let disabled = option.disabled;
    let radius = metrics.row_radius;

    button(content)
        .on_press_maybe((!disabled).then(|| on_select(option.id.clone())))
        .width(Length::Fill)
        .height(Length::Fixed(metrics.row_height))
        .padding(metrics.row_padding)
        .style(move |t: &Theme, status| option_style(t, selected, disabled, radius, status))
        .into()
}

fn option_style(
    t: &Theme,
    selected: bool,
    disabled: bool,
    radius: f32,
    status: button::Status,
) -> button::Style {
    let colors = theme::colors(t);

    let background = if selected {
        Some(Background::Color(colors.row_selected()))
    } else if !disabled && matches!(status, button::Status::Hovered | button::Status::Pressed) {
        Some(Background::Color(colors.row_hover()))
    } else {
        None
    };

    button::Style {
        background,
        text_color: if disabled {
            colors.text_muted()
        } else {
            colors.text()
        },
        border: Border {
            radius: radius.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}
