//! Showcase page: both FSC trios, a set of generic moodlets and a dropdown.

use iced::widget::{Column, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};

use moodlet_core::{DisplayConfig, FscGroup, LabelMode, LayoutMode, StyleTable, Variant};

use crate::message::{Message, TrioId};
use crate::view::components::{
    DropdownOption, DropdownState, IconPlacement, Moodlet, PillContent, dropdown, trio,
};
use crate::view::icons::Icon;

/// State of the showcase page.
#[derive(Debug, Clone)]
pub struct ShowcaseState {
    /// Letter trio (F / S / C).
    pub letters: FscGroup,
    /// Word trio (FUELLING / SERVICING / CLEANING).
    pub words: FscGroup,
    /// Dropdown open state and selection.
    pub dropdown: DropdownState,
    /// Dropdown entries.
    pub options: Vec<DropdownOption<Message>>,
    /// Desktop or mobile sizing.
    pub layout: LayoutMode,
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self::new(&DisplayConfig::default())
    }
}

impl ShowcaseState {
    /// Build the page from display settings.
    pub fn new(display: &DisplayConfig) -> Self {
        Self {
            letters: FscGroup::new(LabelMode::Letter)
                .with_in_progress_variant(display.in_progress_variant),
            words: FscGroup::new(LabelMode::Word)
                .with_in_progress_variant(display.in_progress_variant),
            dropdown: DropdownState::default(),
            options: default_options(),
            layout: display.layout,
        }
    }

    pub fn trio(&self, id: TrioId) -> &FscGroup {
        match id {
            TrioId::Letters => &self.letters,
            TrioId::Words => &self.words,
        }
    }

    pub fn trio_mut(&mut self, id: TrioId) -> &mut FscGroup {
        match id {
            TrioId::Letters => &mut self.letters,
            TrioId::Words => &mut self.words,
        }
    }
}

/// Options shown in the dropdown demo.
fn default_options() -> Vec<DropdownOption<Message>> {
    vec![
        DropdownOption::new("opt1", "Option 01")
            .with_prefix(Moodlet::text("F").variant(Variant::Primary)),
        DropdownOption::new("opt2", "Option 02")
            .with_prefix(Moodlet::text("S").variant(Variant::Secondary)),
        DropdownOption::new("opt3", "Option 03")
            .with_prefix(Moodlet::text("C").variant(Variant::Red)),
        DropdownOption::new("opt4", "Only text"),
    ]
}

/// Render the showcase page.
pub fn showcase_view<'a>(state: &ShowcaseState, table: &StyleTable) -> Element<'a, Message> {
    let content = column![
        section("FSC trio (letter)", render_trio(state, TrioId::Letters, table)),
        section("FSC trio (word)", render_trio(state, TrioId::Words, table)),
        section("Generic moodlets", render_generic_moodlets(table)),
        section(
            "Dropdown mixing text + moodlets",
            dropdown(
                &state.options,
                &state.dropdown,
                state.layout,
                table,
                Message::ToggleDropdown,
                Message::SelectOption,
            ),
        ),
    ]
    .spacing(40)
    .padding(40);

    container(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Heading followed by its content.
fn section<'a>(title: &'a str, body: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .push(text(title).size(20))
        .push(body)
        .spacing(12)
        .into()
}

fn render_trio<'a>(state: &ShowcaseState, id: TrioId, table: &StyleTable) -> Element<'a, Message> {
    trio(
        state.trio(id),
        table,
        move |index| Message::Advance(id, index),
        move |index| Message::ToggleExemption(id, index),
    )
}

/// Render the generic moodlet samples.
fn render_generic_moodlets<'a>(table: &StyleTable) -> Element<'a, Message> {
    let samples = [
        ("STOP", Moodlet::text("STOP").variant(Variant::Red)),
        ("OK", Moodlet::text("OK").variant(Variant::Green)),
        ("WARN", Moodlet::text("WARN").variant(Variant::Yellow)),
        ("F", Moodlet::text("F").variant(Variant::Primary)),
        ("smile", Moodlet::icon(Icon::Smile)),
        ("LOR", Moodlet::text("LOR")),
        (
            "smile-leading",
            Moodlet::new(PillContent::IconText {
                icon: Icon::Smile,
                text: "Smile".to_string(),
                placement: IconPlacement::Leading,
            }),
        ),
        (
            "smile-trailing",
            Moodlet::new(PillContent::IconText {
                icon: Icon::Smile,
                text: "Smile".to_string(),
                placement: IconPlacement::Trailing,
            }),
        ),
        (
            "done",
            Moodlet::new(PillContent::IconText {
                icon: Icon::Check,
                text: "DONE".to_string(),
                placement: IconPlacement::Leading,
            })
            .variant(Variant::Green)
            .read_only(true),
        ),
        (
            "placeholder",
            Moodlet::text("TBD").variant(Variant::Placeholder),
        ),
        (
            "disabled",
            Moodlet::text("N/A").variant(Variant::Disabled).disabled(true),
        ),
    ];

    samples
        .into_iter()
        .fold(row![].spacing(8), |row, (name, pill)| {
            row.push(pill.on_press(Message::MoodletPressed(name.to_string())).view(table))
        })
        .align_y(Alignment::Center)
        .wrap()
        .into()
}
