//! UI tests using iced_test Simulator.
//!
//! These tests verify widget rendering and click wiring without opening a
//! window.

use iced::{Event, mouse};
use iced_test::selector::Bounded;
use iced_test::{Simulator, simulator};

use moodlet::message::{Message, TrioId};
use moodlet::view::components::{DropdownOption, DropdownState, Moodlet, dropdown, trio};
use moodlet::view::showcase::{ShowcaseState, showcase_view};
use moodlet_core::{FscGroup, LabelMode, LayoutMode, StyleTable, Variant};

fn letter_trio(group: &FscGroup) -> iced::Element<'_, Message> {
    trio(
        group,
        StyleTable::builtin(),
        |index| Message::Advance(TrioId::Letters, index),
        |index| Message::ToggleExemption(TrioId::Letters, index),
    )
}

/// Test that the letter trio shows single letters.
#[test]
fn test_letter_trio_renders_letters() {
    let group = FscGroup::new(LabelMode::Letter);
    let mut ui = simulator(letter_trio(&group));

    assert!(ui.find("F").is_ok());
    assert!(ui.find("S").is_ok());
    assert!(ui.find("C").is_ok());
    assert!(ui.find("FUELLING").is_err());
}

/// Test that the word trio shows full labels.
#[test]
fn test_word_trio_renders_words() {
    let group = FscGroup::new(LabelMode::Word);
    let mut ui = simulator(trio(
        &group,
        StyleTable::builtin(),
        |index| Message::Advance(TrioId::Words, index),
        |index| Message::ToggleExemption(TrioId::Words, index),
    ));

    assert!(ui.find("FUELLING").is_ok());
    assert!(ui.find("SERVICING").is_ok());
    assert!(ui.find("CLEANING").is_ok());
}

/// Press and release the right button over the text matching `label`.
fn right_click(ui: &mut Simulator<'_, Message>, label: &str) {
    let target = ui.find(label).expect("label should be rendered");
    let bounds = target
        .visible_bounds()
        .expect("label should be visible");

    ui.point_at(bounds.center());
    let _ = ui.simulate([
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right)),
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Right)),
    ]);
}

/// Test that clicking an indicator produces an Advance message.
#[test]
fn test_click_advances_indicator() {
    let group = FscGroup::new(LabelMode::Letter);
    let mut ui = simulator(letter_trio(&group));

    let _ = ui.click("S");

    let messages: Vec<Message> = ui.into_messages().collect();
    assert!(
        messages
            .iter()
            .any(|m| matches!(m, Message::Advance(TrioId::Letters, 1)))
    );
}

/// Test that an exempted indicator ignores left-clicks.
#[test]
fn test_click_on_exempted_indicator_is_ignored() {
    let mut group = FscGroup::new(LabelMode::Letter);
    group.toggle_exemption(0);
    let mut ui = simulator(letter_trio(&group));

    let _ = ui.click("F");

    let messages: Vec<Message> = ui.into_messages().collect();
    assert!(
        !messages
            .iter()
            .any(|m| matches!(m, Message::Advance(_, _)))
    );
}

/// Test that right-clicking an indicator toggles its exemption.
#[test]
fn test_right_click_toggles_exemption() {
    let group = FscGroup::new(LabelMode::Letter);
    let mut ui = simulator(letter_trio(&group));

    right_click(&mut ui, "C");

    let messages: Vec<Message> = ui.into_messages().collect();
    assert!(
        messages
            .iter()
            .any(|m| matches!(m, Message::ToggleExemption(TrioId::Letters, 2)))
    );
    assert!(
        !messages
            .iter()
            .any(|m| matches!(m, Message::Advance(_, _)))
    );
}

/// Test that an exempted indicator still reacts to right-click.
#[test]
fn test_right_click_restores_exempted_indicator() {
    let mut group = FscGroup::new(LabelMode::Letter);
    group.toggle_exemption(0);
    let mut ui = simulator(letter_trio(&group));

    right_click(&mut ui, "F");

    let messages: Vec<Message> = ui.into_messages().collect();
    assert!(
        messages
            .iter()
            .any(|m| matches!(m, Message::ToggleExemption(TrioId::Letters, 0)))
    );
}

/// Test that a generic moodlet reports its press.
#[test]
fn test_moodlet_press() {
    let pill = Moodlet::text("STOP")
        .variant(Variant::Red)
        .on_press(Message::MoodletPressed("STOP".to_string()));
    let mut ui = simulator(pill.view(StyleTable::builtin()));

    let _ = ui.click("STOP");

    let messages: Vec<Message> = ui.into_messages().collect();
    assert!(
        messages
            .iter()
            .any(|m| matches!(m, Message::MoodletPressed(name) if name == "STOP"))
    );
}

/// Test that the showcase page renders every section.
#[test]
fn test_showcase_sections() {
    let state = ShowcaseState::default();
    let mut ui = simulator(showcase_view(&state, StyleTable::builtin()));

    assert!(ui.find("FSC trio (letter)").is_ok());
    assert!(ui.find("FSC trio (word)").is_ok());
    assert!(ui.find("Generic moodlets").is_ok());
    assert!(ui.find("Dropdown mixing text + moodlets").is_ok());
    assert!(ui.find("WARN").is_ok());
}

/// Test that a closed dropdown shows the placeholder and toggles on click.
#[test]
fn test_dropdown_trigger() {
    let options: Vec<DropdownOption<Message>> = vec![
        DropdownOption::new("opt1", "Option 01"),
        DropdownOption::new("opt4", "Only text"),
    ];
    let state = DropdownState::default();
    let mut ui = simulator(dropdown(
        &options,
        &state,
        LayoutMode::Desktop,
        StyleTable::builtin(),
        Message::ToggleDropdown,
        Message::SelectOption,
    ));

    assert!(ui.find("Select…").is_ok());
    assert!(ui.find("Option 01").is_err());

    let _ = ui.click("Select…");

    let messages: Vec<Message> = ui.into_messages().collect();
    assert!(messages.iter().any(|m| matches!(m, Message::ToggleDropdown)));
}

/// Test that an open dropdown lists options and reports the picked one.
#[test]
fn test_dropdown_select() {
    let options: Vec<DropdownOption<Message>> = vec![
        DropdownOption::new("opt1", "Option 01")
            .with_prefix(Moodlet::text("F").variant(Variant::Primary)),
        DropdownOption::new("opt4", "Only text"),
    ];
    let state = DropdownState {
        open: true,
        selected: None,
    };
    let mut ui = simulator(dropdown(
        &options,
        &state,
        LayoutMode::Mobile,
        StyleTable::builtin(),
        Message::ToggleDropdown,
        Message::SelectOption,
    ));

    assert!(ui.find("Option 01").is_ok());
    let _ = ui.click("Only text");

    let messages: Vec<Message> = ui.into_messages().collect();
    assert!(
        messages
            .iter()
            .any(|m| matches!(m, Message::SelectOption(id) if id == "opt4"))
    );
}

/// Test that the trigger shows the selected option's label.
#[test]
fn test_dropdown_shows_selection() {
    let options: Vec<DropdownOption<Message>> = vec![
        DropdownOption::new("opt1", "Option 01"),
        DropdownOption::new("opt2", "Option 02"),
    ];
    let state = DropdownState {
        open: false,
        selected: Some("opt2".to_string()),
    };
    let mut ui = simulator(dropdown(
        &options,
        &state,
        LayoutMode::Desktop,
        StyleTable::builtin(),
        Message::ToggleDropdown,
        Message::SelectOption,
    ));

    assert!(ui.find("Option 02").is_ok());
    assert!(ui.find("Select…").is_err());
}
