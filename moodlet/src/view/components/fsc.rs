//! FSC indicator pills and the trio row.
//!
//! Left-click maps to `advance`, right-click to `toggle_exemption`. While an
//! indicator is exempted its pill is read-only, so only right-click reacts.

use iced::widget::Row;
use iced::{Alignment, Element, font};

use moodlet_core::{FscGroup, FscIndicator, IndicatorView, StyleTable};

use super::pill::{PillContent, pill};

/// Spacing between pills in a trio.
const TRIO_SPACING: f32 = 4.0;

/// Render a single indicator.
pub fn indicator<'a, Message: Clone + 'a>(
    indicator: &FscIndicator,
    table: &StyleTable,
    on_advance: Message,
    on_toggle_exemption: Message,
) -> Element<'a, Message> {
    indicator_view(indicator.render(table), on_advance, on_toggle_exemption)
}

/// Render an already computed indicator view.
pub fn indicator_view<'a, Message: Clone + 'a>(
    view: IndicatorView,
    on_advance: Message,
    on_toggle_exemption: Message,
) -> Element<'a, Message> {
    let weight = if view.emphasis {
        font::Weight::Bold
    } else {
        font::Weight::Normal
    };

    pill(
        PillContent::Text(view.content),
        view.style,
        view.interactive,
        weight,
        Some(on_advance),
        Some(on_toggle_exemption),
    )
}

/// Render every indicator of a group side by side.
pub fn trio<'a, Message: Clone + 'a>(
    group: &FscGroup,
    table: &StyleTable,
    on_advance: impl Fn(usize) -> Message,
    on_toggle_exemption: impl Fn(usize) -> Message,
) -> Element<'a, Message> {
    group
        .iter()
        .enumerate()
        .fold(Row::new(), |row, (index, member)| {
            row.push(indicator(
                member,
                table,
                on_advance(index),
                on_toggle_exemption(index),
            ))
        })
        .spacing(TRIO_SPACING)
        .align_y(Alignment::Center)
        .into()
}
