//! Moodlet Iced application.

use iced::widget::mouse_area;
use iced::{Element, Task, Theme};

use moodlet_core::{AppConfig, StyleTable, ThemeChoice};

use crate::message::Message;
use crate::view::showcase::{ShowcaseState, showcase_view};

/// The Moodlet showcase application.
pub struct Showcase {
    /// Loaded configuration.
    config: AppConfig,
    /// Palette used to resolve pill colors.
    styles: StyleTable,
    /// Page state.
    page: ShowcaseState,
}

impl Showcase {
    /// Build the application from a validated configuration.
    pub fn new(config: AppConfig, styles: StyleTable) -> (Self, Task<Message>) {
        let app = Self {
            page: ShowcaseState::new(&config.display),
            config,
            styles,
        };

        (app, Task::none())
    }

    /// Boot with built-in defaults.
    pub fn boot() -> (Self, Task<Message>) {
        Self::new(AppConfig::default(), StyleTable::default())
    }

    /// Get the window title.
    pub fn title(&self) -> String {
        "Moodlet".to_string()
    }

    /// Page state, for inspection.
    pub fn page(&self) -> &ShowcaseState {
        &self.page
    }

    /// Handle incoming messages.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Any interaction other than the dropdown's own closes the menu.
        if !matches!(
            message,
            Message::ToggleDropdown | Message::SelectOption(_) | Message::DismissDropdown
        ) {
            self.page.dropdown.dismiss();
        }

        match message {
            Message::Advance(trio, index) => {
                self.page.trio_mut(trio).advance(index);
            }

            Message::ToggleExemption(trio, index) => {
                self.page.trio_mut(trio).toggle_exemption(index);
            }

            Message::MoodletPressed(name) => {
                tracing::info!(moodlet = %name, "Moodlet pressed");
            }

            Message::ToggleDropdown => {
                self.page.dropdown.toggle();
            }

            Message::SelectOption(id) => {
                if self.page.dropdown.select(&self.page.options, &id) {
                    tracing::info!(option = %id, "Selected option");
                } else {
                    tracing::debug!(option = %id, "Ignored unavailable option");
                }
            }

            Message::DismissDropdown => {
                self.page.dropdown.dismiss();
            }
        }

        Task::none()
    }

    /// Render the view.
    pub fn view(&self) -> Element<'_, Message> {
        let page = showcase_view(&self.page, &self.styles);

        // Clicks that no widget captured count as "outside" the dropdown.
        if self.page.dropdown.open {
            mouse_area(page).on_press(Message::DismissDropdown).into()
        } else {
            page
        }
    }

    /// Get the application theme.
    pub fn theme(&self) -> Theme {
        match self.config.display.theme {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
        }
    }
}
