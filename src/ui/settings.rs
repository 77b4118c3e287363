// SPDX-License-Identifier: MPL-2.0
//! Settings screen: display language and theme mode.
//!
//! Both choices apply immediately; the application persists them to
//! `settings.toml` when it receives the matching [`Event`].

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};
use unic_langid::LanguageIdentifier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    LanguageChanged(LanguageIdentifier),
    ThemeModeChanged(ThemeMode),
}

#[derive(Debug, Clone, Default)]
pub struct State {
    theme_mode: ThemeMode,
}

impl State {
    #[must_use]
    pub fn new(theme_mode: ThemeMode) -> Self {
        Self { theme_mode }
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    pub fn update(&mut self, message: Message, current_locale: &LanguageIdentifier) -> Event {
        match message {
            Message::LanguageSelected(locale) if &locale == current_locale => Event::None,
            Message::LanguageSelected(locale) => Event::LanguageChanged(locale),
            Message::ThemeModeSelected(mode) if mode == self.theme_mode => Event::None,
            Message::ThemeModeSelected(mode) => {
                self.theme_mode = mode;
                Event::ThemeModeChanged(mode)
            }
        }
    }
}

/// Language name in its own locale when a translation exists.
fn language_label(i18n: &I18n, locale: &LanguageIdentifier) -> String {
    let name = i18n.tr(&format!("language-name-{locale}"));
    if name.starts_with("MISSING:") {
        locale.to_string()
    } else {
        format!("{name} ({locale})")
    }
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let languages = i18n.available_locales.iter().fold(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(i18n.tr("settings-language")).size(typography::TITLE_SM)),
        |column, locale| {
            let style = if locale == i18n.current_locale() {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            column.push(
                button(Text::new(language_label(i18n, locale)))
                    .on_press(Message::LanguageSelected(locale.clone()))
                    .width(Length::Fill)
                    .style(style),
            )
        },
    );

    let modes = ThemeMode::ALL.iter().fold(Row::new().spacing(spacing::XS), |row, mode| {
        let style = if *mode == state.theme_mode {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        row.push(
            button(Text::new(i18n.tr(mode.i18n_key())))
                .on_press(Message::ThemeModeSelected(*mode))
                .style(style),
        )
    });

    let column = Column::new()
        .spacing(spacing::LG)
        .push(Text::new(i18n.tr("settings-title")).size(typography::TITLE_LG))
        .push(languages)
        .push(
            Column::new()
                .spacing(spacing::XS)
                .push(Text::new(i18n.tr("settings-theme")).size(typography::TITLE_SM))
                .push(modes),
        );

    Container::new(
        Container::new(column)
            .padding(spacing::LG)
            .width(Length::Fixed(sizing::SETTINGS_WIDTH))
            .style(styles::container::panel),
    )
    .width(Length::Fill)
    .padding(spacing::XL)
    .align_x(Horizontal::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locale(s: &str) -> LanguageIdentifier {
        s.parse().unwrap()
    }

    #[test]
    fn selecting_current_language_is_noop() {
        let mut state = State::default();
        let event = state.update(Message::LanguageSelected(locale("en-US")), &locale("en-US"));
        assert_eq!(event, Event::None);
    }

    #[test]
    fn selecting_other_language_emits_change() {
        let mut state = State::default();
        let event = state.update(Message::LanguageSelected(locale("pt-BR")), &locale("en-US"));
        assert_eq!(event, Event::LanguageChanged(locale("pt-BR")));
    }

    #[test]
    fn theme_mode_change_is_recorded() {
        let mut state = State::new(ThemeMode::System);
        let event = state.update(Message::ThemeModeSelected(ThemeMode::Dark), &locale("en-US"));
        assert_eq!(event, Event::ThemeModeChanged(ThemeMode::Dark));
        assert_eq!(state.theme_mode(), ThemeMode::Dark);
        assert_eq!(
            state.update(Message::ThemeModeSelected(ThemeMode::Dark), &locale("en-US")),
            Event::None
        );
    }

    #[test]
    fn language_label_includes_native_name() {
        let i18n = I18n::new(Some("en-US".into()), &crate::config::Config::default());
        assert_eq!(language_label(&i18n, &locale("pt-BR")), "Português (pt-BR)");
    }

    #[test]
    fn view_renders() {
        let i18n = I18n::default();
        let state = State::default();
        let _ = view(&state, &i18n);
    }
}
