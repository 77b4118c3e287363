// SPDX-License-Identifier: MPL-2.0
//! Professional summary, edited as free multi-line text.

use super::Event;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{text_editor, Column, Container, Text},
    Element, Length,
};

const EDITOR_HEIGHT: f32 = 140.0;

#[derive(Debug, Default)]
pub struct State {
    content: text_editor::Content,
}

#[derive(Debug, Clone)]
pub enum Message {
    Edit(text_editor::Action),
}

impl State {
    #[must_use]
    pub fn new(summary: &str) -> Self {
        Self {
            content: text_editor::Content::with_text(summary),
        }
    }

    pub fn reset(&mut self, summary: &str) {
        *self = Self::new(summary);
    }

    pub fn update(&mut self, message: Message, summary: &mut String) -> Event {
        match message {
            Message::Edit(action) => {
                let is_edit = action.is_edit();
                self.content.perform(action);
                if !is_edit {
                    return Event::None;
                }
                *summary = self.content.text();
                Event::Changed
            }
        }
    }
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let editor = text_editor(&state.content)
        .placeholder(i18n.tr("summary-placeholder"))
        .on_action(Message::Edit)
        .height(EDITOR_HEIGHT)
        .padding(spacing::XS)
        .size(typography::BODY);

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(i18n.tr("section-summary")).size(typography::TITLE_MD))
            .push(editor),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::panel)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::text_editor::{Action, Edit};

    #[test]
    fn typing_updates_summary() {
        let mut summary = String::new();
        let mut state = State::new(&summary);
        let event = state.update(Message::Edit(Action::Edit(Edit::Insert('H'))), &mut summary);
        assert_eq!(event, Event::Changed);
        assert!(summary.starts_with('H'));
    }

    #[test]
    fn cursor_moves_are_not_changes() {
        let mut summary = "Engineer".to_string();
        let mut state = State::new(&summary);
        let event = state.update(Message::Edit(Action::SelectAll), &mut summary);
        assert_eq!(event, Event::None);
        assert_eq!(summary, "Engineer");
    }

    #[test]
    fn reset_replaces_text() {
        let mut state = State::new("old");
        state.reset("new text");
        assert!(state.content.text().starts_with("new text"));
    }
}
