// SPDX-License-Identifier: MPL-2.0
//! Top bar with document actions and the settings toggle.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// File name of the current document, if it has been saved.
    pub document_name: Option<&'a str>,
    pub dirty: bool,
    /// False for an untitled document with nothing filled in.
    pub can_save: bool,
    pub settings_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    New,
    Open,
    Save,
    SaveAs,
    ToggleSettings,
}

/// Requests for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    NewDocument,
    OpenDocument,
    SaveDocument,
    SaveDocumentAs,
    OpenSettings,
    CloseSettings,
}

pub fn update(message: Message, settings_open: bool) -> Event {
    match message {
        Message::New => Event::NewDocument,
        Message::Open => Event::OpenDocument,
        Message::Save => Event::SaveDocument,
        Message::SaveAs => Event::SaveDocumentAs,
        Message::ToggleSettings if settings_open => Event::CloseSettings,
        Message::ToggleSettings => Event::OpenSettings,
    }
}

fn action<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::unselected)
        .into()
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let save_style = if ctx.dirty {
        styles::button::primary
    } else {
        styles::button::unselected
    };
    let save = button(Text::new(i18n.tr("navbar-save")).size(typography::BODY))
        .on_press_maybe(ctx.can_save.then_some(Message::Save))
        .padding([spacing::XXS, spacing::SM])
        .style(save_style);

    let name = ctx
        .document_name
        .map_or_else(|| i18n.tr("document-untitled"), str::to_string);
    let name = if ctx.dirty { format!("{name} •") } else { name };

    let settings_label = if ctx.settings_open {
        i18n.tr("navbar-back")
    } else {
        i18n.tr("navbar-settings")
    };
    let settings = button(Text::new(settings_label).size(typography::BODY))
        .on_press(Message::ToggleSettings)
        .padding([spacing::XXS, spacing::SM])
        .style(if ctx.settings_open {
            styles::button::selected
        } else {
            styles::button::unselected
        });

    let row = Row::new()
        .spacing(spacing::XS)
        .padding(spacing::XS)
        .align_y(Vertical::Center)
        .push(action(i18n.tr("navbar-new"), Message::New))
        .push(action(i18n.tr("navbar-open"), Message::Open))
        .push(save)
        .push(action(i18n.tr("navbar-save-as"), Message::SaveAs))
        .push(Space::new().width(Length::Fill))
        .push(Text::new(name).size(typography::BODY_SM))
        .push(Space::new().width(Length::Fill))
        .push(settings);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::toolbar)
        .into()
}
