// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{Message, Screen};
use crate::cv::CvDocument;
use crate::i18n::fluent::I18n;
use crate::ui::form;
use crate::ui::navbar;
use crate::ui::notifications::{self, Toast};
use crate::ui::settings;
use chrono::NaiveDate;
use iced::{
    widget::{scrollable, Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub settings: &'a settings::State,
    pub form: &'a form::State,
    pub document: &'a CvDocument,
    pub document_name: Option<&'a str>,
    pub dirty: bool,
    pub today: NaiveDate,
    pub notifications: &'a notifications::Manager,
}

/// Navbar above the current screen, with toasts layered on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        document_name: ctx.document_name,
        dirty: ctx.dirty,
        can_save: ctx.document_name.is_some() || !ctx.document.is_empty(),
        settings_open: ctx.screen == Screen::Settings,
    })
    .map(Message::Navbar);

    let content: Element<'_, Message> = match ctx.screen {
        Screen::Editor => form::view(
            ctx.form,
            form::ViewContext {
                i18n: ctx.i18n,
                document: ctx.document,
                today: ctx.today,
            },
        )
        .map(Message::Form),
        Screen::Settings => scrollable(settings::view(ctx.settings, ctx.i18n).map(Message::Settings))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    };

    let main = Column::new()
        .push(navbar)
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(main)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
