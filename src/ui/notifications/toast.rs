// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    fn message(notification: &Notification, i18n: &I18n) -> String {
        if notification.args().is_empty() {
            return i18n.tr(notification.key());
        }
        let args: Vec<(&str, &str)> = notification
            .args()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        i18n.tr_with_args(notification.key(), &args)
    }

    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let severity = notification.severity();
        let accent = severity.color();

        let glyph = Text::new(severity.glyph())
            .size(typography::BODY_LG)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent),
            });

        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(glyph)
            .push(
                Container::new(Text::new(Self::message(notification, i18n)).size(typography::BODY))
                    .width(Length::Fill),
            )
            .push(
                button(Text::new("×").size(typography::BODY_LG))
                    .on_press(Message::Dismiss(notification.id()))
                    .padding(spacing::XXS)
                    .style(styles::button::ghost),
            );

        Container::new(row)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_style(theme, accent))
            .into()
    }

    /// Stack of visible toasts anchored bottom-right.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        if manager.visible_count() == 0 {
            return Space::new().into();
        }

        let column = manager
            .visible()
            .fold(Column::new().spacing(spacing::XS), |column, n| {
                column.push(Self::view(n, i18n))
            });

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

fn toast_style(theme: &Theme, accent: Color) -> container::Style {
    let base = theme.extended_palette().background.base;
    container::Style {
        background: Some(base.color.into()),
        text_color: Some(base.text),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}
