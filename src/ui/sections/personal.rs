// SPDX-License-Identifier: MPL-2.0
//! Personal information: name, headline and contact details.

use super::Event;
use crate::cv::PersonalInfo;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{text_input, Column, Container, Row, Text},
    Element, Length,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FullName,
    Headline,
    Email,
    Phone,
    Location,
    Website,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::FullName,
        Field::Headline,
        Field::Email,
        Field::Phone,
        Field::Location,
        Field::Website,
    ];

    fn label_key(self) -> &'static str {
        match self {
            Field::FullName => "field-full-name",
            Field::Headline => "field-headline",
            Field::Email => "field-email",
            Field::Phone => "field-phone",
            Field::Location => "field-location",
            Field::Website => "field-website",
        }
    }

    fn get(self, info: &PersonalInfo) -> &str {
        match self {
            Field::FullName => &info.full_name,
            Field::Headline => &info.headline,
            Field::Email => &info.email,
            Field::Phone => &info.phone,
            Field::Location => &info.location,
            Field::Website => &info.website,
        }
    }

    fn slot(self, info: &mut PersonalInfo) -> &mut String {
        match self {
            Field::FullName => &mut info.full_name,
            Field::Headline => &mut info.headline,
            Field::Email => &mut info.email,
            Field::Phone => &mut info.phone,
            Field::Location => &mut info.location,
            Field::Website => &mut info.website,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Changed(Field, String),
}

pub fn update(message: Message, info: &mut PersonalInfo) -> Event {
    match message {
        Message::Changed(field, value) => {
            let slot = field.slot(info);
            if *slot == value {
                return Event::None;
            }
            *slot = value;
            Event::Changed
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub info: &'a PersonalInfo,
}

fn input<'a>(ctx: &ViewContext<'a>, field: Field) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(ctx.i18n.tr(field.label_key())).size(typography::BODY_SM))
        .push(
            text_input("", field.get(ctx.info))
                .on_input(move |value| Message::Changed(field, value))
                .padding(spacing::XS)
                .size(typography::BODY),
        )
        .into()
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr("section-personal")).size(typography::TITLE_MD));

    // Two inputs per row.
    for pair in Field::ALL.chunks(2) {
        let row = pair.iter().fold(Row::new().spacing(spacing::MD), |row, field| {
            row.push(input(&ctx, *field))
        });
        column = column.push(row);
    }

    Container::new(column)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}
