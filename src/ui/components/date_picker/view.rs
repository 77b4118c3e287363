// SPDX-License-Identifier: MPL-2.0
//! Rendering of the date field and its calendar popup.

use super::calendar::{self, MONTH_KEYS, WEEKDAY_KEYS};
use super::{Message, State};
use crate::cv::date::parse_iso_date;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::popup_anchor;
use chrono::{Datelike, NaiveDate};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, mouse_area, text, Column, Container, Row, Space, Text},
    Element, Length, Theme,
};

const CELL_GAP: f32 = 2.0;
const YEARS_PER_ROW: usize = 7;

/// Contextual data needed to render a date picker.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Bound `YYYY-MM-DD` value (may be empty or malformed).
    pub value: &'a str,
    pub placeholder: String,
    pub today: NaiveDate,
    /// Disabled pickers show the placeholder and ignore clicks.
    pub disabled: bool,
}

/// Localized long form of `value`, the raw text when it does not parse, or
/// `None` when it is empty.
pub fn display_text(i18n: &I18n, value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return None;
    }
    match parse_iso_date(value) {
        Some(date) => Some(long_date(i18n, date)),
        None => Some(value.to_string()),
    }
}

fn long_date(i18n: &I18n, date: NaiveDate) -> String {
    let day = date.day().to_string();
    let month = i18n.tr(MONTH_KEYS[date.month0() as usize]);
    let year = date.year().to_string();
    i18n.tr_with_args(
        "date-long",
        &[
            ("day", day.as_str()),
            ("month", month.as_str()),
            ("year", year.as_str()),
        ],
    )
}

/// The field, with the calendar floating below it while open.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let anchor = mouse_area(field(state, &ctx))
        .on_enter(Message::PointerEntered)
        .on_exit(Message::PointerExited);

    let floating: Option<Element<'a, Message>> = (state.is_open() && !ctx.disabled).then(|| {
        mouse_area(popup(state, &ctx))
            .on_enter(Message::PopupEntered)
            .on_exit(Message::PopupExited)
            .into()
    });

    popup_anchor(anchor, floating).gap(spacing::XXS).into()
}

fn field<'a>(state: &State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let shown = if ctx.disabled {
        None
    } else {
        display_text(ctx.i18n, ctx.value)
    };
    let is_placeholder = shown.is_none();
    let label = Text::new(shown.unwrap_or_else(|| ctx.placeholder.clone()))
        .size(typography::BODY)
        .style(move |theme: &Theme| {
            let palette = theme.extended_palette();
            text::Style {
                color: Some(if is_placeholder {
                    palette.background.strong.color
                } else {
                    palette.background.base.text
                }),
            }
        });

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(label)
        .push(Space::new().width(Length::Fill))
        .push(Text::new(if state.is_open() { "▴" } else { "▾" }).size(typography::BODY));

    let surface = Container::new(row)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fixed(sizing::DATE_FIELD_WIDTH))
        .style(styles::container::date_field(state.is_open()));

    let toggle = button(surface)
        .padding(0.0)
        .style(styles::button::ghost);

    if ctx.disabled {
        toggle.into()
    } else {
        toggle.on_press(Message::Toggle).into()
    }
}

fn popup<'a>(state: &State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let body = if state.is_year_picker_open() {
        year_panel(state)
    } else {
        day_grid(state, ctx)
    };

    let column = Column::new()
        .spacing(spacing::XS)
        .push(header(state, ctx))
        .push(body)
        .push(footer(ctx));

    Container::new(column)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::CALENDAR_WIDTH))
        .style(styles::container::popup)
        .into()
}

fn nav_button<'a>(glyph: &'a str, message: Message) -> Element<'a, Message> {
    button(Text::new(glyph).size(typography::BODY_LG))
        .on_press(message)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::ghost)
        .into()
}

fn header<'a>(state: &State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let month_label = ctx.i18n.tr(MONTH_KEYS[state.displayed_month() as usize]);
    let labels = Row::new()
        .spacing(spacing::XXS)
        .push(
            button(Text::new(month_label).size(typography::BODY))
                .on_press(Message::ToggleYearPicker)
                .style(styles::button::ghost),
        )
        .push(
            button(Text::new(state.displayed_year().to_string()).size(typography::BODY))
                .on_press(Message::ToggleYearPicker)
                .style(styles::button::ghost),
        );

    Row::new()
        .align_y(Vertical::Center)
        .push(nav_button("‹", Message::PreviousMonth))
        .push(
            Container::new(labels)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .push(nav_button("›", Message::NextMonth))
        .into()
}

fn cell<'a>(label: String, highlight: calendar::CellHighlight, message: Message) -> Element<'a, Message> {
    button(
        Container::new(Text::new(label).size(typography::BODY_SM))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fixed(sizing::CALENDAR_CELL))
    .height(Length::Fixed(sizing::CALENDAR_CELL))
    .padding([spacing::XS, 0.0])
    .on_press(message)
    .style(styles::button::calendar_cell(highlight))
    .into()
}

fn blank<'a>() -> Element<'a, Message> {
    Space::new()
        .width(Length::Fixed(sizing::CALENDAR_CELL))
        .height(Length::Fixed(sizing::CALENDAR_CELL))
        .into()
}

fn day_grid<'a>(state: &State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let year = state.displayed_year();
    let month0 = state.displayed_month();

    let weekdays = WEEKDAY_KEYS.iter().fold(Row::new().spacing(CELL_GAP), |row, key| {
        row.push(
            Container::new(Text::new(ctx.i18n.tr(key)).size(typography::CAPTION))
                .width(Length::Fixed(sizing::CALENDAR_CELL))
                .align_x(Horizontal::Center),
        )
    });

    let cells = calendar::month_grid(year, month0);
    let mut grid = Column::new().spacing(CELL_GAP).push(weekdays);

    for week in cells.chunks(7) {
        let row = week.iter().fold(Row::new().spacing(CELL_GAP), |row, day| match day {
            Some(day) => row.push(cell(
                day.to_string(),
                calendar::highlight(year, month0, *day, state.selected(), ctx.today),
                Message::DaySelected(*day),
            )),
            None => row.push(blank()),
        });
        grid = grid.push(row);
    }

    grid.into()
}

/// Year-page navigation above the grid of years.
fn year_panel<'a>(state: &State) -> Element<'a, Message> {
    let window = state.year_window();
    let paging = Row::new()
        .align_y(Vertical::Center)
        .push(nav_button("«", Message::PreviousYearPage))
        .push(
            Container::new(
                Text::new(format!("{} – {}", window.start, window.end)).size(typography::BODY_SM),
            )
            .width(Length::Fill)
            .align_x(Horizontal::Center),
        )
        .push(nav_button("»", Message::NextYearPage));

    Column::new()
        .spacing(spacing::XXS)
        .push(paging)
        .push(year_grid(state))
        .into()
}

fn year_grid<'a>(state: &State) -> Element<'a, Message> {
    let years: Vec<i32> = state.year_window().years().collect();
    let mut grid = Column::new().spacing(CELL_GAP);

    for chunk in years.chunks(YEARS_PER_ROW) {
        let row = chunk.iter().fold(Row::new().spacing(CELL_GAP), |row, year| {
            let highlight = if *year == state.displayed_year() {
                calendar::CellHighlight::Selected
            } else {
                calendar::CellHighlight::Default
            };
            row.push(cell(year.to_string(), highlight, Message::YearSelected(*year)))
        });
        grid = grid.push(row);
    }

    grid.into()
}

fn footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Row::new()
        .align_y(Vertical::Center)
        .push(
            button(Text::new(ctx.i18n.tr("date-picker-clear")).size(typography::BODY_SM))
                .on_press(Message::Clear)
                .style(styles::button::ghost),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(ctx.i18n.tr("date-picker-today")).size(typography::BODY_SM))
                .on_press(Message::Today)
                .style(styles::button::ghost),
        )
        .into()
}
