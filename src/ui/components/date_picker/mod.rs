// SPDX-License-Identifier: MPL-2.0
//! Calendar date picker bound to a `YYYY-MM-DD` string.
//!
//! The host owns the value; the picker only owns its popup state and reports
//! changes through [`Event::Changed`]. A read-only field shows the localized
//! long date and toggles a popup with a month grid, a year grid (paged by
//! twenty years) and "clear"/"today" shortcuts.
//!
//! The popup floats above the form as an overlay. Closing on outside clicks
//! relies on two pieces: the field and the popup are each wrapped in a
//! `mouse_area` that reports pointer enter/exit, and the application forwards
//! every left press to [`State::pointer_pressed`] while any popup is open.

pub mod calendar;
mod view;

pub use calendar::CellHighlight;
pub use view::{view, ViewContext};

use crate::config::{YEAR_WINDOW_HALF_SPAN, YEAR_WINDOW_SPAN};
use crate::cv::date::{format_iso_date, parse_iso_date};
use chrono::{Datelike, NaiveDate};

/// Inclusive range of years shown by the year grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    pub start: i32,
    pub end: i32,
}

impl YearWindow {
    /// Window centered on `year`.
    #[must_use]
    pub fn around(year: i32) -> Self {
        Self {
            start: year - YEAR_WINDOW_HALF_SPAN,
            end: year + YEAR_WINDOW_HALF_SPAN,
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        self.shifted(1)
    }

    #[must_use]
    pub fn previous(self) -> Self {
        self.shifted(-1)
    }

    fn shifted(self, pages: i32) -> Self {
        Self {
            start: self.start + pages * YEAR_WINDOW_SPAN,
            end: self.end + pages * YEAR_WINDOW_SPAN,
        }
    }

    #[must_use]
    pub fn contains(self, year: i32) -> bool {
        (self.start..=self.end).contains(&year)
    }

    /// Pages the window until it contains `year`.
    #[must_use]
    pub fn paged_to(self, year: i32) -> Self {
        if self.contains(year) {
            return self;
        }
        let pages = (year - self.start).div_euclid(YEAR_WINDOW_SPAN);
        self.shifted(pages)
    }

    pub fn years(self) -> impl Iterator<Item = i32> {
        self.start..=self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Field or calendar icon clicked.
    Toggle,
    PreviousMonth,
    NextMonth,
    /// Month or year label clicked in the popup header.
    ToggleYearPicker,
    PreviousYearPage,
    NextYearPage,
    YearSelected(i32),
    DaySelected(u32),
    Clear,
    Today,
    PointerEntered,
    PointerExited,
    PopupEntered,
    PopupExited,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// New `YYYY-MM-DD` value, or `""` when cleared.
    Changed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    displayed_month: u32,
    displayed_year: i32,
    selected: Option<NaiveDate>,
    is_open: bool,
    year_picker_open: bool,
    year_window: YearWindow,
    over_field: bool,
    over_popup: bool,
}

impl State {
    /// Creates a closed picker for `value`. `today` seeds the year window
    /// and the displayed month when `value` is empty or unparseable.
    #[must_use]
    pub fn new(value: &str, today: NaiveDate) -> Self {
        let mut state = Self {
            displayed_month: today.month0(),
            displayed_year: today.year(),
            selected: None,
            is_open: false,
            year_picker_open: false,
            year_window: YearWindow::around(today.year()),
            over_field: false,
            over_popup: false,
        };
        state.sync(value, today);
        state
    }

    pub fn update(&mut self, message: Message, value: &str, today: NaiveDate) -> Event {
        match message {
            Message::Toggle => {
                if self.is_open {
                    self.close();
                } else {
                    self.sync(value, today);
                    self.is_open = true;
                }
                Event::None
            }
            Message::PreviousMonth | Message::NextMonth => {
                let forward = message == Message::NextMonth;
                let (year, month0) =
                    calendar::shift_month(self.displayed_year, self.displayed_month, forward);
                self.displayed_year = year;
                self.displayed_month = month0;
                Event::None
            }
            Message::ToggleYearPicker => {
                self.year_picker_open = !self.year_picker_open;
                if self.year_picker_open {
                    self.year_window = self.year_window.paged_to(self.displayed_year);
                }
                Event::None
            }
            Message::PreviousYearPage => {
                self.year_window = self.year_window.previous();
                Event::None
            }
            Message::NextYearPage => {
                self.year_window = self.year_window.next();
                Event::None
            }
            Message::YearSelected(year) => {
                self.displayed_year = year;
                self.year_picker_open = false;
                Event::None
            }
            Message::DaySelected(day) => {
                let Some(date) =
                    NaiveDate::from_ymd_opt(self.displayed_year, self.displayed_month + 1, day)
                else {
                    tracing::debug!(day, "ignoring day outside displayed month");
                    return Event::None;
                };
                self.selected = Some(date);
                self.close();
                Event::Changed(format_iso_date(date))
            }
            Message::Clear => {
                self.selected = None;
                self.close();
                Event::Changed(String::new())
            }
            Message::Today => {
                self.displayed_year = today.year();
                self.displayed_month = today.month0();
                self.selected = Some(today);
                self.close();
                Event::Changed(format_iso_date(today))
            }
            Message::PointerEntered => {
                self.over_field = true;
                Event::None
            }
            Message::PointerExited => {
                self.over_field = false;
                Event::None
            }
            Message::PopupEntered => {
                self.over_popup = true;
                Event::None
            }
            Message::PopupExited => {
                self.over_popup = false;
                Event::None
            }
        }
    }

    /// Handles a left press anywhere in the window.
    ///
    /// Closes the popup when the pointer is outside this picker and returns
    /// whether it did.
    pub fn pointer_pressed(&mut self) -> bool {
        if self.is_open && !self.over_field && !self.over_popup {
            self.close();
            true
        } else {
            false
        }
    }

    /// Closes the popup and the year grid.
    pub fn close(&mut self) {
        self.is_open = false;
        self.year_picker_open = false;
        self.over_popup = false;
    }

    /// Re-derives the selection and displayed month from the bound value.
    fn sync(&mut self, value: &str, today: NaiveDate) {
        self.selected = parse_iso_date(value);
        let shown = self.selected.unwrap_or(today);
        self.displayed_year = shown.year();
        self.displayed_month = shown.month0();
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn is_year_picker_open(&self) -> bool {
        self.year_picker_open
    }

    #[must_use]
    pub fn displayed_month(&self) -> u32 {
        self.displayed_month
    }

    #[must_use]
    pub fn displayed_year(&self) -> i32 {
        self.displayed_year
    }

    #[must_use]
    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    #[must_use]
    pub fn year_window(&self) -> YearWindow {
        self.year_window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2024, 3, 15)
    }

    fn open(value: &str) -> State {
        let mut state = State::new(value, today());
        state.update(Message::Toggle, value, today());
        state
    }

    #[test]
    fn new_picker_is_closed_and_centered_on_today() {
        let state = State::new("", today());
        assert!(!state.is_open());
        assert_eq!(state.year_window(), YearWindow { start: 2014, end: 2034 });
        assert_eq!(state.displayed_year(), 2024);
        assert_eq!(state.displayed_month(), 2);
        assert!(state.selected().is_none());
    }

    #[test]
    fn opening_shows_month_of_bound_value() {
        let state = open("2019-11-02");
        assert!(state.is_open());
        assert_eq!(state.displayed_year(), 2019);
        assert_eq!(state.displayed_month(), 10);
        assert_eq!(state.selected(), Some(date(2019, 11, 2)));
    }

    #[test]
    fn opening_resyncs_with_value_changed_by_host() {
        let mut state = State::new("2019-11-02", today());
        state.update(Message::Toggle, "2021-01-20", today());
        assert_eq!(state.selected(), Some(date(2021, 1, 20)));
        assert_eq!(state.displayed_month(), 0);
    }

    #[test]
    fn unparseable_value_opens_on_today_without_selection() {
        let state = open("March 2020");
        assert!(state.selected().is_none());
        assert_eq!(state.displayed_year(), 2024);
        assert_eq!(state.displayed_month(), 2);
    }

    #[test]
    fn toggle_twice_closes() {
        let mut state = open("");
        state.update(Message::ToggleYearPicker, "", today());
        state.update(Message::Toggle, "", today());
        assert!(!state.is_open());
        assert!(!state.is_year_picker_open());
    }

    #[test]
    fn picking_a_day_emits_iso_and_closes() {
        let mut state = open("");
        state.update(Message::NextMonth, "", today());
        let event = state.update(Message::DaySelected(9), "", today());
        assert_eq!(event, Event::Changed("2024-04-09".to_string()));
        assert!(!state.is_open());
        assert_eq!(state.selected(), Some(date(2024, 4, 9)));
    }

    #[test]
    fn picked_value_reopens_on_same_day() {
        let mut state = open("");
        let Event::Changed(value) = state.update(Message::DaySelected(1), "", today()) else {
            panic!("expected a change");
        };
        let reopened = open(&value);
        assert_eq!(reopened.selected(), Some(date(2024, 3, 1)));
        assert_eq!(reopened.displayed_month(), 2);
    }

    #[test]
    fn invalid_day_is_ignored() {
        let mut state = open("2023-02-01");
        let event = state.update(Message::DaySelected(30), "2023-02-01", today());
        assert_eq!(event, Event::None);
        assert!(state.is_open());
    }

    #[test]
    fn clear_emits_empty_value() {
        let mut state = open("2023-07-10");
        let event = state.update(Message::Clear, "2023-07-10", today());
        assert_eq!(event, Event::Changed(String::new()));
        assert!(state.selected().is_none());
        assert!(!state.is_open());
    }

    #[test]
    fn today_emits_current_date_and_closes_everything() {
        let mut state = open("2001-01-01");
        state.update(Message::ToggleYearPicker, "2001-01-01", today());
        let event = state.update(Message::Today, "2001-01-01", today());

        assert_eq!(event, Event::Changed("2024-03-15".to_string()));
        assert!(!state.is_open());
        assert!(!state.is_year_picker_open());
        assert_eq!(state.displayed_year(), 2024);
        assert_eq!(state.displayed_month(), 2);
        assert_eq!(state.selected(), Some(today()));
    }

    #[test]
    fn month_navigation_wraps_year() {
        let mut state = open("2023-12-05");
        state.update(Message::NextMonth, "", today());
        assert_eq!((state.displayed_year(), state.displayed_month()), (2024, 0));
        state.update(Message::PreviousMonth, "", today());
        state.update(Message::PreviousMonth, "", today());
        assert_eq!((state.displayed_year(), state.displayed_month()), (2023, 10));
    }

    #[test]
    fn year_paging_keeps_width() {
        let mut state = open("");
        state.update(Message::ToggleYearPicker, "", today());
        state.update(Message::NextYearPage, "", today());
        assert_eq!(state.year_window(), YearWindow { start: 2034, end: 2054 });
        state.update(Message::PreviousYearPage, "", today());
        state.update(Message::PreviousYearPage, "", today());
        assert_eq!(state.year_window(), YearWindow { start: 1994, end: 2014 });
        let window = state.year_window();
        assert_eq!(window.end - window.start, YEAR_WINDOW_SPAN);
    }

    #[test]
    fn picking_a_year_keeps_month_and_popup() {
        let value = "2023-07-10";
        let mut state = open(value);
        state.update(Message::ToggleYearPicker, value, today());
        let event = state.update(Message::YearSelected(2025), value, today());

        assert_eq!(event, Event::None);
        assert!(state.is_open());
        assert!(!state.is_year_picker_open());
        assert_eq!(state.displayed_year(), 2025);
        assert_eq!(state.displayed_month(), 6);
    }

    #[test]
    fn year_grid_follows_displayed_year_in_whole_pages() {
        let mut state = open("1990-05-01");
        state.update(Message::ToggleYearPicker, "1990-05-01", today());
        let window = state.year_window();
        assert!(window.contains(1990));
        assert_eq!(window, YearWindow { start: 1974, end: 1994 });
    }

    #[test]
    fn outside_press_closes_only_when_pointer_is_elsewhere() {
        let mut state = open("");
        state.update(Message::PointerEntered, "", today());
        assert!(!state.pointer_pressed());
        assert!(state.is_open());

        state.update(Message::PointerExited, "", today());
        assert!(state.pointer_pressed());
        assert!(!state.is_open());
    }

    #[test]
    fn press_inside_floating_popup_keeps_it_open() {
        let mut state = open("");
        state.update(Message::PointerEntered, "", today());
        state.update(Message::PopupEntered, "", today());
        state.update(Message::PointerExited, "", today());
        assert!(!state.pointer_pressed());
        assert!(state.is_open());

        state.update(Message::PopupExited, "", today());
        assert!(state.pointer_pressed());
        assert!(!state.is_open());
    }

    #[test]
    fn reopened_popup_forgets_stale_hover() {
        let mut state = open("");
        state.update(Message::PopupEntered, "", today());
        state.update(Message::DaySelected(3), "", today());
        assert!(!state.is_open());

        state.update(Message::Toggle, "2024-03-03", today());
        assert!(state.pointer_pressed());
        assert!(!state.is_open());
    }

    #[test]
    fn year_labels_toggle_year_panel_back_off() {
        let value = "2023-07-10";
        let mut state = open(value);
        state.update(Message::ToggleYearPicker, value, today());
        assert!(state.is_year_picker_open());

        state.update(Message::NextYearPage, value, today());
        state.update(Message::ToggleYearPicker, value, today());
        assert!(state.is_open());
        assert!(!state.is_year_picker_open());
        assert_eq!(state.displayed_year(), 2023);
        assert_eq!(state.displayed_month(), 6);
    }

    #[test]
    fn outside_press_on_closed_picker_is_noop() {
        let mut state = State::new("", today());
        assert!(!state.pointer_pressed());
    }

    #[test]
    fn year_window_paged_to_is_identity_when_contained() {
        let window = YearWindow::around(2024);
        assert_eq!(window.paged_to(2030), window);
        assert_eq!(window.paged_to(2040), YearWindow { start: 2034, end: 2054 });
        assert_eq!(window.years().count(), 21);
    }
}
