// SPDX-License-Identifier: MPL-2.0
//! Month grid layout and cell highlighting for the calendar popup.

use crate::cv::date::{days_in_month, first_weekday_of_month};
use chrono::{Datelike, NaiveDate};

/// i18n keys of the month names, January first.
pub const MONTH_KEYS: [&str; 12] = [
    "month-january",
    "month-february",
    "month-march",
    "month-april",
    "month-may",
    "month-june",
    "month-july",
    "month-august",
    "month-september",
    "month-october",
    "month-november",
    "month-december",
];

/// i18n keys of the weekday column headers, Sunday first.
pub const WEEKDAY_KEYS: [&str; 7] = [
    "weekday-sunday-short",
    "weekday-monday-short",
    "weekday-tuesday-short",
    "weekday-wednesday-short",
    "weekday-thursday-short",
    "weekday-friday-short",
    "weekday-saturday-short",
];

/// Visual state of a day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellHighlight {
    Selected,
    Today,
    Default,
}

/// Cells of a month, row-major, seven per week.
///
/// Leading `None`s pad the first week so that day 1 lands under its weekday
/// (Sunday = column 0). No trailing padding is added.
#[must_use]
pub fn month_grid(year: i32, month0: u32) -> Vec<Option<u32>> {
    let blanks = first_weekday_of_month(year, month0) as usize;
    let days = days_in_month(year, month0);

    std::iter::repeat_n(None, blanks)
        .chain((1..=days).map(Some))
        .collect()
}

/// Highlight of `day` in the displayed month. Selection wins over today.
#[must_use]
pub fn highlight(
    year: i32,
    month0: u32,
    day: u32,
    selected: Option<NaiveDate>,
    today: NaiveDate,
) -> CellHighlight {
    let is = |date: NaiveDate| date.year() == year && date.month0() == month0 && date.day() == day;

    if selected.is_some_and(is) {
        CellHighlight::Selected
    } else if is(today) {
        CellHighlight::Today
    } else {
        CellHighlight::Default
    }
}

/// Steps `(year, month0)` by one month in either direction.
#[must_use]
pub fn shift_month(year: i32, month0: u32, forward: bool) -> (i32, u32) {
    match (forward, month0) {
        (true, 11) => (year + 1, 0),
        (true, m) => (year, m + 1),
        (false, 0) => (year - 1, 11),
        (false, m) => (year, m - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn day_cells(year: i32, month0: u32) -> usize {
        month_grid(year, month0).iter().filter(|c| c.is_some()).count()
    }

    fn blank_cells(year: i32, month0: u32) -> usize {
        month_grid(year, month0).iter().filter(|c| c.is_none()).count()
    }

    #[test]
    fn day_cell_counts_follow_month_length() {
        assert_eq!(day_cells(2024, 1), 29);
        assert_eq!(day_cells(2023, 1), 28);
        assert_eq!(day_cells(2024, 3), 30);
        assert_eq!(day_cells(2024, 0), 31);
    }

    #[test]
    fn leading_blanks_match_first_weekday() {
        // 2024-09-01 Sunday, 2024-03-01 Friday, 2023-07-01 Saturday.
        assert_eq!(blank_cells(2024, 8), 0);
        assert_eq!(blank_cells(2024, 2), 5);
        assert_eq!(blank_cells(2023, 6), 6);
    }

    #[test]
    fn blanks_precede_days() {
        let grid = month_grid(2024, 2);
        assert!(grid[..5].iter().all(Option::is_none));
        assert_eq!(grid[5], Some(1));
        assert_eq!(grid.last(), Some(&Some(31)));
    }

    #[test]
    fn selected_beats_today() {
        let today = date(2024, 3, 15);
        assert_eq!(
            highlight(2024, 2, 15, Some(today), today),
            CellHighlight::Selected
        );
        assert_eq!(highlight(2024, 2, 15, None, today), CellHighlight::Today);
        assert_eq!(
            highlight(2024, 2, 16, Some(today), today),
            CellHighlight::Default
        );
    }

    #[test]
    fn highlight_requires_same_month_and_year() {
        let today = date(2024, 3, 15);
        assert_eq!(highlight(2023, 2, 15, None, today), CellHighlight::Default);
        assert_eq!(highlight(2024, 3, 15, None, today), CellHighlight::Default);
    }

    #[test]
    fn shift_month_wraps_years() {
        assert_eq!(shift_month(2024, 11, true), (2025, 0));
        assert_eq!(shift_month(2024, 0, false), (2023, 11));
        assert_eq!(shift_month(2024, 5, true), (2024, 6));
        assert_eq!(shift_month(2024, 5, false), (2024, 4));
    }
}
