// SPDX-License-Identifier: MPL-2.0
//! Generic editor for a section made of repeated entries.
//!
//! Each entry type describes its fields once through [`FormEntry`]; this module
//! renders them as cards with add/remove buttons, one self-contained date
//! picker per date field, and optional drag-to-reorder.
//!
//! Per-row UI state (the date pickers) lives in a `Vec` parallel to the
//! document's entries. Every structural change (add, remove, reorder, reload)
//! is applied to both vectors together, and add/remove/reload cancel any drag
//! in progress since its indices would be stale.

use crate::cv::reorder::move_item;
use crate::i18n::fluent::I18n;
use crate::ui::components::date_picker;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::drag_reorder::{self, handles_visible, DragReorder};
use crate::ui::styles;
use chrono::NaiveDate;
use iced::{
    alignment::Vertical,
    mouse,
    widget::{button, checkbox, mouse_area, pick_list, text_input, Column, Container, Row, Space, Text},
    Element, Length, Theme,
};
use std::fmt;

/// How a field is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// `YYYY-MM-DD` value edited through a date picker.
    Date,
    /// One of `options`; labels are looked up as `{label_prefix}{option}`.
    Choice {
        options: &'static [&'static str],
        label_prefix: &'static str,
    },
    Toggle,
}

/// Static description of one field of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec<F> {
    pub field: F,
    pub label_key: &'static str,
    pub kind: FieldKind,
}

/// An entry type editable by the list section.
pub trait FormEntry: Clone + Default {
    type Field: Copy + Eq + fmt::Debug + Send + 'static;

    /// Fields in display order.
    const FIELDS: &'static [FieldSpec<Self::Field>];
    /// i18n key of the section title.
    const TITLE_KEY: &'static str;
    /// Whether entries can be reordered by dragging.
    const REORDERABLE: bool = false;

    /// Current value of a text, date or choice field.
    fn value(&self, field: Self::Field) -> &str;
    fn set_value(&mut self, field: Self::Field, value: String);

    fn flag(&self, _field: Self::Field) -> bool {
        false
    }
    fn set_flag(&mut self, _field: Self::Field, _value: bool) {}

    /// Fields that cannot be edited given the rest of the entry.
    fn is_disabled(&self, _field: Self::Field) -> bool {
        false
    }

    /// Short text shown in the card header.
    fn heading(&self) -> &str;

    /// Whether the entry counts as filled in.
    fn has_content(&self) -> bool;
}

#[derive(Debug, Clone)]
pub enum Message<F> {
    Add,
    Remove(usize),
    TextChanged(usize, F, String),
    FlagToggled(usize, F, bool),
    DatePicker(usize, F, date_picker::Message),
    Drag(drag_reorder::Message),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The entries were modified.
    Changed,
}

/// Date pickers of one card.
#[derive(Debug, Clone)]
struct RowUi<F> {
    pickers: Vec<(F, date_picker::State)>,
}

impl<F: Copy + Eq> RowUi<F> {
    fn new<T: FormEntry<Field = F>>(entry: &T, today: NaiveDate) -> Self {
        let pickers = T::FIELDS
            .iter()
            .filter(|spec| spec.kind == FieldKind::Date)
            .map(|spec| {
                (
                    spec.field,
                    date_picker::State::new(entry.value(spec.field), today),
                )
            })
            .collect();
        Self { pickers }
    }

    fn picker(&self, field: F) -> Option<&date_picker::State> {
        self.pickers
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, picker)| picker)
    }

    fn picker_mut(&mut self, field: F) -> Option<&mut date_picker::State> {
        self.pickers
            .iter_mut()
            .find(|(f, _)| *f == field)
            .map(|(_, picker)| picker)
    }
}

/// UI state of a list section.
#[derive(Debug, Clone)]
pub struct State<T: FormEntry> {
    rows: Vec<RowUi<T::Field>>,
    drag: Option<DragReorder>,
}

impl<T: FormEntry> State<T> {
    #[must_use]
    pub fn new(entries: &[T], today: NaiveDate) -> Self {
        Self {
            rows: entries.iter().map(|e| RowUi::new(e, today)).collect(),
            drag: T::REORDERABLE.then(DragReorder::new),
        }
    }

    /// Rebuilds the row state after the entries were replaced wholesale.
    pub fn reset(&mut self, entries: &[T], today: NaiveDate) {
        *self = Self::new(entries, today);
    }

    pub fn update(&mut self, message: Message<T::Field>, entries: &mut Vec<T>, today: NaiveDate) -> Event {
        self.ensure_rows(entries, today);

        match message {
            Message::Add => {
                let entry = T::default();
                self.rows.push(RowUi::new(&entry, today));
                entries.push(entry);
                self.cancel_drag();
                Event::Changed
            }
            Message::Remove(index) => {
                if index >= entries.len() {
                    return Event::None;
                }
                entries.remove(index);
                self.rows.remove(index);
                self.cancel_drag();
                Event::Changed
            }
            Message::TextChanged(index, field, value) => {
                let Some(entry) = entries.get_mut(index) else {
                    return Event::None;
                };
                entry.set_value(field, value);
                Event::Changed
            }
            Message::FlagToggled(index, field, value) => {
                let Some(entry) = entries.get_mut(index) else {
                    return Event::None;
                };
                entry.set_flag(field, value);
                if let Some(row) = self.rows.get_mut(index) {
                    for (picker_field, picker) in &mut row.pickers {
                        if entry.is_disabled(*picker_field) {
                            picker.close();
                        }
                    }
                }
                Event::Changed
            }
            Message::DatePicker(index, field, message) => {
                let (Some(entry), Some(row)) = (entries.get_mut(index), self.rows.get_mut(index))
                else {
                    return Event::None;
                };
                if entry.is_disabled(field) {
                    return Event::None;
                }
                let Some(picker) = row.picker_mut(field) else {
                    return Event::None;
                };
                let current = entry.value(field).to_string();
                match picker.update(message, &current, today) {
                    date_picker::Event::Changed(value) => {
                        entry.set_value(field, value);
                        Event::Changed
                    }
                    date_picker::Event::None => Event::None,
                }
            }
            Message::Drag(message) => {
                let Some(drag) = self.drag.as_mut() else {
                    return Event::None;
                };
                let Some((from, to)) = drag.update(message, entries.len()) else {
                    return Event::None;
                };
                if move_item(entries, from, to) {
                    move_item(&mut self.rows, from, to);
                    tracing::debug!(section = T::TITLE_KEY, from, to, "reordered entry");
                    Event::Changed
                } else {
                    Event::None
                }
            }
        }
    }

    /// Keeps the row vector in step with entries changed behind our back.
    fn ensure_rows(&mut self, entries: &[T], today: NaiveDate) {
        if self.rows.len() != entries.len() {
            tracing::debug!(section = T::TITLE_KEY, "row state out of sync, rebuilding");
            self.reset(entries, today);
        }
    }

    fn cancel_drag(&mut self) {
        if let Some(drag) = self.drag.as_mut() {
            drag.cancel();
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.as_ref().is_some_and(DragReorder::is_dragging)
    }

    #[must_use]
    pub fn drag(&self) -> Option<&DragReorder> {
        self.drag.as_ref()
    }

    #[must_use]
    pub fn any_popup_open(&self) -> bool {
        self.rows
            .iter()
            .flat_map(|row| row.pickers.iter())
            .any(|(_, picker)| picker.is_open())
    }

    /// Forwards a window-level left press to every picker.
    pub fn pointer_pressed(&mut self) {
        for row in &mut self.rows {
            for (_, picker) in &mut row.pickers {
                picker.pointer_pressed();
            }
        }
    }

    pub fn close_popups(&mut self) {
        for row in &mut self.rows {
            for (_, picker) in &mut row.pickers {
                picker.close();
            }
        }
    }

    #[must_use]
    pub fn picker(&self, index: usize, field: T::Field) -> Option<&date_picker::State> {
        self.rows.get(index).and_then(|row| row.picker(field))
    }
}

/// Contextual data needed to render a list section.
pub struct ViewContext<'a, T> {
    pub i18n: &'a I18n,
    pub entries: &'a [T],
    pub today: NaiveDate,
}

/// Pick list option for [`FieldKind::Choice`].
#[derive(Debug, Clone, PartialEq, Eq)]
struct ChoiceOption {
    key: &'static str,
    label: String,
}

impl fmt::Display for ChoiceOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Entries with at least one meaningful field; blank rows are not counted.
fn filled_count<T: FormEntry>(entries: &[T]) -> usize {
    entries.iter().filter(|entry| entry.has_content()).count()
}

fn muted(theme: &Theme) -> iced::widget::text::Style {
    iced::widget::text::Style {
        color: Some(theme.extended_palette().background.strong.color),
    }
}

pub fn view<'a, T: FormEntry>(
    state: &'a State<T>,
    ctx: ViewContext<'a, T>,
) -> Element<'a, Message<T::Field>> {
    let mut header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr(T::TITLE_KEY)).size(typography::TITLE_MD));
    if !ctx.entries.is_empty() {
        let filled = filled_count(ctx.entries).to_string();
        let total = ctx.entries.len().to_string();
        header = header.push(
            Text::new(ctx.i18n.tr_with_args(
                "section-filled",
                &[("filled", filled.as_str()), ("total", total.as_str())],
            ))
            .size(typography::CAPTION)
            .style(muted),
        );
    }
    let header = header
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(format!("+ {}", ctx.i18n.tr("entry-add"))).size(typography::BODY))
                .on_press(Message::Add)
                .style(styles::button::primary),
        );

    let mut column = Column::new().spacing(spacing::SM).push(header);

    if ctx.entries.is_empty() {
        column = column.push(
            Text::new(ctx.i18n.tr("section-empty"))
                .size(typography::BODY_SM)
                .style(muted),
        );
    }

    for (index, entry) in ctx.entries.iter().enumerate() {
        if state.drag.as_ref().is_some_and(|d| d.shows_indicator(index)) {
            column = column.push(
                Container::new(Space::new().height(Length::Fixed(sizing::DROP_INDICATOR_HEIGHT)))
                    .width(Length::Fill)
                    .style(styles::container::drop_indicator),
            );
        }
        column = column.push(card(state, &ctx, index, entry));
    }

    Container::new(column)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn card<'a, T: FormEntry>(
    state: &'a State<T>,
    ctx: &ViewContext<'a, T>,
    index: usize,
    entry: &'a T,
) -> Element<'a, Message<T::Field>> {
    let drag = state.drag.as_ref();
    let dragged = drag.is_some_and(|d| d.is_source(index));

    let mut header = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    if drag.is_some() && handles_visible(ctx.entries.len()) {
        let handle = Container::new(Text::new("⠿").size(typography::TITLE_SM))
            .width(Length::Fixed(sizing::DRAG_HANDLE_WIDTH));
        let interaction = if dragged {
            mouse::Interaction::Grabbing
        } else {
            mouse::Interaction::Grab
        };
        header = header.push(
            mouse_area(handle)
                .on_press(Message::Drag(drag_reorder::Message::Start(index)))
                .interaction(interaction),
        );
    }

    let heading = if entry.heading().trim().is_empty() {
        ctx.i18n.tr("entry-untitled")
    } else {
        entry.heading().to_string()
    };
    header = header
        .push(Text::new(heading).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(ctx.i18n.tr("entry-remove")).size(typography::BODY_SM))
                .on_press(Message::Remove(index))
                .style(styles::button::danger),
        );

    let mut body = Column::new().spacing(spacing::XS).push(header);
    let mut date_row: Option<Row<'a, Message<T::Field>>> = None;

    for spec in T::FIELDS {
        let widget = field(state, ctx, index, entry, spec);
        if spec.kind == FieldKind::Date {
            // Consecutive date fields share a row.
            let row = date_row.take().unwrap_or_else(|| Row::new().spacing(spacing::MD));
            date_row = Some(row.push(widget));
        } else {
            if let Some(row) = date_row.take() {
                body = body.push(row);
            }
            body = body.push(widget);
        }
    }
    if let Some(row) = date_row {
        body = body.push(row);
    }

    let surface = Container::new(body)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::container::card(dragged));

    if drag.is_some() {
        mouse_area(surface)
            .on_enter(Message::Drag(drag_reorder::Message::Enter(index)))
            .on_exit(Message::Drag(drag_reorder::Message::Exit(index)))
            .on_release(Message::Drag(drag_reorder::Message::Drop(index)))
            .into()
    } else {
        surface.into()
    }
}

fn field<'a, T: FormEntry>(
    state: &'a State<T>,
    ctx: &ViewContext<'a, T>,
    index: usize,
    entry: &'a T,
    spec: &FieldSpec<T::Field>,
) -> Element<'a, Message<T::Field>> {
    let field = spec.field;
    let disabled = entry.is_disabled(field);
    let label = Text::new(ctx.i18n.tr(spec.label_key)).size(typography::BODY_SM);

    let input: Element<'a, Message<T::Field>> = match spec.kind {
        FieldKind::Text => {
            let input = text_input("", entry.value(field))
                .padding(spacing::XS)
                .size(typography::BODY);
            if disabled {
                input.into()
            } else {
                input
                    .on_input(move |value| Message::TextChanged(index, field, value))
                    .into()
            }
        }
        FieldKind::Date => match state.picker(index, field) {
            Some(picker) => date_picker::view(
                picker,
                date_picker::ViewContext {
                    i18n: ctx.i18n,
                    value: entry.value(field),
                    placeholder: ctx.i18n.tr("date-picker-placeholder"),
                    today: ctx.today,
                    disabled,
                },
            )
            .map(move |message| Message::DatePicker(index, field, message)),
            None => Text::new(entry.value(field)).into(),
        },
        FieldKind::Choice {
            options,
            label_prefix,
        } => {
            let options: Vec<ChoiceOption> = options
                .iter()
                .map(|&key| ChoiceOption {
                    key,
                    label: ctx.i18n.tr(&format!("{label_prefix}{key}")),
                })
                .collect();
            let selected = options
                .iter()
                .find(|opt| opt.key == entry.value(field))
                .cloned();

            pick_list(options, selected, move |opt: ChoiceOption| {
                Message::TextChanged(index, field, opt.key.to_string())
            })
            .padding(spacing::XS)
            .width(Length::Fixed(sizing::DATE_FIELD_WIDTH))
            .into()
        }
        FieldKind::Toggle => {
            let toggle = checkbox(entry.flag(field)).label(ctx.i18n.tr(spec.label_key));
            let toggle = if disabled {
                toggle
            } else {
                toggle.on_toggle(move |value| Message::FlagToggled(index, field, value))
            };
            return toggle.into();
        }
    };

    Column::new()
        .spacing(spacing::XXS)
        .push(label)
        .push(input)
        .into()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum TestField {
        Name,
        Start,
        Ongoing,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct TestEntry {
        pub name: String,
        pub start: String,
        pub ongoing: bool,
    }

    impl FormEntry for TestEntry {
        type Field = TestField;

        const FIELDS: &'static [FieldSpec<TestField>] = &[
            FieldSpec {
                field: TestField::Name,
                label_key: "field-name",
                kind: FieldKind::Text,
            },
            FieldSpec {
                field: TestField::Start,
                label_key: "field-start-date",
                kind: FieldKind::Date,
            },
            FieldSpec {
                field: TestField::Ongoing,
                label_key: "field-current",
                kind: FieldKind::Toggle,
            },
        ];
        const TITLE_KEY: &'static str = "section-projects";
        const REORDERABLE: bool = true;

        fn value(&self, field: TestField) -> &str {
            match field {
                TestField::Name => &self.name,
                TestField::Start => &self.start,
                TestField::Ongoing => "",
            }
        }

        fn set_value(&mut self, field: TestField, value: String) {
            match field {
                TestField::Name => self.name = value,
                TestField::Start => self.start = value,
                TestField::Ongoing => {}
            }
        }

        fn flag(&self, field: TestField) -> bool {
            field == TestField::Ongoing && self.ongoing
        }

        fn set_flag(&mut self, field: TestField, value: bool) {
            if field == TestField::Ongoing {
                self.ongoing = value;
            }
        }

        fn is_disabled(&self, field: TestField) -> bool {
            field == TestField::Start && self.ongoing
        }

        fn heading(&self) -> &str {
            &self.name
        }

        fn has_content(&self) -> bool {
            !self.name.trim().is_empty()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn named(names: &[&str]) -> Vec<TestEntry> {
        names
            .iter()
            .map(|n| TestEntry {
                name: (*n).to_string(),
                ..TestEntry::default()
            })
            .collect()
    }

    fn names(entries: &[TestEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn add_and_remove_keep_rows_in_step() {
        let mut entries = Vec::new();
        let mut state = State::<TestEntry>::new(&entries, today());

        assert_eq!(state.update(Message::Add, &mut entries, today()), Event::Changed);
        assert_eq!(state.update(Message::Add, &mut entries, today()), Event::Changed);
        assert_eq!(entries.len(), 2);
        assert!(state.picker(1, TestField::Start).is_some());

        assert_eq!(state.update(Message::Remove(0), &mut entries, today()), Event::Changed);
        assert_eq!(entries.len(), 1);
        assert!(state.picker(1, TestField::Start).is_none());
        assert_eq!(state.update(Message::Remove(5), &mut entries, today()), Event::None);
    }

    #[test]
    fn text_change_updates_entry() {
        let mut entries = named(&["A"]);
        let mut state = State::new(&entries, today());
        let event = state.update(
            Message::TextChanged(0, TestField::Name, "Acme".to_string()),
            &mut entries,
            today(),
        );
        assert_eq!(event, Event::Changed);
        assert_eq!(entries[0].name, "Acme");
    }

    #[test]
    fn date_picker_change_is_written_to_entry() {
        let mut entries = named(&["A"]);
        let mut state = State::new(&entries, today());
        let open = Message::DatePicker(0, TestField::Start, date_picker::Message::Toggle);
        assert_eq!(state.update(open, &mut entries, today()), Event::None);
        assert!(state.any_popup_open());

        let pick = Message::DatePicker(0, TestField::Start, date_picker::Message::Today);
        assert_eq!(state.update(pick, &mut entries, today()), Event::Changed);
        assert_eq!(entries[0].start, "2024-03-15");
        assert!(!state.any_popup_open());
    }

    #[test]
    fn disabling_a_date_field_closes_its_picker() {
        let mut entries = named(&["A"]);
        let mut state = State::new(&entries, today());
        let open = Message::DatePicker(0, TestField::Start, date_picker::Message::Toggle);
        state.update(open, &mut entries, today());

        state.update(
            Message::FlagToggled(0, TestField::Ongoing, true),
            &mut entries,
            today(),
        );
        assert!(entries[0].ongoing);
        assert!(!state.any_popup_open());
    }

    #[test]
    fn drag_reorders_entries_and_pickers_together() {
        let mut entries = named(&["A", "B", "C"]);
        entries[0].start = "2020-01-01".to_string();
        let mut state = State::new(&entries, today());

        state.update(Message::Drag(drag_reorder::Message::Start(0)), &mut entries, today());
        state.update(Message::Drag(drag_reorder::Message::Enter(2)), &mut entries, today());
        let event = state.update(
            Message::Drag(drag_reorder::Message::Drop(2)),
            &mut entries,
            today(),
        );

        assert_eq!(event, Event::Changed);
        assert_eq!(names(&entries), vec!["B", "C", "A"]);
        assert!(!state.is_dragging());
        let moved = state.picker(2, TestField::Start).expect("picker moved");
        assert_eq!(
            moved.selected(),
            NaiveDate::from_ymd_opt(2020, 1, 1)
        );
    }

    #[test]
    fn drop_on_source_leaves_order() {
        let mut entries = named(&["A", "B"]);
        let mut state = State::new(&entries, today());
        state.update(Message::Drag(drag_reorder::Message::Start(1)), &mut entries, today());
        let event = state.update(
            Message::Drag(drag_reorder::Message::Drop(1)),
            &mut entries,
            today(),
        );
        assert_eq!(event, Event::None);
        assert_eq!(names(&entries), vec!["A", "B"]);
        assert!(!state.is_dragging());
    }

    #[test]
    fn removing_during_drag_cancels_it() {
        let mut entries = named(&["A", "B", "C"]);
        let mut state = State::new(&entries, today());
        state.update(Message::Drag(drag_reorder::Message::Start(2)), &mut entries, today());
        state.update(Message::Remove(0), &mut entries, today());
        assert!(!state.is_dragging());

        let event = state.update(Message::Drag(drag_reorder::Message::Released), &mut entries, today());
        assert_eq!(event, Event::None);
        assert_eq!(names(&entries), vec!["B", "C"]);
    }

    #[test]
    fn out_of_band_entry_changes_rebuild_rows() {
        let mut entries = named(&["A"]);
        let mut state = State::new(&entries, today());
        entries.push(TestEntry::default());
        state.update(
            Message::TextChanged(1, TestField::Name, "B".to_string()),
            &mut entries,
            today(),
        );
        assert!(state.picker(1, TestField::Start).is_some());
        assert_eq!(entries[1].name, "B");
    }

    #[test]
    fn filled_count_skips_blank_rows() {
        let mut entries = named(&["A", "  ", "C"]);
        entries.push(TestEntry::default());
        assert_eq!(filled_count(&entries), 2);
    }

    #[test]
    fn view_renders_with_and_without_entries() {
        let i18n = I18n::default();
        let empty: Vec<TestEntry> = Vec::new();
        let state = State::new(&empty, today());
        let _empty = view(
            &state,
            ViewContext {
                i18n: &i18n,
                entries: &empty,
                today: today(),
            },
        );

        let entries = named(&["A", "B"]);
        let mut state = State::new(&entries, today());
        let mut scratch = entries.clone();
        state.update(Message::Drag(drag_reorder::Message::Start(0)), &mut scratch, today());
        state.update(Message::Drag(drag_reorder::Message::Enter(1)), &mut scratch, today());
        let _dragging = view(
            &state,
            ViewContext {
                i18n: &i18n,
                entries: &entries,
                today: today(),
            },
        );
    }
}
