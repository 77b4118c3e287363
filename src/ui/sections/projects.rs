// SPDX-License-Identifier: MPL-2.0
//! Projects section, reorderable by dragging.

use super::list::{self, FieldKind, FieldSpec, FormEntry};
use crate::cv::Project;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Role,
    Technologies,
    Url,
    StartDate,
    EndDate,
    Description,
}

impl FormEntry for Project {
    type Field = Field;

    const FIELDS: &'static [FieldSpec<Field>] = &[
        FieldSpec {
            field: Field::Name,
            label_key: "field-project-name",
            kind: FieldKind::Text,
        },
        FieldSpec {
            field: Field::Role,
            label_key: "field-role",
            kind: FieldKind::Text,
        },
        FieldSpec {
            field: Field::Technologies,
            label_key: "field-technologies",
            kind: FieldKind::Text,
        },
        FieldSpec {
            field: Field::Url,
            label_key: "field-url",
            kind: FieldKind::Text,
        },
        FieldSpec {
            field: Field::StartDate,
            label_key: "field-start-date",
            kind: FieldKind::Date,
        },
        FieldSpec {
            field: Field::EndDate,
            label_key: "field-end-date",
            kind: FieldKind::Date,
        },
        FieldSpec {
            field: Field::Description,
            label_key: "field-description",
            kind: FieldKind::Text,
        },
    ];
    const TITLE_KEY: &'static str = "section-projects";
    const REORDERABLE: bool = true;

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Role => &self.role,
            Field::Technologies => &self.technologies,
            Field::Url => &self.url,
            Field::StartDate => &self.start_date,
            Field::EndDate => &self.end_date,
            Field::Description => &self.description,
        }
    }

    fn set_value(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Role => &mut self.role,
            Field::Technologies => &mut self.technologies,
            Field::Url => &mut self.url,
            Field::StartDate => &mut self.start_date,
            Field::EndDate => &mut self.end_date,
            Field::Description => &mut self.description,
        };
        *slot = value;
    }

    fn has_content(&self) -> bool {
        !self.is_blank()
    }

    fn heading(&self) -> &str {
        &self.name
    }
}

pub type State = list::State<Project>;
pub type Message = list::Message<Field>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::drag_reorder::Message as Drag;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn projects(names: &[&str]) -> Vec<Project> {
        names
            .iter()
            .map(|n| Project {
                name: (*n).to_string(),
                ..Project::default()
            })
            .collect()
    }

    #[test]
    fn dragging_first_project_to_last() {
        let mut items = projects(&["A", "B", "C"]);
        let mut state = State::new(&items, today());

        state.update(Message::Drag(Drag::Start(0)), &mut items, today());
        state.update(Message::Drag(Drag::Enter(2)), &mut items, today());
        let event = state.update(Message::Drag(Drag::Drop(2)), &mut items, today());

        assert_eq!(event, list::Event::Changed);
        let order: Vec<&str> = items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(order, vec!["B", "C", "A"]);
    }

    #[test]
    fn release_outside_cards_changes_nothing() {
        let mut items = projects(&["A", "B"]);
        let mut state = State::new(&items, today());

        state.update(Message::Drag(Drag::Start(1)), &mut items, today());
        state.update(Message::Drag(Drag::Enter(0)), &mut items, today());
        state.update(Message::Drag(Drag::Exit(0)), &mut items, today());
        let event = state.update(Message::Drag(Drag::Released), &mut items, today());

        assert_eq!(event, list::Event::None);
        assert!(!state.is_dragging());
        assert_eq!(items[0].name, "A");
    }
}
