// SPDX-License-Identifier: MPL-2.0
//! Volunteer work section, reorderable by dragging.

use super::list::{self, FieldKind, FieldSpec, FormEntry};
use crate::cv::Volunteer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Organization,
    Role,
    StartDate,
    EndDate,
    Description,
}

impl FormEntry for Volunteer {
    type Field = Field;

    const FIELDS: &'static [FieldSpec<Field>] = &[
        FieldSpec {
            field: Field::Organization,
            label_key: "field-organization",
            kind: FieldKind::Text,
        },
        FieldSpec {
            field: Field::Role,
            label_key: "field-role",
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
    const TITLE_KEY: &'static str = "section-volunteer";
    const REORDERABLE: bool = true;

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Organization => &self.organization,
            Field::Role => &self.role,
            Field::StartDate => &self.start_date,
            Field::EndDate => &self.end_date,
            Field::Description => &self.description,
        }
    }

    fn set_value(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Organization => &mut self.organization,
            Field::Role => &mut self.role,
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
        &self.organization
    }
}

pub type State = list::State<Volunteer>;
pub type Message = list::Message<Field>;
