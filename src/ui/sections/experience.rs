// SPDX-License-Identifier: MPL-2.0
//! Professional experience section.
//!
//! Ticking "current job" clears the end date and disables its picker until
//! the box is unticked.

use super::list::{self, FieldKind, FieldSpec, FormEntry};
use crate::cv::Experience;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Company,
    Position,
    Location,
    StartDate,
    EndDate,
    Current,
    Description,
}

impl FormEntry for Experience {
    type Field = Field;

    const FIELDS: &'static [FieldSpec<Field>] = &[
        FieldSpec {
            field: Field::Company,
            label_key: "field-company",
            kind: FieldKind::Text,
        },
        FieldSpec {
            field: Field::Position,
            label_key: "field-position",
            kind: FieldKind::Text,
        },
        FieldSpec {
            field: Field::Location,
            label_key: "field-location",
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
            field: Field::Current,
            label_key: "field-current",
            kind: FieldKind::Toggle,
        },
        FieldSpec {
            field: Field::Description,
            label_key: "field-description",
            kind: FieldKind::Text,
        },
    ];
    const TITLE_KEY: &'static str = "section-experience";

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Company => &self.company,
            Field::Position => &self.position,
            Field::Location => &self.location,
            Field::StartDate => &self.start_date,
            Field::EndDate => &self.end_date,
            Field::Description => &self.description,
            Field::Current => "",
        }
    }

    fn set_value(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Company => &mut self.company,
            Field::Position => &mut self.position,
            Field::Location => &mut self.location,
            Field::StartDate => &mut self.start_date,
            Field::EndDate if self.current => return,
            Field::EndDate => &mut self.end_date,
            Field::Description => &mut self.description,
            Field::Current => return,
        };
        *slot = value;
    }

    fn flag(&self, field: Field) -> bool {
        field == Field::Current && self.current
    }

    fn set_flag(&mut self, field: Field, value: bool) {
        if field == Field::Current {
            self.current = value;
            if value {
                self.end_date.clear();
            }
        }
    }

    fn is_disabled(&self, field: Field) -> bool {
        field == Field::EndDate && self.current
    }

    fn has_content(&self) -> bool {
        !self.is_blank()
    }

    fn heading(&self) -> &str {
        if self.position.trim().is_empty() {
            &self.company
        } else {
            &self.position
        }
    }
}

pub type State = list::State<Experience>;
pub type Message = list::Message<Field>;
