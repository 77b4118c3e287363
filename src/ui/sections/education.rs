// SPDX-License-Identifier: MPL-2.0
//! Education section.

use super::list::{self, FieldKind, FieldSpec, FormEntry};
use crate::cv::Education;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Institution,
    Degree,
    FieldOfStudy,
    StartDate,
    EndDate,
    Description,
}

impl FormEntry for Education {
    type Field = Field;

    const FIELDS: &'static [FieldSpec<Field>] = &[
        FieldSpec {
            field: Field::Institution,
            label_key: "field-institution",
            kind: FieldKind::Text,
        },
        FieldSpec {
            field: Field::Degree,
            label_key: "field-degree",
            kind: FieldKind::Text,
        },
        FieldSpec {
            field: Field::FieldOfStudy,
            label_key: "field-field-of-study",
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
    const TITLE_KEY: &'static str = "section-education";

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Institution => &self.institution,
            Field::Degree => &self.degree,
            Field::FieldOfStudy => &self.field_of_study,
            Field::StartDate => &self.start_date,
            Field::EndDate => &self.end_date,
            Field::Description => &self.description,
        }
    }

    fn set_value(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Institution => &mut self.institution,
            Field::Degree => &mut self.degree,
            Field::FieldOfStudy => &mut self.field_of_study,
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
        &self.institution
    }
}

pub type State = list::State<Education>;
pub type Message = list::Message<Field>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn every_field_is_bound() {
        let mut entry = Education::default();
        for spec in Education::FIELDS {
            entry.set_value(spec.field, format!("{:?}", spec.field));
        }
        assert_eq!(entry.institution, "Institution");
        assert_eq!(entry.field_of_study, "FieldOfStudy");
        assert_eq!(entry.end_date, "EndDate");
        assert_eq!(entry.value(Field::Description), "Description");
    }

    #[test]
    fn education_is_not_reorderable() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let entries = vec![Education::default(), Education::default()];
        let state = State::new(&entries, today);
        assert!(state.drag().is_none());
    }
}
