// SPDX-License-Identifier: MPL-2.0
//! Spoken languages section.

use super::list::{self, FieldKind, FieldSpec, FormEntry};
use crate::cv::{Language, Proficiency};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Proficiency,
}

const PROFICIENCY_KEYS: &[&str] = &["basic", "intermediate", "advanced", "fluent", "native"];

impl FormEntry for Language {
    type Field = Field;

    const FIELDS: &'static [FieldSpec<Field>] = &[
        FieldSpec {
            field: Field::Name,
            label_key: "field-language",
            kind: FieldKind::Text,
        },
        FieldSpec {
            field: Field::Proficiency,
            label_key: "field-proficiency",
            kind: FieldKind::Choice {
                options: PROFICIENCY_KEYS,
                label_prefix: "proficiency-",
            },
        },
    ];
    const TITLE_KEY: &'static str = "section-languages";

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Proficiency => self.proficiency.key(),
        }
    }

    fn set_value(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Proficiency => match Proficiency::from_key(&value) {
                Some(level) => self.proficiency = level,
                None => tracing::warn!(%value, "ignoring unknown proficiency"),
            },
        }
    }

    fn has_content(&self) -> bool {
        !self.is_blank()
    }

    fn heading(&self) -> &str {
        &self.name
    }
}

pub type State = list::State<Language>;
pub type Message = list::Message<Field>;
