// SPDX-License-Identifier: MPL-2.0
//! Technical skills section.

use super::list::{self, FieldKind, FieldSpec, FormEntry};
use crate::cv::{SkillLevel, TechnicalSkill};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Level,
}

const LEVEL_KEYS: &[&str] = &["beginner", "intermediate", "advanced", "expert"];

impl FormEntry for TechnicalSkill {
    type Field = Field;

    const FIELDS: &'static [FieldSpec<Field>] = &[
        FieldSpec {
            field: Field::Name,
            label_key: "field-skill",
            kind: FieldKind::Text,
        },
        FieldSpec {
            field: Field::Level,
            label_key: "field-skill-level",
            kind: FieldKind::Choice {
                options: LEVEL_KEYS,
                label_prefix: "skill-level-",
            },
        },
    ];
    const TITLE_KEY: &'static str = "section-skills";

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Level => self.level.key(),
        }
    }

    fn set_value(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Level => {
                if let Some(level) = SkillLevel::from_key(&value) {
                    self.level = level;
                }
            }
        }
    }

    fn has_content(&self) -> bool {
        !self.is_blank()
    }

    fn heading(&self) -> &str {
        &self.name
    }
}

pub type State = list::State<TechnicalSkill>;
pub type Message = list::Message<Field>;
