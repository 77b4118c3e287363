// SPDX-License-Identifier: MPL-2.0
//! Certifications section.

use super::list::{self, FieldKind, FieldSpec, FormEntry};
use crate::cv::Certification;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Issuer,
    IssueDate,
    ExpiryDate,
    CredentialId,
    Url,
}

impl FormEntry for Certification {
    type Field = Field;

    const FIELDS: &'static [FieldSpec<Field>] = &[
        FieldSpec {
            field: Field::Name,
            label_key: "field-certification-name",
            kind: FieldKind::Text,
        },
        FieldSpec {
            field: Field::Issuer,
            label_key: "field-issuer",
            kind: FieldKind::Text,
        },
        FieldSpec {
            field: Field::IssueDate,
            label_key: "field-issue-date",
            kind: FieldKind::Date,
        },
        FieldSpec {
            field: Field::ExpiryDate,
            label_key: "field-expiry-date",
            kind: FieldKind::Date,
        },
        FieldSpec {
            field: Field::CredentialId,
            label_key: "field-credential-id",
            kind: FieldKind::Text,
        },
        FieldSpec {
            field: Field::Url,
            label_key: "field-url",
            kind: FieldKind::Text,
        },
    ];
    const TITLE_KEY: &'static str = "section-certifications";

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Issuer => &self.issuer,
            Field::IssueDate => &self.issue_date,
            Field::ExpiryDate => &self.expiry_date,
            Field::CredentialId => &self.credential_id,
            Field::Url => &self.url,
        }
    }

    fn set_value(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Issuer => &mut self.issuer,
            Field::IssueDate => &mut self.issue_date,
            Field::ExpiryDate => &mut self.expiry_date,
            Field::CredentialId => &mut self.credential_id,
            Field::Url => &mut self.url,
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

pub type State = list::State<Certification>;
pub type Message = list::Message<Field>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_are_edited_with_pickers() {
        let dates: Vec<Field> = Certification::FIELDS
            .iter()
            .filter(|spec| spec.kind == FieldKind::Date)
            .map(|spec| spec.field)
            .collect();
        assert_eq!(dates, vec![Field::IssueDate, Field::ExpiryDate]);
    }

    #[test]
    fn set_value_targets_the_right_field() {
        let mut cert = Certification::default();
        cert.set_value(Field::CredentialId, "ABC-123".into());
        assert_eq!(cert.credential_id, "ABC-123");
        assert!(cert.name.is_empty());
    }
}
