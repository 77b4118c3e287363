// SPDX-License-Identifier: MPL-2.0
//! Curriculum vitae document model.
//!
//! A [`CvDocument`] is a plain data record: every section is an ordered list
//! of entries (or a single text for the summary). Dates are stored as
//! `YYYY-MM-DD` strings, with the empty string meaning "unset", so that the
//! form widgets can bind to them directly.
//!
//! - [`date`] - Permissive ISO date parsing and formatting
//! - [`reorder`] - Order-preserving moves inside entry lists
//! - [`storage`] - TOML persistence of whole documents

pub mod date;
pub mod reorder;
pub mod storage;

use serde::{Deserialize, Serialize};

/// The whole CV being edited.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CvDocument {
    /// Free-form professional summary.
    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub personal: PersonalInfo,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub education: Vec<Education>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub certifications: Vec<Certification>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<Language>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub experience: Vec<Experience>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<TechnicalSkill>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<Project>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volunteer: Vec<Volunteer>,
}

impl CvDocument {
    /// Returns `true` when nothing at all has been filled in.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summary.trim().is_empty()
            && self.personal.is_blank()
            && self.education.iter().all(Education::is_blank)
            && self.certifications.iter().all(Certification::is_blank)
            && self.languages.iter().all(Language::is_blank)
            && self.experience.iter().all(Experience::is_blank)
            && self.skills.iter().all(TechnicalSkill::is_blank)
            && self.projects.iter().all(Project::is_blank)
            && self.volunteer.iter().all(Volunteer::is_blank)
    }
}

fn all_blank(values: &[&str]) -> bool {
    values.iter().all(|v| v.trim().is_empty())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub headline: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
}

impl PersonalInfo {
    #[must_use]
    pub fn is_blank(&self) -> bool {
        all_blank(&[
            &self.full_name,
            &self.headline,
            &self.email,
            &self.phone,
            &self.location,
            &self.website,
        ])
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

impl Education {
    #[must_use]
    pub fn is_blank(&self) -> bool {
        all_blank(&[
            &self.institution,
            &self.degree,
            &self.field_of_study,
            &self.start_date,
            &self.end_date,
            &self.description,
        ])
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub issue_date: String,
    pub expiry_date: String,
    pub credential_id: String,
    pub url: String,
}

impl Certification {
    #[must_use]
    pub fn is_blank(&self) -> bool {
        all_blank(&[
            &self.name,
            &self.issuer,
            &self.issue_date,
            &self.expiry_date,
            &self.credential_id,
            &self.url,
        ])
    }
}

/// Spoken language proficiency, from lowest to highest.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Proficiency {
    Basic,
    #[default]
    Intermediate,
    Advanced,
    Fluent,
    Native,
}

impl Proficiency {
    pub const ALL: [Proficiency; 5] = [
        Proficiency::Basic,
        Proficiency::Intermediate,
        Proficiency::Advanced,
        Proficiency::Fluent,
        Proficiency::Native,
    ];

    /// Stable identifier, also used as the i18n key suffix.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Proficiency::Basic => "basic",
            Proficiency::Intermediate => "intermediate",
            Proficiency::Advanced => "advanced",
            Proficiency::Fluent => "fluent",
            Proficiency::Native => "native",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Language {
    pub name: String,
    pub proficiency: Proficiency,
}

impl Language {
    /// The proficiency alone does not make an entry present.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    /// Still working there; the end date is ignored.
    pub current: bool,
    pub description: String,
}

impl Experience {
    #[must_use]
    pub fn is_blank(&self) -> bool {
        !self.current
            && all_blank(&[
                &self.company,
                &self.position,
                &self.location,
                &self.start_date,
                &self.end_date,
                &self.description,
            ])
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Expert,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
            SkillLevel::Expert => "expert",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.key() == key)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TechnicalSkill {
    pub name: String,
    pub level: SkillLevel,
}

impl TechnicalSkill {
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub role: String,
    pub description: String,
    pub technologies: String,
    pub url: String,
    pub start_date: String,
    pub end_date: String,
}

impl Project {
    #[must_use]
    pub fn is_blank(&self) -> bool {
        all_blank(&[
            &self.name,
            &self.role,
            &self.description,
            &self.technologies,
            &self.url,
            &self.start_date,
            &self.end_date,
        ])
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Volunteer {
    pub organization: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

impl Volunteer {
    #[must_use]
    pub fn is_blank(&self) -> bool {
        all_blank(&[
            &self.organization,
            &self.role,
            &self.start_date,
            &self.end_date,
            &self.description,
        ])
    }
}
