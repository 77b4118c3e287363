// SPDX-License-Identifier: MPL-2.0
//! Form sections of the CV editor.
//!
//! Every section is a small Elm-style component: a `State`, a `Message`, an
//! `update` that edits the bound part of the document and reports an event,
//! and a `view`.
//!
//! - [`list`] - Shared editor for sections made of repeated entries
//! - [`personal`] - Name and contact details
//! - [`summary`] - Multi-line professional summary
//! - [`education`], [`certifications`], [`experience`] - Dated entries
//! - [`languages`], [`skills`] - Name plus level
//! - [`projects`], [`volunteer`] - Dated entries, reorderable by dragging

pub mod certifications;
pub mod education;
pub mod experience;
pub mod languages;
pub mod list;
pub mod personal;
pub mod projects;
pub mod skills;
pub mod summary;
pub mod volunteer;

pub use list::Event;
