// SPDX-License-Identifier: MPL-2.0
//! `iced_cv` is a desktop CV editor built with the Iced GUI framework.
//!
//! A CV is edited as a single form of sections (personal details, summary,
//! experience, education, certifications, skills, languages, projects and
//! volunteering) and stored as a TOML document. Dates are picked from a
//! calendar popup and project/volunteer entries can be reordered by dragging.

#![doc(html_root_url = "https://docs.rs/iced_cv/0.1.0")]

pub mod app;
pub mod config;
pub mod cv;
pub mod error;
pub mod i18n;
pub mod ui;
