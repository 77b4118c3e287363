// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across form sections.
//!
//! # Components
//!
//! - [`date_picker`] - Text field with a calendar popup for `YYYY-MM-DD` dates

pub mod date_picker;
