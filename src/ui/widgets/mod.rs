// SPDX-License-Identifier: MPL-2.0
//! Custom widgets built on iced's advanced API.

pub mod popup_anchor;

pub use popup_anchor::popup_anchor;
