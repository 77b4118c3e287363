// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! UI code follows the Elm-style "state down, messages up" pattern: each
//! component owns its state, renders from it, and reports [`Event`]s upward
//! for the application to act on.
//!
//! # Screens
//!
//! - [`form`] - The CV editor, every section in one scrollable column
//! - [`settings`] - Language and theme preferences
//!
//! # Shared Infrastructure
//!
//! - [`sections`] - Form sections and the generic entry list they build on
//! - [`components`] - Reusable widgets (calendar date picker)
//! - [`state`] - Drag-to-reorder state machine
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Document actions and settings toggle
//! - [`notifications`] - Toast notification system for user feedback
//! - [`widgets`] - Custom widgets (popup anchored below a field)
//!
//! [`Event`]: sections::Event

pub mod components;
pub mod design_tokens;
pub mod form;
pub mod navbar;
pub mod notifications;
pub mod sections;
pub mod settings;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
