// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! State that is shared by several form sections lives here, separate from
//! the sections' own field handling.

pub mod drag_reorder;

pub use drag_reorder::{AutoscrollSettings, DragPhase, DragReorder};
