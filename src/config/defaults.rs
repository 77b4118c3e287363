// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Auto-scroll**: Edge band and speed bounds while dragging list entries
//! - **Date picker**: Year window around the current year
//! - **Notifications**: Tick interval for toast auto-dismiss

// ==========================================================================
// Auto-scroll Defaults
// ==========================================================================

/// Distance from the top/bottom window edge (in logical pixels) inside which
/// dragging an entry scrolls the form.
pub const DEFAULT_AUTOSCROLL_EDGE_PX: f32 = 150.0;

/// Slowest auto-scroll step, applied at the inner border of the edge band.
pub const DEFAULT_AUTOSCROLL_MIN_SPEED: f32 = 5.0;

/// Fastest auto-scroll step, applied at the window edge itself.
pub const DEFAULT_AUTOSCROLL_MAX_SPEED: f32 = 15.0;

/// Smallest edge band accepted from the config file.
pub const MIN_AUTOSCROLL_EDGE_PX: f32 = 20.0;

/// Largest edge band accepted from the config file.
pub const MAX_AUTOSCROLL_EDGE_PX: f32 = 400.0;

/// Upper bound for either speed value from the config file.
pub const MAX_AUTOSCROLL_SPEED: f32 = 100.0;

// ==========================================================================
// Date Picker Defaults
// ==========================================================================

/// Years shown on each side of the current year when the year grid opens.
pub const YEAR_WINDOW_HALF_SPAN: i32 = 10;

/// Width of the year grid (`end - start`); paging moves by this amount.
pub const YEAR_WINDOW_SPAN: i32 = YEAR_WINDOW_HALF_SPAN * 2;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Interval between notification ticks (milliseconds).
pub const NOTIFICATION_TICK_MS: u64 = 250;

const _: () = {
    assert!(DEFAULT_AUTOSCROLL_MIN_SPEED <= DEFAULT_AUTOSCROLL_MAX_SPEED);
    assert!(DEFAULT_AUTOSCROLL_EDGE_PX >= MIN_AUTOSCROLL_EDGE_PX);
    assert!(DEFAULT_AUTOSCROLL_EDGE_PX <= MAX_AUTOSCROLL_EDGE_PX);
    assert!(YEAR_WINDOW_SPAN == 20);
};
