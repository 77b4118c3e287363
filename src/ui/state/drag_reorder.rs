// SPDX-License-Identifier: MPL-2.0
//! Drag-to-reorder state for entry lists.
//!
//! Cards expose a handle (press starts a drag) and act as drop zones (pointer
//! enter marks the target, release drops). The controller only tracks
//! indices; the host applies the resulting `(from, to)` move to its list.
//!
//! ```text
//! Idle ──start(i)──▶ Dragging(i) ──enter(j ≠ i)──▶ DragOverTarget(i, j)
//!  ▲                     │  ▲                          │
//!  └──drop / cancel──────┘  └────exit(j) / enter(i)────┘
//! ```

use crate::config::{
    EditorConfig, DEFAULT_AUTOSCROLL_EDGE_PX, DEFAULT_AUTOSCROLL_MAX_SPEED,
    DEFAULT_AUTOSCROLL_MIN_SPEED, MAX_AUTOSCROLL_EDGE_PX, MAX_AUTOSCROLL_SPEED,
    MIN_AUTOSCROLL_EDGE_PX,
};

/// Current phase of a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging {
        source: usize,
    },
    DragOverTarget {
        source: usize,
        target: usize,
    },
}

/// Messages wired onto a reorderable card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Handle of card `i` pressed.
    Start(usize),
    /// Pointer entered card `i`.
    Enter(usize),
    /// Pointer left card `i`.
    Exit(usize),
    /// Button released over card `i`.
    Drop(usize),
    /// Button released anywhere (window-level).
    Released,
}

/// Edge band and speed bounds for scrolling while dragging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoscrollSettings {
    pub edge_px: f32,
    pub min_speed: f32,
    pub max_speed: f32,
}

impl Default for AutoscrollSettings {
    fn default() -> Self {
        Self {
            edge_px: DEFAULT_AUTOSCROLL_EDGE_PX,
            min_speed: DEFAULT_AUTOSCROLL_MIN_SPEED,
            max_speed: DEFAULT_AUTOSCROLL_MAX_SPEED,
        }
    }
}

impl AutoscrollSettings {
    /// Reads the `[editor]` section, replacing missing or out-of-range values.
    #[must_use]
    pub fn from_config(editor: &EditorConfig) -> Self {
        let finite = |value: Option<f32>, default: f32| {
            value.filter(|v| v.is_finite()).unwrap_or(default)
        };

        let edge_px = finite(editor.autoscroll_edge_px, DEFAULT_AUTOSCROLL_EDGE_PX)
            .clamp(MIN_AUTOSCROLL_EDGE_PX, MAX_AUTOSCROLL_EDGE_PX);
        let max_speed = finite(editor.autoscroll_max_speed, DEFAULT_AUTOSCROLL_MAX_SPEED)
            .clamp(0.0, MAX_AUTOSCROLL_SPEED);
        let min_speed =
            finite(editor.autoscroll_min_speed, DEFAULT_AUTOSCROLL_MIN_SPEED).clamp(0.0, max_speed);

        Self {
            edge_px,
            min_speed,
            max_speed,
        }
    }
}

/// Manages drag-to-reorder state for one list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragReorder {
    phase: DragPhase,
}

impl DragReorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Index of the card being dragged.
    #[must_use]
    pub fn dragged_index(&self) -> Option<usize> {
        match self.phase {
            DragPhase::Idle => None,
            DragPhase::Dragging { source } | DragPhase::DragOverTarget { source, .. } => {
                Some(source)
            }
        }
    }

    /// Index of the card currently under the pointer, when it is a valid target.
    #[must_use]
    pub fn drag_over_index(&self) -> Option<usize> {
        match self.phase {
            DragPhase::DragOverTarget { target, .. } => Some(target),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase != DragPhase::Idle
    }

    #[must_use]
    pub fn is_source(&self, index: usize) -> bool {
        self.dragged_index() == Some(index)
    }

    /// Whether the drop indicator is drawn above card `index`.
    #[must_use]
    pub fn shows_indicator(&self, index: usize) -> bool {
        self.drag_over_index() == Some(index)
    }

    /// Starts dragging card `index`.
    pub fn start(&mut self, index: usize) {
        self.phase = DragPhase::Dragging { source: index };
    }

    /// Marks `index` as the drop target, unless it is the dragged card.
    pub fn enter(&mut self, index: usize) {
        let Some(source) = self.dragged_index() else {
            return;
        };
        self.phase = if index == source {
            DragPhase::Dragging { source }
        } else {
            DragPhase::DragOverTarget {
                source,
                target: index,
            }
        };
    }

    /// Clears the target if the pointer left that card.
    pub fn exit(&mut self, index: usize) {
        if let DragPhase::DragOverTarget { source, target } = self.phase {
            if target == index {
                self.phase = DragPhase::Dragging { source };
            }
        }
    }

    /// Drops onto `index` in a list of `len` items.
    ///
    /// Returns the `(from, to)` move to apply, or `None` when there is
    /// nothing to do. State is cleared in every case.
    pub fn drop_on(&mut self, index: usize, len: usize) -> Option<(usize, usize)> {
        let source = self.dragged_index();
        self.cancel();

        let from = source?;
        if from == index {
            return None;
        }
        if from >= len || index >= len {
            tracing::debug!(from, to = index, len, "ignoring drop with stale indices");
            return None;
        }
        Some((from, index))
    }

    /// Releases the button outside any card handler: drops onto the current
    /// target if there is one, otherwise just ends the drag.
    pub fn release(&mut self, len: usize) -> Option<(usize, usize)> {
        match self.phase {
            DragPhase::DragOverTarget { target, .. } => self.drop_on(target, len),
            _ => {
                self.cancel();
                None
            }
        }
    }

    /// Ends the drag without a move.
    pub fn cancel(&mut self) {
        self.phase = DragPhase::Idle;
    }

    /// Applies a card message. Returns the move to perform, if any.
    pub fn update(&mut self, message: Message, len: usize) -> Option<(usize, usize)> {
        match message {
            Message::Start(index) => {
                if index < len {
                    self.start(index);
                }
                None
            }
            Message::Enter(index) => {
                self.enter(index);
                None
            }
            Message::Exit(index) => {
                self.exit(index);
                None
            }
            Message::Drop(index) => {
                if self.is_dragging() {
                    self.drop_on(index, len)
                } else {
                    None
                }
            }
            Message::Released => {
                if self.is_dragging() {
                    self.release(len)
                } else {
                    None
                }
            }
        }
    }
}

/// Handles are only useful when there is something to reorder.
#[must_use]
pub fn handles_visible(len: usize) -> bool {
    len > 1
}

/// Scroll step for a pointer at `cursor_y` in a viewport of `viewport_height`.
///
/// Inside the top or bottom band of `edge_px` the speed grows linearly from
/// `min_speed` (inner border) to `max_speed` (window edge). Negative values
/// scroll up. Returns `None` outside both bands.
#[must_use]
pub fn autoscroll_delta(
    cursor_y: f32,
    viewport_height: f32,
    settings: AutoscrollSettings,
) -> Option<f32> {
    let edge = settings.edge_px;
    if edge <= 0.0 || viewport_height <= 0.0 {
        return None;
    }

    let speed_at = |distance: f32| {
        let proximity = 1.0 - (distance.max(0.0) / edge);
        (settings.max_speed * proximity).clamp(settings.min_speed, settings.max_speed)
    };

    if cursor_y < edge {
        Some(-speed_at(cursor_y))
    } else if cursor_y > viewport_height - edge {
        Some(speed_at(viewport_height - cursor_y))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cv::reorder::move_item;

    #[test]
    fn default_state_is_idle() {
        let drag = DragReorder::new();
        assert_eq!(drag.phase(), DragPhase::Idle);
        assert!(drag.dragged_index().is_none());
        assert!(drag.drag_over_index().is_none());
    }

    #[test]
    fn enter_other_card_sets_target() {
        let mut drag = DragReorder::new();
        drag.start(0);
        drag.enter(2);
        assert_eq!(drag.phase(), DragPhase::DragOverTarget { source: 0, target: 2 });
        assert!(drag.shows_indicator(2));
        assert!(!drag.shows_indicator(0));
    }

    #[test]
    fn enter_source_card_clears_target() {
        let mut drag = DragReorder::new();
        drag.start(1);
        drag.enter(2);
        drag.enter(1);
        assert_eq!(drag.phase(), DragPhase::Dragging { source: 1 });
        assert!(drag.drag_over_index().is_none());
    }

    #[test]
    fn enter_without_drag_is_ignored() {
        let mut drag = DragReorder::new();
        drag.enter(1);
        assert_eq!(drag.phase(), DragPhase::Idle);
    }

    #[test]
    fn exit_only_clears_matching_target() {
        let mut drag = DragReorder::new();
        drag.start(0);
        drag.enter(2);
        drag.exit(1);
        assert_eq!(drag.drag_over_index(), Some(2));
        drag.exit(2);
        assert_eq!(drag.phase(), DragPhase::Dragging { source: 0 });
    }

    #[test]
    fn drop_on_other_card_moves_and_clears() {
        let mut items = vec!["A", "B", "C"];
        let mut drag = DragReorder::new();
        drag.update(Message::Start(0), items.len());
        drag.update(Message::Enter(2), items.len());
        let (from, to) = drag
            .update(Message::Drop(2), items.len())
            .expect("move expected");
        assert!(move_item(&mut items, from, to));
        assert_eq!(items, vec!["B", "C", "A"]);
        assert_eq!(drag.phase(), DragPhase::Idle);
    }

    #[test]
    fn drop_on_source_is_noop_and_clears() {
        let mut drag = DragReorder::new();
        drag.start(1);
        assert_eq!(drag.drop_on(1, 3), None);
        assert_eq!(drag.phase(), DragPhase::Idle);
    }

    #[test]
    fn drop_with_stale_indices_is_ignored() {
        let mut drag = DragReorder::new();
        drag.start(4);
        assert_eq!(drag.drop_on(0, 3), None);
        assert_eq!(drag.phase(), DragPhase::Idle);
    }

    #[test]
    fn release_drops_on_current_target() {
        let mut drag = DragReorder::new();
        drag.start(2);
        drag.enter(0);
        assert_eq!(drag.update(Message::Released, 3), Some((2, 0)));
        assert_eq!(drag.phase(), DragPhase::Idle);
    }

    #[test]
    fn release_without_target_ends_drag() {
        let mut drag = DragReorder::new();
        drag.start(2);
        assert_eq!(drag.update(Message::Released, 3), None);
        assert_eq!(drag.phase(), DragPhase::Idle);
    }

    #[test]
    fn drop_then_global_release_moves_once() {
        let mut drag = DragReorder::new();
        drag.start(0);
        drag.enter(1);
        assert_eq!(drag.update(Message::Drop(1), 2), Some((0, 1)));
        assert_eq!(drag.update(Message::Released, 2), None);
    }

    #[test]
    fn start_out_of_range_is_ignored() {
        let mut drag = DragReorder::new();
        drag.update(Message::Start(3), 3);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn handles_need_more_than_one_item() {
        assert!(!handles_visible(0));
        assert!(!handles_visible(1));
        assert!(handles_visible(2));
    }

    #[test]
    fn autoscroll_is_silent_in_the_middle() {
        let settings = AutoscrollSettings::default();
        assert_eq!(autoscroll_delta(400.0, 800.0, settings), None);
        assert_eq!(autoscroll_delta(150.0, 800.0, settings), None);
    }

    #[test]
    fn autoscroll_speed_scales_with_proximity() {
        let settings = AutoscrollSettings::default();
        assert_eq!(autoscroll_delta(0.0, 800.0, settings), Some(-15.0));
        assert_eq!(autoscroll_delta(800.0, 800.0, settings), Some(15.0));
        // 100px from the edge: 15 * (1 - 100/150) = 5
        let delta = autoscroll_delta(100.0, 800.0, settings).expect("in top band");
        assert!((delta + 5.0).abs() < 1e-4);
        // Near the inner border the minimum speed applies.
        assert_eq!(autoscroll_delta(149.0, 800.0, settings), Some(-5.0));
        assert_eq!(autoscroll_delta(651.0, 800.0, settings), Some(5.0));
    }

    #[test]
    fn autoscroll_speed_stays_within_bounds() {
        let settings = AutoscrollSettings::default();
        for y in 0..800 {
            if let Some(delta) = autoscroll_delta(y as f32, 800.0, settings) {
                let speed = delta.abs();
                assert!((settings.min_speed..=settings.max_speed).contains(&speed));
            }
        }
    }

    #[test]
    fn settings_from_config_sanitizes_values() {
        let editor = EditorConfig {
            autoscroll_edge_px: Some(5.0),
            autoscroll_min_speed: Some(50.0),
            autoscroll_max_speed: Some(f32::NAN),
        };
        let settings = AutoscrollSettings::from_config(&editor);
        assert_eq!(settings.edge_px, MIN_AUTOSCROLL_EDGE_PX);
        assert_eq!(settings.max_speed, DEFAULT_AUTOSCROLL_MAX_SPEED);
        assert_eq!(settings.min_speed, DEFAULT_AUTOSCROLL_MAX_SPEED);
    }

    #[test]
    fn settings_from_default_config_match_defaults() {
        let settings = AutoscrollSettings::from_config(&EditorConfig::default());
        assert_eq!(settings, AutoscrollSettings::default());
    }
}
