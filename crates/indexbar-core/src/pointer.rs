//! Sidebar drag tracking
//!
//! Turns drag moves over the sidebar into jumps, once per distinct marker.

use tracing::trace;

use crate::gesture::TouchTracker;

/// Result of feeding one move event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Vertical intent confirmed; the host should suppress default scrolling
    pub prevent_default: bool,
    /// Marker to jump to, when the pointer entered a new one
    pub jump: Option<String>,
}

/// Drag state for the sidebar
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    touch: TouchTracker,
    last_key: Option<String>,
}

impl PointerTracker {
    pub fn new(touch: TouchTracker) -> Self {
        Self {
            touch,
            last_key: None,
        }
    }

    /// Begin a drag gesture
    pub fn start(&mut self, x: f64, y: f64) {
        self.touch.start(x, y);
        self.last_key = None;
    }

    /// Feed a move. `key` is the marker under the pointer, if any.
    ///
    /// Horizontal drags belong to the page and never jump.
    pub fn on_move(&mut self, x: f64, y: f64, key: Option<&str>) -> MoveOutcome {
        self.touch.move_to(x, y);
        if !self.touch.is_vertical() {
            return MoveOutcome::default();
        }

        let changed = self.last_key.as_deref() != key;
        let jump = if changed {
            self.last_key = key.map(str::to_owned);
            trace!(?key, "Drag entered marker");
            key.map(str::to_owned)
        } else {
            None
        };

        MoveOutcome {
            prevent_default: true,
            jump,
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_key_jumps_once() {
        let mut tracker = PointerTracker::new(TouchTracker::new());
        tracker.start(10.0, 0.0);

        let jumps = (0..5)
            .map(|i| tracker.on_move(10.0, 20.0 + i as f64, Some("C")))
            .filter(|outcome| outcome.jump.is_some())
            .count();
        assert_eq!(jumps, 1);
    }

    #[test]
    fn test_new_key_jumps_again() {
        let mut tracker = PointerTracker::new(TouchTracker::new());
        tracker.start(10.0, 0.0);
        assert_eq!(tracker.on_move(10.0, 20.0, Some("C")).jump.as_deref(), Some("C"));
        assert_eq!(tracker.on_move(10.0, 40.0, Some("D")).jump.as_deref(), Some("D"));
        assert_eq!(tracker.on_move(10.0, 20.0, Some("C")).jump.as_deref(), Some("C"));
    }

    #[test]
    fn test_horizontal_drag_is_ignored() {
        let mut tracker = PointerTracker::new(TouchTracker::new());
        tracker.start(0.0, 0.0);
        let outcome = tracker.on_move(50.0, 2.0, Some("A"));
        assert_eq!(outcome, MoveOutcome::default());
        // Still latched horizontal: no key is remembered or jumped to
        assert_eq!(tracker.on_move(50.0, 90.0, Some("A")), MoveOutcome::default());
    }

    #[test]
    fn test_undecided_drag_does_not_prevent_default() {
        let mut tracker = PointerTracker::new(TouchTracker::new());
        tracker.start(0.0, 0.0);
        assert!(!tracker.on_move(1.0, 3.0, Some("A")).prevent_default);
        assert!(tracker.on_move(1.0, 30.0, Some("A")).prevent_default);
    }

    #[test]
    fn test_leaving_markers_then_returning() {
        let mut tracker = PointerTracker::new(TouchTracker::new());
        tracker.start(0.0, 0.0);
        assert!(tracker.on_move(0.0, 20.0, Some("B")).jump.is_some());
        let off = tracker.on_move(0.0, 400.0, None);
        assert!(off.prevent_default);
        assert_eq!(off.jump, None);
        assert_eq!(tracker.on_move(0.0, 20.0, Some("B")).jump.as_deref(), Some("B"));
    }

    #[test]
    fn test_start_forgets_last_key() {
        let mut tracker = PointerTracker::new(TouchTracker::new());
        tracker.start(0.0, 0.0);
        tracker.on_move(0.0, 20.0, Some("B"));
        tracker.start(0.0, 20.0);
        assert_eq!(tracker.on_move(0.0, 40.0, Some("B")).jump.as_deref(), Some("B"));
    }
}
