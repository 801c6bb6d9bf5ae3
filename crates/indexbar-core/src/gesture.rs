//! Drag gesture direction detection
//!
//! Tracks pointer travel from the gesture start and latches the first
//! dominant direction that exceeds the minimum distance.

use crate::constants::gesture::MIN_DISTANCE;

/// Dominant drag axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Vertical,
    Horizontal,
}

/// Touch/drag state for one gesture
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    min_distance: f64,
    start_x: f64,
    start_y: f64,
    delta_x: f64,
    delta_y: f64,
    direction: Option<Direction>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::with_min_distance(MIN_DISTANCE)
    }

    /// Direction latches once travel exceeds `min_distance`. Terminal cells
    /// are coarse, so grid hosts use 0.
    pub fn with_min_distance(min_distance: f64) -> Self {
        Self {
            min_distance,
            ..Default::default()
        }
    }

    /// Begin a gesture at the given pointer position
    pub fn start(&mut self, x: f64, y: f64) {
        self.start_x = x;
        self.start_y = y;
        self.delta_x = 0.0;
        self.delta_y = 0.0;
        self.direction = None;
    }

    /// Feed a move event. The direction, once set, holds for the gesture.
    pub fn move_to(&mut self, x: f64, y: f64) -> Option<Direction> {
        self.delta_x = x - self.start_x;
        self.delta_y = y - self.start_y;
        if self.direction.is_none() {
            self.direction = self.detect();
        }
        self.direction
    }

    pub fn is_vertical(&self) -> bool {
        self.direction == Some(Direction::Vertical)
    }

    fn detect(&self) -> Option<Direction> {
        let x = self.delta_x.abs();
        let y = self.delta_y.abs();
        if x > y && x > self.min_distance {
            Some(Direction::Horizontal)
        } else if y > x && y > self.min_distance {
            Some(Direction::Vertical)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_moves_have_no_direction() {
        let mut touch = TouchTracker::new();
        touch.start(100.0, 100.0);
        assert_eq!(touch.move_to(105.0, 108.0), None);
        assert!(!touch.is_vertical());
    }

    #[test]
    fn test_vertical_latches() {
        let mut touch = TouchTracker::new();
        touch.start(100.0, 100.0);
        assert_eq!(touch.move_to(102.0, 130.0), Some(Direction::Vertical));
        // A later sideways swing does not change the latched direction
        assert_eq!(touch.move_to(180.0, 131.0), Some(Direction::Vertical));
        assert!(touch.is_vertical());
    }

    #[test]
    fn test_horizontal() {
        let mut touch = TouchTracker::new();
        touch.start(0.0, 0.0);
        assert_eq!(touch.move_to(-40.0, 3.0), Some(Direction::Horizontal));
        assert!(!touch.is_vertical());
    }

    #[test]
    fn test_start_resets_direction() {
        let mut touch = TouchTracker::new();
        touch.start(0.0, 0.0);
        touch.move_to(0.0, 50.0);
        touch.start(0.0, 50.0);
        assert!(!touch.is_vertical());
        // Deltas restart from the new origin
        assert_eq!(touch.move_to(30.0, 52.0), Some(Direction::Horizontal));
    }

    #[test]
    fn test_zero_min_distance_for_grids() {
        let mut touch = TouchTracker::with_min_distance(0.0);
        touch.start(3.0, 4.0);
        assert_eq!(touch.move_to(3.0, 5.0), Some(Direction::Vertical));
    }
}
