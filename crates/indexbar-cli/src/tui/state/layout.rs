//! Layout State - cached layout areas
//!
//! Updated each frame during rendering, used for mouse hit testing.

use ratatui::layout::{Position, Rect};

/// Screen cell span occupied by one sidebar marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSlot {
    pub row: u16,
    pub col: u16,
    pub width: u16,
    pub key: String,
}

/// Cached layout areas for hit testing and rendering
#[derive(Debug, Default)]
pub struct LayoutState {
    /// Directory list bounds (inside the border)
    pub list_area: Option<Rect>,
    /// Index sidebar bounds
    pub sidebar_area: Option<Rect>,
    /// List scrollbar track
    pub scrollbar_area: Option<Rect>,
    /// Marker rows drawn in the sidebar
    pub markers: Vec<MarkerSlot>,
    /// Dragging the list scrollbar
    pub dragging_scrollbar: bool,
}

impl LayoutState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_sidebar(&self, x: u16, y: u16) -> bool {
        contains(self.sidebar_area, x, y)
    }

    pub fn in_list(&self, x: u16, y: u16) -> bool {
        contains(self.list_area, x, y)
    }

    pub fn in_scrollbar(&self, x: u16, y: u16) -> bool {
        contains(self.scrollbar_area, x, y)
    }

    /// Marker under a screen cell. Rows shared by several markers are
    /// split by column; a pointer past either end picks the nearest one.
    pub fn marker_at(&self, x: u16, y: u16) -> Option<&str> {
        let mut row = self.markers.iter().filter(|slot| slot.row == y);
        let first = row.next()?;
        if x < first.col + first.width {
            return Some(first.key.as_str());
        }
        let mut nearest = first;
        for slot in row {
            nearest = slot;
            if x < slot.col + slot.width {
                break;
            }
        }
        Some(nearest.key.as_str())
    }
}

fn contains(area: Option<Rect>, x: u16, y: u16) -> bool {
    area.is_some_and(|area| area.contains(Position::new(x, y)))
}
