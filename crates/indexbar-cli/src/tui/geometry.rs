//! Terminal geometry provider
//!
//! Lays the directory out as rows (one header row per group followed by its
//! entries) and answers the index bar's layout queries in screen rows.

use indexbar_core::geometry::{GeometryProvider, Rect as BarRect};
use ratatui::layout::Rect;

use super::directory::Directory;
use super::state::ScrollState;

/// Rows taken by a group header
pub const HEADER_ROWS: usize = 1;

/// What a content row shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Header(usize),
    Entry { group: usize, entry: usize },
}

/// Row layout of the directory inside the list viewport
#[derive(Debug, Default)]
pub struct TerminalGeometry {
    scroll: ScrollState,
    viewport: Option<Rect>,
    group_tops: Vec<usize>,
    group_lens: Vec<usize>,
    total_lines: usize,
}

impl TerminalGeometry {
    pub fn new(directory: &Directory) -> Self {
        let mut geometry = Self::default();
        geometry.set_content(directory);
        geometry
    }

    /// Recompute group tops after the directory changed
    pub fn set_content(&mut self, directory: &Directory) {
        self.group_tops.clear();
        self.group_lens.clear();
        let mut line = 0;
        for group in &directory.groups {
            self.group_tops.push(line);
            self.group_lens.push(group.entries.len());
            line += HEADER_ROWS + group.entries.len();
        }
        self.total_lines = line;
        self.refresh_bounds();
    }

    /// Update the list viewport. Returns true when it changed.
    pub fn set_viewport(&mut self, area: Option<Rect>) -> bool {
        if self.viewport == area {
            return false;
        }
        self.viewport = area;
        self.refresh_bounds();
        true
    }

    fn refresh_bounds(&mut self) {
        let height = self.viewport.map(|a| a.height).unwrap_or(0);
        self.scroll.update_max_scroll(self.total_lines, height);
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn scroll_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }

    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    pub fn group_top(&self, group: usize) -> Option<usize> {
        self.group_tops.get(group).copied()
    }

    /// What content row `line` shows
    pub fn row_kind(&self, line: usize) -> Option<RowKind> {
        if line >= self.total_lines {
            return None;
        }
        // Last group starting at or before the line
        let group = self.group_tops.partition_point(|&top| top <= line) - 1;
        let offset = line - self.group_tops[group];
        if offset < HEADER_ROWS {
            Some(RowKind::Header(group))
        } else {
            let entry = offset - HEADER_ROWS;
            (entry < self.group_lens[group]).then_some(RowKind::Entry { group, entry })
        }
    }
}

impl GeometryProvider for TerminalGeometry {
    type Handle = usize;

    fn scroll_top(&self) -> f64 {
        self.scroll.offset as f64
    }

    fn scroller_rect(&self) -> Option<BarRect> {
        self.viewport.map(|area| {
            BarRect::new(
                area.y as f64,
                area.x as f64,
                area.width as f64,
                area.height as f64,
            )
        })
    }

    fn bounding_rect(&self, group: &usize) -> BarRect {
        let area = self.viewport.unwrap_or_default();
        let top = self.group_top(*group).unwrap_or(0) as f64;
        BarRect::new(
            area.y as f64 + top - self.scroll_top(),
            area.x as f64,
            area.width as f64,
            HEADER_ROWS as f64,
        )
    }

    fn is_hidden(&self) -> bool {
        self.viewport.map_or(true, |area| area.is_empty())
    }

    fn scroll_into_view(&mut self, group: &usize) {
        if let Some(top) = self.group_top(*group) {
            self.scroll.scroll_to_line(top);
        }
    }

    fn read_root_scroll_top(&self) -> f64 {
        self.scroll_top()
    }

    fn write_root_scroll_top(&mut self, value: f64) {
        self.scroll.scroll_to_line(value.max(0.0).round() as usize);
    }
}
