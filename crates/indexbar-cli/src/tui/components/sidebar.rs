//! Index sidebar component
//!
//! Draws the marker column, vertically centered, and reports the cell span
//! each marker landed on so mouse input can be mapped back to keys. When
//! there are more markers than rows, neighbours share a row side by side.

use std::ops::Range;

use indexbar_core::MarkerView;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use crate::tui::state::MarkerSlot;
use crate::tui::themes::Theme;

/// Sidebar column width
pub const SIDEBAR_WIDTH: u16 = 3;

/// Render markers into `area`. Returns the cell span of every drawn marker.
pub fn render_sidebar(
    buf: &mut Buffer,
    area: Rect,
    markers: &[MarkerView<'_>],
    theme: &Theme,
) -> Vec<MarkerSlot> {
    if area.is_empty() || markers.is_empty() {
        return Vec::new();
    }

    let idle = Style::default().fg(theme.dim_color);
    let rows = row_ranges(markers.len(), area.height);
    let top = area.y + (area.height - rows.len() as u16) / 2;

    let mut slots = Vec::with_capacity(markers.len());
    for (i, range) in rows.into_iter().enumerate() {
        let row = top + i as u16;
        let shared = &markers[range];
        let total: u16 = shared.iter().map(|m| m.key.width() as u16).sum();
        let mut x = area.x + area.width.saturating_sub(total) / 2;

        for marker in shared {
            let width = marker.key.width() as u16;
            if x + width > area.right() {
                tracing::debug!(key = marker.key, row, "Sidebar row full, marker not drawn");
                break;
            }
            let style = if marker.active {
                Style::default()
                    .fg(theme.marker_color(marker.color))
                    .add_modifier(Modifier::BOLD)
            } else {
                idle
            };
            buf.set_stringn(x, row, marker.key, width as usize, style);
            slots.push(MarkerSlot {
                row,
                col: x,
                width,
                key: marker.key.to_string(),
            });
            x += width;
        }
    }
    slots
}

/// Split `count` markers, in order, over at most `height` rows. One marker
/// per row while they fit; otherwise every row takes an even share.
fn row_ranges(count: usize, height: u16) -> Vec<Range<usize>> {
    let height = height as usize;
    if count <= height {
        return (0..count).map(|i| i..i + 1).collect();
    }
    (0..height)
        .map(|r| r * count / height..(r + 1) * count / height)
        .collect()
}
